//! One-shot effects for the area chart.

use crate::mvi::Effect;

#[derive(Debug, Clone, PartialEq)]
pub enum AreaEffect {
    /// A data load failed; the render layer should surface the message.
    ShowError(String),
}

impl Effect for AreaEffect {}
