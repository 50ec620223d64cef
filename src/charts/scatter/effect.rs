//! One-shot effects for the scatter chart.

use crate::mvi::Effect;

#[derive(Debug, Clone, PartialEq)]
pub enum ScatterEffect {
    /// A data load failed; the render layer should surface the message.
    ShowError(String),
}

impl Effect for ScatterEffect {}
