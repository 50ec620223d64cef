//! One-shot effects for the radar chart.

use crate::mvi::Effect;

#[derive(Debug, Clone, PartialEq)]
pub enum RadarEffect {
    /// A data load failed; the render layer should surface the message.
    ShowError(String),
}

impl Effect for RadarEffect {}
