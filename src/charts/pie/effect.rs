//! One-shot effects for the pie chart.

use crate::mvi::Effect;

#[derive(Debug, Clone, PartialEq)]
pub enum PieEffect {
    /// A data load failed; the render layer should surface the message.
    ShowError(String),

    /// Open the detail sheet for a slice that actually exists.
    ShowSliceDetails { index: usize, value: f64 },
}

impl Effect for PieEffect {}
