//! One-shot effects for the bar chart.

use crate::mvi::Effect;

#[derive(Debug, Clone, PartialEq)]
pub enum BarEffect {
    /// A data load failed; the render layer should surface the message.
    ShowError(String),

    /// Transient toast describing the selected bar.
    ShowToast(String),
}

impl Effect for BarEffect {}
