//! One-shot effects for the line chart.

use crate::mvi::Effect;

#[derive(Debug, Clone, PartialEq)]
pub enum LineEffect {
    /// A data load failed; the render layer should surface the message.
    ShowError(String),

    /// Leave the chart screen. Part of the contract but no handler
    /// emits it today; the host navigates on its own.
    NavigateBack,
}

impl Effect for LineEffect {}
