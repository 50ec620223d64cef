//! Intents for the pie chart.

use crate::data::PieChartData;
use crate::mvi::Intent;

/// Intents that can be dispatched to the pie chart store.
#[derive(Debug, Clone)]
pub enum PieIntent {
    /// Replace the chart data wholesale (unvalidated).
    LoadData(PieChartData),

    /// Replace the data without touching loading/error/selection.
    UpdateData(PieChartData),

    /// The data supplier is about to fetch.
    BeginLoading,

    /// The data supplier failed.
    LoadFailed { message: String },

    /// The render layer finished the entry animation.
    AnimationCompleted,

    /// Highlight the slice at `index`. The state records the index
    /// unchecked; the details effect fires only if the slice exists.
    SelectSlice(usize),

    /// Drop the highlight.
    ClearSelection,
}

impl Intent for PieIntent {}
