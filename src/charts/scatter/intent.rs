//! Intents for the scatter chart.

use crate::data::ScatterChartData;
use crate::mvi::Intent;

/// Intents that can be dispatched to the scatter chart store.
#[derive(Debug, Clone)]
pub enum ScatterIntent {
    /// Replace the chart data wholesale (unvalidated).
    LoadData(ScatterChartData),

    /// Replace the data without touching loading/error/selection.
    UpdateData(ScatterChartData),

    /// The data supplier is about to fetch.
    BeginLoading,

    /// The data supplier failed.
    LoadFailed { message: String },

    /// The render layer finished the entry animation.
    AnimationCompleted,

    /// Highlight the point at `index` (unchecked).
    SelectPoint(usize),

    /// Drop the highlight.
    ClearSelection,
}

impl Intent for ScatterIntent {}
