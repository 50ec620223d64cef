//! Intents for the line chart.

use crate::data::LineChartData;
use crate::mvi::Intent;

/// Intents that can be dispatched to the line chart store.
#[derive(Debug, Clone)]
pub enum LineIntent {
    /// Replace the chart data wholesale (unvalidated).
    LoadData(LineChartData),

    /// Replace the data without touching loading/error/selection.
    UpdateData(LineChartData),

    /// The data supplier is about to fetch.
    BeginLoading,

    /// The data supplier failed.
    LoadFailed { message: String },

    /// The render layer finished the entry animation.
    AnimationCompleted,

    /// Replay the entry animation over the data already loaded.
    /// Does not reload anything.
    Refresh,

    /// Highlight the point at `index` (unchecked).
    SelectPoint(usize),

    /// Drop the highlight.
    ClearSelection,
}

impl Intent for LineIntent {}
