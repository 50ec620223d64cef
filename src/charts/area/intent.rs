//! Intents for the area chart.

use crate::data::AreaChartData;
use crate::mvi::Intent;

/// Intents that can be dispatched to the area chart store.
#[derive(Debug, Clone)]
pub enum AreaIntent {
    /// Replace the chart data wholesale (unvalidated).
    LoadData(AreaChartData),

    /// Replace the data without touching loading/error/selection.
    UpdateData(AreaChartData),

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

impl Intent for AreaIntent {}
