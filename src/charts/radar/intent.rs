//! Intents for the radar chart.

use crate::data::RadarChartData;
use crate::mvi::Intent;

/// Intents that can be dispatched to the radar chart store.
#[derive(Debug, Clone)]
pub enum RadarIntent {
    /// Replace the chart data wholesale (unvalidated).
    LoadData(RadarChartData),

    /// Replace the data without touching loading/error/selection.
    UpdateData(RadarChartData),

    /// The data supplier is about to fetch.
    BeginLoading,

    /// The data supplier failed.
    LoadFailed { message: String },

    /// The render layer finished the entry animation.
    AnimationCompleted,

    /// Highlight the axis at `index` (unchecked).
    SelectAxis(usize),

    /// Drop the highlight.
    ClearSelection,
}

impl Intent for RadarIntent {}
