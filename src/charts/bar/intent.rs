//! Intents for the bar chart.

use crate::data::BarChartData;
use crate::mvi::Intent;

/// Intents that can be dispatched to the bar chart store.
#[derive(Debug, Clone)]
pub enum BarIntent {
    /// Replace the chart data wholesale. Always succeeds; the data is
    /// not validated here.
    LoadData(BarChartData),

    /// Replace the data without touching loading/error/selection.
    UpdateData(BarChartData),

    /// The data supplier is about to fetch.
    BeginLoading,

    /// The data supplier failed; surfaces `message` via the error
    /// field and a `ShowError` effect.
    LoadFailed { message: String },

    /// The render layer finished the entry animation.
    AnimationCompleted,

    /// Highlight the bar at `index` (unchecked).
    SelectBar(usize),

    /// Drop the highlight.
    ClearSelection,
}

impl Intent for BarIntent {}
