//! Intents for the gauge chart.

use crate::data::GaugeChartData;
use crate::mvi::Intent;

/// Intents that can be dispatched to the gauge chart store.
#[derive(Debug, Clone)]
pub enum GaugeIntent {
    /// Replace the dial description wholesale (unvalidated).
    LoadData(GaugeChartData),

    /// Replace the dial without touching loading/error/value.
    UpdateData(GaugeChartData),

    /// The data supplier is about to fetch.
    BeginLoading,

    /// The data supplier failed.
    LoadFailed { message: String },

    /// The render layer finished the needle animation.
    AnimationCompleted,

    /// Move the needle. The value is taken verbatim and the needle
    /// animation restarts.
    UpdateValue(f64),
}

impl Intent for GaugeIntent {}
