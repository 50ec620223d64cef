//! Intents for the candlestick chart.

use crate::data::CandlestickChartData;
use crate::mvi::Intent;

/// Intents that can be dispatched to the candlestick chart store.
#[derive(Debug, Clone)]
pub enum CandlestickIntent {
    /// Replace the chart data wholesale (unvalidated).
    LoadData(CandlestickChartData),

    /// Replace the data without touching loading/error/selection/zoom.
    UpdateData(CandlestickChartData),

    /// The data supplier is about to fetch.
    BeginLoading,

    /// The data supplier failed.
    LoadFailed { message: String },

    /// The render layer finished the entry animation.
    AnimationCompleted,

    /// Highlight the candle at `index` (unchecked) and open its
    /// detail sheet.
    SelectCandle(usize),

    /// Drop the highlight.
    ClearSelection,

    /// Overwrite the zoom factor verbatim. No clamping.
    Zoom(f64),
}

impl Intent for CandlestickIntent {}
