//! State for the candlestick chart.

use serde::{Deserialize, Serialize};

use crate::charts::common::ChartFrame;
use crate::data::CandlestickChartData;
use crate::mvi::ViewState;

/// View state for the candlestick chart component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandlestickChartState {
    pub frame: ChartFrame<CandlestickChartData>,
    /// Highlighted candle, if any. Not bounds-checked.
    pub selected_candle: Option<usize>,
    /// Horizontal zoom factor. Overwritten verbatim by `Zoom`; no
    /// clamping is applied.
    pub zoom_level: f64,
}

impl Default for CandlestickChartState {
    fn default() -> Self {
        Self {
            frame: ChartFrame::default(),
            selected_candle: None,
            zoom_level: 1.0,
        }
    }
}

impl ViewState for CandlestickChartState {}

impl CandlestickChartState {
    pub(crate) fn map_frame(
        self,
        f: impl FnOnce(ChartFrame<CandlestickChartData>) -> ChartFrame<CandlestickChartData>,
    ) -> Self {
        Self {
            frame: f(self.frame),
            selected_candle: self.selected_candle,
            zoom_level: self.zoom_level,
        }
    }
}
