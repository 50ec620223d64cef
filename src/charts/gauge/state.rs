//! State for the gauge chart.

use serde::{Deserialize, Serialize};

use crate::charts::common::ChartFrame;
use crate::data::GaugeChartData;
use crate::mvi::ViewState;

/// View state for the gauge chart component.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GaugeChartState {
    pub frame: ChartFrame<GaugeChartData>,
    /// Needle position. Overwritten verbatim by `UpdateValue`; not
    /// clamped to the dial range in the data.
    pub current_value: f64,
}

impl ViewState for GaugeChartState {}

impl GaugeChartState {
    pub(crate) fn map_frame(
        self,
        f: impl FnOnce(ChartFrame<GaugeChartData>) -> ChartFrame<GaugeChartData>,
    ) -> Self {
        Self {
            frame: f(self.frame),
            current_value: self.current_value,
        }
    }
}
