//! State for the line chart.

use serde::{Deserialize, Serialize};

use crate::charts::common::ChartFrame;
use crate::data::LineChartData;
use crate::mvi::ViewState;

/// View state for the line chart component.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineChartState {
    pub frame: ChartFrame<LineChartData>,
    /// Highlighted data point, if any. Not bounds-checked.
    pub selected_point: Option<usize>,
}

impl ViewState for LineChartState {}

impl LineChartState {
    pub(crate) fn map_frame(
        self,
        f: impl FnOnce(ChartFrame<LineChartData>) -> ChartFrame<LineChartData>,
    ) -> Self {
        Self {
            frame: f(self.frame),
            selected_point: self.selected_point,
        }
    }
}
