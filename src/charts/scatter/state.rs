//! State for the scatter chart.

use serde::{Deserialize, Serialize};

use crate::charts::common::ChartFrame;
use crate::data::ScatterChartData;
use crate::mvi::ViewState;

/// View state for the scatter chart component.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScatterChartState {
    pub frame: ChartFrame<ScatterChartData>,
    /// Highlighted data point, if any. Not bounds-checked.
    pub selected_point: Option<usize>,
}

impl ViewState for ScatterChartState {}

impl ScatterChartState {
    pub(crate) fn map_frame(
        self,
        f: impl FnOnce(ChartFrame<ScatterChartData>) -> ChartFrame<ScatterChartData>,
    ) -> Self {
        Self {
            frame: f(self.frame),
            selected_point: self.selected_point,
        }
    }
}
