//! State for the area chart.

use serde::{Deserialize, Serialize};

use crate::charts::common::ChartFrame;
use crate::data::AreaChartData;
use crate::mvi::ViewState;

/// View state for the area chart component.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AreaChartState {
    pub frame: ChartFrame<AreaChartData>,
    /// Highlighted data point, if any. Not bounds-checked.
    pub selected_point: Option<usize>,
}

impl ViewState for AreaChartState {}

impl AreaChartState {
    pub(crate) fn map_frame(
        self,
        f: impl FnOnce(ChartFrame<AreaChartData>) -> ChartFrame<AreaChartData>,
    ) -> Self {
        Self {
            frame: f(self.frame),
            selected_point: self.selected_point,
        }
    }
}
