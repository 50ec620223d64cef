//! State for the radar chart.

use serde::{Deserialize, Serialize};

use crate::charts::common::ChartFrame;
use crate::data::RadarChartData;
use crate::mvi::ViewState;

/// View state for the radar chart component.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RadarChartState {
    pub frame: ChartFrame<RadarChartData>,
    /// Highlighted axis, if any. Not bounds-checked.
    pub selected_axis: Option<usize>,
}

impl ViewState for RadarChartState {}

impl RadarChartState {
    pub(crate) fn map_frame(
        self,
        f: impl FnOnce(ChartFrame<RadarChartData>) -> ChartFrame<RadarChartData>,
    ) -> Self {
        Self {
            frame: f(self.frame),
            selected_axis: self.selected_axis,
        }
    }
}
