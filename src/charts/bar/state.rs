//! State for the bar chart.

use serde::{Deserialize, Serialize};

use crate::charts::common::ChartFrame;
use crate::data::BarChartData;
use crate::mvi::ViewState;

/// View state for the bar chart component.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BarChartState {
    pub frame: ChartFrame<BarChartData>,
    /// Highlighted bar, if any. Not bounds-checked against the data.
    pub selected_bar: Option<usize>,
}

impl ViewState for BarChartState {}

impl BarChartState {
    pub(crate) fn map_frame(
        self,
        f: impl FnOnce(ChartFrame<BarChartData>) -> ChartFrame<BarChartData>,
    ) -> Self {
        Self {
            frame: f(self.frame),
            selected_bar: self.selected_bar,
        }
    }
}
