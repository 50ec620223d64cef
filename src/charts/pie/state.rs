//! State for the pie chart.

use serde::{Deserialize, Serialize};

use crate::charts::common::ChartFrame;
use crate::data::PieChartData;
use crate::mvi::ViewState;

/// View state for the pie chart component.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PieChartState {
    pub frame: ChartFrame<PieChartData>,
    /// Highlighted slice, if any. The index itself is stored unchecked;
    /// only the slice-details effect does a guarded lookup.
    pub selected_slice: Option<usize>,
}

impl ViewState for PieChartState {}

impl PieChartState {
    pub(crate) fn map_frame(
        self,
        f: impl FnOnce(ChartFrame<PieChartData>) -> ChartFrame<PieChartData>,
    ) -> Self {
        Self {
            frame: f(self.frame),
            selected_slice: self.selected_slice,
        }
    }
}
