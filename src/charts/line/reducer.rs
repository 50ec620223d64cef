//! Reducer for the line chart.

use crate::mvi::Reducer;

use super::effect::LineEffect;
use super::intent::LineIntent;
use super::state::LineChartState;

pub struct LineReducer;

impl Reducer for LineReducer {
    type State = LineChartState;
    type Intent = LineIntent;
    type Effect = LineEffect;

    fn reduce(state: LineChartState, intent: LineIntent) -> (LineChartState, Option<LineEffect>) {
        match intent {
            LineIntent::LoadData(data) => (state.map_frame(|f| f.loaded(data)), None),
            LineIntent::UpdateData(data) => (state.map_frame(|f| f.updated(data)), None),
            LineIntent::BeginLoading => (state.map_frame(|f| f.loading()), None),
            LineIntent::LoadFailed { message } => {
                let effect = LineEffect::ShowError(message.clone());
                (state.map_frame(|f| f.failed(message)), Some(effect))
            }
            LineIntent::AnimationCompleted => (state.map_frame(|f| f.settled()), None),
            LineIntent::Refresh => (state.map_frame(|f| f.animating()), None),
            LineIntent::SelectPoint(index) => (
                LineChartState {
                    selected_point: Some(index),
                    ..state
                },
                None,
            ),
            LineIntent::ClearSelection => (
                LineChartState {
                    selected_point: None,
                    ..state
                },
                None,
            ),
        }
    }
}
