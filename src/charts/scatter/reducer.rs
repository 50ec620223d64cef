//! Reducer for the scatter chart.

use crate::mvi::Reducer;

use super::effect::ScatterEffect;
use super::intent::ScatterIntent;
use super::state::ScatterChartState;

pub struct ScatterReducer;

impl Reducer for ScatterReducer {
    type State = ScatterChartState;
    type Intent = ScatterIntent;
    type Effect = ScatterEffect;

    fn reduce(
        state: ScatterChartState,
        intent: ScatterIntent,
    ) -> (ScatterChartState, Option<ScatterEffect>) {
        match intent {
            ScatterIntent::LoadData(data) => (state.map_frame(|f| f.loaded(data)), None),
            ScatterIntent::UpdateData(data) => (state.map_frame(|f| f.updated(data)), None),
            ScatterIntent::BeginLoading => (state.map_frame(|f| f.loading()), None),
            ScatterIntent::LoadFailed { message } => {
                let effect = ScatterEffect::ShowError(message.clone());
                (state.map_frame(|f| f.failed(message)), Some(effect))
            }
            ScatterIntent::AnimationCompleted => (state.map_frame(|f| f.settled()), None),
            ScatterIntent::SelectPoint(index) => (
                ScatterChartState {
                    selected_point: Some(index),
                    ..state
                },
                None,
            ),
            ScatterIntent::ClearSelection => (
                ScatterChartState {
                    selected_point: None,
                    ..state
                },
                None,
            ),
        }
    }
}
