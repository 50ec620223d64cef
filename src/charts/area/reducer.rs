//! Reducer for the area chart.

use crate::mvi::Reducer;

use super::effect::AreaEffect;
use super::intent::AreaIntent;
use super::state::AreaChartState;

pub struct AreaReducer;

impl Reducer for AreaReducer {
    type State = AreaChartState;
    type Intent = AreaIntent;
    type Effect = AreaEffect;

    fn reduce(state: AreaChartState, intent: AreaIntent) -> (AreaChartState, Option<AreaEffect>) {
        match intent {
            AreaIntent::LoadData(data) => (state.map_frame(|f| f.loaded(data)), None),
            AreaIntent::UpdateData(data) => (state.map_frame(|f| f.updated(data)), None),
            AreaIntent::BeginLoading => (state.map_frame(|f| f.loading()), None),
            AreaIntent::LoadFailed { message } => {
                let effect = AreaEffect::ShowError(message.clone());
                (state.map_frame(|f| f.failed(message)), Some(effect))
            }
            AreaIntent::AnimationCompleted => (state.map_frame(|f| f.settled()), None),
            AreaIntent::SelectPoint(index) => (
                AreaChartState {
                    selected_point: Some(index),
                    ..state
                },
                None,
            ),
            AreaIntent::ClearSelection => (
                AreaChartState {
                    selected_point: None,
                    ..state
                },
                None,
            ),
        }
    }
}
