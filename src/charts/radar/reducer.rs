//! Reducer for the radar chart.

use crate::mvi::Reducer;

use super::effect::RadarEffect;
use super::intent::RadarIntent;
use super::state::RadarChartState;

pub struct RadarReducer;

impl Reducer for RadarReducer {
    type State = RadarChartState;
    type Intent = RadarIntent;
    type Effect = RadarEffect;

    fn reduce(
        state: RadarChartState,
        intent: RadarIntent,
    ) -> (RadarChartState, Option<RadarEffect>) {
        match intent {
            RadarIntent::LoadData(data) => (state.map_frame(|f| f.loaded(data)), None),
            RadarIntent::UpdateData(data) => (state.map_frame(|f| f.updated(data)), None),
            RadarIntent::BeginLoading => (state.map_frame(|f| f.loading()), None),
            RadarIntent::LoadFailed { message } => {
                let effect = RadarEffect::ShowError(message.clone());
                (state.map_frame(|f| f.failed(message)), Some(effect))
            }
            RadarIntent::AnimationCompleted => (state.map_frame(|f| f.settled()), None),
            RadarIntent::SelectAxis(index) => (
                RadarChartState {
                    selected_axis: Some(index),
                    ..state
                },
                None,
            ),
            RadarIntent::ClearSelection => (
                RadarChartState {
                    selected_axis: None,
                    ..state
                },
                None,
            ),
        }
    }
}
