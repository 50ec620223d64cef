//! Reducer for the bar chart.

use crate::mvi::Reducer;

use super::effect::BarEffect;
use super::intent::BarIntent;
use super::state::BarChartState;

pub struct BarReducer;

impl Reducer for BarReducer {
    type State = BarChartState;
    type Intent = BarIntent;
    type Effect = BarEffect;

    fn reduce(state: BarChartState, intent: BarIntent) -> (BarChartState, Option<BarEffect>) {
        match intent {
            BarIntent::LoadData(data) => (state.map_frame(|f| f.loaded(data)), None),
            BarIntent::UpdateData(data) => (state.map_frame(|f| f.updated(data)), None),
            BarIntent::BeginLoading => (state.map_frame(|f| f.loading()), None),
            BarIntent::LoadFailed { message } => {
                let effect = BarEffect::ShowError(message.clone());
                (state.map_frame(|f| f.failed(message)), Some(effect))
            }
            BarIntent::AnimationCompleted => (state.map_frame(|f| f.settled()), None),
            BarIntent::SelectBar(index) => (
                BarChartState {
                    selected_bar: Some(index),
                    ..state
                },
                Some(BarEffect::ShowToast(format!("Bar {index} selected"))),
            ),
            BarIntent::ClearSelection => (
                BarChartState {
                    selected_bar: None,
                    ..state
                },
                None,
            ),
        }
    }
}
