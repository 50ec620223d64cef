//! Reducer for the pie chart.

use crate::mvi::Reducer;

use super::effect::PieEffect;
use super::intent::PieIntent;
use super::state::PieChartState;

pub struct PieReducer;

impl Reducer for PieReducer {
    type State = PieChartState;
    type Intent = PieIntent;
    type Effect = PieEffect;

    fn reduce(state: PieChartState, intent: PieIntent) -> (PieChartState, Option<PieEffect>) {
        match intent {
            PieIntent::LoadData(data) => (state.map_frame(|f| f.loaded(data)), None),
            PieIntent::UpdateData(data) => (state.map_frame(|f| f.updated(data)), None),
            PieIntent::BeginLoading => (state.map_frame(|f| f.loading()), None),
            PieIntent::LoadFailed { message } => {
                let effect = PieEffect::ShowError(message.clone());
                (state.map_frame(|f| f.failed(message)), Some(effect))
            }
            PieIntent::AnimationCompleted => (state.map_frame(|f| f.settled()), None),
            PieIntent::SelectSlice(index) => {
                // The selection index is stored as-is; only the effect
                // requires the slice to exist.
                let details = state
                    .frame
                    .data
                    .as_ref()
                    .and_then(|data| data.slices.get(index))
                    .map(|slice| PieEffect::ShowSliceDetails {
                        index,
                        value: slice.value,
                    });
                (
                    PieChartState {
                        selected_slice: Some(index),
                        ..state
                    },
                    details,
                )
            }
            PieIntent::ClearSelection => (
                PieChartState {
                    selected_slice: None,
                    ..state
                },
                None,
            ),
        }
    }
}
