//! Reducer for the gauge chart.

use crate::mvi::Reducer;

use super::effect::GaugeEffect;
use super::intent::GaugeIntent;
use super::state::GaugeChartState;

pub struct GaugeReducer;

impl Reducer for GaugeReducer {
    type State = GaugeChartState;
    type Intent = GaugeIntent;
    type Effect = GaugeEffect;

    fn reduce(
        state: GaugeChartState,
        intent: GaugeIntent,
    ) -> (GaugeChartState, Option<GaugeEffect>) {
        match intent {
            GaugeIntent::LoadData(data) => (state.map_frame(|f| f.loaded(data)), None),
            GaugeIntent::UpdateData(data) => (state.map_frame(|f| f.updated(data)), None),
            GaugeIntent::BeginLoading => (state.map_frame(|f| f.loading()), None),
            GaugeIntent::LoadFailed { message } => {
                let effect = GaugeEffect::ShowError(message.clone());
                (state.map_frame(|f| f.failed(message)), Some(effect))
            }
            GaugeIntent::AnimationCompleted => (state.map_frame(|f| f.settled()), None),
            GaugeIntent::UpdateValue(value) => {
                // No threshold-crossing detection here: the value is
                // stored verbatim and only the animation restarts.
                let state = state.map_frame(|f| f.animating());
                (
                    GaugeChartState {
                        current_value: value,
                        ..state
                    },
                    None,
                )
            }
        }
    }
}
