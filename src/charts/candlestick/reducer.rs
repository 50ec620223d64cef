//! Reducer for the candlestick chart.

use crate::mvi::Reducer;

use super::effect::CandlestickEffect;
use super::intent::CandlestickIntent;
use super::state::CandlestickChartState;

pub struct CandlestickReducer;

impl Reducer for CandlestickReducer {
    type State = CandlestickChartState;
    type Intent = CandlestickIntent;
    type Effect = CandlestickEffect;

    fn reduce(
        state: CandlestickChartState,
        intent: CandlestickIntent,
    ) -> (CandlestickChartState, Option<CandlestickEffect>) {
        match intent {
            CandlestickIntent::LoadData(data) => (state.map_frame(|f| f.loaded(data)), None),
            CandlestickIntent::UpdateData(data) => (state.map_frame(|f| f.updated(data)), None),
            CandlestickIntent::BeginLoading => (state.map_frame(|f| f.loading()), None),
            CandlestickIntent::LoadFailed { message } => {
                let effect = CandlestickEffect::ShowError(message.clone());
                (state.map_frame(|f| f.failed(message)), Some(effect))
            }
            CandlestickIntent::AnimationCompleted => (state.map_frame(|f| f.settled()), None),
            CandlestickIntent::SelectCandle(index) => (
                CandlestickChartState {
                    selected_candle: Some(index),
                    ..state
                },
                Some(CandlestickEffect::ShowCandleDetails(index)),
            ),
            CandlestickIntent::ClearSelection => (
                CandlestickChartState {
                    selected_candle: None,
                    ..state
                },
                None,
            ),
            CandlestickIntent::Zoom(level) => (
                CandlestickChartState {
                    zoom_level: level,
                    ..state
                },
                None,
            ),
        }
    }
}
