mod common;

use chartflow::charts::candlestick::{
    CandlestickChartState, CandlestickChartStore, CandlestickEffect, CandlestickIntent,
    CandlestickReducer,
};
use chartflow::mvi::Reducer;

#[test]
fn select_candle_sets_state_and_emits_details() {
    let (state, _) = CandlestickReducer::reduce(
        CandlestickChartState::default(),
        CandlestickIntent::LoadData(common::candles(5)),
    );
    let (state, effect) = CandlestickReducer::reduce(state, CandlestickIntent::SelectCandle(3));
    assert_eq!(state.selected_candle, Some(3));
    assert_eq!(effect, Some(CandlestickEffect::ShowCandleDetails(3)));
}

#[test]
fn select_emits_even_out_of_range() {
    // Unlike pie, the candle details effect is not guarded.
    let (state, effect) =
        CandlestickReducer::reduce(CandlestickChartState::default(), CandlestickIntent::SelectCandle(42));
    assert_eq!(state.selected_candle, Some(42));
    assert_eq!(effect, Some(CandlestickEffect::ShowCandleDetails(42)));
}

#[test]
fn details_effect_arrives_within_the_same_dispatch() {
    let store = CandlestickChartStore::default();
    store.dispatch(CandlestickIntent::LoadData(common::candles(4)));
    let mut effects = store.subscribe_effects();
    store.dispatch(CandlestickIntent::SelectCandle(3));
    // Synchronous delivery: nothing else has to run for it to arrive.
    assert_eq!(
        effects.try_recv(),
        Ok(CandlestickEffect::ShowCandleDetails(3))
    );
    assert_eq!(store.state().selected_candle, Some(3));
}

#[test]
fn zoom_overwrites_without_clamping() {
    let state = CandlestickChartState::default();
    assert_eq!(state.zoom_level, 1.0);

    let (state, effect) = CandlestickReducer::reduce(state, CandlestickIntent::Zoom(4.5));
    assert_eq!(state.zoom_level, 4.5);
    assert_eq!(effect, None);

    // Nonsense zoom levels are stored verbatim.
    let (state, _) = CandlestickReducer::reduce(state, CandlestickIntent::Zoom(-2.0));
    assert_eq!(state.zoom_level, -2.0);
    let (state, _) = CandlestickReducer::reduce(state, CandlestickIntent::Zoom(0.0));
    assert_eq!(state.zoom_level, 0.0);
}

#[test]
fn zoom_survives_data_updates() {
    let (state, _) = CandlestickReducer::reduce(
        CandlestickChartState::default(),
        CandlestickIntent::Zoom(2.0),
    );
    let (state, _) =
        CandlestickReducer::reduce(state, CandlestickIntent::UpdateData(common::candles(8)));
    assert_eq!(state.zoom_level, 2.0);
}

#[test]
fn clear_selection_resets_candle_only() {
    let (state, _) = CandlestickReducer::reduce(
        CandlestickChartState::default(),
        CandlestickIntent::SelectCandle(1),
    );
    let (state, _) = CandlestickReducer::reduce(state, CandlestickIntent::Zoom(3.0));
    let (state, effect) = CandlestickReducer::reduce(state, CandlestickIntent::ClearSelection);
    assert_eq!(state.selected_candle, None);
    assert_eq!(state.zoom_level, 3.0);
    assert_eq!(effect, None);
}
