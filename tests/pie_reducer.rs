mod common;

use chartflow::charts::pie::{PieChartState, PieEffect, PieIntent, PieReducer};
use chartflow::mvi::Reducer;

fn loaded(n: usize) -> PieChartState {
    let (state, _) = PieReducer::reduce(PieChartState::default(), PieIntent::LoadData(common::slices(n)));
    state
}

#[test]
fn select_in_range_emits_slice_details() {
    let (state, effect) = PieReducer::reduce(loaded(3), PieIntent::SelectSlice(1));
    assert_eq!(state.selected_slice, Some(1));
    assert_eq!(
        effect,
        Some(PieEffect::ShowSliceDetails {
            index: 1,
            value: 2.0
        })
    );
}

#[test]
fn select_last_slice_still_emits() {
    let (_, effect) = PieReducer::reduce(loaded(3), PieIntent::SelectSlice(2));
    assert!(matches!(
        effect,
        Some(PieEffect::ShowSliceDetails { index: 2, .. })
    ));
}

#[test]
fn select_out_of_range_sets_state_but_no_effect() {
    // Two slices, index 5: the unguarded selection field still records
    // the index, only the guarded lookup stays silent.
    let (state, effect) = PieReducer::reduce(loaded(2), PieIntent::SelectSlice(5));
    assert_eq!(state.selected_slice, Some(5));
    assert_eq!(effect, None);
}

#[test]
fn select_at_len_boundary_is_silent() {
    let (_, effect) = PieReducer::reduce(loaded(2), PieIntent::SelectSlice(2));
    assert_eq!(effect, None);
}

#[test]
fn select_without_data_is_silent() {
    let (state, effect) = PieReducer::reduce(PieChartState::default(), PieIntent::SelectSlice(0));
    assert_eq!(state.selected_slice, Some(0));
    assert_eq!(effect, None);
}

#[test]
fn clear_selection_is_idempotent() {
    let (state, _) = PieReducer::reduce(loaded(2), PieIntent::SelectSlice(0));
    let (once, _) = PieReducer::reduce(state, PieIntent::ClearSelection);
    let (twice, _) = PieReducer::reduce(once.clone(), PieIntent::ClearSelection);
    assert_eq!(once.selected_slice, None);
    assert_eq!(once, twice);
}

#[test]
fn update_keeps_selection_even_if_now_out_of_range() {
    let (state, _) = PieReducer::reduce(loaded(4), PieIntent::SelectSlice(3));
    let (state, effect) = PieReducer::reduce(state, PieIntent::UpdateData(common::slices(1)));
    assert_eq!(state.selected_slice, Some(3));
    assert!(state.frame.is_animating);
    assert_eq!(effect, None);
}
