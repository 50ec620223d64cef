//! Stream semantics of the generic store: replay-latest state,
//! no-replay effects, drop-without-subscriber, bounded effect buffer.

mod common;

use std::sync::Arc;
use std::time::Duration;

use chartflow::charts::bar::{BarChartStore, BarEffect, BarIntent};
use chartflow::charts::gauge::{GaugeChartStore, GaugeIntent};
use chartflow::mvi::EFFECT_BUFFER;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};

#[test]
fn new_state_subscriber_sees_current_value_immediately() {
    let store = BarChartStore::default();
    store.dispatch(BarIntent::LoadData(common::bars(3)));

    // Subscribed after the load, still sees it.
    let rx = store.watch_state();
    let snapshot = rx.borrow().clone();
    assert_eq!(snapshot.frame.data, Some(common::bars(3)));
}

#[tokio::test]
async fn state_stream_delivers_subsequent_values() {
    let store = Arc::new(BarChartStore::default());
    let mut rx = store.watch_state();
    rx.mark_unchanged();

    let dispatcher = Arc::clone(&store);
    let handle = tokio::spawn(async move {
        dispatcher.dispatch(BarIntent::SelectBar(1));
    });

    tokio::time::timeout(Duration::from_secs(1), rx.changed())
        .await
        .expect("state change within a second")
        .expect("store still alive");
    assert_eq!(rx.borrow().selected_bar, Some(1));
    handle.await.unwrap();
}

#[test]
fn effects_are_not_replayed_to_late_subscribers() {
    let store = BarChartStore::default();
    // Emitted with zero subscribers: lost by design.
    store.dispatch(BarIntent::SelectBar(0));

    let mut late = store.subscribe_effects();
    assert_eq!(late.try_recv(), Err(TryRecvError::Empty));

    // Only emissions after the subscription arrive.
    store.dispatch(BarIntent::SelectBar(1));
    assert_eq!(
        late.try_recv(),
        Ok(BarEffect::ShowToast("Bar 1 selected".into()))
    );
}

#[test]
fn each_subscriber_gets_its_own_copy() {
    let store = BarChartStore::default();
    let mut a = store.subscribe_effects();
    let mut b = store.subscribe_effects();
    store.dispatch(BarIntent::LoadFailed {
        message: "offline".into(),
    });
    assert_eq!(a.try_recv(), Ok(BarEffect::ShowError("offline".into())));
    assert_eq!(b.try_recv(), Ok(BarEffect::ShowError("offline".into())));
}

#[tokio::test]
async fn slow_effect_subscriber_lags_instead_of_blocking_dispatch() {
    let store = BarChartStore::default();
    let mut rx = store.subscribe_effects();

    // Overflow the bounded buffer without ever receiving.
    for i in 0..(EFFECT_BUFFER + 8) {
        store.dispatch(BarIntent::SelectBar(i));
    }

    match rx.recv().await {
        Err(RecvError::Lagged(missed)) => assert_eq!(missed as usize, 8),
        other => panic!("expected lag, got {other:?}"),
    }
    // After the lag notice the oldest surviving effect is delivered.
    assert_eq!(
        rx.recv().await,
        Ok(BarEffect::ShowToast("Bar 8 selected".into()))
    );
}

#[test]
fn intents_from_data_callbacks_and_ui_interleave_safely() {
    let store = Arc::new(GaugeChartStore::default());
    let mut handles = Vec::new();
    for thread in 0..4 {
        let store = Arc::clone(&store);
        handles.push(std::thread::spawn(move || {
            for step in 0..50 {
                store.dispatch(GaugeIntent::UpdateValue((thread * 50 + step) as f64));
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
    // Exactly one of the dispatched values won; no torn state.
    let value = store.state().current_value;
    assert!((0.0..200.0).contains(&value));
    assert_eq!(value.fract(), 0.0);
}
