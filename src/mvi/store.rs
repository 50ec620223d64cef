//! Generic store: the reducer engine shared by every chart kind.

use parking_lot::Mutex;
use tokio::sync::{broadcast, watch};
use tracing::{debug, trace};

use super::reducer::Reducer;

/// Capacity of the effect channel. A subscriber that falls further
/// behind than this observes [`broadcast::error::RecvError::Lagged`]
/// and loses the oldest effects; the dispatching side never blocks.
pub const EFFECT_BUFFER: usize = 32;

/// Owns one state value and drives it through a [`Reducer`].
///
/// The store is the only writer of its state. Dispatches may arrive
/// concurrently from multiple threads (user input and async data
/// callbacks); a dispatch gate serializes them so every observer sees
/// exactly one full reduction per intent, with the effect emitted
/// inside the same atomic step as its state publication.
///
/// State is observed through a replay-latest stream ([`Self::watch_state`]):
/// a fresh subscriber immediately sees the current value. Effects are
/// observed through a no-replay stream ([`Self::subscribe_effects`]):
/// an effect emitted while zero observers are subscribed is dropped,
/// which is fire-and-forget by design.
pub struct Store<R: Reducer> {
    gate: Mutex<()>,
    state_tx: watch::Sender<R::State>,
    effect_tx: broadcast::Sender<R::Effect>,
}

impl<R: Reducer> Store<R> {
    /// Create a store with a caller-supplied initial state.
    pub fn new(initial: R::State) -> Self {
        let (state_tx, _) = watch::channel(initial);
        let (effect_tx, _) = broadcast::channel(EFFECT_BUFFER);
        Self {
            gate: Mutex::new(()),
            state_tx,
            effect_tx,
        }
    }

    /// Run one full reduction for `intent`.
    ///
    /// Non-suspending: the reduction is pure and fast, and effect
    /// delivery never waits on consumers. Once a dispatch begins it
    /// runs to completion; there is no cancellation.
    pub fn dispatch(&self, intent: R::Intent) {
        let _gate = self.gate.lock();
        debug!(intent = ?intent, "dispatch");
        let current = self.state_tx.borrow().clone();
        let (next, effect) = R::reduce(current, intent);
        self.state_tx.send_replace(next);
        if let Some(effect) = effect {
            if self.effect_tx.send(effect).is_err() {
                // No subscriber at emission time: the effect is lost,
                // never replayed to whoever subscribes afterward.
                trace!("effect dropped, no subscribers");
            }
        }
    }

    /// Immutable snapshot of the latest state.
    pub fn state(&self) -> R::State {
        self.state_tx.borrow().clone()
    }

    /// Replay-latest state stream: the receiver starts at the current
    /// value and sees every subsequent one until the store is dropped.
    pub fn watch_state(&self) -> watch::Receiver<R::State> {
        self.state_tx.subscribe()
    }

    /// No-replay effect stream: only effects emitted while subscribed
    /// are delivered. Bounded by [`EFFECT_BUFFER`].
    pub fn subscribe_effects(&self) -> broadcast::Receiver<R::Effect> {
        self.effect_tx.subscribe()
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}
