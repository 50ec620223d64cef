//! Reducer trait for MVI architecture.

use super::effect::Effect;
use super::intent::Intent;
use super::state::ViewState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure, total, synchronous function:
/// `(State, Intent) -> (State, Option<Effect>)`. No I/O, no retries,
/// no panics on malformed input — worst case is a well-typed but
/// inconsistent state (e.g. a selection index with no matching datum).
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: ViewState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// The one-shot effect type this reducer can emit.
    type Effect: Effect;

    /// Process an intent and return the new state plus an optional
    /// effect to deliver alongside it.
    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Option<Self::Effect>);
}
