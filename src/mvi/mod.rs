//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides the base traits and the generic store that
//! implement unidirectional data flow for every chart component.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Store ──→ Reducer ──→ State ──→ View
//!    ↑          │
//!    │          └────→ Effect (one-shot)
//!    └──────────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of a chart's view condition
//! - **Intent**: User actions or system events
//! - **Reducer**: Pure function that transforms state based on intents,
//!   optionally producing a one-shot effect
//! - **Store**: Owns the state, serializes reductions, publishes state
//!   and effect streams

mod effect;
mod intent;
mod reducer;
mod state;
mod store;

pub use effect::Effect;
pub use intent::Intent;
pub use reducer::Reducer;
pub use state::ViewState;
pub use store::{Store, EFFECT_BUFFER};
