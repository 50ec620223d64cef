//! Bar chart feature module.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Frame plus the selected-bar index
//! - `intent.rs` - Data lifecycle and bar selection intents
//! - `effect.rs` - One-shot error/toast notifications
//! - `reducer.rs` - State transitions (pure, no side effects)

mod effect;
mod intent;
mod reducer;
mod state;

pub use effect::BarEffect;
pub use intent::BarIntent;
pub use reducer::BarReducer;
pub use state::BarChartState;

/// Store specialized for the bar chart contract.
pub type BarChartStore = crate::mvi::Store<BarReducer>;
