//! Scatter chart feature module.

mod effect;
mod intent;
mod reducer;
mod state;

pub use effect::ScatterEffect;
pub use intent::ScatterIntent;
pub use reducer::ScatterReducer;
pub use state::ScatterChartState;

/// Store specialized for the scatter chart contract.
pub type ScatterChartStore = crate::mvi::Store<ScatterReducer>;
