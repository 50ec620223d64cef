//! Area chart feature module.

mod effect;
mod intent;
mod reducer;
mod state;

pub use effect::AreaEffect;
pub use intent::AreaIntent;
pub use reducer::AreaReducer;
pub use state::AreaChartState;

/// Store specialized for the area chart contract.
pub type AreaChartStore = crate::mvi::Store<AreaReducer>;
