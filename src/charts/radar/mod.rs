//! Radar chart feature module.

mod effect;
mod intent;
mod reducer;
mod state;

pub use effect::RadarEffect;
pub use intent::RadarIntent;
pub use reducer::RadarReducer;
pub use state::RadarChartState;

/// Store specialized for the radar chart contract.
pub type RadarChartStore = crate::mvi::Store<RadarReducer>;
