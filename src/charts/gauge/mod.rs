//! Gauge chart feature module.

mod effect;
mod intent;
mod reducer;
mod state;

pub use effect::GaugeEffect;
pub use intent::GaugeIntent;
pub use reducer::GaugeReducer;
pub use state::GaugeChartState;

/// Store specialized for the gauge chart contract.
pub type GaugeChartStore = crate::mvi::Store<GaugeReducer>;
