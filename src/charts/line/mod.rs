//! Line chart feature module.

mod effect;
mod intent;
mod reducer;
mod state;

pub use effect::LineEffect;
pub use intent::LineIntent;
pub use reducer::LineReducer;
pub use state::LineChartState;

/// Store specialized for the line chart contract.
pub type LineChartStore = crate::mvi::Store<LineReducer>;
