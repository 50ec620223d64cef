//! Pie chart feature module.

mod effect;
mod intent;
mod reducer;
mod state;

pub use effect::PieEffect;
pub use intent::PieIntent;
pub use reducer::PieReducer;
pub use state::PieChartState;

/// Store specialized for the pie chart contract.
pub type PieChartStore = crate::mvi::Store<PieReducer>;
