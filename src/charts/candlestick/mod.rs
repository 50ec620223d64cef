//! Candlestick chart feature module.

mod effect;
mod intent;
mod reducer;
mod state;

pub use effect::CandlestickEffect;
pub use intent::CandlestickIntent;
pub use reducer::CandlestickReducer;
pub use state::CandlestickChartState;

/// Store specialized for the candlestick chart contract.
pub type CandlestickChartStore = crate::mvi::Store<CandlestickReducer>;
