//! One-shot effects for the candlestick chart.

use crate::mvi::Effect;

#[derive(Debug, Clone, PartialEq)]
pub enum CandlestickEffect {
    /// A data load failed; the render layer should surface the message.
    ShowError(String),

    /// Open the detail sheet for the candle at this index. Emitted on
    /// every selection, whether or not the index resolves to a candle.
    ShowCandleDetails(usize),
}

impl Effect for CandlestickEffect {}
