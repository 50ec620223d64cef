//! One-shot effects for the gauge chart.

use crate::mvi::Effect;

#[derive(Debug, Clone, PartialEq)]
pub enum GaugeEffect {
    /// A data load failed; the render layer should surface the message.
    ShowError(String),

    /// Declared for threshold alerts, but no handler computes
    /// threshold crossings today — nothing ever emits this.
    ValueThresholdReached(f64),
}

impl Effect for GaugeEffect {}
