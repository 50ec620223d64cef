//! Supplier-side validation helpers.
//!
//! The reducer core accepts whatever it is given: `LoadData` always
//! succeeds and malformed values flow through to the render layer
//! unchanged. Numeric sanity is the data supplier's responsibility;
//! these helpers are what it should run before dispatching.

use thiserror::Error;

use super::{Candle, GaugeChartData, SeriesPoint};

pub type ValidateResult = Result<(), DataError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    #[error("non-finite value at index {index}: {value}")]
    NonFiniteValue { index: usize, value: f64 },

    #[error("candle {index} violates low <= open/close <= high")]
    MalformedCandle { index: usize },

    #[error("gauge range is inverted: min={min}, max={max}")]
    InvertedRange { min: f64, max: f64 },
}

/// Check that every value is finite (no NaN, no infinities).
pub fn check_values(values: &[f64]) -> ValidateResult {
    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(DataError::NonFiniteValue { index, value });
        }
    }
    Ok(())
}

/// Check that every point has finite coordinates.
pub fn check_series(points: &[SeriesPoint]) -> ValidateResult {
    for (index, point) in points.iter().enumerate() {
        for value in [point.x, point.y] {
            if !value.is_finite() {
                return Err(DataError::NonFiniteValue { index, value });
            }
        }
    }
    Ok(())
}

/// Check OHLC ordering and finiteness for every candle.
pub fn check_candles(candles: &[Candle]) -> ValidateResult {
    for (index, candle) in candles.iter().enumerate() {
        for value in [candle.open, candle.high, candle.low, candle.close] {
            if !value.is_finite() {
                return Err(DataError::NonFiniteValue { index, value });
            }
        }
        let body_ok = candle.low <= candle.open.min(candle.close)
            && candle.high >= candle.open.max(candle.close);
        if !body_ok {
            return Err(DataError::MalformedCandle { index });
        }
    }
    Ok(())
}

/// Check the gauge dial range is finite and not inverted.
pub fn check_gauge(data: &GaugeChartData) -> ValidateResult {
    for value in [data.min, data.max] {
        if !value.is_finite() {
            return Err(DataError::NonFiniteValue { index: 0, value });
        }
    }
    if data.min >= data.max {
        return Err(DataError::InvertedRange {
            min: data.min,
            max: data.max,
        });
    }
    Ok(())
}
