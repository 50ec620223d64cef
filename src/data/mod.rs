//! Typed chart data models.
//!
//! These are plain value types produced by the host application's data
//! supplier and handed to a chart store wholesale via `LoadData` /
//! `UpdateData` intents. The reducer core performs no validation on
//! them — see [`validate`] for the checks the supplier is expected to
//! run before dispatching.

pub mod validate;

use serde::{Deserialize, Serialize};

/// A single x/y datum shared by line, area, and scatter charts.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub x: f64,
    pub y: f64,
}

/// One labeled bar.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BarEntry {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BarChartData {
    pub bars: Vec<BarEntry>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineChartData {
    pub points: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AreaChartData {
    pub points: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScatterChartData {
    pub points: Vec<SeriesPoint>,
}

/// One pie slice. `value` is an absolute quantity; percentage layout
/// is the render layer's business.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PieChartData {
    pub slices: Vec<PieSlice>,
}

/// Radar chart: one value per named axis, in axis order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RadarChartData {
    pub axes: Vec<String>,
    pub values: Vec<f64>,
}

/// One OHLC candle. `timestamp` is epoch seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CandlestickChartData {
    pub candles: Vec<Candle>,
}

/// Gauge scale. The current needle position lives in the gauge chart
/// state, not here — the data only describes the dial.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GaugeChartData {
    pub min: f64,
    pub max: f64,
    pub label: String,
}
