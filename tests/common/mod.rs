//! Shared test data builders.

#![allow(dead_code)]

use chartflow::data::{
    BarChartData, BarEntry, Candle, CandlestickChartData, GaugeChartData, PieChartData, PieSlice,
    SeriesPoint,
};

pub fn bars(n: usize) -> BarChartData {
    BarChartData {
        bars: (0..n)
            .map(|i| BarEntry {
                label: format!("bar {i}"),
                value: i as f64 * 10.0,
            })
            .collect(),
    }
}

pub fn slices(n: usize) -> PieChartData {
    PieChartData {
        slices: (0..n)
            .map(|i| PieSlice {
                label: format!("slice {i}"),
                value: (i + 1) as f64,
            })
            .collect(),
    }
}

pub fn candles(n: usize) -> CandlestickChartData {
    CandlestickChartData {
        candles: (0..n)
            .map(|i| {
                let base = 100.0 + i as f64;
                Candle {
                    timestamp: i as i64 * 60,
                    open: base,
                    high: base + 2.0,
                    low: base - 1.0,
                    close: base + 1.0,
                }
            })
            .collect(),
    }
}

pub fn points(n: usize) -> Vec<SeriesPoint> {
    (0..n)
        .map(|i| SeriesPoint {
            x: i as f64,
            y: (i as f64).sin(),
        })
        .collect()
}

pub fn dial() -> GaugeChartData {
    GaugeChartData {
        min: 0.0,
        max: 100.0,
        label: "load".to_string(),
    }
}
