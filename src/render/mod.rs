//! Placeholder chart bodies.
//!
//! The real drawing pipeline lives in the host UI toolkit; this module
//! only turns a chart state into a small text box so screens can be
//! assembled before the renderer exists. Nothing here mutates the
//! state it is given.

use crate::charts::area::AreaChartState;
use crate::charts::bar::BarChartState;
use crate::charts::candlestick::CandlestickChartState;
use crate::charts::common::ChartFrame;
use crate::charts::gauge::GaugeChartState;
use crate::charts::line::LineChartState;
use crate::charts::pie::PieChartState;
use crate::charts::radar::RadarChartState;
use crate::charts::scatter::ScatterChartState;

/// A text stand-in for a chart body.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    pub title: String,
    pub lines: Vec<String>,
}

impl Placeholder {
    pub fn to_text(&self) -> String {
        let mut out = self.title.clone();
        for line in &self.lines {
            out.push('\n');
            out.push_str(line);
        }
        out
    }
}

/// Builds the placeholder body for a chart state.
pub trait PlaceholderView {
    fn placeholder(&self) -> Placeholder;
}

/// Frame-level lines shared by every kind: error wins, then loading,
/// then "no data", then the data summary.
fn frame_lines<D>(frame: &ChartFrame<D>, summary: impl FnOnce(&D) -> String) -> Vec<String> {
    if let Some(message) = &frame.error {
        return vec![format!("error: {message}")];
    }
    match &frame.data {
        None if frame.is_loading => vec!["loading...".to_string()],
        None => vec!["no data".to_string()],
        Some(data) => {
            let mut lines = vec![summary(data)];
            if frame.is_animating {
                lines.push("animating".to_string());
            }
            lines
        }
    }
}

fn selection_line(label: &str, selected: Option<usize>) -> Option<String> {
    selected.map(|index| format!("{label} {index} selected"))
}

impl PlaceholderView for BarChartState {
    fn placeholder(&self) -> Placeholder {
        let mut lines = frame_lines(&self.frame, |d| format!("{} bars", d.bars.len()));
        lines.extend(selection_line("bar", self.selected_bar));
        Placeholder {
            title: "Bar Chart".to_string(),
            lines,
        }
    }
}

impl PlaceholderView for LineChartState {
    fn placeholder(&self) -> Placeholder {
        let mut lines = frame_lines(&self.frame, |d| format!("{} points", d.points.len()));
        lines.extend(selection_line("point", self.selected_point));
        Placeholder {
            title: "Line Chart".to_string(),
            lines,
        }
    }
}

impl PlaceholderView for AreaChartState {
    fn placeholder(&self) -> Placeholder {
        let mut lines = frame_lines(&self.frame, |d| format!("{} points", d.points.len()));
        lines.extend(selection_line("point", self.selected_point));
        Placeholder {
            title: "Area Chart".to_string(),
            lines,
        }
    }
}

impl PlaceholderView for ScatterChartState {
    fn placeholder(&self) -> Placeholder {
        let mut lines = frame_lines(&self.frame, |d| format!("{} points", d.points.len()));
        lines.extend(selection_line("point", self.selected_point));
        Placeholder {
            title: "Scatter Chart".to_string(),
            lines,
        }
    }
}

impl PlaceholderView for PieChartState {
    fn placeholder(&self) -> Placeholder {
        let mut lines = frame_lines(&self.frame, |d| format!("{} slices", d.slices.len()));
        lines.extend(selection_line("slice", self.selected_slice));
        Placeholder {
            title: "Pie Chart".to_string(),
            lines,
        }
    }
}

impl PlaceholderView for RadarChartState {
    fn placeholder(&self) -> Placeholder {
        let mut lines = frame_lines(&self.frame, |d| format!("{} axes", d.axes.len()));
        lines.extend(selection_line("axis", self.selected_axis));
        Placeholder {
            title: "Radar Chart".to_string(),
            lines,
        }
    }
}

impl PlaceholderView for CandlestickChartState {
    fn placeholder(&self) -> Placeholder {
        let mut lines = frame_lines(&self.frame, |d| {
            format!("{} candles @ {:.2}x", d.candles.len(), self.zoom_level)
        });
        lines.extend(selection_line("candle", self.selected_candle));
        Placeholder {
            title: "Candlestick Chart".to_string(),
            lines,
        }
    }
}

impl PlaceholderView for GaugeChartState {
    fn placeholder(&self) -> Placeholder {
        let lines = frame_lines(&self.frame, |d| {
            format!("{}: {:.1} in [{:.1}, {:.1}]", d.label, self.current_value, d.min, d.max)
        });
        Placeholder {
            title: "Gauge".to_string(),
            lines,
        }
    }
}
