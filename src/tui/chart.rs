//! Chart data prepared from one simulation result.
//!
//! A `ChartData` is built once per recompute and dropped wholesale on the
//! next one; nothing in it is updated incrementally.

use crate::model::{Annotations, PeakInfo, SimulationResult};

/// Headroom above the tallest sample on the value axis.
const Y_HEADROOM: f64 = 1.1;

/// Points, bounds and labels for one rendered chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    /// Simulation the chart was built from.
    pub result: SimulationResult,
    /// Rainfall `(time, value)` points.
    pub rainfall_points: Vec<(f64, f64)>,
    /// Runoff `(time, value)` points, non-finite samples removed.
    pub runoff_points: Vec<(f64, f64)>,
    /// Rainfall peak marker.
    pub rainfall_marker: Vec<(f64, f64)>,
    /// Runoff peak marker.
    pub runoff_marker: Vec<(f64, f64)>,
    /// Time axis bounds.
    pub x_bounds: [f64; 2],
    /// Value axis bounds.
    pub y_bounds: [f64; 2],
}

fn finite_points(series: &crate::model::TimeSeries) -> Vec<(f64, f64)> {
    series.iter().filter(|(_, v)| v.is_finite()).collect()
}

fn marker(peak: Option<&PeakInfo>) -> Vec<(f64, f64)> {
    peak.map(|p| vec![(p.time, p.value)]).unwrap_or_default()
}

impl ChartData {
    /// Prepare a chart from a simulation result.
    #[must_use]
    pub fn new(result: SimulationResult) -> Self {
        let rainfall_points = finite_points(&result.rainfall);
        let runoff_points = finite_points(&result.runoff);
        let rainfall_marker = marker(result.rainfall_peak.as_ref());
        let runoff_marker = marker(result.runoff_peak.as_ref());

        let top = rainfall_points
            .iter()
            .chain(&runoff_points)
            .map(|&(_, v)| v)
            .fold(0.0_f64, f64::max);
        let y_max = if top > 0.0 { top * Y_HEADROOM } else { 1.0 };

        Self {
            x_bounds: [0.0, result.params.duration],
            y_bounds: [0.0, y_max],
            rainfall_points,
            runoff_points,
            rainfall_marker,
            runoff_marker,
            result,
        }
    }

    /// Lag and attenuation, when both peaks exist.
    #[must_use]
    pub fn annotations(&self) -> Option<Annotations> {
        self.result.annotations
    }

    /// Axis labels: start, middle, end.
    #[must_use]
    pub fn axis_labels(bounds: [f64; 2]) -> [String; 3] {
        let mid = (bounds[0] + bounds[1]) / 2.0;
        [
            format!("{:.1}", bounds[0]),
            format!("{mid:.1}"),
            format!("{:.1}", bounds[1]),
        ]
    }

    /// One line per annotation for the side panel.
    #[must_use]
    pub fn annotation_lines(&self) -> Vec<String> {
        let peak_line = |name: &str, peak: Option<&PeakInfo>| match peak {
            Some(p) => format!("{name} peak: {:.2} at {:.2} h", p.value, p.time),
            None => format!("{name} peak: none"),
        };

        let mut lines = vec![
            peak_line("Rainfall", self.result.rainfall_peak.as_ref()),
            peak_line("Runoff", self.result.runoff_peak.as_ref()),
        ];
        match self.annotations() {
            Some(a) => {
                lines.push(format!("Lag: {:.2} h", a.lag));
                lines.push(format!("Attenuation: {:.2}", a.attenuation));
            }
            None => {
                lines.push("Lag: n/a".to_string());
                lines.push("Attenuation: n/a".to_string());
            }
        }
        if !self.result.health.runoff.is_finite() {
            lines.push(format!(
                "Runoff has {} non-finite samples",
                self.result.health.runoff.non_finite
            ));
        }
        lines
    }
}
