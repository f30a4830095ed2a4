//! Uniform time grid and paired time series.

use serde::{Deserialize, Serialize};

use super::constants::N_SAMPLES;
use crate::error::{RunoffError, RunoffResult};

/// Build a uniform grid of `N_SAMPLES` points over `[0, duration]` inclusive.
///
/// The step is `duration / (N_SAMPLES - 1)` and the last point is exactly
/// `duration`.
#[must_use]
pub fn time_grid(duration: f64) -> Vec<f64> {
    linspace(0.0, duration, N_SAMPLES)
}

/// `n` evenly spaced points over `[start, stop]`, endpoint included.
#[must_use]
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut grid: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            grid[n - 1] = stop;
            grid
        }
    }
}

/// Values sampled on a shared time axis.
///
/// Times and values are stored as parallel vectors of equal length.
/// Non-finite values serialize as the strings `"NaN"`, `"inf"` and
/// `"-inf"` so they survive a JSON round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SeriesRecord")]
pub struct TimeSeries {
    times: Vec<f64>,
    #[serde(serialize_with = "samples::serialize")]
    values: Vec<f64>,
}

/// Wire form of a series, checked by `TimeSeries::new` on the way in.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SeriesRecord {
    times: Vec<f64>,
    #[serde(deserialize_with = "samples::deserialize")]
    values: Vec<f64>,
}

impl TryFrom<SeriesRecord> for TimeSeries {
    type Error = RunoffError;

    fn try_from(record: SeriesRecord) -> RunoffResult<Self> {
        Self::new(record.times, record.values)
    }
}

mod samples {
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    #[serde(untagged)]
    enum Sample {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(values.iter().map(|&v| {
            if v.is_finite() {
                Sample::Number(v)
            } else {
                Sample::Text(v.to_string())
            }
        }))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
        Vec::<Sample>::deserialize(deserializer)?
            .into_iter()
            .map(|sample| match sample {
                Sample::Number(v) => Ok(v),
                Sample::Text(text) => match text.parse::<f64>() {
                    Ok(v) if !v.is_finite() => Ok(v),
                    _ => Err(de::Error::custom(format!(
                        "expected a number, NaN or inf, got '{text}'"
                    ))),
                },
            })
            .collect()
    }
}

impl TimeSeries {
    /// Pair a time axis with values.
    ///
    /// # Errors
    ///
    /// Returns `LengthMismatch` if the lengths differ.
    pub fn new(times: Vec<f64>, values: Vec<f64>) -> RunoffResult<Self> {
        if times.len() != values.len() {
            return Err(RunoffError::LengthMismatch {
                times: times.len(),
                values: values.len(),
            });
        }
        Ok(Self { times, values })
    }

    /// Build a series by evaluating `f` at every time on the axis.
    #[must_use]
    pub fn from_fn(times: Vec<f64>, f: impl Fn(f64) -> f64) -> Self {
        let values = times.iter().map(|&t| f(t)).collect();
        Self { times, values }
    }

    /// Series of zeros on the given axis.
    #[must_use]
    pub fn zeros(times: Vec<f64>) -> Self {
        let values = vec![0.0; times.len()];
        Self { times, values }
    }

    /// Time axis.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Sample values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Mutable access to the values; the time axis stays fixed.
    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Grid spacing, or 0 for series shorter than two samples.
    #[must_use]
    pub fn dt(&self) -> f64 {
        if self.times.len() < 2 {
            0.0
        } else {
            self.times[1] - self.times[0]
        }
    }

    /// Largest value, ignoring NaN. `None` for an empty or all-NaN series.
    #[must_use]
    pub fn max_value(&self) -> Option<f64> {
        self.values
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
    }

    /// Iterate over `(time, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.values.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_spans_duration_inclusive() {
        let grid = time_grid(10.0);
        assert_eq!(grid.len(), N_SAMPLES);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[N_SAMPLES - 1], 10.0);
        assert!((grid[1] - 10.0 / 99.0).abs() < 1e-12);
    }

    #[test]
    fn test_grid_is_uniform() {
        let grid = time_grid(24.0);
        let step = 24.0 / 99.0;
        for w in grid.windows(2) {
            assert!((w[1] - w[0] - step).abs() < 1e-9);
        }
    }

    #[test]
    fn test_linspace_degenerate_sizes() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 5.0, 1), vec![3.0]);
    }

    #[test]
    fn test_new_rejects_mismatched_lengths() {
        let err = TimeSeries::new(vec![0.0, 1.0], vec![1.0]).unwrap_err();
        assert!(matches!(
            err,
            RunoffError::LengthMismatch {
                times: 2,
                values: 1
            }
        ));
        assert!(TimeSeries::new(vec![0.0, 1.0], vec![1.0, 2.0]).is_ok());
    }

    #[test]
    fn test_max_value_skips_nan() {
        let s = TimeSeries::new(vec![0.0, 1.0, 2.0], vec![1.0, f64::NAN, 0.5]).unwrap();
        assert_eq!(s.max_value(), Some(1.0));
        let empty = TimeSeries::zeros(Vec::new());
        assert_eq!(empty.max_value(), None);
    }

    #[test]
    fn test_dt_matches_grid_spacing() {
        let s = TimeSeries::zeros(time_grid(9.9));
        assert!((s.dt() - 0.1).abs() < 1e-12);
        assert_eq!(TimeSeries::zeros(vec![1.0]).dt(), 0.0);
    }

    #[test]
    fn test_non_finite_values_serialize_as_text() {
        let s = TimeSeries::new(
            vec![0.0, 1.0, 2.0, 3.0],
            vec![1.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY],
        )
        .unwrap();
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(
            json["values"],
            serde_json::json!([1.5, "NaN", "inf", "-inf"])
        );
    }

    #[test]
    fn test_json_round_trip_keeps_non_finite() {
        let s = TimeSeries::new(vec![0.0, 1.0, 2.0], vec![0.0, f64::NAN, f64::INFINITY]).unwrap();
        let json = serde_json::to_string(&s).unwrap();
        assert!(!json.contains("null"));
        let back: TimeSeries = serde_json::from_str(&json).unwrap();
        assert_eq!(back.times(), s.times());
        assert_eq!(back.values()[0], 0.0);
        assert!(back.values()[1].is_nan());
        assert_eq!(back.values()[2], f64::INFINITY);
    }

    #[test]
    fn test_deserialize_accepts_integers() {
        let back: TimeSeries = serde_json::from_str(r#"{"times":[0,1],"values":[2,0.5]}"#).unwrap();
        assert_eq!(back.values(), &[2.0, 0.5]);
    }

    #[test]
    fn test_deserialize_rejects_mismatched_lengths() {
        let err = serde_json::from_str::<TimeSeries>(r#"{"times":[0.0,1.0],"values":[1.0]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("length mismatch"));
    }

    #[test]
    fn test_deserialize_rejects_other_text() {
        assert!(serde_json::from_str::<TimeSeries>(r#"{"times":[0.0],"values":["wet"]}"#).is_err());
        assert!(serde_json::from_str::<TimeSeries>(r#"{"times":[0.0],"values":["1.5"]}"#).is_err());
        assert!(serde_json::from_str::<TimeSeries>(r#"{"times":[0.0],"values":[null]}"#).is_err());
    }
}
