//! One complete simulation pass: parameters in, annotated series out.

use serde::{Deserialize, Serialize};

use super::annotations::Annotations;
use super::health::{RunHealth, SeriesHealth};
use super::params::SimulationParameters;
use super::peaks::{find_peak, PeakInfo};
use super::rainfall::generate_rainfall;
use super::runoff::integrate_runoff;
use super::series::TimeSeries;

/// Everything the presentation layer needs for one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Parameters the run was computed from.
    pub params: SimulationParameters,
    /// Rainfall intensity series.
    pub rainfall: TimeSeries,
    /// Runoff series on the same time axis.
    pub runoff: TimeSeries,
    /// Highest rainfall local maximum.
    pub rainfall_peak: Option<PeakInfo>,
    /// Highest runoff local maximum.
    pub runoff_peak: Option<PeakInfo>,
    /// Lag and attenuation, when both peaks exist.
    pub annotations: Option<Annotations>,
    /// Non-finite sample report.
    pub health: RunHealth,
}

/// Run the rainfall generator and runoff integrator and derive the peaks.
#[must_use]
pub fn simulate(params: &SimulationParameters) -> SimulationResult {
    let rainfall = generate_rainfall(
        params.rain_peak,
        params.rain_center,
        params.rain_width,
        params.duration,
    );
    let runoff = integrate_runoff(&rainfall, params.k_nl, params.n);

    let rainfall_peak = find_peak(&rainfall);
    let runoff_peak = find_peak(&runoff);
    let annotations = Annotations::from_peaks(rainfall_peak.as_ref(), runoff_peak.as_ref());

    let health = RunHealth {
        rainfall: SeriesHealth::check(&rainfall),
        runoff: SeriesHealth::check(&runoff),
    };
    if !health.is_finite() {
        tracing::warn!(
            rainfall_non_finite = health.rainfall.non_finite,
            runoff_non_finite = health.runoff.non_finite,
            first_runoff_index = ?health.runoff.first_non_finite,
            "simulation produced non-finite samples"
        );
    }
    tracing::debug!(?params, ?rainfall_peak, ?runoff_peak, "simulation complete");

    SimulationResult {
        params: *params,
        rainfall,
        runoff,
        rainfall_peak,
        runoff_peak,
        annotations,
        health,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_run_is_annotated() {
        let result = simulate(&SimulationParameters::default());
        let rain = result.rainfall_peak.unwrap();
        let flow = result.runoff_peak.unwrap();
        let notes = result.annotations.unwrap();
        assert!((notes.lag - (flow.time - rain.time)).abs() < 1e-12);
        assert!((notes.attenuation - (rain.value - flow.value)).abs() < 1e-12);
        assert!(result.health.is_finite());
    }

    #[test]
    fn test_series_share_time_axis() {
        let result = simulate(&SimulationParameters::default());
        assert_eq!(result.rainfall.times(), result.runoff.times());
    }

    #[test]
    fn test_result_keeps_params() {
        let params = SimulationParameters::new(1.0, 1.0, 20.0, 4.0, 1.5, 12.0);
        assert_eq!(simulate(&params).params, params);
    }

    #[test]
    fn test_identical_params_give_identical_results() {
        let params = SimulationParameters::default();
        assert_eq!(simulate(&params), simulate(&params));
    }
}
