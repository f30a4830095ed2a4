//! Rainfall-runoff simulation parameters.
//!
//! Six scalars that fully determine one simulation run. The struct is
//! `Copy` and never mutated by the core; the shell builds a fresh value on
//! every committed edit.
//!
//! - `k_nl`: response-time constant [h]
//! - `n`: nonlinearity exponent [-]
//! - `rain_peak`: peak rainfall intensity [mm/h]
//! - `rain_center`: time of peak rainfall [h]
//! - `rain_width`: spread of the rainfall pulse [h]
//! - `duration`: simulated duration [h]

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::constants::{
    DEFAULT_DURATION, DEFAULT_K_NL, DEFAULT_N, DEFAULT_RAIN_CENTER, DEFAULT_RAIN_PEAK,
    DEFAULT_RAIN_WIDTH, N_PARAMS, PARAM_BOUNDS, PARAM_NAMES, SLIDER_STEPS,
};

/// The six scalars of one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SimulationParameters {
    #[validate(range(min = 0.1, max = 10.0))]
    pub k_nl: f64,
    #[validate(range(min = 0.1, max = 10.0))]
    pub n: f64,
    #[validate(range(min = 0.0, max = 50.0))]
    pub rain_peak: f64,
    #[validate(range(min = 0.0, max = 10.0))]
    pub rain_center: f64,
    #[validate(range(min = 0.5, max = 5.0))]
    pub rain_width: f64,
    #[validate(range(min = 1.0, max = 24.0))]
    pub duration: f64,
}

impl SimulationParameters {
    /// Create new parameters.
    #[must_use]
    pub const fn new(
        k_nl: f64,
        n: f64,
        rain_peak: f64,
        rain_center: f64,
        rain_width: f64,
        duration: f64,
    ) -> Self {
        Self {
            k_nl,
            n,
            rain_peak,
            rain_center,
            rain_width,
            duration,
        }
    }

    /// Read one parameter.
    #[must_use]
    pub const fn get(&self, kind: ParamKind) -> f64 {
        match kind {
            ParamKind::KNl => self.k_nl,
            ParamKind::N => self.n,
            ParamKind::RainPeak => self.rain_peak,
            ParamKind::RainCenter => self.rain_center,
            ParamKind::Duration => self.duration,
            ParamKind::RainWidth => self.rain_width,
        }
    }

    /// Return a copy with one parameter replaced.
    #[must_use]
    pub fn with(mut self, kind: ParamKind, value: f64) -> Self {
        match kind {
            ParamKind::KNl => self.k_nl = value,
            ParamKind::N => self.n = value,
            ParamKind::RainPeak => self.rain_peak = value,
            ParamKind::RainCenter => self.rain_center = value,
            ParamKind::Duration => self.duration = value,
            ParamKind::RainWidth => self.rain_width = value,
        }
        self
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self::new(
            DEFAULT_K_NL,
            DEFAULT_N,
            DEFAULT_RAIN_PEAK,
            DEFAULT_RAIN_CENTER,
            DEFAULT_RAIN_WIDTH,
            DEFAULT_DURATION,
        )
    }
}

/// Identifies one of the six parameters, in control order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    KNl,
    N,
    RainPeak,
    RainCenter,
    Duration,
    RainWidth,
}

impl ParamKind {
    /// All parameters in control order.
    pub const ALL: [Self; N_PARAMS] = [
        Self::KNl,
        Self::N,
        Self::RainPeak,
        Self::RainCenter,
        Self::Duration,
        Self::RainWidth,
    ];

    const fn index(self) -> usize {
        match self {
            Self::KNl => 0,
            Self::N => 1,
            Self::RainPeak => 2,
            Self::RainCenter => 3,
            Self::Duration => 4,
            Self::RainWidth => 5,
        }
    }

    /// Machine name, as used in config files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        PARAM_NAMES[self.index()]
    }

    /// Human-readable label with unit.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::KNl => "Response time k_nl [h]",
            Self::N => "Nonlinearity n [-]",
            Self::RainPeak => "Rain peak [mm/h]",
            Self::RainCenter => "Rain center [h]",
            Self::Duration => "Duration [h]",
            Self::RainWidth => "Rain width [h]",
        }
    }

    /// Allowed (min, max) range of the control.
    #[must_use]
    pub const fn bounds(self) -> (f64, f64) {
        PARAM_BOUNDS[self.index()]
    }

    /// Slider increment.
    #[must_use]
    pub fn step(self) -> f64 {
        let (lo, hi) = self.bounds();
        (hi - lo) / SLIDER_STEPS
    }

    /// Clamp a value into the control range.
    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        let (lo, hi) = self.bounds();
        value.clamp(lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let p = SimulationParameters::default();
        assert_eq!(p.k_nl, 2.0);
        assert_eq!(p.n, 1.5);
        assert_eq!(p.rain_peak, 15.0);
        assert_eq!(p.rain_center, 5.0);
        assert_eq!(p.rain_width, 2.0);
        assert_eq!(p.duration, 10.0);
    }

    #[test]
    fn test_get_and_with_agree() {
        let p = SimulationParameters::default();
        for (i, kind) in ParamKind::ALL.iter().enumerate() {
            let q = p.with(*kind, 100.0 + i as f64);
            assert_eq!(q.get(*kind), 100.0 + i as f64);
        }
    }

    #[test]
    fn test_names_follow_control_order() {
        let names: Vec<&str> = ParamKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names, PARAM_NAMES);
    }

    #[test]
    fn test_clamp_and_step() {
        assert_eq!(ParamKind::KNl.clamp(0.0), 0.1);
        assert_eq!(ParamKind::KNl.clamp(42.0), 10.0);
        assert_eq!(ParamKind::RainPeak.clamp(7.0), 7.0);
        assert!((ParamKind::RainPeak.step() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_defaults_pass_validation() {
        assert!(SimulationParameters::default().validate().is_ok());
    }

    #[test]
    fn test_out_of_range_fails_validation() {
        let p = SimulationParameters::default().with(ParamKind::Duration, 48.0);
        assert!(p.validate().is_err());
    }
}
