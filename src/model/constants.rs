//! Model constants and parameter contract.
//!
//! Centralises the fixed grid size, control ranges and defaults used by
//! the core, the configuration layer and the interactive shell.

// -- Time grid --

/// Number of samples in every simulated time series.
pub const N_SAMPLES: usize = 100;

// -- Parameter contract --

/// Parameter names in control order.
pub const PARAM_NAMES: &[&str] = &[
    "k_nl",
    "n",
    "rain_peak",
    "rain_center",
    "duration",
    "rain_width",
];

/// Number of model parameters.
pub const N_PARAMS: usize = 6;

/// Parameter bounds as (min, max) tuples, in `PARAM_NAMES` order.
pub const PARAM_BOUNDS: &[(f64, f64)] = &[
    (0.1, 10.0), // k_nl
    (0.1, 10.0), // n
    (0.0, 50.0), // rain_peak
    (0.0, 10.0), // rain_center
    (1.0, 24.0), // duration
    (0.5, 5.0),  // rain_width
];

/// Number of slider steps across each parameter range.
pub const SLIDER_STEPS: f64 = 50.0;

// -- Defaults --

/// Response-time constant [h].
pub const DEFAULT_K_NL: f64 = 2.0;

/// Nonlinearity exponent [-].
pub const DEFAULT_N: f64 = 1.5;

/// Peak rainfall intensity [mm/h].
pub const DEFAULT_RAIN_PEAK: f64 = 15.0;

/// Time of peak rainfall [h].
pub const DEFAULT_RAIN_CENTER: f64 = 5.0;

/// Spread of the rainfall pulse [h].
pub const DEFAULT_RAIN_WIDTH: f64 = 2.0;

/// Simulated duration [h].
pub const DEFAULT_DURATION: f64 = 10.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_lengths_agree() {
        assert_eq!(PARAM_NAMES.len(), N_PARAMS);
        assert_eq!(PARAM_BOUNDS.len(), N_PARAMS);
    }

    #[test]
    fn test_bounds_are_ordered() {
        for (name, (lo, hi)) in PARAM_NAMES.iter().zip(PARAM_BOUNDS) {
            assert!(lo < hi, "{name}: {lo} >= {hi}");
        }
    }
}
