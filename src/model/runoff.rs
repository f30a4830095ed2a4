//! Nonlinear reservoir runoff integrator.
//!
//! Forward-Euler stepping of `dQ/dt = (P - Q^n) / k_nl` with a linear
//! pre-check that decides whether the nonlinear update is applied at all.
//!
//! # Update rule
//!
//! ```text
//! Q[0] = 0
//! term      = max(P[t-1] - Q[t-1], 0)
//! tentative = Q[t-1] + dt/k * term
//! Q[t]      = Q[t-1] + dt/k * (P[t-1] - Q[t-1]^n)   if tentative > 0
//!           = 0                                      otherwise
//! ```
//!
//! The series is clamped to non-negative values after the loop, not per
//! step, so a step may overshoot below zero and feed a negative base into
//! the next step. With a fractional `n` that produces NaN, which is left in
//! the output.

use super::series::TimeSeries;

/// `max(a, b)` that keeps `a` when the comparison is undecidable.
///
/// Unlike [`f64::max`], a NaN in `a` is returned unchanged.
fn keep_first_max(a: f64, b: f64) -> f64 {
    if b > a {
        b
    } else {
        a
    }
}

/// One reservoir step from `q_prev` under inflow `rain_prev`.
#[must_use]
pub fn reservoir_step(q_prev: f64, rain_prev: f64, dt_over_k: f64, n: f64) -> f64 {
    let term = keep_first_max(rain_prev - q_prev, 0.0);
    let tentative = q_prev + dt_over_k * term;
    if tentative > 0.0 {
        q_prev + dt_over_k * (rain_prev - q_prev.powf(n))
    } else {
        0.0
    }
}

/// Integrate runoff over the rainfall's time axis.
///
/// Returns a series of the same length sharing the rainfall's times.
#[must_use]
pub fn integrate_runoff(rainfall: &TimeSeries, k_nl: f64, n: f64) -> TimeSeries {
    let rain = rainfall.values();
    let dt_over_k = rainfall.dt() / k_nl;

    let mut runoff = TimeSeries::zeros(rainfall.times().to_vec());
    let q = runoff.values_mut();
    for t in 1..q.len() {
        q[t] = reservoir_step(q[t - 1], rain[t - 1], dt_over_k, n);
    }

    // NaN fails the comparison and is kept.
    for v in q.iter_mut() {
        if *v < 0.0 {
            *v = 0.0;
        }
    }

    runoff
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::rainfall::generate_rainfall;
    use crate::model::series::time_grid;

    #[test]
    fn test_starts_at_zero() {
        let rain = generate_rainfall(15.0, 5.0, 2.0, 10.0);
        let q = integrate_runoff(&rain, 2.0, 1.5);
        assert_eq!(q.values()[0], 0.0);
        assert_eq!(q.len(), rain.len());
        assert_eq!(q.times(), rain.times());
    }

    #[test]
    fn test_zero_rain_gives_zero_runoff() {
        let rain = TimeSeries::zeros(time_grid(10.0));
        let q = integrate_runoff(&rain, 2.0, 1.5);
        assert!(q.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_step_with_no_inflow_and_empty_store_stays_empty() {
        assert_eq!(reservoir_step(0.0, 0.0, 0.5, 1.5), 0.0);
    }

    #[test]
    fn test_step_applies_nonlinear_update_after_positive_check() {
        // tentative = 1 + 0.5 * (5 - 1) = 3 > 0, so Q = 1 + 0.5 * (5 - 1^2)
        assert!((reservoir_step(1.0, 5.0, 0.5, 2.0) - 3.0).abs() < 1e-12);
        // Q^n uses the fractional store: 4^1.5 = 8, Q = 4 + 0.5 * (10 - 8)
        assert!((reservoir_step(4.0, 10.0, 0.5, 1.5) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_step_draining_store_uses_nonlinear_outflow() {
        // term = max(0 - 2, 0) = 0, tentative = 2 > 0, so Q = 2 + 0.25 * (0 - 4)
        assert!((reservoir_step(2.0, 0.0, 0.25, 2.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_step_overshoot_can_go_negative() {
        // 0.5 + 1.0 * (0 - 0.5^0.5) < 0; clamping happens only after the loop.
        let q = reservoir_step(0.5, 0.0, 1.0, 0.5);
        assert!((q + 0.207_106_781_186_547_6).abs() < 1e-12);
    }

    #[test]
    fn test_step_zeroes_when_linear_check_fails() {
        // term = 1, tentative = -1 + 1 = 0: the nonlinear update (-2) is skipped.
        assert_eq!(reservoir_step(-1.0, 0.0, 1.0, 2.0), 0.0);
    }

    #[test]
    fn test_negative_base_with_fractional_exponent_is_nan() {
        assert!(reservoir_step(-0.5, 10.0, 0.1, 1.5).is_nan());
    }

    #[test]
    fn test_nan_store_resets_to_zero() {
        assert_eq!(reservoir_step(f64::NAN, 10.0, 0.1, 1.5), 0.0);
    }

    #[test]
    fn test_linear_reservoir_lags_rainfall() {
        let rain = generate_rainfall(10.0, 3.0, 1.0, 12.0);
        let q = integrate_runoff(&rain, 2.0, 1.0);
        let (rain_idx, _) = argmax(rain.values());
        let (q_idx, q_max) = argmax(q.values());
        assert!(q_idx > rain_idx);
        assert!(q_max < 10.0);
    }

    #[test]
    fn test_unstable_fast_response_propagates_nan() {
        let rain = generate_rainfall(15.0, 5.0, 2.0, 10.0);
        let q = integrate_runoff(&rain, 0.1, 1.5);
        assert!(q.values().iter().any(|v| v.is_nan()));
        assert!(q.values().iter().all(|&v| !(v < 0.0)));
    }

    fn argmax(v: &[f64]) -> (usize, f64) {
        v.iter()
            .copied()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |(bi, bv), (i, x)| {
                if x > bv {
                    (i, x)
                } else {
                    (bi, bv)
                }
            })
    }
}
