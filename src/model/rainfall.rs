//! Synthetic rainfall generator.
//!
//! A single storm pulse with a Gaussian shape, rescaled so the sampled
//! maximum is exactly the requested peak intensity.

use std::f64::consts::PI;

use super::series::{time_grid, TimeSeries};

/// Normal probability density with mean `center` and standard deviation `width`.
#[must_use]
pub fn normal_density(t: f64, center: f64, width: f64) -> f64 {
    let z = (t - center) / width;
    (-0.5 * z * z).exp() / (width * (2.0 * PI).sqrt())
}

/// Generate the rainfall intensity series over `[0, duration]`.
///
/// Each sample is `density / max(density) * peak`, so the largest sample
/// equals `peak` with no drift from the density normalisation constant.
/// When every sampled density underflows to zero the series stays at zero.
#[must_use]
pub fn generate_rainfall(peak: f64, center: f64, width: f64, duration: f64) -> TimeSeries {
    let mut series = TimeSeries::from_fn(time_grid(duration), |t| {
        normal_density(t, center, width)
    });

    let max_density = series.max_value().unwrap_or(0.0);
    if max_density > 0.0 {
        for v in series.values_mut() {
            *v = *v / max_density * peak;
        }
    } else {
        series.values_mut().fill(0.0);
    }

    series
}
