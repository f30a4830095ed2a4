//! Non-finite sample detection.
//!
//! The integrator does not guard against NaN or infinity; this check only
//! reports them so the shell and CLI can flag a degraded result. It never
//! alters the series.

use serde::{Deserialize, Serialize};

use super::series::TimeSeries;

/// Non-finite sample report for one series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesHealth {
    /// Number of NaN or infinite samples.
    pub non_finite: usize,
    /// Index of the first non-finite sample.
    pub first_non_finite: Option<usize>,
}

impl SeriesHealth {
    /// Scan a series.
    #[must_use]
    pub fn check(series: &TimeSeries) -> Self {
        let mut health = Self::default();
        for (i, v) in series.values().iter().enumerate() {
            if !v.is_finite() {
                health.non_finite += 1;
                health.first_non_finite.get_or_insert(i);
            }
        }
        health
    }

    /// Whether every sample is finite.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.non_finite == 0
    }
}

/// Health of both series of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunHealth {
    /// Rainfall series report.
    pub rainfall: SeriesHealth,
    /// Runoff series report.
    pub runoff: SeriesHealth,
}

impl RunHealth {
    /// Whether both series are fully finite.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.rainfall.is_finite() && self.runoff.is_finite()
    }
}
