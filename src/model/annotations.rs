//! Peak-derived chart annotations.

use serde::{Deserialize, Serialize};

use super::peaks::PeakInfo;

/// Lag and attenuation between the rainfall and runoff peaks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Annotations {
    /// Runoff peak time minus rainfall peak time [h].
    pub lag: f64,
    /// Rainfall peak value minus runoff peak value.
    pub attenuation: f64,
}

impl Annotations {
    /// Derive annotations when both peaks exist.
    #[must_use]
    pub fn from_peaks(rainfall: Option<&PeakInfo>, runoff: Option<&PeakInfo>) -> Option<Self> {
        let (rain, flow) = (rainfall?, runoff?);
        Some(Self {
            lag: flow.time - rain.time,
            attenuation: rain.value - flow.value,
        })
    }
}
