//! Local-maximum detection on sampled series.
//!
//! A local maximum is a sample (or a run of equal samples) strictly greater
//! than the samples on either side. Endpoints are never candidates because
//! they lack a neighbour. A flat run reports its middle index, rounded
//! down. Comparisons involving NaN are false, so neither a NaN sample nor
//! a sample next to one is ever reported.

use serde::{Deserialize, Serialize};

use super::series::TimeSeries;

/// Location and height of a peak.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeakInfo {
    /// Sample index on the shared time axis.
    pub index: usize,
    /// Time of the peak [h].
    pub time: f64,
    /// Value at the peak.
    pub value: f64,
}

/// Indices of all local maxima, in time order.
#[must_use]
pub fn local_maxima(values: &[f64]) -> Vec<usize> {
    let mut peaks = Vec::new();
    let len = values.len();
    if len < 3 {
        return peaks;
    }

    let mut i = 1;
    while i < len - 1 {
        if values[i - 1] < values[i] {
            // Walk to the end of a flat run.
            let mut ahead = i + 1;
            while ahead < len - 1 && values[ahead] == values[i] {
                ahead += 1;
            }
            if values[ahead] < values[i] {
                peaks.push((i + ahead - 1) / 2);
                i = ahead;
                continue;
            }
        }
        i += 1;
    }

    peaks
}

/// The highest local maximum of `series`, first in time order on ties.
///
/// Returns `None` for monotonic, flat or too-short series.
#[must_use]
pub fn find_peak(series: &TimeSeries) -> Option<PeakInfo> {
    let values = series.values();
    let index = local_maxima(values)
        .into_iter()
        .fold(None, |best: Option<usize>, i| match best {
            Some(b) if values[i] <= values[b] => Some(b),
            _ => Some(i),
        })?;

    Some(PeakInfo {
        index,
        time: series.times()[index],
        value: values[index],
    })
}
