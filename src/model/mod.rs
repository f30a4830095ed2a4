//! Rainfall-runoff model core.
//!
//! Pure functions only: a Gaussian rainfall generator, a nonlinear
//! reservoir integrator and a peak finder, tied together by [`simulate`].
//!
//! # Governing Equation
//!
//! ```text
//! dQ/dt = (P(t) - Q^n) / k_nl
//! P(t)  = peak * φ((t - center) / width) / max φ
//! ```

pub mod annotations;
pub mod constants;
pub mod health;
pub mod params;
pub mod peaks;
pub mod rainfall;
pub mod runoff;
pub mod series;
pub mod simulation;

pub use annotations::Annotations;
pub use health::{RunHealth, SeriesHealth};
pub use params::{ParamKind, SimulationParameters};
pub use peaks::{find_peak, local_maxima, PeakInfo};
pub use rainfall::generate_rainfall;
pub use runoff::integrate_runoff;
pub use series::{time_grid, TimeSeries};
pub use simulation::{simulate, SimulationResult};
