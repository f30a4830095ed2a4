//! # runoff-lab
//!
//! Interactive explorer for a simplified nonlinear-reservoir
//! rainfall-runoff model.
//!
//! - [`model`]: rainfall generator, runoff integrator, peak finder
//! - [`config`]: YAML configuration with validation
//! - [`tui`]: slider shell and annotated chart
//! - [`cli`]: headless commands
//!
//! ## Example
//!
//! ```rust
//! use runoff_lab::prelude::*;
//!
//! let result = simulate(&SimulationParameters::default());
//! let rain = result.rainfall_peak.expect("storm has a peak");
//! assert!((rain.value - 15.0).abs() < 1e-9);
//! assert!(result.annotations.is_some());
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::suboptimal_flops,  // Formulas are written as in the model equations
    clippy::imprecise_flops,
    clippy::missing_const_for_fn,
    clippy::needless_range_loop,   // Recurrences read clearer with indices
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{RunoffConfig, RunoffConfigBuilder};
    pub use crate::error::{RunoffError, RunoffResult};
    pub use crate::model::{
        simulate, Annotations, ParamKind, PeakInfo, SimulationParameters, SimulationResult,
        TimeSeries,
    };
}

/// Re-export for public API
pub use error::{RunoffError, RunoffResult};
