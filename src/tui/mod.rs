//! Interactive shell for runoff-lab.
//!
//! Six slider controls feed the model; a chart shows rainfall and runoff
//! with their peaks, and a side panel shows lag and attenuation.
//!
//! `controls` and `chart` are terminal-agnostic. `app`, `view` and
//! `terminal` need the `tui` feature.

pub mod chart;
pub mod controls;

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod terminal;
#[cfg(feature = "tui")]
pub mod view;

pub use chart::ChartData;
pub use controls::{Control, ControlPanel};

#[cfg(feature = "tui")]
pub use app::RunoffApp;
#[cfg(feature = "tui")]
pub use terminal::run;
