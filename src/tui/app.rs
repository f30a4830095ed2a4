//! Runoff TUI application state and logic.
//!
//! Terminal I/O lives in [`super::terminal`]; everything here is plain
//! state driven by key codes, so it can be tested without a terminal.

use crossterm::event::KeyCode;

use crate::config::RunoffConfig;
use crate::model::simulate;
use crate::model::SimulationParameters;

use super::chart::ChartData;
use super::controls::ControlPanel;

/// Application state for the interactive shell.
#[derive(Debug)]
pub struct RunoffApp {
    /// Configuration the reset action returns to.
    pub config: RunoffConfig,
    /// Parameter controls.
    pub controls: ControlPanel,
    /// Chart currently on screen.
    pub chart: Option<ChartData>,
    /// Modal error message, dismissed by any key.
    pub error: Option<String>,
    /// Number of completed recompute passes.
    pub render_count: u64,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl RunoffApp {
    /// Create the app from the embedded default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(RunoffConfig::embedded())
    }

    /// Create the app from a configuration and render the first chart.
    #[must_use]
    pub fn from_config(config: RunoffConfig) -> Self {
        let controls = ControlPanel::from_params(&config.parameters);
        let mut app = Self {
            config,
            controls,
            chart: None,
            error: None,
            render_count: 0,
            should_quit: false,
        };
        app.recompute();
        app
    }

    /// Parameters of the chart on screen.
    #[must_use]
    pub fn charted_params(&self) -> Option<SimulationParameters> {
        self.chart.as_ref().map(|c| c.result.params)
    }

    /// Whether the controls hold edits not yet charted.
    #[must_use]
    pub fn has_pending_changes(&self) -> bool {
        self.controls.is_editing() || self.charted_params() != Some(self.controls.params())
    }

    /// Drop the current chart and build a new one from the controls.
    pub fn recompute(&mut self) {
        // Release the previous chart before attaching the next one.
        self.chart = None;
        let params = self.controls.params();
        tracing::debug!(?params, "recomputing chart");
        self.chart = Some(ChartData::new(simulate(&params)));
        self.render_count += 1;
    }

    /// Commit any typed value, then recompute.
    ///
    /// Invalid input raises the modal error and leaves parameters and chart
    /// untouched.
    pub fn update(&mut self) {
        if let Err(err) = self.controls.commit_edit() {
            tracing::info!(%err, "rejected control input");
            self.error = Some(err.to_string());
            return;
        }
        self.recompute();
    }

    /// Restore the configured defaults and recompute.
    pub fn reset(&mut self) {
        let selected = self.controls.selected();
        self.controls = ControlPanel::from_params(&self.config.parameters);
        for _ in 0..selected {
            self.controls.select_next();
        }
        self.recompute();
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        if self.error.is_some() {
            self.error = None;
            return;
        }

        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc => {
                if self.controls.is_editing() {
                    self.controls.cancel_edit();
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Enter | KeyCode::Char('u') => self.update(),
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char(c) => {
                self.controls.push_char(c);
            }
            KeyCode::Backspace => self.controls.backspace(),
            KeyCode::Up | KeyCode::BackTab => self.controls.select_prev(),
            KeyCode::Down | KeyCode::Tab => self.controls.select_next(),
            KeyCode::Left => self.controls.nudge(-1),
            KeyCode::Right => self.controls.nudge(1),
            KeyCode::PageDown => self.controls.nudge(-10),
            KeyCode::PageUp => self.controls.nudge(10),
            _ => {}
        }
    }
}

impl Default for RunoffApp {
    fn default() -> Self {
        Self::new()
    }
}
