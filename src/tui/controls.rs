//! Slider-and-entry controls for the six model parameters.
//!
//! Each control holds a committed value clamped to its range and an
//! optional text buffer while the user is typing. Only committed values
//! reach the model.

use crate::error::{RunoffError, RunoffResult};
use crate::model::{ParamKind, SimulationParameters};

/// One parameter control.
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    /// Parameter this control edits.
    pub kind: ParamKind,
    /// Committed value, always inside the control range.
    pub value: f64,
    /// Text typed but not yet committed.
    pub buffer: Option<String>,
}

impl Control {
    /// Control positioned at `value` (clamped).
    #[must_use]
    pub fn new(kind: ParamKind, value: f64) -> Self {
        Self {
            kind,
            value: kind.clamp(value),
            buffer: None,
        }
    }

    /// Slider position in `[0, 1]`.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        let (lo, hi) = self.kind.bounds();
        ((self.value - lo) / (hi - lo)).clamp(0.0, 1.0)
    }

    /// Text shown in the entry field.
    #[must_use]
    pub fn display_text(&self) -> String {
        self.buffer
            .clone()
            .unwrap_or_else(|| format!("{:.2}", self.value))
    }
}

/// Characters accepted into a control's text buffer.
#[must_use]
pub const fn is_numeric_char(c: char) -> bool {
    matches!(c, '0'..='9' | '.' | '-' | '+' | 'e' | 'E')
}

/// Parse typed text as a finite number.
///
/// # Errors
///
/// Returns [`RunoffError::InvalidInput`] if the text is not a finite number.
pub fn parse_value(kind: ParamKind, text: &str) -> RunoffResult<f64> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(RunoffError::invalid_input(kind.label(), text)),
    }
}

/// The six controls plus the selection cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPanel {
    controls: Vec<Control>,
    selected: usize,
}

impl ControlPanel {
    /// Panel positioned at `params`, first control selected.
    #[must_use]
    pub fn from_params(params: &SimulationParameters) -> Self {
        let controls = ParamKind::ALL
            .iter()
            .map(|&kind| Control::new(kind, params.get(kind)))
            .collect();
        Self {
            controls,
            selected: 0,
        }
    }

    /// All controls in display order.
    #[must_use]
    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    /// Index of the selected control.
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// The selected control.
    #[must_use]
    pub fn current(&self) -> &Control {
        &self.controls[self.selected]
    }

    fn current_mut(&mut self) -> &mut Control {
        &mut self.controls[self.selected]
    }

    /// Whether the selected control has uncommitted text.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.current().buffer.is_some()
    }

    /// Move the cursor down, wrapping. Discards uncommitted text.
    pub fn select_next(&mut self) {
        self.cancel_edit();
        self.selected = (self.selected + 1) % self.controls.len();
    }

    /// Move the cursor up, wrapping. Discards uncommitted text.
    pub fn select_prev(&mut self) {
        self.cancel_edit();
        self.selected = (self.selected + self.controls.len() - 1) % self.controls.len();
    }

    /// Move the selected slider by `steps` increments, clamped to its range.
    pub fn nudge(&mut self, steps: i32) {
        self.cancel_edit();
        let control = self.current_mut();
        let next = control.value + f64::from(steps) * control.kind.step();
        control.value = control.kind.clamp(next);
    }

    /// Append a character to the selected control's text.
    ///
    /// Returns `false` (and ignores it) if it cannot be part of a number.
    pub fn push_char(&mut self, c: char) -> bool {
        if !is_numeric_char(c) {
            return false;
        }
        self.current_mut().buffer.get_or_insert_with(String::new).push(c);
        true
    }

    /// Delete the last typed character.
    pub fn backspace(&mut self) {
        if let Some(buffer) = self.current_mut().buffer.as_mut() {
            buffer.pop();
        }
    }

    /// Drop uncommitted text, keeping the committed value.
    pub fn cancel_edit(&mut self) {
        self.current_mut().buffer = None;
    }

    /// Commit typed text into the selected control.
    ///
    /// The parsed value is clamped into the control range. Without pending
    /// text this is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`RunoffError::InvalidInput`] if the text does not parse. The
    /// committed value is left unchanged and the text is discarded.
    pub fn commit_edit(&mut self) -> RunoffResult<()> {
        let control = self.current_mut();
        let Some(text) = control.buffer.take() else {
            return Ok(());
        };
        let value = parse_value(control.kind, &text)?;
        control.value = control.kind.clamp(value);
        Ok(())
    }

    /// Parameters from the committed values.
    #[must_use]
    pub fn params(&self) -> SimulationParameters {
        self.controls
            .iter()
            .fold(SimulationParameters::default(), |p, c| p.with(c.kind, c.value))
    }
}
