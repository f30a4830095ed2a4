//! Terminal session and event loop.

use std::io::{self, Stdout};

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::RunoffResult;

use super::app::RunoffApp;
use super::view::draw;

/// Raw-mode alternate-screen terminal, restored on drop.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    /// Enter raw mode and the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns error if the terminal cannot be configured.
    pub fn start() -> RunoffResult<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(t) => t,
            Err(e) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                return Err(e.into());
            }
        };
        Ok(Self { terminal })
    }

    /// Draw one frame of the app.
    ///
    /// # Errors
    ///
    /// Returns error if writing to the terminal fails.
    pub fn draw(&mut self, app: &RunoffApp) -> RunoffResult<()> {
        self.terminal.draw(|f| draw(f, app))?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Run the interactive shell until the user quits.
///
/// Each key press is handled to completion, including any recompute,
/// before the screen is redrawn and the next event is read.
///
/// # Errors
///
/// Returns error if terminal I/O fails.
pub fn run(mut app: RunoffApp) -> RunoffResult<()> {
    let mut session = TerminalSession::start()?;
    tracing::info!("interactive shell started");

    loop {
        session.draw(&app)?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code);
            }
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!(renders = app.render_count, "interactive shell closed");
    Ok(())
}
