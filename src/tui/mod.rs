//! Terminal UI: terminal lifecycle and the fixed-step game loop.
//!
//! This is the only module that knows about ratatui and crossterm. Each
//! pass of the loop
//!
//! 1. feeds elapsed wall time into the update clock,
//! 2. drains every pending terminal event into [`App::apply`],
//! 3. runs the ticks that came due, and
//! 4. draws a frame if at least one tick ran.
//!
//! When nothing is due the loop sleeps in `event::poll` until the next tick
//! or the next input event, whichever comes first.

mod app;
mod clock;
mod glyphs;
mod input;
mod layout;
mod ui;

pub use app::App;
pub use clock::{FixedStep, FrameStats};
pub use input::{Command, decode};
pub use layout::BoardLayout;

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info, instrument, warn};

use crate::config::TictacConfig;
use glyphs::Glyphs;

/// Raw-mode alternate screen with mouse capture, restored on drop.
///
/// Dropping also runs while unwinding from a panic, so the shell gets its
/// terminal back either way.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    /// Switches the terminal into game mode.
    #[instrument]
    pub fn open() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        info!("Terminal session opened");
        Ok(Self { terminal })
    }

    /// The ratatui terminal.
    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
        if let Err(e) = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        ) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
        if let Err(e) = self.terminal.show_cursor() {
            warn!(error = %e, "Failed to show cursor");
        }
        info!("Terminal session closed");
    }
}

/// Runs the game until the player quits.
#[instrument(skip(config))]
pub fn run(config: &TictacConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    let mut session = TerminalSession::open()?;
    let mut app = App::new(config)?;
    let res = run_loop(session.terminal(), &mut app);
    drop(session);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let glyphs = Glyphs::new();
    let mut prev = Instant::now();

    // First frame before any tick, so the board shows immediately.
    draw_frame(terminal, app, &glyphs)?;

    loop {
        let now = Instant::now();
        let elapsed = now.saturating_duration_since(prev);
        prev = now;

        while event::poll(Duration::ZERO)? {
            let event = event::read()?;
            if let Some(command) = decode(&event, app.layout().as_ref()) {
                app.apply(command);
            }
        }
        if app.should_quit() {
            info!("Leaving game loop");
            return Ok(());
        }

        if app.take_clear() {
            terminal.clear()?;
        }

        if app.update(elapsed) > 0 {
            draw_frame(terminal, app, &glyphs)?;
        } else {
            // Nothing due: wait for input or the next tick.
            event::poll(app.clock().until_next_tick())?;
        }
    }
}

fn draw_frame(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    glyphs: &Glyphs,
) -> Result<()> {
    let completed = terminal.draw(|f| ui::draw(f, app, glyphs))?;
    app.rendered(completed.area, Instant::now());
    Ok(())
}
