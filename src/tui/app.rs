//! Application state and logic.

use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use tictac_engine::{GameState, PlaceResult};
use tracing::{debug, info, instrument};

use super::clock::{FixedStep, FrameStats};
use super::input::Command;
use super::layout::BoardLayout;
use crate::config::{ConfigError, TictacConfig};

/// Main application state.
///
/// Owns the game, the update clock and what the renderer needs to know
/// about the screen. The terminal itself is owned by the loop in
/// [`run`](super::run).
#[derive(Debug)]
pub struct App {
    game: GameState,
    clock: FixedStep,
    stats: FrameStats,
    show_stats: bool,
    min_size: (u16, u16),
    blink_ticks: u64,
    viewport: Rect,
    needs_clear: bool,
    quit: bool,
}

impl App {
    /// Creates the application from a validated configuration.
    #[instrument(skip(config))]
    pub fn new(config: &TictacConfig) -> Result<Self, ConfigError> {
        let board = config.board();
        let display_config = config.display();
        let tick_rate_hz = *display_config.tick_rate_hz();
        let game = GameState::with_board(*board.width(), *board.height(), *board.to_win());
        // Half a second per blink phase, at least one tick.
        let blink_ticks = ((tick_rate_hz / 2.0).round() as u64).max(1);
        info!(
            width = board.width(),
            height = board.height(),
            to_win = board.to_win(),
            tick_rate_hz,
            "Creating app"
        );
        Ok(Self {
            game,
            clock: FixedStep::from_rate(tick_rate_hz)?,
            stats: FrameStats::default(),
            show_stats: *display_config.show_stats(),
            min_size: (*display_config.min_width(), *display_config.min_height()),
            blink_ticks,
            viewport: Rect::default(),
            needs_clear: false,
            quit: false,
        })
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Applies one decoded input command.
    #[instrument(skip(self))]
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Move(direction) => self.game.step(direction),
            Command::Place => self.place(),
            Command::Reset => self.game.reset(),
            Command::Click(position) => {
                if self.game.select(position.x, position.y) {
                    self.place();
                }
            }
            Command::Redraw => self.needs_clear = true,
            Command::Quit => {
                info!("Quit requested");
                self.quit = true;
            }
        }
    }

    fn place(&mut self) {
        match self.game.place() {
            PlaceResult::Placed(outcome) => debug!(%outcome, "Marker placed"),
            PlaceResult::Occupied => debug!("Ignored place on occupied square"),
            PlaceResult::NoSquare => debug!("Ignored place on empty board"),
            PlaceResult::Restarted => debug!("Game restarted by place"),
        }
    }

    /// Feeds elapsed wall time to the clock and runs every tick that is due.
    ///
    /// Returns the number of ticks run; the caller redraws when it is
    /// non-zero.
    pub fn update(&mut self, elapsed: Duration) -> u32 {
        let ticks = self.clock.advance(elapsed);
        for _ in 0..ticks {
            self.game.tick();
        }
        ticks
    }

    /// Records a finished frame drawn into `viewport`.
    pub fn rendered(&mut self, viewport: Rect, now: Instant) {
        self.viewport = viewport;
        self.stats.record_render(now);
    }

    /// Where the board sits in the last drawn frame, if it was shown.
    pub fn layout(&self) -> Option<BoardLayout> {
        self.layout_for(self.viewport)
    }

    /// Where the board sits in `area`, or `None` when `area` is too small.
    pub fn layout_for(&self, area: Rect) -> Option<BoardLayout> {
        let (min_w, min_h) = self.min_size;
        if area.width < min_w || area.height < min_h {
            return None;
        }
        let board = self.game.board();
        BoardLayout::compute(area, board.width() as u16, board.height() as u16)
    }

    /// Smallest terminal the game is drawn in.
    pub fn min_size(&self) -> (u16, u16) {
        let board = self.game.board();
        let (req_w, req_h) =
            BoardLayout::required_size(board.width() as u16, board.height() as u16);
        (self.min_size.0.max(req_w), self.min_size.1.max(req_h))
    }

    /// Whether winning squares are drawn highlighted this tick.
    pub fn blink_on(&self) -> bool {
        (self.game.ticks() / self.blink_ticks) % 2 == 0
    }

    /// Whether the stats overlay is enabled.
    pub fn show_stats(&self) -> bool {
        self.show_stats
    }

    /// Frame timing figures.
    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    /// The update clock.
    pub fn clock(&self) -> &FixedStep {
        &self.clock
    }

    /// Takes the pending full-repaint request.
    pub fn take_clear(&mut self) -> bool {
        std::mem::take(&mut self.needs_clear)
    }

    /// Whether the loop should stop.
    pub fn should_quit(&self) -> bool {
        self.quit
    }
}
