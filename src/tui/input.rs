//! Keyboard and mouse decoding.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};
use tictac_engine::{Direction, Position};
use tracing::trace;

use super::layout::BoardLayout;

/// Everything the player can ask the game loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the focus cursor one square.
    Move(Direction),
    /// Place a marker on the focused square.
    Place,
    /// Start a new game.
    Reset,
    /// Focus a square and place on it (mouse click).
    Click(Position),
    /// Repaint the whole screen.
    Redraw,
    /// Leave the game.
    Quit,
}

/// Translates a terminal event into a [`Command`].
///
/// `layout` is where the board was last drawn; mouse clicks outside it, or
/// any click while the board is hidden, are ignored.
pub fn decode(event: &Event, layout: Option<&BoardLayout>) -> Option<Command> {
    let command = match event {
        Event::Key(key) => decode_key(key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => layout
                .and_then(|l| l.cell_at(mouse.column, mouse.row))
                .map(Command::Click),
            _ => None,
        },
        Event::Resize(_, _) => Some(Command::Redraw),
        _ => None,
    };
    if let Some(command) = command {
        trace!(?command, "Decoded input");
    }
    command
}

fn decode_key(key: &KeyEvent) -> Option<Command> {
    // Crossterm reports both press and release on some terminals.
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            KeyCode::Char('l') => Some(Command::Redraw),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(Command::Move(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => {
            Some(Command::Move(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => {
            Some(Command::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => {
            Some(Command::Move(Direction::Right))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Place),
        KeyCode::Char('r') => Some(Command::Reset),
        KeyCode::Esc | KeyCode::Char('q') => Some(Command::Quit),
        _ => None,
    }
}
