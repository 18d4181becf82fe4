//! Core domain types for tic-tac-toe.

use derive_more::Display;
use derive_new::new;
use strum::EnumIter;

/// Player in the game.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Player {
    /// Player one (goes first).
    X,
    /// Player two.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns `true` if no player has claimed this square.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

impl From<Player> for Square {
    fn from(player: Player) -> Self {
        Square::Occupied(player)
    }
}

/// Classification of the current game.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    /// Game is ongoing.
    #[default]
    #[display("In progress")]
    InProgress,
    /// A player completed a line.
    #[display("Player {_0} wins")]
    Won(Player),
    /// Board filled with no line.
    Tie,
}

impl Outcome {
    /// Returns `true` once the game has ended either way.
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }

    /// Returns the winner, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// A cell coordinate on the board.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default, new)]
#[display("({x}, {y})")]
pub struct Position {
    /// Column, growing to the right.
    pub x: i32,
    /// Row, growing downwards.
    pub y: i32,
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Ordered run of same-marker cells, in probe order.
pub type WinningLine = Vec<Position>;

/// Cursor movement direction.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

impl Direction {
    /// Returns the `(dx, dy)` step for this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}
