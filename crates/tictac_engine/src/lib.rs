//! Pure tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Grid**: generic row-major 2D container with bounds-checked access
//! - **Rules**: k-in-a-row and full-board detection over a grid of squares
//! - **GameState**: cursor, turn order and outcome state machine
//!
//! Nothing here touches the terminal; the `tictac` binary drives a
//! [`GameState`] from its input and render loop.
//!
//! # Example
//!
//! ```
//! use tictac_engine::{GameState, Outcome, Player};
//!
//! let mut game = GameState::new();
//! for (x, y) in [(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)] {
//!     game.select(x, y);
//!     game.place();
//! }
//! assert_eq!(*game.outcome(), Outcome::Won(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod grid;
pub mod rules;
mod types;

pub use game::{DEFAULT_SIZE, DEFAULT_TO_WIN, GameState, PlaceResult};
pub use grid::Grid;
pub use types::{Direction, Outcome, Player, Position, Square, WinningLine};
