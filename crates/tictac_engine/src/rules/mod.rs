//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board grid. Rules are kept apart from
//! [`GameState`](crate::GameState) so they can be tested on hand-built
//! boards.

pub mod draw;
pub mod win;

pub use draw::board_full;
pub use win::{LINE_DIRECTIONS, all_k_in_a_row, find_k_in_a_row};
