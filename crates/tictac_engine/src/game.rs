//! Turn and outcome state machine.

use derive_getters::Getters;
use tracing::{debug, info, instrument};

use crate::rules::{all_k_in_a_row, board_full};
use crate::{Direction, Grid, Outcome, Player, Position, Square, WinningLine};

/// Default board side length.
pub const DEFAULT_SIZE: usize = 3;

/// Default number of markers in a row needed to win.
pub const DEFAULT_TO_WIN: usize = 3;

/// What a call to [`GameState::place`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceResult {
    /// A marker was written; carries the resulting outcome.
    Placed(Outcome),
    /// The focused square was taken; nothing changed.
    Occupied,
    /// The game had already ended, so it was reset instead.
    Restarted,
    /// The board has no squares, so there is nothing to focus.
    NoSquare,
}

/// Complete game state.
///
/// This is the only mutable aggregate of the game. Everything the renderer
/// needs is exposed through the getters.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameState {
    /// The board.
    board: Grid<Square>,
    /// The highlighted square; on the board whenever the board has squares.
    focus: Position,
    /// Player to move next.
    current_player: Player,
    /// Markers in a row needed to win.
    to_win: usize,
    /// Current classification of the game.
    outcome: Outcome,
    /// Lines completed by the winning move; empty unless the game was won.
    winning_lines: Vec<WinningLine>,
    /// Fixed update steps taken since startup.
    ticks: u64,
}

impl GameState {
    /// Creates a standard 3×3, three-in-a-row game.
    #[instrument]
    pub fn new() -> Self {
        Self::with_board(DEFAULT_SIZE, DEFAULT_SIZE, DEFAULT_TO_WIN)
    }

    /// Creates a game on a `width` × `height` board needing `to_win` in a row.
    ///
    /// The focus cursor starts at the origin. A board with a zero dimension
    /// has no squares and every [`place`](Self::place) is refused.
    #[instrument]
    pub fn with_board(width: usize, height: usize, to_win: usize) -> Self {
        debug!("Creating game state");
        Self {
            board: Grid::new(width, height, Square::Empty),
            focus: Position::default(),
            current_player: Player::X,
            to_win,
            outcome: Outcome::InProgress,
            winning_lines: Vec::new(),
            ticks: 0,
        }
    }

    /// Moves the focus cursor by `(dx, dy)`, clamped to the board edges.
    #[instrument(skip(self))]
    pub fn move_cursor(&mut self, dx: i32, dy: i32) {
        let max_x = (self.board.width() as i32 - 1).max(0);
        let max_y = (self.board.height() as i32 - 1).max(0);
        self.focus = Position::new(
            self.focus.x.saturating_add(dx).clamp(0, max_x),
            self.focus.y.saturating_add(dy).clamp(0, max_y),
        );
    }

    /// Moves the focus cursor one square in `direction`.
    pub fn step(&mut self, direction: Direction) {
        let (dx, dy) = direction.delta();
        self.move_cursor(dx, dy);
    }

    /// Puts the focus cursor on `(x, y)`. Returns `false` if off the board.
    #[instrument(skip(self))]
    pub fn select(&mut self, x: i32, y: i32) -> bool {
        if !self.board.in_bounds(x, y) {
            return false;
        }
        self.focus = Position::new(x, y);
        true
    }

    /// Places the current player's marker on the focused square.
    ///
    /// Once the game is over this resets it instead. Placing on a taken
    /// square does nothing.
    #[instrument(skip(self), fields(focus = %self.focus, player = %self.current_player))]
    pub fn place(&mut self) -> PlaceResult {
        if self.outcome.is_over() {
            debug!(outcome = %self.outcome, "Place after game end, restarting");
            self.reset();
            return PlaceResult::Restarted;
        }

        let Position { x, y } = self.focus;
        match self.board.get(x, y) {
            None => {
                debug!("Focus is not on a square");
                return PlaceResult::NoSquare;
            }
            Some(square) if !square.is_empty() => {
                debug!("Square already occupied");
                return PlaceResult::Occupied;
            }
            Some(_) => {}
        }

        let mover = self.current_player;
        self.board.set(x, y, Square::Occupied(mover));
        self.current_player = mover.opponent();

        let lines = all_k_in_a_row(&self.board, mover, self.to_win);
        if !lines.is_empty() {
            info!(winner = %mover, lines = lines.len(), "Game won");
            self.outcome = Outcome::Won(mover);
            self.winning_lines = lines;
        } else if self.board_full() {
            info!("Game tied");
            self.outcome = Outcome::Tie;
        }

        PlaceResult::Placed(self.outcome)
    }

    /// Restores the initial configuration, keeping board size and `to_win`.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        self.board.fill(Square::Empty);
        self.winning_lines.clear();
        self.outcome = Outcome::InProgress;
        self.current_player = Player::X;
        self.focus = Position::default();
    }

    /// Advances one fixed update step.
    pub fn tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
    }

    /// Returns every run of `length` squares owned by `marker`.
    pub fn all_k_in_a_row(&self, marker: Player, length: usize) -> Vec<WinningLine> {
        all_k_in_a_row(&self.board, marker, length)
    }

    /// Returns `true` when no square is empty.
    pub fn board_full(&self) -> bool {
        board_full(&self.board)
    }

    /// Returns `true` if `position` lies on one of the winning lines.
    pub fn is_winning_square(&self, position: Position) -> bool {
        self.winning_lines
            .iter()
            .any(|line| line.contains(&position))
    }

    /// One-line status text for the renderer.
    pub fn status_text(&self) -> String {
        match self.outcome {
            Outcome::InProgress => format!("Player {} to move", self.current_player),
            outcome => outcome.to_string(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupied(state: &GameState) -> usize {
        state.board().iter().filter(|s| !s.is_empty()).count()
    }

    fn play(state: &mut GameState, moves: &[(i32, i32)]) {
        for &(x, y) in moves {
            assert!(state.select(x, y));
            state.place();
        }
    }

    #[test]
    fn test_new_game() {
        let state = GameState::new();
        assert_eq!(state.board().width(), 3);
        assert_eq!(state.board().height(), 3);
        assert_eq!(*state.current_player(), Player::X);
        assert_eq!(*state.outcome(), Outcome::InProgress);
        assert_eq!(*state.focus(), Position::new(0, 0));
        assert!(state.winning_lines().is_empty());
        assert_eq!(state.status_text(), "Player X to move");
    }

    #[test]
    fn test_cursor_clamps_at_edges() {
        let mut state = GameState::new();
        state.move_cursor(-1, -1);
        assert_eq!(*state.focus(), Position::new(0, 0));
        state.move_cursor(5, 1);
        assert_eq!(*state.focus(), Position::new(2, 1));
        state.move_cursor(0, 10);
        assert_eq!(*state.focus(), Position::new(2, 2));
        state.move_cursor(i32::MAX, i32::MIN);
        assert_eq!(*state.focus(), Position::new(2, 0));
    }

    #[test]
    fn test_cursor_stays_in_bounds_for_all_steps() {
        let mut state = GameState::with_board(4, 2, 3);
        let steps = [(1, 0), (1, 0), (1, 0), (1, 0), (0, 1), (0, 1), (-3, -1), (-1, 0)];
        for (dx, dy) in steps {
            state.move_cursor(dx, dy);
            let Position { x, y } = *state.focus();
            assert!(state.board().in_bounds(x, y));
        }
    }

    #[test]
    fn test_cursor_does_not_touch_board() {
        let mut state = GameState::new();
        state.place();
        let before = state.clone();
        state.step(Direction::Right);
        state.step(Direction::Down);
        assert_eq!(state.board(), before.board());
        assert_eq!(state.outcome(), before.outcome());
        assert_eq!(state.current_player(), before.current_player());
    }

    #[test]
    fn test_place_writes_and_flips_player() {
        let mut state = GameState::new();
        state.select(1, 1);
        assert_eq!(state.place(), PlaceResult::Placed(Outcome::InProgress));
        assert_eq!(*state.board().must_get(1, 1), Square::Occupied(Player::X));
        assert_eq!(*state.current_player(), Player::O);
        assert_eq!(occupied(&state), 1);
        assert_eq!(state.status_text(), "Player O to move");
    }

    #[test]
    fn test_place_on_occupied_is_noop() {
        let mut state = GameState::new();
        state.place();
        let before = state.clone();
        assert_eq!(state.place(), PlaceResult::Occupied);
        assert_eq!(state, before);
    }

    #[test]
    fn test_place_on_empty_board_is_refused() {
        let mut state = GameState::with_board(0, 0, 3);
        state.move_cursor(1, 1);
        let before = state.clone();
        assert_eq!(state.place(), PlaceResult::NoSquare);
        assert_eq!(state, before);

        let mut flat = GameState::with_board(3, 0, 3);
        assert_eq!(flat.place(), PlaceResult::NoSquare);
        assert_eq!(*flat.current_player(), Player::X);
    }

    #[test]
    fn test_diagonal_win() {
        let mut state = GameState::new();
        play(&mut state, &[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);
        assert_eq!(*state.outcome(), Outcome::Won(Player::X));
        assert!(state.winning_lines().contains(&vec![
            Position::new(0, 0),
            Position::new(1, 1),
            Position::new(2, 2)
        ]));
        assert!(state.is_winning_square(Position::new(1, 1)));
        assert!(!state.is_winning_square(Position::new(0, 1)));
        assert_eq!(state.status_text(), "Player X wins");
    }

    #[test]
    fn test_player_two_can_win() {
        let mut state = GameState::new();
        play(&mut state, &[(0, 0), (2, 0), (1, 0), (2, 1), (0, 2), (2, 2)]);
        assert_eq!(*state.outcome(), Outcome::Won(Player::O));
        assert_eq!(state.status_text(), "Player O wins");
    }

    #[test]
    fn test_tie() {
        // X O X
        // X O O
        // O X X
        let mut state = GameState::new();
        play(
            &mut state,
            &[(0, 0), (1, 0), (2, 0), (1, 1), (0, 1), (2, 1), (1, 2), (0, 2), (2, 2)],
        );
        assert_eq!(*state.outcome(), Outcome::Tie);
        assert!(state.winning_lines().is_empty());
        assert!(state.board_full());
        assert_eq!(state.status_text(), "Tie");
    }

    #[test]
    fn test_reset_after_win() {
        let mut state = GameState::new();
        play(&mut state, &[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);
        state.reset();
        assert_eq!(occupied(&state), 0);
        assert_eq!(*state.outcome(), Outcome::InProgress);
        assert_eq!(*state.current_player(), Player::X);
        assert_eq!(*state.focus(), Position::new(0, 0));
        assert!(state.winning_lines().is_empty());
    }

    #[test]
    fn test_place_after_end_restarts() {
        let mut state = GameState::new();
        play(&mut state, &[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);
        // Focus an empty square; it must not be filled.
        state.select(2, 0);
        assert_eq!(state.place(), PlaceResult::Restarted);
        assert_eq!(*state.board().must_get(2, 0), Square::Empty);
        assert_eq!(occupied(&state), 0);
        assert_eq!(*state.outcome(), Outcome::InProgress);
        assert_eq!(*state.focus(), Position::new(0, 0));
    }

    #[test]
    fn test_reset_keeps_board_size() {
        let mut state = GameState::with_board(5, 4, 4);
        state.place();
        state.reset();
        assert_eq!(state.board().width(), 5);
        assert_eq!(state.board().height(), 4);
        assert_eq!(*state.to_win(), 4);
    }

    #[test]
    fn test_select_rejects_off_board() {
        let mut state = GameState::new();
        assert!(!state.select(3, 0));
        assert!(!state.select(-1, 2));
        assert_eq!(*state.focus(), Position::new(0, 0));
    }

    #[test]
    fn test_tick_only_counts() {
        let mut state = GameState::new();
        let before = state.clone();
        state.tick();
        state.tick();
        assert_eq!(*state.ticks(), 2);
        assert_eq!(state.board(), before.board());
        assert_eq!(state.outcome(), before.outcome());
    }

    #[test]
    fn test_larger_board_four_in_a_row() {
        let mut state = GameState::with_board(5, 5, 4);
        play(
            &mut state,
            &[(0, 4), (0, 0), (1, 4), (1, 0), (2, 4), (2, 0), (3, 4)],
        );
        assert_eq!(*state.outcome(), Outcome::Won(Player::X));
        assert_eq!(state.winning_lines().len(), 1);
    }
}
