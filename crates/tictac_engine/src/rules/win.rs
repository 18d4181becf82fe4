//! k-in-a-row detection.

use crate::{Grid, Player, Position, Square, WinningLine};
use tracing::{instrument, trace};

/// Probe directions: horizontal, vertical, anti-diagonal, diagonal.
pub const LINE_DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, -1), (1, 1)];

/// Walks from `(x, y)` in steps of `(dx, dy)` looking for `length`
/// consecutive squares owned by `marker`.
///
/// Returns the positions in walk order, or `None` as soon as a step leaves
/// the board or lands on a different square. A `length` of zero never
/// matches.
pub fn find_k_in_a_row(
    board: &Grid<Square>,
    x: i32,
    y: i32,
    dx: i32,
    dy: i32,
    marker: Player,
    length: usize,
) -> Option<WinningLine> {
    if length == 0 {
        return None;
    }

    let target = Square::Occupied(marker);
    let mut line = Vec::with_capacity(length);
    let (mut cx, mut cy) = (x, y);
    while line.len() < length {
        if board.get(cx, cy) != Some(&target) {
            return None;
        }
        line.push(Position::new(cx, cy));
        cx += dx;
        cy += dy;
    }
    Some(line)
}

/// Finds every run of `length` squares owned by `marker`.
///
/// Every cell is tried as a start in each of [`LINE_DIRECTIONS`]. A run
/// longer than `length` is reported once per start that fits inside it;
/// overlapping detections are not merged.
#[instrument(skip(board), fields(width = board.width(), height = board.height()))]
pub fn all_k_in_a_row(board: &Grid<Square>, marker: Player, length: usize) -> Vec<WinningLine> {
    let lines: Vec<WinningLine> = board
        .positions()
        .flat_map(move |(x, y)| {
            LINE_DIRECTIONS
                .iter()
                .filter_map(move |&(dx, dy)| find_k_in_a_row(board, x, y, dx, dy, marker, length))
        })
        .collect();
    trace!(found = lines.len(), "Scanned for lines");
    lines
}
