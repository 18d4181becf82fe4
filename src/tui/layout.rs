//! Screen geometry for the board.

use ratatui::layout::{Position as ScreenPosition, Rect};
use tictac_engine::Position;

use super::glyphs::{GLYPH_HEIGHT, GLYPH_WIDTH};

/// Columns per board cell: the glyph plus one column of padding each side.
pub const CELL_WIDTH: u16 = GLYPH_WIDTH + 2;

/// Rows per board cell.
pub const CELL_HEIGHT: u16 = GLYPH_HEIGHT;

/// Rows below the board: status line and key help.
pub const FOOTER_HEIGHT: u16 = 2;

/// Where the board and its footer land on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Board including its border.
    pub outer: Rect,
    /// Board inside the border.
    pub inner: Rect,
    /// Status text row.
    pub status: Rect,
    /// Key help row.
    pub help: Rect,
    columns: u16,
    rows: u16,
}

impl BoardLayout {
    /// Size of the bordered board for a `columns` × `rows` grid.
    pub fn board_size(columns: u16, rows: u16) -> (u16, u16) {
        let inner_w = columns * CELL_WIDTH + columns.saturating_sub(1);
        let inner_h = rows * CELL_HEIGHT + rows.saturating_sub(1);
        (inner_w + 2, inner_h + 2)
    }

    /// Smallest area the board and footer fit in.
    pub fn required_size(columns: u16, rows: u16) -> (u16, u16) {
        let (w, h) = Self::board_size(columns, rows);
        (w, h + FOOTER_HEIGHT)
    }

    /// Centers the board in `area`. Returns `None` when it does not fit.
    pub fn compute(area: Rect, columns: u16, rows: u16) -> Option<Self> {
        let (req_w, req_h) = Self::required_size(columns, rows);
        if area.width < req_w || area.height < req_h {
            return None;
        }
        let (board_w, board_h) = Self::board_size(columns, rows);

        let x = area.x + (area.width - req_w) / 2;
        let y = area.y + (area.height - req_h) / 2;
        let outer = Rect::new(x, y, board_w, board_h);
        let inner = Rect::new(x + 1, y + 1, board_w - 2, board_h - 2);
        let status = Rect::new(area.x, outer.bottom(), area.width, 1);
        let help = Rect::new(area.x, outer.bottom() + 1, area.width, 1);

        Some(Self {
            outer,
            inner,
            status,
            help,
            columns,
            rows,
        })
    }

    /// Screen rectangle of board cell `(x, y)`.
    pub fn cell_rect(&self, x: u16, y: u16) -> Rect {
        Rect::new(
            self.inner.x + x * (CELL_WIDTH + 1),
            self.inner.y + y * (CELL_HEIGHT + 1),
            CELL_WIDTH,
            CELL_HEIGHT,
        )
    }

    /// Board cell under screen coordinate `(column, row)`, if any.
    ///
    /// Separator lines between cells do not belong to any cell.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        let point = ScreenPosition::new(column, row);
        if !self.inner.contains(point) {
            return None;
        }
        (0..self.rows)
            .flat_map(|y| (0..self.columns).map(move |x| (x, y)))
            .find(|&(x, y)| self.cell_rect(x, y).contains(point))
            .map(|(x, y)| Position::new(i32::from(x), i32::from(y)))
    }
}
