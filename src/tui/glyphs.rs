//! Multi-cell marker art.

use tictac_engine::{Grid, Player, Square};

/// Columns taken by one glyph.
pub const GLYPH_WIDTH: u16 = 5;

/// Rows taken by one glyph.
pub const GLYPH_HEIGHT: u16 = 3;

/// Pre-built glyphs for every square kind.
#[derive(Debug, Clone)]
pub struct Glyphs {
    x: Grid<char>,
    o: Grid<char>,
    empty: Grid<char>,
}

impl Glyphs {
    /// Builds the glyph set.
    pub fn new() -> Self {
        let (w, h) = (GLYPH_WIDTH as i32, GLYPH_HEIGHT as i32);
        let (right, bottom) = (w - 1, h - 1);

        let x = Grid::from_fn(GLYPH_WIDTH as usize, GLYPH_HEIGHT as usize, |x, y| {
            match (x, y) {
                (0, 0) => '╲',
                (x, 0) if x == right => '╱',
                (0, y) if y == bottom => '╱',
                (x, y) if x == right && y == bottom => '╲',
                (x, y) if x == w / 2 && y == h / 2 => '╳',
                _ => ' ',
            }
        });

        let o = Grid::from_fn(GLYPH_WIDTH as usize, GLYPH_HEIGHT as usize, |x, y| {
            let top_or_bottom = y == 0 || y == bottom;
            let side = x == 0 || x == right;
            match (x, y) {
                (0, 0) => '╭',
                (x, 0) if x == right => '╮',
                (0, y) if y == bottom => '╰',
                (x, y) if x == right && y == bottom => '╯',
                _ if top_or_bottom => '─',
                _ if side => '│',
                _ => ' ',
            }
        });

        let empty = Grid::from_fn(GLYPH_WIDTH as usize, GLYPH_HEIGHT as usize, |x, y| {
            if x == w / 2 && y == h / 2 { '·' } else { ' ' }
        });

        Self { x, o, empty }
    }

    /// Returns the glyph for `square`.
    pub fn for_square(&self, square: Square) -> &Grid<char> {
        match square {
            Square::Empty => &self.empty,
            Square::Occupied(Player::X) => &self.x,
            Square::Occupied(Player::O) => &self.o,
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(glyph: &Grid<char>) -> Vec<String> {
        (0..glyph.height() as i32)
            .map(|y| (0..glyph.width() as i32).map(|x| *glyph.must_get(x, y)).collect())
            .collect()
    }

    #[test]
    fn test_x_glyph() {
        let glyphs = Glyphs::new();
        assert_eq!(
            rows(glyphs.for_square(Square::Occupied(Player::X))),
            vec!["╲   ╱", "  ╳  ", "╱   ╲"]
        );
    }

    #[test]
    fn test_o_glyph() {
        let glyphs = Glyphs::new();
        assert_eq!(
            rows(glyphs.for_square(Square::Occupied(Player::O))),
            vec!["╭───╮", "│   │", "╰───╯"]
        );
    }

    #[test]
    fn test_empty_glyph_is_a_dot() {
        let glyphs = Glyphs::new();
        assert_eq!(rows(glyphs.for_square(Square::Empty)), vec!["     ", "  ·  ", "     "]);
    }
}
