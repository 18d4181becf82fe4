//! Generic dense 2D grid.

use tracing::instrument;

/// A fixed-size 2D grid stored row-major in a single `Vec`.
///
/// Coordinates are signed so that callers can probe off the edge of the
/// grid; anything outside `0..width` × `0..height` is rejected, never
/// clamped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

impl<T: Clone> Grid<T> {
    /// Creates a `width` × `height` grid with every cell set to `default`.
    #[instrument(skip(default))]
    pub fn new(width: usize, height: usize, default: T) -> Self {
        Self {
            data: vec![default; width * height],
            width,
            height,
        }
    }

    /// Overwrites every cell with `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Builds a new grid of the requested size from this one.
    ///
    /// Cell `(x, y)` of the result copies cell `(x - origin_x, y - origin_y)`
    /// of `self` when that exists, and is `default` otherwise. `self` is left
    /// untouched.
    #[instrument(skip(self, default), fields(old_width = self.width, old_height = self.height))]
    pub fn resize(
        &self,
        origin_x: i32,
        origin_y: i32,
        new_width: usize,
        new_height: usize,
        default: T,
    ) -> Self {
        Self::from_fn(new_width, new_height, |x, y| {
            self.get(x - origin_x, y - origin_y)
                .cloned()
                .unwrap_or_else(|| default.clone())
        })
    }
}

impl<T> Grid<T> {
    /// Creates a grid by calling `generator(x, y)` for every cell.
    ///
    /// Cells are generated row by row (`y` outer, `x` inner).
    pub fn from_fn(width: usize, height: usize, mut generator: impl FnMut(i32, i32) -> T) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(generator(x as i32, y as i32));
            }
        }
        Self {
            data,
            width,
            height,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` if `(x, y)` names a cell of this grid.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    /// Returns the cell at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<&T> {
        self.index(x, y).map(|i| &self.data[i])
    }

    /// Returns the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds. Only call this with coordinates
    /// already known to be valid.
    #[track_caller]
    pub fn must_get(&self, x: i32, y: i32) -> &T {
        match self.index(x, y) {
            Some(i) => &self.data[i],
            None => panic!(
                "grid access out of bounds: ({x}, {y}) on {}x{} grid",
                self.width, self.height
            ),
        }
    }

    /// Writes `value` at `(x, y)`. Returns whether the write happened.
    pub fn set(&mut self, x: i32, y: i32, value: T) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.data[i] = value;
                true
            }
            None => false,
        }
    }

    /// Iterates over all cell values in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterates over all coordinates in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = (i32, i32)> + use<T> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| (x as i32, y as i32)))
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }
}

impl<T: Clone + Default> Grid<T> {
    /// Returns the cell at `(x, y)`, or `T::default()` when out of bounds.
    pub fn get_or_default(&self, x: i32, y: i32) -> T {
        self.get(x, y).cloned().unwrap_or_default()
    }
}
