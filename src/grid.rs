use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the cell lies inside the grid.
    #[must_use]
    pub fn is_within_bounds(self, grid: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(grid.width)
            && self.y < i32::from(grid.height)
    }

    /// Returns the neighbouring cell one step in `direction`.
    ///
    /// The result may lie outside the grid; bounds are checked by the caller.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Logical grid dimensions.
///
/// Boards are always square, but width and height stay separate so call
/// sites read unambiguously.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Creates an `n` by `n` grid.
    #[must_use]
    pub fn square(n: u16) -> Self {
        assert!(n > 0, "grid size must be positive");
        Self {
            width: n,
            height: n,
        }
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Iterates over every cell, row by row.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let (width, height) = (i32::from(self.width), i32::from(self.height));
        (0..height).flat_map(move |y| (0..width).map(move |x| Cell { x, y }))
    }
}
