/// Logical grid dimensions passed through the engine as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq, serde::Serialize)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_MAP_WIDTH,
            height: DEFAULT_MAP_HEIGHT,
        }
    }
}

/// Default map width in cells.
pub const DEFAULT_MAP_WIDTH: u16 = 10;

/// Default map height in cells.
pub const DEFAULT_MAP_HEIGHT: u16 = 10;

/// Number of body segments a fresh snake starts with.
pub const INITIAL_SNAKE_LENGTH: i32 = 3;

/// Food markers the demo driver places before moving.
pub const DEFAULT_FOOD_COUNT: usize = 3;
