use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use tracing::{debug, trace};

use crate::config::GridSize;
use crate::error::SnakeError;
use crate::position::Position;

/// Occupancy classification of a single grid cell.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize)]
pub enum Field {
    #[default]
    Free,
    Food,
    Tail,
}

/// Bounded playfield holding the field state of every cell.
///
/// Cells are stored row-major; every cell starts out [`Field::Free`].
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Map {
    size: GridSize,
    cells: Vec<Field>,
}

impl Map {
    /// Creates an all-free map with fixed dimensions.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![Field::Free; size.total_cells()],
        }
    }

    /// Returns the map dimensions.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    #[must_use]
    pub fn width(&self) -> u16 {
        self.size.width
    }

    #[must_use]
    pub fn height(&self) -> u16 {
        self.size.height
    }

    /// Returns the field at `position`. Cells outside the grid read as free.
    #[must_use]
    pub fn field_at(&self, position: Position) -> Field {
        self.index_of(position)
            .map_or(Field::Free, |index| self.cells[index])
    }

    /// Overwrites the field at `position`.
    ///
    /// Writes outside the grid are dropped; there is no cell to hold them.
    pub fn set_position(&mut self, position: Position, field: Field) {
        match self.index_of(position) {
            Some(index) => self.cells[index] = field,
            None => trace!(%position, ?field, "ignoring write outside the map"),
        }
    }

    /// Returns how many cells hold neither food nor a snake segment.
    #[must_use]
    pub fn count_free_fields(&self) -> usize {
        let occupied = self
            .cells
            .iter()
            .filter(|field| **field != Field::Free)
            .count();
        self.size.total_cells() - occupied
    }

    /// Returns true when `position` lies inside the grid.
    #[must_use]
    pub fn check_position_boundary(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < i32::from(self.size.width)
            && position.y < i32::from(self.size.height)
    }

    /// Returns true when a snake head may enter `position`.
    ///
    /// Despite the name, `true` means passable: the cell is inside the grid
    /// and holds no snake segment. Free and food cells are passable.
    #[must_use]
    pub fn check_position_blocked(&self, position: Position) -> bool {
        self.check_position_boundary(position) && self.field_at(position) != Field::Tail
    }

    /// Returns true when `position` holds food.
    #[must_use]
    pub fn check_position_for_food(&self, position: Position) -> bool {
        self.field_at(position) == Field::Food
    }

    /// Places food on distinct free cells chosen uniformly at random.
    ///
    /// `count` is reduced modulo the number of free cells, so at least one
    /// free cell always remains. Returns how many food markers were placed.
    pub fn spawn_food<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        count: usize,
    ) -> Result<usize, SnakeError> {
        let free = self.count_free_fields();
        if free == 0 {
            return Err(SnakeError::NoFreeFields);
        }

        let count = count % free;
        let candidates: Vec<Position> = self
            .positions()
            .filter(|position| self.field_at(*position) == Field::Free)
            .collect();

        for position in candidates.choose_multiple(rng, count) {
            self.set_position(*position, Field::Food);
        }

        debug!(count, free, "spawned food");
        Ok(count)
    }

    /// Iterates over every in-grid position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let width = i32::from(self.size.width);
        let height = i32::from(self.size.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    fn index_of(&self, position: Position) -> Option<usize> {
        if !self.check_position_boundary(position) {
            return None;
        }

        let x = usize::try_from(position.x).ok()?;
        let y = usize::try_from(position.y).ok()?;
        Some(y * usize::from(self.size.width) + x)
    }
}
