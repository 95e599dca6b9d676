use serde::Serialize;

use crate::position::Position;

/// Compass heading of the snake. North points towards `y = 0`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

/// Which way a turn pivots relative to the current heading.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Turn {
    Left,
    Right,
}

impl Direction {
    /// Returns the heading after pivoting once in the given direction.
    #[must_use]
    pub fn turned(self, turn: Turn) -> Self {
        match (self, turn) {
            (Self::North, Turn::Left) => Self::West,
            (Self::North, Turn::Right) => Self::East,
            (Self::East, Turn::Left) => Self::North,
            (Self::East, Turn::Right) => Self::South,
            (Self::South, Turn::Left) => Self::East,
            (Self::South, Turn::Right) => Self::West,
            (Self::West, Turn::Left) => Self::South,
            (Self::West, Turn::Right) => Self::North,
        }
    }

    /// Returns the per-move displacement for this heading.
    #[must_use]
    pub fn delta(self) -> Position {
        match self {
            Self::North => Position::new(0, -1),
            Self::East => Position::new(1, 0),
            Self::South => Position::new(0, 1),
            Self::West => Position::new(-1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, Turn};
    use crate::position::Position;

    #[test]
    fn left_turn_deltas_match_heading_table() {
        assert_eq!(Direction::North.turned(Turn::Left).delta(), Position::new(-1, 0));
        assert_eq!(Direction::East.turned(Turn::Left).delta(), Position::new(0, -1));
        assert_eq!(Direction::South.turned(Turn::Left).delta(), Position::new(1, 0));
        assert_eq!(Direction::West.turned(Turn::Left).delta(), Position::new(0, 1));
    }

    #[test]
    fn right_turn_deltas_match_heading_table() {
        assert_eq!(Direction::North.turned(Turn::Right).delta(), Position::new(1, 0));
        assert_eq!(Direction::East.turned(Turn::Right).delta(), Position::new(0, 1));
        assert_eq!(Direction::South.turned(Turn::Right).delta(), Position::new(-1, 0));
        assert_eq!(Direction::West.turned(Turn::Right).delta(), Position::new(0, -1));
    }

    #[test]
    fn four_turns_return_to_start() {
        for start in [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ] {
            let mut left = start;
            let mut right = start;
            for _ in 0..4 {
                left = left.turned(Turn::Left);
                right = right.turned(Turn::Right);
            }
            assert_eq!(left, start);
            assert_eq!(right, start);
        }
    }

    #[test]
    fn opposite_turns_cancel() {
        let heading = Direction::South.turned(Turn::Left).turned(Turn::Right);

        assert_eq!(heading, Direction::South);
    }
}
