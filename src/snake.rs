use std::collections::VecDeque;
use std::fmt;

use serde::Serialize;
use tracing::{debug, trace};

use crate::config::INITIAL_SNAKE_LENGTH;
use crate::direction::{Direction, Turn};
use crate::error::SnakeError;
use crate::map::{Field, Map};
use crate::position::Position;

/// Snake body, heading and counters, bound to the map it moves on.
#[derive(Debug, Clone, Serialize)]
pub struct Snake {
    alive: bool,
    score: u32,
    turn: u32,
    direction: Direction,
    tails: VecDeque<Position>,
    map: Map,
}

impl Snake {
    /// Creates a snake heading south with its body at `(0,0)..(2,0)`.
    ///
    /// Every body segment is stamped onto `map` as [`Field::Tail`].
    #[must_use]
    pub fn new(mut map: Map) -> Self {
        let tails: VecDeque<Position> = (0..INITIAL_SNAKE_LENGTH)
            .map(|x| Position::new(x, 0))
            .collect();
        for segment in &tails {
            map.set_position(*segment, Field::Tail);
        }

        Self {
            alive: true,
            score: 0,
            turn: 0,
            direction: Direction::South,
            tails,
            map,
        }
    }

    /// Pivots the heading 90 degrees to the left.
    pub fn turn_left(&mut self) -> Result<(), SnakeError> {
        self.pivot(Turn::Left)
    }

    /// Pivots the heading 90 degrees to the right.
    pub fn turn_right(&mut self) -> Result<(), SnakeError> {
        self.pivot(Turn::Right)
    }

    fn pivot(&mut self, turn: Turn) -> Result<(), SnakeError> {
        self.ensure_alive()?;
        self.direction = self.direction.turned(turn);
        Ok(())
    }

    /// Appends one segment behind the tail and counts it as eaten food.
    ///
    /// The new segment continues the line through the last two segments,
    /// so it may land off the grid or on top of another segment.
    pub fn grow(&mut self) -> Result<(), SnakeError> {
        self.ensure_alive()?;

        let len = self.tails.len();
        let (Some(&second_last), Some(&last)) = (
            len.checked_sub(2).and_then(|i| self.tails.get(i)),
            self.tails.back(),
        ) else {
            return Err(SnakeError::BodyTooShort { len });
        };

        let segment = last + (last - second_last);
        self.tails.push_back(segment);
        self.map.set_position(segment, Field::Tail);
        self.score += 1;

        debug!(%segment, score = self.score, "snake grew");
        Ok(())
    }

    /// Grows when the head sits on food. Returns whether food was eaten.
    pub fn check_food(&mut self) -> Result<bool, SnakeError> {
        if !self.map.check_position_for_food(self.head()) {
            return Ok(false);
        }

        self.grow()?;
        Ok(true)
    }

    /// Kills the snake when its head left the grid or hit a body segment.
    ///
    /// Returns whether the snake is still alive.
    pub fn check_death(&mut self) -> bool {
        if self.alive && !self.map.check_position_blocked(self.head()) {
            self.alive = false;
            debug!(head = %self.head(), turn = self.turn, score = self.score, "snake died");
        }
        self.alive
    }

    /// Advances the snake by one step along its heading.
    ///
    /// The old tail cell is freed before food and death are checked, so the
    /// head may follow directly behind the tail. Food eaten on this step
    /// still grows the snake even when the step kills it.
    pub fn move_forward(&mut self) -> Result<(), SnakeError> {
        self.ensure_alive()?;

        let next_head = self.head() + self.delta();
        self.tails.push_front(next_head);

        if let Some(old_tail) = self.tails.pop_back() {
            self.map.set_position(old_tail, Field::Free);
        }

        self.check_food()?;
        self.check_death();
        self.map.set_position(next_head, Field::Tail);
        self.turn += 1;

        trace!(head = %next_head, turn = self.turn, alive = self.alive, "snake moved");
        Ok(())
    }

    /// Returns the head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .tails
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the per-move displacement of the head.
    #[must_use]
    pub fn delta(&self) -> Position {
        self.direction.delta()
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Returns how much food was eaten.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns how many moves were made.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Iterates over body segments from head to tail.
    pub fn tails(&self) -> impl Iterator<Item = &Position> {
        self.tails.iter()
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tails.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tails.is_empty()
    }

    #[must_use]
    pub fn map(&self) -> &Map {
        &self.map
    }

    /// Returns the map for external edits such as spawning food.
    pub fn map_mut(&mut self) -> &mut Map {
        &mut self.map
    }

    /// Releases the map, dropping the snake.
    #[must_use]
    pub fn into_map(self) -> Map {
        self.map
    }

    fn ensure_alive(&self) -> Result<(), SnakeError> {
        if self.alive {
            Ok(())
        } else {
            Err(SnakeError::Dead)
        }
    }
}

impl fmt::Display for Snake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Snake [score {} | turn {}]:", self.score, self.turn)?;
        for segment in &self.tails {
            writeln!(f, "\t{segment}")?;
        }
        Ok(())
    }
}
