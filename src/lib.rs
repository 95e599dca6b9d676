//! Grid-based Snake simulation engine.
//!
//! A [`map::Map`] holds the field state of a bounded grid, and a
//! [`snake::Snake`] owns one map and mutates it as it moves, eats and dies.

pub mod config;
pub mod direction;
pub mod error;
pub mod map;
pub mod position;
pub mod render;
pub mod snake;
