use std::fmt;

use crate::map::{Field, Map};
use crate::position::Position;

/// Returns the glyph drawn for a field.
#[must_use]
pub fn glyph(field: Field) -> char {
    match field {
        Field::Free => ' ',
        Field::Food => 'O',
        Field::Tail => 'X',
    }
}

/// Renders the map row by row, one string per grid row.
///
/// A map without columns still yields `height` empty rows.
#[must_use]
pub fn render_lines(map: &Map) -> Vec<String> {
    let width = i32::from(map.width());
    (0..i32::from(map.height()))
        .map(|y| {
            (0..width)
                .map(|x| glyph(map.field_at(Position::new(x, y))))
                .collect()
        })
        .collect()
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in render_lines(self) {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
