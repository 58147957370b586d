//! Player-entered coordinates.

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::core::{common::MoveError, config};

/// A 1-indexed `(column, row)` pair as typed by a player, e.g. `"2 2"`.
///
/// Columns run left to right and rows bottom to top. Values are not bounds-checked
/// here: [`Coordinate::index`] returns `None` for anything off the grid.
#[derive(Debug, Clone)]
pub struct Coordinate {
    text: String,
    column: i32,
    row: i32,
}

impl Coordinate {
    /// Parse two whitespace separated integers.
    pub fn parse(text: &str) -> Result<Self, MoveError> {
        let mut parts = text.split_whitespace();
        let (Some(first), Some(second), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(MoveError::InvalidCoordinate);
        };
        let column = first.parse().map_err(|_| MoveError::InvalidCoordinate)?;
        let row = second.parse().map_err(|_| MoveError::InvalidCoordinate)?;
        Ok(Self {
            text: String::from(text),
            column,
            row,
        })
    }

    /// Coordinate of a flat board index, in canonical `"column row"` form.
    pub(crate) fn from_index(index: usize) -> Self {
        let (column, row) = config::cell_position(index);
        Self {
            text: format!("{} {}", column, row),
            column,
            row,
        }
    }

    pub fn column(&self) -> i32 {
        self.column
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    /// Original text the coordinate was parsed from.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Flat board index, or `None` when off the grid.
    pub fn index(&self) -> Option<usize> {
        config::cell_index(self.column, self.row)
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.column == other.column && self.row == other.row
    }
}

impl Eq for Coordinate {}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_and_center_map_to_fixed_indices() {
        let cases = [("1 3", 0), ("3 3", 2), ("2 2", 4), ("1 1", 6), ("3 1", 8)];
        for (text, expected) in cases {
            assert_eq!(Coordinate::parse(text).unwrap().index(), Some(expected), "{text}");
        }
    }

    #[test]
    fn every_index_round_trips_through_its_position() {
        for i in 0..config::NUM_CELLS {
            let coord = Coordinate::from_index(i);
            assert_eq!(coord.index(), Some(i));
            assert_eq!(Coordinate::parse(coord.text()).unwrap(), coord);
        }
    }

    #[test]
    fn off_grid_values_parse_but_have_no_index() {
        let coord = Coordinate::parse("4 0").unwrap();
        assert_eq!((coord.column(), coord.row()), (4, 0));
        assert_eq!(coord.index(), None);
    }
}
