use serde::{Deserialize, Serialize};

/// The symbol a player puts on the board.
///
/// `X` always moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The player who moves after this one.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// The contents of a single square of the [board](crate::Board).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Mark),
}

/// Glyph used for an empty cell when rendering.
pub const EMPTY_GLYPH: char = '_';

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => EMPTY_GLYPH,
            Cell::Marked(mark) => mark.glyph(),
        }
    }

    /// Inverse of [`Self::glyph()`].
    pub fn from_glyph(glyph: char) -> Option<Cell> {
        match glyph {
            'X' => Some(Cell::Marked(Mark::X)),
            'O' => Some(Cell::Marked(Mark::O)),
            EMPTY_GLYPH => Some(Cell::Empty),
            _ => None,
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Cell {
        Cell::Marked(mark)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
