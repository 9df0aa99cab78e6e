use crate::{Coordinates, BOARD_SIZE};

/// The error type for [`Board::place()`](crate::Board::place).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalPlacement {
    OutOfBounds { row: usize, col: usize },
    Occupied { row: usize, col: usize },
}

impl IllegalPlacement {
    pub fn coordinates(&self) -> Coordinates {
        match *self {
            IllegalPlacement::OutOfBounds { row, col } | IllegalPlacement::Occupied { row, col } => {
                Coordinates { row, col }
            }
        }
    }
}

impl std::error::Error for IllegalPlacement {}

impl std::fmt::Display for IllegalPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalPlacement::OutOfBounds { .. } => write!(
                f,
                "Cell {} is outside of the {}x{} board",
                self.coordinates(),
                BOARD_SIZE,
                BOARD_SIZE
            ),
            IllegalPlacement::Occupied { .. } => {
                write!(f, "Cell {} already holds a mark", self.coordinates())
            }
        }
    }
}

/// Why a line of player input was rejected.
///
/// Every variant is recoverable: the game loop reports the message and asks
/// for another line without touching the board or the turn. The [`Display`]
/// output is the exact message shown to the player.
///
/// [`Display`]: std::fmt::Display
#[derive(Debug, PartialEq, Eq)]
pub enum InvalidMove {
    /// Either coordinate is missing or not an integer.
    NotNumbers,
    /// Either coordinate is outside of `1..=BOARD_SIZE`.
    OutOfRange { row: i32, col: i32 },
    /// The target cell already holds a mark.
    Occupied { err: IllegalPlacement },
}

impl std::error::Error for InvalidMove {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InvalidMove::Occupied { err } => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMove::NotNumbers => write!(f, "You should enter numbers!"),
            InvalidMove::OutOfRange { .. } => {
                write!(f, "Coordinates should be from 1 to {}!", BOARD_SIZE)
            }
            InvalidMove::Occupied { .. } => {
                write!(f, "This cell is occupied! Choose another one!")
            }
        }
    }
}

/// The error type for the [`FromStr`](std::str::FromStr) instance of
/// [`Board`](crate::Board).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseBoardError {
    InvalidGlyph(char),
    TooFewCells { found: usize },
    TooManyCells,
}

impl std::error::Error for ParseBoardError {}

impl std::fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseBoardError::InvalidGlyph(c) => write!(f, "'{}' is not a valid cell", c),
            ParseBoardError::TooFewCells { found } => write!(
                f,
                "Expected {} cells, found only {}",
                BOARD_SIZE * BOARD_SIZE,
                found
            ),
            ParseBoardError::TooManyCells => {
                write!(f, "Expected {} cells, found more", BOARD_SIZE * BOARD_SIZE)
            }
        }
    }
}
