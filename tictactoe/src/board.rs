use std::str::FromStr;

use crate::{visualize_board, Cell, IllegalPlacement, Mark, ParseBoardError};

/// Number of rows and columns of the board.
pub const BOARD_SIZE: usize = 3;

/// Number of lines that can be completed: every row, every column and both diagonals.
pub const NUM_LINES: usize = 2 * BOARD_SIZE + 2;

/// A 0-indexed position on the board.
///
/// Players type 1-indexed coordinates, the conversion happens in
/// [`parse_move()`](crate::parse_move). The [`Display`](std::fmt::Display)
/// output is 1-indexed again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinates {
    pub row: usize,
    pub col: usize,
}

impl Coordinates {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn is_in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// All positions on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinates> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coordinates { row, col }))
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row + 1, self.col + 1)
    }
}

/// A fixed-size grid of [cells](Cell), stored row-major.
///
/// Cells only ever go from empty to marked, through [`Self::place()`]. Whether
/// the contents could come from a real game is not checked here, that is the
/// job of [`Self::status()`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board with the given contents, without any validation.
    pub fn from_rows(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Returns `None` if the coordinates are out of bounds.
    pub fn get(&self, coords: Coordinates) -> Option<Cell> {
        self.cells
            .get(coords.row)
            .and_then(|row| row.get(coords.col))
            .copied()
    }

    /// Puts `mark` into an empty cell.
    ///
    /// On error, the board is left unchanged.
    pub fn place(&mut self, coords: Coordinates, mark: Mark) -> Result<(), IllegalPlacement> {
        let Coordinates { row, col } = coords;
        if !coords.is_in_bounds() {
            return Err(IllegalPlacement::OutOfBounds { row, col });
        }
        let cell = &mut self.cells[row][col];
        if !cell.is_empty() {
            return Err(IllegalPlacement::Occupied { row, col });
        }
        *cell = Cell::Marked(mark);
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// How many cells hold `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Marked(mark))
            .count()
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = Coordinates> + '_ {
        Coordinates::all().filter(move |&coords| self.cells[coords.row][coords.col].is_empty())
    }

    /// The candidate winning lines: rows first, then columns, then the main
    /// diagonal and the anti-diagonal. Always yields [`NUM_LINES`] items.
    pub fn lines(&self) -> impl Iterator<Item = [Cell; BOARD_SIZE]> + '_ {
        let rows = self.cells.iter().copied();
        let cols = (0..BOARD_SIZE)
            .map(move |col| std::array::from_fn::<Cell, BOARD_SIZE, _>(|row| self.cells[row][col]));
        let diag = std::array::from_fn::<Cell, BOARD_SIZE, _>(|i| self.cells[i][i]);
        let anti_diag =
            std::array::from_fn::<Cell, BOARD_SIZE, _>(|i| self.cells[i][BOARD_SIZE - 1 - i]);
        rows.chain(cols)
            .chain(std::iter::once(diag))
            .chain(std::iter::once(anti_diag))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", visualize_board(self))
    }
}

/// Reads a board back from its rendering.
///
/// Whitespace and the border characters `-` and `|` are skipped, so both the
/// full rendering and a compact form like `"XO_ _X_ __O"` are accepted.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut glyphs = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '|');
        let mut board = Board::new();
        for (idx, coords) in Coordinates::all().enumerate() {
            let glyph = glyphs
                .next()
                .ok_or(ParseBoardError::TooFewCells { found: idx })?;
            board.cells[coords.row][coords.col] =
                Cell::from_glyph(glyph).ok_or(ParseBoardError::InvalidGlyph(glyph))?;
        }
        if glyphs.next().is_some() {
            return Err(ParseBoardError::TooManyCells);
        }
        Ok(board)
    }
}

/// Shorthand for creating a board from its glyphs, see the [`FromStr`]
/// instance of [`Board`].
/// ```
/// # use tictactoe::{board, Cell, Coordinates, Mark};
/// let board = board!("X__ _O_ __X");
/// assert_eq!(board.get(Coordinates::new(1, 1)), Some(Cell::Marked(Mark::O)));
/// ```
#[macro_export]
macro_rules! board {
    ($s:literal) => {
        <$crate::Board as std::str::FromStr>::from_str($s)
            .expect("Invalid board given to board! macro")
    };
}
