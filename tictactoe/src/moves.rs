use crate::{Board, Coordinates, IllegalPlacement, InvalidMove, Mark, BOARD_SIZE};

/// Reads a move typed by a player: the row, then the column, 1-indexed and
/// separated by whitespace.
///
/// Anything after the second token is ignored. Both tokens have to be
/// integers before the range is checked.
pub fn parse_move(line: &str) -> Result<Coordinates, InvalidMove> {
    let mut tokens = line.split_whitespace();
    let row = parse_number(tokens.next())?;
    let col = parse_number(tokens.next())?;
    match (to_index(row), to_index(col)) {
        (Some(row), Some(col)) => Ok(Coordinates { row, col }),
        _ => Err(InvalidMove::OutOfRange { row, col }),
    }
}

fn parse_number(token: Option<&str>) -> Result<i32, InvalidMove> {
    token
        .and_then(|t| t.parse().ok())
        .ok_or(InvalidMove::NotNumbers)
}

// 1-indexed input to 0-indexed board coordinate
fn to_index(n: i32) -> Option<usize> {
    let idx = usize::try_from(n).ok()?.checked_sub(1)?;
    (idx < BOARD_SIZE).then_some(idx)
}

/// Validates a line of input and places `mark` where it points to.
///
/// On error the board is unchanged.
pub fn play_move(board: &mut Board, line: &str, mark: Mark) -> Result<Coordinates, InvalidMove> {
    let coords = parse_move(line)?;
    board.place(coords, mark)?;
    Ok(coords)
}

impl From<IllegalPlacement> for InvalidMove {
    fn from(err: IllegalPlacement) -> InvalidMove {
        match err {
            IllegalPlacement::OutOfBounds { row, col } => InvalidMove::OutOfRange {
                row: i32::try_from(row + 1).unwrap_or(i32::MAX),
                col: i32::try_from(col + 1).unwrap_or(i32::MAX),
            },
            IllegalPlacement::Occupied { .. } => InvalidMove::Occupied { err },
        }
    }
}
