use crate::{Board, BOARD_SIZE};

/// Draws the board as a bordered grid, one row per line.
///
/// ```text
/// ---------
/// | X O _ |
/// | _ X _ |
/// | _ _ O |
/// ---------
/// ```
///
/// There is no trailing newline.
pub fn visualize_board(board: &Board) -> String {
    let border = "-".repeat(2 * BOARD_SIZE + 3);
    let mut result = border.clone();
    for row in board.rows() {
        result += "\n|";
        for cell in row {
            result.push(' ');
            result.push(cell.glyph());
        }
        result += " |";
    }
    result.push('\n');
    result += &border;
    result
}
