use serde::{Deserialize, Serialize};

use crate::{Board, Cell, Mark};

/// Classification of a board.
///
/// Never stored, always recomputed with [`Board::status()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    XWin,
    OWin,
    Draw,
    /// The game goes on. This is the only non-terminal status.
    Active,
    /// The board cannot be reached by alternating play.
    Impossible,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        self != Status::Active
    }

    pub fn winner(self) -> Option<Mark> {
        match self {
            Status::XWin => Some(Mark::X),
            Status::OWin => Some(Mark::O),
            _ => None,
        }
    }

    /// The line printed when the game is over.
    pub fn description(self) -> &'static str {
        match self {
            Status::XWin => "X wins",
            Status::OWin => "O wins",
            Status::Draw => "Draw",
            Status::Active => "Game not finished",
            Status::Impossible => "Impossible",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Returns the mark filling the whole line, if there is one.
fn line_owner(line: &[Cell]) -> Option<Mark> {
    let first = line.first()?.mark()?;
    line.iter()
        .all(|&cell| cell == Cell::Marked(first))
        .then_some(first)
}

impl Board {
    /// Classifies the board.
    ///
    /// The checks are ordered so that an unreachable board is never reported
    /// as a win: first the mark counts (players alternate, so they differ by
    /// at most one), then whether both players completed a line, and only then
    /// the single winner, unfinished and draw cases.
    pub fn status(&self) -> Status {
        let num_x = self.count(Mark::X);
        let num_o = self.count(Mark::O);
        if num_x.abs_diff(num_o) > 1 {
            return Status::Impossible;
        }

        let (mut x_lines, mut o_lines) = (0, 0);
        for line in self.lines() {
            match line_owner(&line) {
                Some(Mark::X) => x_lines += 1,
                Some(Mark::O) => o_lines += 1,
                None => (),
            }
        }

        match (x_lines > 0, o_lines > 0) {
            (true, true) => Status::Impossible,
            (true, false) => Status::XWin,
            (false, true) => Status::OWin,
            (false, false) if self.is_full() => Status::Draw,
            (false, false) => Status::Active,
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::PlayedGame;
    use crate::board;

    quickcheck! {
        fn status_is_idempotent(board: Board) -> bool {
            board.status() == board.status()
        }

        fn status_depends_only_on_cells(board: Board) -> bool {
            let copy = Board::from_rows(*board.rows());
            copy.status() == board.status()
        }

        fn count_imbalance_is_impossible(board: Board) -> bool {
            let imbalanced = board.count(Mark::X).abs_diff(board.count(Mark::O)) > 1;
            !imbalanced || board.status() == Status::Impossible
        }

        fn alternating_play_is_never_impossible(game: PlayedGame) -> bool {
            game.board.status() != Status::Impossible
        }

        fn winner_made_the_last_move(game: PlayedGame) -> bool {
            match game.board.status().winner() {
                Some(mark) => game.last_mark() == Some(mark),
                None => true,
            }
        }
    }

    #[test]
    fn empty_board_is_active() {
        assert_eq!(Board::new().status(), Status::Active);
    }

    #[test]
    fn full_board_without_line_is_draw() {
        assert_eq!(board!("XOX XOO OXX").status(), Status::Draw);
    }

    #[test]
    fn unfinished_board_is_active() {
        assert_eq!(board!("XO_ _X_ O__").status(), Status::Active);
    }

    #[test]
    fn top_row_wins_for_x() {
        let mut board = Board::new();
        for ((row, col), mark) in [
            ((0, 0), Mark::X),
            ((1, 1), Mark::O),
            ((0, 1), Mark::X),
            ((1, 0), Mark::O),
            ((0, 2), Mark::X),
        ] {
            board.place(crate::Coordinates::new(row, col), mark).unwrap();
        }
        assert_eq!(board.status(), Status::XWin);
    }

    #[test]
    fn column_wins_for_o() {
        assert_eq!(board!("XOX _O_ XO_").status(), Status::OWin);
    }

    #[test]
    fn anti_diagonal_wins() {
        assert_eq!(board!("OOX _X_ X__").status(), Status::XWin);
    }

    #[test]
    fn main_diagonal_depends_on_mark_counts() {
        // Five X against four O on a full board.
        assert_eq!(board!("XOO OXX OXX").status(), Status::XWin);
        assert_eq!(board!("XOO OXO OOX").status(), Status::Impossible);
    }

    #[test]
    fn two_lines_for_one_player_still_win() {
        assert_eq!(board!("XXX OXO OOX").status(), Status::XWin);
    }

    #[test]
    fn both_players_winning_is_impossible() {
        assert_eq!(board!("XXX OOO ___").status(), Status::Impossible);
        assert_eq!(board!("XXX OO_ XO_").status(), Status::XWin);
        assert_eq!(board!("OOO XXX X__").status(), Status::Impossible);
    }

    #[test]
    fn count_check_comes_before_lines() {
        assert_eq!(board!("XXX X__ ___").status(), Status::Impossible);
        assert_eq!(board!("OOO ___ ___").status(), Status::Impossible);
    }

    #[test]
    fn descriptions() {
        assert_eq!(Status::XWin.to_string(), "X wins");
        assert_eq!(Status::OWin.to_string(), "O wins");
        assert_eq!(Status::Draw.to_string(), "Draw");
        assert_eq!(Status::Active.to_string(), "Game not finished");
        assert_eq!(Status::Impossible.to_string(), "Impossible");
    }

    #[test]
    fn only_active_is_not_terminal() {
        assert!(!Status::Active.is_terminal());
        for status in [Status::XWin, Status::OWin, Status::Draw, Status::Impossible] {
            assert!(status.is_terminal());
        }
    }

    #[test]
    fn serialized_names() {
        assert_eq!(serde_json::to_string(&Status::XWin).unwrap(), "\"X_WIN\"");
        assert_eq!(serde_json::to_string(&Status::Impossible).unwrap(), "\"IMPOSSIBLE\"");
    }
}
