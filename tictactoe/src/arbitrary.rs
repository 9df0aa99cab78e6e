use crate::{Board, Cell, Coordinates, Mark, BOARD_SIZE};

/// A board reached by alternating legal moves from the empty board, stopping
/// at a random point or when the game is over.
#[derive(Clone, Debug)]
pub struct PlayedGame {
    pub moves: Vec<(Coordinates, Mark)>,
    pub board: Board,
}

impl PlayedGame {
    pub fn last_mark(&self) -> Option<Mark> {
        self.moves.last().map(|&(_, mark)| mark)
    }
}

impl quickcheck::Arbitrary for PlayedGame {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let num_moves = usize::arbitrary(g) % (BOARD_SIZE * BOARD_SIZE + 1);
        let mut board = Board::new();
        let mut moves = Vec::with_capacity(num_moves);
        let mut mark = Mark::X;
        while moves.len() < num_moves && !board.status().is_terminal() {
            let free: Vec<Coordinates> = board.empty_cells().collect();
            let coords = *g.choose(&free).unwrap();
            board.place(coords, mark).unwrap();
            moves.push((coords, mark));
            mark = mark.opponent();
        }
        PlayedGame { moves, board }
    }
}

impl quickcheck::Arbitrary for Mark {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[Mark::X, Mark::O]).unwrap()
    }
}

impl quickcheck::Arbitrary for Cell {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[Cell::Empty, Cell::Marked(Mark::X), Cell::Marked(Mark::O)])
            .unwrap()
    }
}

/// Any board at all, including ones that alternating play never produces.
impl quickcheck::Arbitrary for Board {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let mut board = Board::new();
        for coords in Coordinates::all() {
            if let Cell::Marked(mark) = Cell::arbitrary(g) {
                board.place(coords, mark).unwrap();
            }
        }
        board
    }
}
