use std::io::{BufRead, Write};

use tictactoe::{play_move, Board, Coordinates, InvalidMove, Mark, Status};
use tracing::{debug, info, trace};

use crate::recording::Recorder;

/// The board together with whose turn it is.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Mark,
}

impl Default for Game {
    fn default() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
        }
    }
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark that will be placed by the next accepted move.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    pub fn status(&self) -> Status {
        self.board.status()
    }

    /// Tries to play one line of input for the current player.
    ///
    /// The turn only passes to the opponent if the move was accepted.
    pub fn submit(&mut self, line: &str) -> Result<Coordinates, InvalidMove> {
        let coords = play_move(&mut self.board, line, self.turn)?;
        self.turn = self.turn.opponent();
        Ok(coords)
    }
}

/// Runs a game until its status is terminal or the input ends.
///
/// Rejected input is reported on `output` and the game goes on. Returns an
/// error only on I/O failure.
pub fn play_game<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<Status> {
    let mut game = Game::new();
    writeln!(output, "{}", game.board())?;

    // Raw bytes, so that a line which is not valid UTF-8 is rejected like any
    // other malformed move instead of ending the game.
    let mut buf = Vec::new();
    while !game.status().is_terminal() {
        buf.clear(); // because read_until() appends to the buffer
        let num_bytes_read = input.read_until(b'\n', &mut buf)?;
        if num_bytes_read == 0 {
            debug!("Input ended before the game was over");
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end();
        trace!(name: "Received input", line = %line);

        let player = game.turn();
        match game.submit(line) {
            Ok(coords) => {
                debug!(%player, %coords, "Move accepted");
                if let Some(recorder) = recorder {
                    recorder.store_move(player, coords);
                }
                writeln!(output, "{}", game.board())?;
            }
            Err(err) => {
                let mut err_dyn = &err as &dyn std::error::Error;
                while let Some(src_err) = err_dyn.source() {
                    debug!(%player, "{}", err_dyn);
                    err_dyn = src_err;
                }
                debug!(%player, "{}", err_dyn);
                writeln!(output, "{}", err)?;
            }
        }
    }

    let status = game.status();
    info!(%status, "Game over");
    writeln!(output, "{}", status)?;
    output.flush()?;

    if let Some(recorder) = recorder {
        recorder.write_game_recording(status)?;
    }
    Ok(status)
}
