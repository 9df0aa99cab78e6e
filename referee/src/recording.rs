use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tictactoe::{Coordinates, Mark, Status};
use tracing::debug;

/// Collects the accepted moves of a game and writes them out as JSON once
/// the game is over.
pub struct Recorder {
    path: PathBuf,
    moves: Vec<RecordedMove>,
}

impl Recorder {
    pub fn new(path: PathBuf) -> anyhow::Result<Self> {
        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            path,
            moves: Vec::new(),
        })
    }

    pub fn store_move(&mut self, player: Mark, coords: Coordinates) {
        self.moves.push(RecordedMove {
            player,
            row: coords.row + 1,
            col: coords.col + 1,
        });
    }

    pub fn write_game_recording(&mut self, result: Status) -> anyhow::Result<()> {
        let recording = GameRecording {
            moves: std::mem::take(&mut self.moves),
            result,
        };
        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, &recording)?;
        writeln!(writer)?;
        writer.flush()?;
        debug!(path = %self.path.display(), "Wrote game recording");
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecording {
    pub moves: Vec<RecordedMove>,
    pub result: Status,
}

/// A move as the player typed it, i.e. 1-indexed.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedMove {
    pub player: Mark,
    pub row: usize,
    pub col: usize,
}
