//! Console report for a flashed puzzle

use std::fmt;

use shakmaty::Color;

use super::PuzzleRecord;
use crate::board::{color_name, BoardState};

/// What the solver is told about the puzzle
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub id: String,
    pub to_move: Color,
    pub fen: String,
    pub themes: String,
    pub solution: String,
    pub rating: String,
    pub rating_deviation: String,
}

impl Report {
    /// `position` is the board after the setup move
    pub fn new(record: &PuzzleRecord, position: &BoardState) -> Self {
        Self {
            id: record.id.clone(),
            to_move: position.side_to_move(),
            fen: record.fen.clone(),
            themes: record.themes.clone(),
            solution: record.solution().to_string(),
            rating: record.rating.clone(),
            rating_deviation: record.rating_deviation.clone(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PUZZLE: '{}'", self.id)?;
        writeln!(f)?;
        writeln!(f, "\t'{} to move'", color_name(self.to_move))?;
        writeln!(f)?;
        writeln!(f, "FEN: {}", self.fen)?;
        writeln!(f, "THEMES: '{}'", self.themes)?;
        writeln!(f, "SOLUTION: {}", self.solution)?;
        write!(f, "RATING: {} RATING DEVIATION: {}", self.rating, self.rating_deviation)
    }
}
