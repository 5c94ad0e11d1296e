//! A single puzzle row

use crate::error::{Error, Result};

const ID: usize = 0;
const FEN: usize = 1;
const MOVES: usize = 2;
const RATING: usize = 3;
const RATING_DEVIATION: usize = 4;
const POPULARITY: usize = 5;
const NB_PLAYS: usize = 6;
const THEMES: usize = 7;
const GAME_URL: usize = 8;
const OPENING_TAGS: usize = 9;

/// Minimum number of comma-separated fields in a row
pub const MIN_FIELDS: usize = THEMES + 1;

#[derive(Debug, Clone, PartialEq)]
pub struct PuzzleRecord {
    pub id: String,
    /// Position before the setup move
    pub fen: String,
    /// UCI moves; the first sets the puzzle up, the second solves it
    pub moves: Vec<String>,
    pub rating: String,
    pub rating_deviation: String,
    pub popularity: String,
    pub nb_plays: String,
    pub themes: String,
    pub game_url: Option<String>,
    pub opening_tags: Option<String>,
}

impl PuzzleRecord {
    /// Splits a dataset line into a record
    pub fn parse(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.trim_end_matches(['\r', '\n']).split(',').collect();
        if fields.len() < MIN_FIELDS {
            return Err(Error::MalformedRecord(format!(
                "expected at least {} fields, found {} in '{}'",
                MIN_FIELDS,
                fields.len(),
                line
            )));
        }

        let moves: Vec<String> = fields[MOVES].split_whitespace().map(String::from).collect();
        if moves.len() < 2 {
            return Err(Error::MalformedRecord(format!(
                "puzzle '{}' needs a setup move and a solution, got '{}'",
                fields[ID], fields[MOVES]
            )));
        }

        let optional = |index: usize| {
            fields
                .get(index)
                .filter(|value| !value.is_empty())
                .map(|value| value.to_string())
        };

        Ok(Self {
            id: fields[ID].to_string(),
            fen: fields[FEN].to_string(),
            moves,
            rating: fields[RATING].to_string(),
            rating_deviation: fields[RATING_DEVIATION].to_string(),
            popularity: fields[POPULARITY].to_string(),
            nb_plays: fields[NB_PLAYS].to_string(),
            themes: fields[THEMES].to_string(),
            game_url: optional(GAME_URL),
            opening_tags: optional(OPENING_TAGS),
        })
    }

    /// The move played before the position is shown
    pub fn setup_move(&self) -> &str {
        &self.moves[0]
    }

    /// The expected reply
    pub fn solution(&self) -> &str {
        &self.moves[1]
    }
}
