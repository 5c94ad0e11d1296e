//! Puzzle dataset handling
//!
//! Rows follow the Lichess puzzle CSV schema:
//! `PuzzleId,FEN,Moves,Rating,RatingDeviation,Popularity,NbPlays,Themes,GameUrl,OpeningTags`

pub mod dataset;
pub mod record;
pub mod report;

pub use dataset::Dataset;
pub use record::PuzzleRecord;
pub use report::Report;
