//! Error types for chess-flash-core

use std::io;

use thiserror::Error;

use crate::board::PieceId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load piece image '{piece}': {reason}")]
    AssetLoad { piece: PieceId, reason: String },

    #[error("Failed to read dataset '{path}': {source}")]
    DatasetRead { path: String, source: io::Error },

    #[error("Dataset '{0}' has no puzzle rows")]
    EmptyDataset(String),

    #[error("Malformed puzzle record: {0}")]
    MalformedRecord(String),

    #[error("Invalid position '{fen}': {reason}")]
    InvalidPosition { fen: String, reason: String },

    #[error("Illegal move '{uci}' in position '{fen}': {reason}")]
    IllegalMove { uci: String, fen: String, reason: String },

    #[error("Failed to write image '{path}': {reason}")]
    OutputWrite { path: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
