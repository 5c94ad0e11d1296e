//! Chess Flash Core Library
//!
//! Renders a random puzzle position, one setup move in, to an image.

pub mod board;
pub mod config;
pub mod error;
pub mod flash;
pub mod puzzle;
pub mod render;

pub use board::{BoardState, PieceId};
pub use config::{Environment, Settings};
pub use error::{Error, Result};
pub use flash::{run, Flash};
pub use puzzle::{Dataset, PuzzleRecord, Report};
pub use render::PieceSet;
