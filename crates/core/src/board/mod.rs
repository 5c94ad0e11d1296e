//! Board state and piece identifiers
//!
//! Wraps shakmaty so the rest of the crate only sees the handful of
//! operations a puzzle flash needs.

pub mod piece;
pub mod state;

pub use piece::{color_name, PieceId};
pub use state::BoardState;
