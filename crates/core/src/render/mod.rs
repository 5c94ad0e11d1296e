//! Board rendering
//!
//! Piece sprites are loaded once into a [`PieceSet`]; the canvas functions
//! draw a checkerboard and composite sprites onto it.

pub mod assets;
pub mod canvas;

pub use assets::PieceSet;
pub use canvas::{draw_piece, new_canvas, render, DARK_SQUARE, LIGHT_SQUARE};
