//! Checkerboard canvas and sprite compositing

use image::imageops;
use image::{Rgba, RgbaImage};
use shakmaty::Square;

use super::PieceSet;
use crate::board::{BoardState, PieceId};

pub const LIGHT_SQUARE: Rgba<u8> = Rgba([240, 217, 181, 255]);
pub const DARK_SQUARE: Rgba<u8> = Rgba([181, 136, 99, 255]);

/// Background color of the square at zero-based (file, rank), a1 = (0, 0)
pub fn square_color(file: u32, rank: u32) -> Rgba<u8> {
    if (file + rank) % 2 == 0 {
        LIGHT_SQUARE
    } else {
        DARK_SQUARE
    }
}

/// Allocates an empty, fully opaque board, rank 8 at the top
pub fn new_canvas(square_size: u32) -> RgbaImage {
    let board_size = 8 * square_size;
    RgbaImage::from_fn(board_size, board_size, |x, y| {
        square_color(x / square_size, 7 - y / square_size)
    })
}

/// Top-left pixel of a square's cell
pub fn square_origin(square: Square, square_size: u32) -> (u32, u32) {
    let file = square.file() as u32;
    let rank = square.rank() as u32;
    (file * square_size, (7 - rank) * square_size)
}

/// Pastes the piece sprite centered in its square, masked by the sprite's
/// alpha channel. The square size is taken from the canvas.
pub fn draw_piece(canvas: &mut RgbaImage, square: Square, piece: PieceId, pieces: &PieceSet) {
    let square_size = canvas.width() / 8;
    let (x, y) = square_origin(square, square_size);
    let sprite = pieces.sprite(piece);
    let (width, height) = sprite.dimensions();

    let offset_x = (i64::from(square_size) - i64::from(width)).div_euclid(2);
    let offset_y = (i64::from(square_size) - i64::from(height)).div_euclid(2);

    imageops::overlay(canvas, sprite, i64::from(x) + offset_x, i64::from(y) + offset_y);
}

/// Renders a fresh board with every piece of `position`
pub fn render(position: &BoardState, pieces: &PieceSet, square_size: u32) -> RgbaImage {
    let mut canvas = new_canvas(square_size);
    for (square, piece) in position.occupied_squares() {
        draw_piece(&mut canvas, square, piece, pieces);
    }
    canvas
}
