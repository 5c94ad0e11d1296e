//! Piece identifiers used as sprite keys

use std::fmt;

use shakmaty::{Color, Piece, Role};

/// A (role, color) pair, one per piece sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId {
    pub role: Role,
    pub color: Color,
}

impl PieceId {
    /// All twelve identifiers, white first
    pub const ALL: [PieceId; 12] = [
        PieceId::new(Role::Pawn, Color::White),
        PieceId::new(Role::Knight, Color::White),
        PieceId::new(Role::Bishop, Color::White),
        PieceId::new(Role::Rook, Color::White),
        PieceId::new(Role::Queen, Color::White),
        PieceId::new(Role::King, Color::White),
        PieceId::new(Role::Pawn, Color::Black),
        PieceId::new(Role::Knight, Color::Black),
        PieceId::new(Role::Bishop, Color::Black),
        PieceId::new(Role::Rook, Color::Black),
        PieceId::new(Role::Queen, Color::Black),
        PieceId::new(Role::King, Color::Black),
    ];

    pub const fn new(role: Role, color: Color) -> Self {
        Self { role, color }
    }

    /// Sprite file name without extension, e.g. `knight-black`
    pub fn file_stem(&self) -> String {
        let color = match self.color {
            Color::White => "white",
            Color::Black => "black",
        };
        format!("{}-{}", role_name(self.role), color)
    }
}

impl From<Piece> for PieceId {
    fn from(piece: Piece) -> Self {
        Self::new(piece.role, piece.color)
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_stem())
    }
}

/// Returns the color as a string ("White" or "Black")
pub fn color_name(color: Color) -> &'static str {
    if color == Color::White { "White" } else { "Black" }
}

fn role_name(role: Role) -> &'static str {
    match role {
        Role::Pawn => "pawn",
        Role::Knight => "knight",
        Role::Bishop => "bishop",
        Role::Rook => "rook",
        Role::Queen => "queen",
        Role::King => "king",
    }
}
