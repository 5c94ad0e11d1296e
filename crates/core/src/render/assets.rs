//! Piece sprite loading

use std::collections::HashMap;
use std::path::Path;

use image::imageops::{self, FilterType};
use image::RgbaImage;
use tracing::debug;

use crate::board::PieceId;
use crate::error::{Error, Result};

/// Extension of the sprite files inside the asset directory
pub const SPRITE_EXTENSION: &str = "png";

/// The twelve piece sprites, scaled to one square size
pub struct PieceSet {
    square_size: u32,
    sprites: HashMap<PieceId, RgbaImage>,
}

impl PieceSet {
    /// Loads `<dir>/<role>-<color>.png` for every piece.
    ///
    /// Fails on the first sprite that is missing or cannot be decoded.
    pub fn load<P: AsRef<Path>>(dir: P, square_size: u32) -> Result<Self> {
        let dir = dir.as_ref();
        let mut sprites = HashMap::with_capacity(PieceId::ALL.len());

        for piece in PieceId::ALL {
            let path = dir.join(format!("{}.{}", piece.file_stem(), SPRITE_EXTENSION));
            let image = image::open(&path).map_err(|e| Error::AssetLoad {
                piece,
                reason: format!("{}: {}", path.display(), e),
            })?;
            debug!(%piece, path = %path.display(), "loaded sprite");
            sprites.insert(piece, image.to_rgba8());
        }

        Self::from_sprites(square_size, sprites)
    }

    /// Builds a set from images already in memory, resizing each one to
    /// `square_size` x `square_size`.
    pub fn from_sprites(square_size: u32, mut sprites: HashMap<PieceId, RgbaImage>) -> Result<Self> {
        let mut scaled = HashMap::with_capacity(PieceId::ALL.len());

        for piece in PieceId::ALL {
            let sprite = sprites.remove(&piece).ok_or_else(|| Error::AssetLoad {
                piece,
                reason: "no image provided".to_string(),
            })?;
            let sprite = if sprite.dimensions() == (square_size, square_size) {
                sprite
            } else {
                imageops::resize(&sprite, square_size, square_size, FilterType::CatmullRom)
            };
            scaled.insert(piece, sprite);
        }

        Ok(Self {
            square_size,
            sprites: scaled,
        })
    }

    pub fn square_size(&self) -> u32 {
        self.square_size
    }

    pub fn sprite(&self, piece: PieceId) -> &RgbaImage {
        // every identifier is inserted by `from_sprites`
        &self.sprites[&piece]
    }
}
