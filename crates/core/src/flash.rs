//! The flash pipeline: pick a puzzle, play its setup move, draw the board

use std::io::Write;
use std::path::Path;

use image::{DynamicImage, RgbaImage};
use rand::Rng;
use tracing::{debug, info};

use crate::board::BoardState;
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::puzzle::{Dataset, PuzzleRecord, Report};
use crate::render::{render, PieceSet};

/// A rendered puzzle, ready to be printed and saved
pub struct Flash {
    pub record: PuzzleRecord,
    /// Board after the setup move
    pub position: BoardState,
    pub report: Report,
    pub canvas: RgbaImage,
}

/// Runs the whole pipeline: renders a puzzle, writes its report to `out`,
/// saves the image to the configured path, then confirms on `out`.
pub fn run<R, W>(settings: &Settings, rng: &mut R, out: &mut W) -> Result<Flash>
where
    R: Rng + ?Sized,
    W: Write,
{
    let flash = Flash::prepare(settings, rng)?;

    writeln!(out)?;
    writeln!(out, "{}", flash.report)?;
    writeln!(out)?;

    flash.save(&settings.output_path)?;
    writeln!(out, "Chess board saved as '{}'.", settings.output_path.display())?;

    Ok(flash)
}

impl Flash {
    /// Runs every step up to and including rendering.
    ///
    /// Nothing is written to disk here, so a failure leaves no output file.
    pub fn prepare<R: Rng + ?Sized>(settings: &Settings, rng: &mut R) -> Result<Self> {
        let pieces = PieceSet::load(&settings.assets_dir, settings.square_size)?;
        let dataset = Dataset::load(&settings.dataset_path)?;
        debug!(rows = dataset.len(), "dataset loaded");

        let record = dataset.pick(rng)?;
        debug!(
            id = %record.id,
            fen = %record.fen,
            setup = record.setup_move(),
            popularity = %record.popularity,
            plays = %record.nb_plays,
            game_url = ?record.game_url,
            openings = ?record.opening_tags,
            "picked puzzle"
        );

        let mut position = BoardState::from_fen(&record.fen)?;
        position.play_uci(record.setup_move())?;
        debug!(fen = %position.fen(), "setup move played");

        let canvas = render(&position, &pieces, pieces.square_size());
        let report = Report::new(&record, &position);

        Ok(Self {
            record,
            position,
            report,
            canvas,
        })
    }

    /// Writes the board image as RGB; the format follows the file extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        DynamicImage::ImageRgba8(self.canvas.clone())
            .into_rgb8()
            .save(path)
            .map_err(|e| Error::OutputWrite {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        info!(path = %path.display(), id = %self.record.id, "puzzle image written");
        Ok(())
    }
}
