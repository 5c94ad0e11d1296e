//! Dataset loading and random puzzle selection

use std::fs;
use std::path::Path;

use rand::seq::IndexedRandom;
use rand::Rng;

use super::PuzzleRecord;
use crate::error::{Error, Result};

/// Puzzle rows of a dataset file, header excluded
#[derive(Debug, Clone)]
pub struct Dataset {
    source: String,
    rows: Vec<String>,
}

impl Dataset {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::DatasetRead {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::from_text(path.display().to_string(), &content))
    }

    /// Splits raw file content; the first line is the header
    pub fn from_text(source: impl Into<String>, content: &str) -> Self {
        let rows = content
            .lines()
            .skip(1)
            .filter(|line| !line.trim().is_empty())
            .map(String::from)
            .collect();

        Self {
            source: source.into(),
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Picks one row uniformly at random and parses it
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<PuzzleRecord> {
        let line = self
            .rows
            .choose(rng)
            .ok_or_else(|| Error::EmptyDataset(self.source.clone()))?;
        PuzzleRecord::parse(line)
    }
}
