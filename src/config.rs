//! Runtime configuration: where the cards come from and the virtual viewport.
//!
//! Values arrive through clap (flags with `RFPDESK_*` environment fallbacks)
//! and are checked here before any board work starts.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::{Path, PathBuf};

use board::consts::{BOARD_PADDING_PX, COLUMN_GAP_PX};
use board::doc::{BoardError, CardStore};
use board::seed::initial_cards;

pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 720.0;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read cards from {path}: {source}")]
    ReadCards { path: PathBuf, source: std::io::Error },
    #[error("invalid cards in {path}: {source}")]
    InvalidCards { path: PathBuf, source: BoardError },
    #[error("seed data rejected: {0}")]
    Seed(BoardError),
    #[error("{field} must be a finite, non-negative number, got {value}")]
    InvalidDimension { field: &'static str, value: f64 },
}

/// Size of the area the board is laid out in, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub gap: f64,
    pub padding: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
            gap: COLUMN_GAP_PX,
            padding: BOARD_PADDING_PX,
        }
    }
}

impl Viewport {
    /// Build a viewport, rejecting negative or non-finite dimensions.
    pub fn new(width: f64, height: f64, gap: f64, padding: f64) -> Result<Self, ConfigError> {
        for (field, value) in [("width", width), ("height", height), ("gap", gap), ("padding", padding)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidDimension { field, value });
            }
        }
        Ok(Self { width, height, gap, padding })
    }
}

/// Load the board from a JSON snapshot, or the demo proposals when no path is given.
pub fn load_store(cards: Option<&Path>) -> Result<CardStore, ConfigError> {
    let Some(path) = cards else {
        return CardStore::with_cards(initial_cards()).map_err(ConfigError::Seed);
    };
    let json = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadCards { path: path.to_path_buf(), source })?;
    let store = CardStore::from_json(&json)
        .map_err(|source| ConfigError::InvalidCards { path: path.to_path_buf(), source })?;
    tracing::debug!(path = %path.display(), cards = store.len(), "loaded card snapshot");
    Ok(store)
}
