use std::path::Path;

use gridwords::utils::serialization;
use gridwords::SolveOptions;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::Cli;
use crate::error::{CliError, Result};

/// Puzzle description as stored in a `--config` JSON file. Every field is optional there;
/// the command line fills in or overrides what the file leaves out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PuzzleConfig {
    pub grid: Option<String>,
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub diagonals: bool,
    /// Word list path or URL, `-` for stdin
    pub words: Option<String>,
    pub dedup: bool,
}

impl PuzzleConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let config: Self = serialization::load_from_disk(path)?;
        debug!(path = %path.display(), "loaded puzzle config");
        Ok(config)
    }

    /// Command line values win over the file; switches are additive
    pub fn merge_cli(mut self, cli: &Cli) -> Self {
        if cli.grid.is_some() {
            self.grid = cli.grid.clone();
        }
        if cli.width.is_some() {
            self.width = cli.width;
        }
        if cli.height.is_some() {
            self.height = cli.height;
        }
        if cli.words.is_some() {
            self.words = cli.words.clone();
        }
        self.diagonals |= cli.diagonals;
        self.dedup |= cli.dedup;
        self
    }

    pub fn options(&self, parallel: bool) -> SolveOptions {
        SolveOptions {
            diagonals: self.diagonals,
            dedup: self.dedup,
            parallel,
        }
    }

    /// Width and height, both required
    pub fn shape(&self) -> Result<(usize, usize)> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => Ok((w, h)),
            (None, _) => Err(CliError::Config("grid width is missing (--width)".into())),
            (_, None) => Err(CliError::Config("grid height is missing (--height)".into())),
        }
    }

    /// Width and height, with a missing one inferred from the grid length
    pub fn shape_for(&self, grid: &str) -> Result<(usize, usize)> {
        let len = grid.chars().count();
        match (self.width, self.height) {
            (Some(w), Some(h)) => Ok((w, h)),
            (Some(w), None) if w > 0 => Ok((w, len / w)),
            (None, Some(h)) if h > 0 => Ok((len / h, h)),
            _ => self.shape(),
        }
    }

    pub fn words_path(&self) -> Result<&str> {
        self.words
            .as_deref()
            .ok_or_else(|| CliError::Config("no word list given (--words)".into()))
    }
}
