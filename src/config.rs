use std::path::PathBuf;

use crate::scanner::MARKER_DIR;
use crate::utils;

/// Folder under the home directory offered as the default scan root.
pub const DEFAULT_ROOT_SUFFIX: &str = "data/code";

/// Settings for one run, resolved from CLI flags and the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root offered to the user (or used directly when given on the CLI).
    pub root: PathBuf,
    pub marker: String,
    /// Fraction digits used when printing sizes.
    pub decimals: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: Self::default_root(),
            marker: MARKER_DIR.to_string(),
            decimals: 2,
        }
    }
}

impl Config {
    /// `<home>/data/code`, or the relative path when no home is known.
    pub fn default_root() -> PathBuf {
        match utils::home_dir() {
            Some(home) => home.join(DEFAULT_ROOT_SUFFIX),
            None => PathBuf::from(DEFAULT_ROOT_SUFFIX),
        }
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }
}
