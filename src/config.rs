//! Run configuration.
//!
//! Settings are layered: built-in defaults, then an optional settings file,
//! then `HORN_*` environment variables. The binary applies its command line
//! on top.

use crate::error::Result;
use ::config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings file looked up in the working directory when none is given.
pub const DEFAULT_SETTINGS_FILE: &str = "horn-logic.toml";

/// Bounds applied to a single query.
///
/// The default places no bound at all, so a query on a knowledge base with
/// non-ground cycles may not terminate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum nesting of OR-searches. Deeper branches yield no proofs.
    pub max_depth: Option<usize>,
}

impl SearchLimits {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        SearchLimits {
            max_depth: Some(max_depth),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Problem file to read.
    pub input: PathBuf,
    /// File receiving one `TRUE`/`FALSE` line per query.
    pub output: PathBuf,
    /// Log filter directive used when `RUST_LOG` is not set.
    pub log: String,
    #[serde(default)]
    pub max_depth: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            input: PathBuf::from("input.txt"),
            output: PathBuf::from("output.txt"),
            log: "warn".to_string(),
            max_depth: None,
        }
    }
}

impl Settings {
    /// Load settings from `file` (or the default settings file, if present)
    /// and the environment.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let defaults = Settings::default();
        let file_source = match file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_SETTINGS_FILE).required(false),
        };
        let settings = Config::builder()
            .set_default("input", defaults.input.to_string_lossy().into_owned())?
            .set_default("output", defaults.output.to_string_lossy().into_owned())?
            .set_default("log", defaults.log)?
            .add_source(file_source)
            .add_source(Environment::with_prefix("HORN").try_parsing(true))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    pub fn limits(&self) -> SearchLimits {
        SearchLimits {
            max_depth: self.max_depth,
        }
    }
}
