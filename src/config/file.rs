//! TOML configuration file

use std::path::{Path, PathBuf};

use miette::{NamedSource, SourceSpan};
use serde::Deserialize;
use tracing::debug;

use crate::error::{ConfigParseError, LineupError};

/// Values read from a `--config` file.
///
/// Every field is optional; command-line arguments take precedence over
/// anything set here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub package_name: Option<String>,
    pub repository_url: Option<String>,
    pub architecture: Option<String>,
    /// Fixture file; when set, discovery reads it instead of a remote index
    pub test_repository: Option<PathBuf>,
    pub output_filename: Option<PathBuf>,
    pub ascii_tree_mode: Option<bool>,
    pub filter_substring: Option<String>,
    pub max_depth: Option<usize>,
    pub timeout_seconds: Option<u64>,
}

impl ConfigFile {
    pub fn parse_file(path: &Path) -> Result<Self, LineupError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| LineupError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        debug!(path = %path.display(), "loading configuration file");
        Self::parse_str(&content, &path.display().to_string())
    }

    pub fn parse_str(content: &str, origin: &str) -> Result<Self, LineupError> {
        toml::from_str(content).map_err(|e| {
            let span = e
                .span()
                .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

            LineupError::ConfigParseError(Box::new(ConfigParseError {
                file: origin.to_string(),
                source_code: NamedSource::new(origin, content.to_string()),
                span,
                source: e,
            }))
        })
    }
}
