use std::collections::HashMap;
use std::path::Path;

use miette::{NamedSource, SourceSpan};
use tracing::debug;

use super::DependencySource;
use crate::core::PackageName;
use crate::error::{FixtureParseError, LineupError, LookupError};

/// Static test repository read from a `name: dep1 dep2 ...` text file
#[derive(Debug, Clone, Default)]
pub struct FixtureRepository {
    packages: HashMap<PackageName, Vec<PackageName>>,
}

impl FixtureRepository {
    /// Read and parse a fixture file
    pub fn from_path(path: &Path) -> Result<Self, LineupError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| LineupError::FileReadError {
                path: path.to_path_buf(),
                source,
            })?;

        Self::parse_str(&content, &path.display().to_string())
    }

    /// Parse fixture content; `origin` names the source in diagnostics
    pub fn parse_str(content: &str, origin: &str) -> Result<Self, LineupError> {
        let mut packages = HashMap::new();
        let mut offset = 0;

        for (index, raw_line) in content.split_inclusive('\n').enumerate() {
            let line_start = offset;
            offset += raw_line.len();

            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let line_number = index + 1;
            let span_start = line_start + (raw_line.len() - raw_line.trim_start().len());
            let fail = |reason: &str| {
                LineupError::FixtureParseError(Box::new(FixtureParseError {
                    file: origin.to_string(),
                    line: line_number,
                    reason: reason.to_string(),
                    source_code: NamedSource::new(origin, content.to_string()),
                    span: Some(SourceSpan::new(span_start.into(), line.len())),
                }))
            };

            let Some((name, deps)) = line.split_once(':') else {
                return Err(fail("missing ':' separator"));
            };

            let name = name.trim();
            if name.is_empty() {
                return Err(fail("empty package name"));
            }

            let deps: Vec<PackageName> = deps.split_whitespace().map(str::to_string).collect();
            packages.insert(name.to_string(), deps);
        }

        if packages.is_empty() {
            return Err(LineupError::EmptyFixture {
                path: origin.to_string(),
            });
        }

        debug!(origin, packages = packages.len(), "test repository loaded");
        Ok(Self { packages })
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn contains(&self, package: &str) -> bool {
        self.packages.contains_key(package)
    }
}

impl DependencySource for FixtureRepository {
    /// Unknown packages are leaves: they resolve to an empty list
    fn dependencies(&self, package: &str) -> Result<Vec<PackageName>, LookupError> {
        Ok(self.packages.get(package).cloned().unwrap_or_default())
    }
}
