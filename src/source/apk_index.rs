use std::collections::HashMap;
use std::io::Read;

use flate2::read::GzDecoder;
use tracing::debug;

use super::DependencySource;
use crate::constants::index::{CONSTRAINT_CHARS, INDEX_ENTRY, MAX_SUGGESTIONS};
use crate::core::PackageName;
use crate::error::{LineupError, LookupError};

/// One package record from an APK index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexedPackage {
    pub name: PackageName,
    pub version: Option<String>,
    pub dependencies: Vec<PackageName>,
}

/// Parsed APK package index
#[derive(Debug, Clone, Default)]
pub struct ApkIndex {
    packages: HashMap<PackageName, IndexedPackage>,
}

impl ApkIndex {
    /// Parse the plain-text `APKINDEX` record format.
    ///
    /// Only `P:` (name), `V:` (version) and `D:` (dependencies) fields are
    /// read; a `P:` line starts a new record.
    pub fn parse(content: &str) -> Self {
        let mut packages = HashMap::new();
        let mut current: Option<IndexedPackage> = None;

        for line in content.lines() {
            if let Some(name) = line.strip_prefix("P:") {
                if let Some(done) = current.take() {
                    packages.insert(done.name.clone(), done);
                }
                current = Some(IndexedPackage {
                    name: name.trim().to_string(),
                    ..IndexedPackage::default()
                });
            } else if let Some(version) = line.strip_prefix("V:") {
                if let Some(record) = current.as_mut() {
                    record.version = Some(version.trim().to_string());
                }
            } else if let Some(deps) = line.strip_prefix("D:")
                && let Some(record) = current.as_mut()
            {
                record.dependencies = deps.split_whitespace().filter_map(strip_constraint).collect();
            }
        }

        if let Some(done) = current {
            packages.insert(done.name.clone(), done);
        }

        debug!(packages = packages.len(), "package index parsed");
        Self { packages }
    }

    /// Read the `APKINDEX` entry out of a gzip-compressed tar archive
    pub fn from_tar_gz<R: Read>(reader: R) -> Result<Self, LineupError> {
        let mut archive = tar::Archive::new(GzDecoder::new(reader));

        for entry in archive.entries()? {
            let mut entry = entry?;
            let is_index = entry
                .path()?
                .file_name()
                .is_some_and(|name| name == INDEX_ENTRY);

            if is_index {
                let mut bytes = Vec::new();
                entry.read_to_end(&mut bytes)?;
                return Ok(Self::parse(&String::from_utf8_lossy(&bytes)));
            }
        }

        Err(LineupError::IndexError {
            message: format!("archive has no {INDEX_ENTRY} entry"),
        })
    }

    pub fn get(&self, package: &str) -> Option<&IndexedPackage> {
        self.packages.get(package)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Package names containing `package`, case-insensitively, sorted
    pub fn suggestions(&self, package: &str) -> Vec<PackageName> {
        let needle = package.to_lowercase();
        let mut matches: Vec<PackageName> = self
            .packages
            .keys()
            .filter(|name| name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        matches.sort();
        matches.truncate(MAX_SUGGESTIONS);
        matches
    }
}

impl DependencySource for ApkIndex {
    fn dependencies(&self, package: &str) -> Result<Vec<PackageName>, LookupError> {
        match self.get(package) {
            Some(record) => Ok(record.dependencies.clone()),
            None => Err(LookupError::UnknownPackage {
                package: package.to_string(),
                suggestions: self.suggestions(package),
            }),
        }
    }
}

/// Cut a dependency token at its first version/operator character
fn strip_constraint(token: &str) -> Option<PackageName> {
    let name = match token.find(CONSTRAINT_CHARS) {
        Some(pos) => &token[..pos],
        None => token,
    };
    (!name.is_empty()).then(|| name.to_string())
}
