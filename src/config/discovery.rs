//! Discovery configuration shared by every command

use std::path::PathBuf;
use std::time::Duration;

use crate::dependency_filter::PackageFilter;
use crate::error::LineupError;
use crate::graph::DependencyGraphBuilder;
use crate::source::{DependencySource, FixtureRepository, RemoteIndexSource};

/// Where dependency lists come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceMode {
    /// Line-oriented fixture file
    TestRepository(PathBuf),
    /// `APKINDEX.tar.gz` downloaded from a repository
    Remote {
        repository_url: String,
        architecture: String,
        timeout: Duration,
    },
}

impl SourceMode {
    /// Open the configured source.
    ///
    /// Fixture files are read and parsed immediately; a remote index is only
    /// downloaded on the first lookup.
    pub fn open(&self) -> Result<Box<dyn DependencySource>, LineupError> {
        match self {
            SourceMode::TestRepository(path) => Ok(Box::new(FixtureRepository::from_path(path)?)),
            SourceMode::Remote {
                repository_url,
                architecture,
                timeout,
            } => Ok(Box::new(RemoteIndexSource::new(
                repository_url,
                architecture,
                *timeout,
            )?)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    pub package_name: String,
    pub filter_substring: String,
    pub max_depth: usize,
    pub source: SourceMode,
}

impl DiscoveryOptions {
    pub fn builder() -> DiscoveryOptionsBuilder {
        DiscoveryOptionsBuilder::new()
    }

    pub fn graph_builder(&self) -> DependencyGraphBuilder {
        DependencyGraphBuilder::new(PackageFilter::from(self), self.max_depth)
    }
}

#[derive(Default)]
pub struct DiscoveryOptionsBuilder {
    package_name: Option<String>,
    filter_substring: Option<String>,
    max_depth: Option<usize>,
    source: Option<SourceMode>,
}

impl DiscoveryOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_package_name(mut self, package_name: impl Into<String>) -> Self {
        self.package_name = Some(package_name.into());
        self
    }

    pub fn with_filter_substring(mut self, filter_substring: impl Into<String>) -> Self {
        self.filter_substring = Some(filter_substring.into());
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_source(mut self, source: SourceMode) -> Self {
        self.source = Some(source);
        self
    }
}

impl crate::common::ConfigBuilder for DiscoveryOptionsBuilder {
    type Config = DiscoveryOptions;

    fn build(self) -> Result<Self::Config, LineupError> {
        let package_name = self
            .package_name
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| LineupError::ConfigurationError {
                message: "Missing required field: package_name".to_string(),
            })?;

        if let Some(SourceMode::Remote { timeout, .. }) = &self.source
            && timeout.is_zero()
        {
            return Err(LineupError::ConfigurationError {
                message: "timeout_seconds must be greater than zero".to_string(),
            });
        }

        Ok(DiscoveryOptions {
            package_name,
            filter_substring: self.filter_substring.unwrap_or_default(),
            max_depth: self.max_depth.ok_or_else(|| LineupError::ConfigurationError {
                message: "Missing required field: max_depth".to_string(),
            })?,
            source: self.source.ok_or_else(|| LineupError::ConfigurationError {
                message: "Missing required field: source (set repository_url or test_repository)"
                    .to_string(),
            })?,
        })
    }
}
