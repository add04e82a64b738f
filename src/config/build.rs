//! Build command configuration

use crate::cli::OutputFormat;
use crate::config::DiscoveryOptions;
use crate::error::LineupError;

#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub discovery: DiscoveryOptions,
    pub format: OutputFormat,
    /// Print the ASCII tree after the statistics
    pub ascii_tree: bool,
}

impl BuildConfig {
    pub fn builder() -> BuildConfigBuilder {
        BuildConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct BuildConfigBuilder {
    discovery: Option<DiscoveryOptions>,
    format: Option<OutputFormat>,
    ascii_tree: Option<bool>,
}

impl BuildConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_discovery(mut self, discovery: DiscoveryOptions) -> Self {
        self.discovery = Some(discovery);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_ascii_tree(mut self, ascii_tree: bool) -> Self {
        self.ascii_tree = Some(ascii_tree);
        self
    }
}

impl crate::common::ConfigBuilder for BuildConfigBuilder {
    type Config = BuildConfig;

    fn build(self) -> Result<Self::Config, LineupError> {
        Ok(BuildConfig {
            discovery: self
                .discovery
                .ok_or_else(|| LineupError::ConfigurationError {
                    message: "Missing required field: discovery".to_string(),
                })?,
            format: self.format.ok_or_else(|| LineupError::ConfigurationError {
                message: "Missing required field: format".to_string(),
            })?,
            ascii_tree: self.ascii_tree.unwrap_or(true),
        })
    }
}
