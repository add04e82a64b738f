//! Lineup command configuration

use crate::cli::OutputFormat;
use crate::config::DiscoveryOptions;
use crate::error::LineupError;

#[derive(Debug, Clone)]
pub struct LineupConfig {
    pub discovery: DiscoveryOptions,
    pub format: OutputFormat,
}

impl LineupConfig {
    pub fn builder() -> LineupConfigBuilder {
        LineupConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct LineupConfigBuilder {
    discovery: Option<DiscoveryOptions>,
    format: Option<OutputFormat>,
}

impl LineupConfigBuilder {
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
}

impl crate::common::ConfigBuilder for LineupConfigBuilder {
    type Config = LineupConfig;

    fn build(self) -> Result<Self::Config, LineupError> {
        Ok(LineupConfig {
            discovery: self
                .discovery
                .ok_or_else(|| LineupError::ConfigurationError {
                    message: "Missing required field: discovery".to_string(),
                })?,
            format: self.format.ok_or_else(|| LineupError::ConfigurationError {
                message: "Missing required field: format".to_string(),
            })?,
        })
    }
}
