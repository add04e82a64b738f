//! Render command configuration

use std::path::PathBuf;

use crate::cli::GraphFormat;
use crate::config::DiscoveryOptions;
use crate::error::LineupError;

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub discovery: DiscoveryOptions,
    pub format: GraphFormat,
    pub output: Option<PathBuf>,
    pub highlight_cycles: bool,
}

impl RenderOptions {
    pub fn builder() -> RenderOptionsBuilder {
        RenderOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct RenderOptionsBuilder {
    discovery: Option<DiscoveryOptions>,
    format: Option<GraphFormat>,
    output: Option<Option<PathBuf>>,
    highlight_cycles: Option<bool>,
}

impl RenderOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_discovery(mut self, discovery: DiscoveryOptions) -> Self {
        self.discovery = Some(discovery);
        self
    }

    pub fn with_format(mut self, format: GraphFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_highlight_cycles(mut self, highlight_cycles: bool) -> Self {
        self.highlight_cycles = Some(highlight_cycles);
        self
    }
}

impl crate::common::ConfigBuilder for RenderOptionsBuilder {
    type Config = RenderOptions;

    fn build(self) -> Result<Self::Config, LineupError> {
        Ok(RenderOptions {
            discovery: self
                .discovery
                .ok_or_else(|| LineupError::ConfigurationError {
                    message: "Missing required field: discovery".to_string(),
                })?,
            format: self.format.ok_or_else(|| LineupError::ConfigurationError {
                message: "Missing required field: format".to_string(),
            })?,
            output: self.output.ok_or_else(|| LineupError::ConfigurationError {
                message: "Missing required field: output".to_string(),
            })?,
            highlight_cycles: self.highlight_cycles.ok_or_else(|| {
                LineupError::ConfigurationError {
                    message: "Missing required field: highlight_cycles".to_string(),
                }
            })?,
        })
    }
}
