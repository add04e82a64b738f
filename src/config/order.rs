//! Order command configuration

use crate::cli::OutputFormat;
use crate::config::DiscoveryOptions;
use crate::error::LineupError;

#[derive(Debug, Clone)]
pub struct OrderConfig {
    pub discovery: DiscoveryOptions,
    pub format: OutputFormat,
    pub max_cycles: Option<usize>,
}

impl OrderConfig {
    pub fn builder() -> OrderConfigBuilder {
        OrderConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct OrderConfigBuilder {
    discovery: Option<DiscoveryOptions>,
    format: Option<OutputFormat>,
    max_cycles: Option<usize>,
}

impl OrderConfigBuilder {
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

    pub fn with_max_cycles(mut self, max_cycles: Option<usize>) -> Self {
        self.max_cycles = max_cycles;
        self
    }
}

impl crate::common::ConfigBuilder for OrderConfigBuilder {
    type Config = OrderConfig;

    fn build(self) -> Result<Self::Config, LineupError> {
        Ok(OrderConfig {
            discovery: self
                .discovery
                .ok_or_else(|| LineupError::ConfigurationError {
                    message: "Missing required field: discovery".to_string(),
                })?,
            format: self.format.ok_or_else(|| LineupError::ConfigurationError {
                message: "Missing required field: format".to_string(),
            })?,
            max_cycles: self.max_cycles,
        })
    }
}
