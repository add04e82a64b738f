//! Common functionality shared across commands

use std::path::PathBuf;
use std::time::Duration;

use clap::Args;

use crate::config::{ConfigFile, DiscoveryOptions, SourceMode};
use crate::constants::discovery::DEFAULT_MAX_DEPTH;
use crate::constants::index::{DEFAULT_ARCHITECTURE, DEFAULT_TIMEOUT_SECONDS};
use crate::error::LineupError;

/// Common arguments shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// TOML configuration file
    #[arg(short, long, value_name = "FILE", env = "PKG_LINEUP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Root package to analyze
    #[arg(short, long, value_name = "PACKAGE", env = "PKG_LINEUP_PACKAGE")]
    pub package: Option<String>,

    /// Read dependencies from a test repository file instead of a remote index
    #[arg(long, value_name = "FILE", env = "PKG_LINEUP_TEST_REPOSITORY")]
    pub test_repository: Option<PathBuf>,

    /// Base URL of the APK repository
    #[arg(long, value_name = "URL", env = "PKG_LINEUP_REPOSITORY_URL")]
    pub repository_url: Option<String>,

    /// Repository architecture
    #[arg(long, value_name = "ARCH", env = "PKG_LINEUP_ARCH")]
    pub arch: Option<String>,

    /// Leave out packages whose name contains this substring
    #[arg(long, value_name = "SUBSTRING", env = "PKG_LINEUP_FILTER")]
    pub filter: Option<String>,

    /// Maximum discovery depth from the root package
    #[arg(long, value_name = "DEPTH", env = "PKG_LINEUP_MAX_DEPTH")]
    pub max_depth: Option<usize>,

    /// Timeout for repository requests, in seconds
    #[arg(long, value_name = "SECONDS", env = "PKG_LINEUP_TIMEOUT_SECONDS")]
    pub timeout_seconds: Option<u64>,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "PKG_LINEUP_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Common cycle display arguments
#[derive(Args, Debug, Clone)]
pub struct CycleDisplayArgs {
    /// Maximum number of cycles to display (shows all by default)
    #[arg(long, env = "PKG_LINEUP_MAX_CYCLES")]
    pub max_cycles: Option<usize>,
}

impl CommonArgs {
    /// Load the `--config` file, or an empty configuration when none is given
    pub fn load_config_file(&self) -> Result<ConfigFile, LineupError> {
        match &self.config {
            Some(path) => ConfigFile::parse_file(path),
            None => Ok(ConfigFile::default()),
        }
    }

    /// Merge command-line values over `file` into discovery options.
    ///
    /// A test repository, from either place, takes precedence over a remote
    /// repository.
    pub fn discovery_options(&self, file: &ConfigFile) -> Result<DiscoveryOptions, LineupError> {
        let test_repository = self
            .test_repository
            .clone()
            .or_else(|| file.test_repository.clone());
        let repository_url = self
            .repository_url
            .clone()
            .or_else(|| file.repository_url.clone());

        let source = match (test_repository, repository_url) {
            (Some(path), _) => Some(SourceMode::TestRepository(path)),
            (None, Some(repository_url)) => Some(SourceMode::Remote {
                repository_url,
                architecture: self
                    .arch
                    .clone()
                    .or_else(|| file.architecture.clone())
                    .unwrap_or_else(|| DEFAULT_ARCHITECTURE.to_string()),
                timeout: Duration::from_secs(
                    self.timeout_seconds
                        .or(file.timeout_seconds)
                        .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
                ),
            }),
            (None, None) => None,
        };

        let mut builder = DiscoveryOptions::builder()
            .with_filter_substring(
                self.filter
                    .clone()
                    .or_else(|| file.filter_substring.clone())
                    .unwrap_or_default(),
            )
            .with_max_depth(
                self.max_depth
                    .or(file.max_depth)
                    .unwrap_or(DEFAULT_MAX_DEPTH),
            );

        if let Some(package) = self.package.clone().or_else(|| file.package_name.clone()) {
            builder = builder.with_package_name(package);
        }
        if let Some(source) = source {
            builder = builder.with_source(source);
        }

        builder.build()
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, LineupError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, LineupError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::LineupError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}
