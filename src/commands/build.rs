//! Build command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::BuildConfig;
use crate::error::LineupError;

impl FromCommand for BuildConfig {
    fn from_command(command: Commands) -> Result<Self, LineupError> {
        match command {
            Commands::Build {
                common,
                format,
                no_tree,
            } => {
                let file = common.load_config_file()?;
                let ascii_tree = !no_tree && file.ascii_tree_mode.unwrap_or(true);

                BuildConfig::builder()
                    .with_discovery(common.discovery_options(&file)?)
                    .with_format(format.format)
                    .with_ascii_tree(ascii_tree)
                    .build()
            }
            _ => Err(LineupError::ConfigurationError {
                message: "Invalid command type for BuildConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(BuildConfig);

/// Execute the build command
pub fn execute_build_command(command: Commands) -> Result<()> {
    let config = BuildConfig::from_command(command)
        .wrap_err("Failed to parse build command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::build::BuildExecutor;
    BuildExecutor::execute(config)
}
