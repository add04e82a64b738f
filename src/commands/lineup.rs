//! Lineup command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::LineupConfig;
use crate::error::LineupError;

impl FromCommand for LineupConfig {
    fn from_command(command: Commands) -> Result<Self, LineupError> {
        match command {
            Commands::Lineup { common, format } => {
                let file = common.load_config_file()?;
                LineupConfig::builder()
                    .with_discovery(common.discovery_options(&file)?)
                    .with_format(format.format)
                    .build()
            }
            _ => Err(LineupError::ConfigurationError {
                message: "Invalid command type for LineupConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(LineupConfig);

/// Execute the lineup command
pub fn execute_lineup_command(command: Commands) -> Result<()> {
    let config = LineupConfig::from_command(command)
        .wrap_err("Failed to parse lineup command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::lineup::LineupExecutor;
    LineupExecutor::execute(config)
}
