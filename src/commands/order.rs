//! Order command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::OrderConfig;
use crate::error::LineupError;

impl FromCommand for OrderConfig {
    fn from_command(command: Commands) -> Result<Self, LineupError> {
        match command {
            Commands::Order {
                common,
                format,
                cycle_display,
            } => {
                let file = common.load_config_file()?;
                OrderConfig::builder()
                    .with_discovery(common.discovery_options(&file)?)
                    .with_format(format.format)
                    .with_max_cycles(cycle_display.max_cycles)
                    .build()
            }
            _ => Err(LineupError::ConfigurationError {
                message: "Invalid command type for OrderConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(OrderConfig);

/// Execute the order command
pub fn execute_order_command(command: Commands) -> Result<()> {
    let config = OrderConfig::from_command(command)
        .wrap_err("Failed to parse order command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::order::OrderExecutor;
    OrderExecutor::execute(config)
}
