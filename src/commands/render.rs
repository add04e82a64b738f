//! Render command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::RenderOptions;
use crate::error::LineupError;

impl FromCommand for RenderOptions {
    fn from_command(command: Commands) -> Result<Self, LineupError> {
        match command {
            Commands::Render {
                common,
                format,
                output,
                highlight_cycles,
            } => {
                let file = common.load_config_file()?;
                let output = output.or_else(|| file.output_filename.clone());

                RenderOptions::builder()
                    .with_discovery(common.discovery_options(&file)?)
                    .with_format(format)
                    .with_output(output)
                    .with_highlight_cycles(highlight_cycles)
                    .build()
            }
            _ => Err(LineupError::ConfigurationError {
                message: "Invalid command type for RenderOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(RenderOptions);

/// Execute the render command
pub fn execute_render_command(command: Commands) -> Result<()> {
    let config = RenderOptions::from_command(command)
        .wrap_err("Failed to parse render command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::render::RenderExecutor;
    RenderExecutor::execute(config)
}
