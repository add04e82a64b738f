use miette::Result;
use tracing_subscriber::EnvFilter;

use pkg_lineup::constants::logging::{DEFAULT_DIRECTIVE, ENV_FILTER_VAR};

/// Main entry point for the pkg-lineup CLI tool
fn main() -> Result<()> {
    // Install miette's panic and error handler for beautiful error reporting
    miette::set_panic_hook();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(ENV_FILTER_VAR)
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    pkg_lineup::run()
}
