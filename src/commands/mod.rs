//! Command implementations for the pkg-lineup CLI
//!
//! This module contains the implementations for each CLI command:
//! - lineup: Show the configuration and the root's direct dependencies
//! - build: Build the dependency graph and print it as a tree
//! - order: Compute and compare load orders
//! - render: Render the graph as a diagram

pub mod build;
pub mod lineup;
pub mod order;
pub mod render;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Lineup { .. } => lineup::execute_lineup_command(command),
        Commands::Build { .. } => build::execute_build_command(command),
        Commands::Order { .. } => order::execute_order_command(command),
        Commands::Render { .. } => render::execute_render_command(command),
    }
}
