//! # Configuration Module
//!
//! This module provides configuration structures for all pkg-lineup commands.
//! Discovery settings are shared; each command adds its own options on top,
//! and every configuration is assembled through a builder.
//!
//! ## Configurations
//!
//! - **ConfigFile**: Optional TOML file passed with `--config`
//! - **DiscoveryOptions**: Root package, filter, depth bound and dependency
//!   source
//! - **LineupConfig**: Configuration for the `lineup` command
//! - **BuildConfig**: Configuration for the `build` command
//! - **OrderConfig**: Configuration for the `order` command
//! - **RenderOptions**: Configuration for the `render` command
//!
//! ## Example
//!
//! ```
//! use std::path::PathBuf;
//!
//! use pkg_lineup::cli::GraphFormat;
//! use pkg_lineup::common::ConfigBuilder;
//! use pkg_lineup::config::{DiscoveryOptions, RenderOptions, SourceMode};
//!
//! # fn main() -> miette::Result<()> {
//! let discovery = DiscoveryOptions::builder()
//!     .with_package_name("A")
//!     .with_max_depth(10)
//!     .with_source(SourceMode::TestRepository(PathBuf::from("repo.txt")))
//!     .build()?;
//!
//! let options = RenderOptions::builder()
//!     .with_discovery(discovery)
//!     .with_format(GraphFormat::PlantUml)
//!     .with_output(None)
//!     .with_highlight_cycles(true)
//!     .build()?;
//!
//! assert_eq!(options.discovery.package_name, "A");
//! # Ok(())
//! # }
//! ```

pub mod build;
pub mod discovery;
pub mod file;
pub mod lineup;
pub mod order;
pub mod render;

pub use build::BuildConfig;
pub use discovery::{DiscoveryOptions, SourceMode};
pub use file::ConfigFile;
pub use lineup::LineupConfig;
pub use order::OrderConfig;
pub use render::RenderOptions;
