//! # pkg-lineup - Package Dependency Graphs and Load Orders
//!
//! pkg-lineup discovers the transitive dependencies of a package and works out
//! the order in which packages can be installed. Dependencies come from an APK
//! repository index or from a small line-oriented test repository file.
//!
//! ## Main Components
//!
//! - **Source**: Where dependency lists come from (fixture file, APK index,
//!   remote repository, or any closure)
//! - **Graph**: Breadth-first discovery with filtering, a depth bound and cycle
//!   detection, plus ASCII/PlantUML/Mermaid/DOT rendering
//! - **Analyzer**: Topological, BFS and DFS load orders and dependency levels
//! - **Detector**: Whole-graph cycle enumeration
//! - **Reports**: Human-readable and JSON output
//!
//! ## Usage
//!
//! ### Example: Load Orders from a Test Repository
//!
//! ```
//! use pkg_lineup::analyzer::LoadOrderAnalyzer;
//! use pkg_lineup::graph::DependencyGraphBuilder;
//! use pkg_lineup::reports::{HumanReportGenerator, ReportGenerator};
//! use pkg_lineup::source::FixtureRepository;
//!
//! # fn main() -> miette::Result<()> {
//! let repository = FixtureRepository::parse_str(
//!     "# package: dependencies\nA: B C\nB: D\nC: D\nD:\n",
//!     "repo.txt",
//! )?;
//!
//! // Step 1: Discover the graph reachable from the root
//! let graph = DependencyGraphBuilder::default().build_graph("A", &repository, None)?;
//!
//! // Step 2: Compute the load orders
//! let report = LoadOrderAnalyzer::new().analyze(&graph, "A");
//! assert_eq!(report.comparison.bfs, ["A", "B", "C", "D"]);
//! assert_eq!(report.comparison.topological.order(), ["D", "B", "C", "A"]);
//!
//! // Step 3: Print a report
//! println!("{}", HumanReportGenerator::new(None).generate_report(&report)?);
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Circular Dependencies
//!
//! ```
//! use pkg_lineup::error::LineupError;
//! use pkg_lineup::graph::DependencyGraphBuilder;
//! use pkg_lineup::source::FixtureRepository;
//!
//! # fn main() -> miette::Result<()> {
//! let repository = FixtureRepository::parse_str("A: B\nB: A\n", "cyclic.txt")?;
//!
//! match DependencyGraphBuilder::default().build_graph("A", &repository, None) {
//!     Err(LineupError::CircularDependency { cycle }) => {
//!         assert_eq!(cycle, ["A", "B", "A"]);
//!     }
//!     other => panic!("expected a cycle, got {other:?}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Remote Repository
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use pkg_lineup::dependency_filter::PackageFilter;
//! use pkg_lineup::graph::DependencyGraphBuilder;
//! use pkg_lineup::source::RemoteIndexSource;
//!
//! # fn main() -> miette::Result<()> {
//! let source = RemoteIndexSource::new(
//!     "https://dl-cdn.alpinelinux.org/alpine/v3.18/main",
//!     "x86_64",
//!     Duration::from_secs(30),
//! )?;
//!
//! // Leave out documentation packages and stop three levels below the root
//! let builder = DependencyGraphBuilder::new(PackageFilter::new("-doc"), 3);
//! let graph = builder.build_graph("nginx", &source, None)?;
//!
//! for failure in graph.lookup_failures() {
//!     eprintln!("{}", failure.error);
//! }
//! println!("{} packages", graph.len());
//! # Ok(())
//! # }
//! ```

// Private modules
mod utils;

// Public modules
pub mod analyzer;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod constants;
pub mod core;
pub mod dependency_filter;
pub mod detector;
pub mod error;
pub mod executors;
pub mod graph;
pub mod progress;
pub mod reports;
pub mod source;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
