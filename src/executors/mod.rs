//! Command executors that handle the actual logic for each command

pub mod build;
pub mod lineup;
pub mod order;
pub mod render;

use console::style;
use miette::{Result, WrapErr};

use crate::config::{DiscoveryOptions, SourceMode};
use crate::graph::DependencyGraph;
use crate::progress::ProgressReporter;

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Open the configured source and discover the root's dependency graph
pub(crate) fn discover_graph(options: &DiscoveryOptions) -> Result<DependencyGraph> {
    let source = options
        .source
        .open()
        .wrap_err("Failed to open dependency source")?;

    // Spinner only in an interactive terminal
    let mut progress = ProgressReporter::for_stderr();
    if let Some(p) = progress.as_mut() {
        p.start_discovery(&options.package_name);
    }

    let result = options.graph_builder().build_graph(
        &options.package_name,
        source.as_ref(),
        progress.as_ref(),
    );

    match (&result, progress.as_mut()) {
        (Ok(graph), Some(p)) => p.finish_discovery(graph.len()),
        (Err(_), Some(p)) => p.abort_discovery(),
        _ => {}
    }

    let graph = result.wrap_err_with(|| {
        format!(
            "Failed to build dependency graph for '{}'",
            options.package_name
        )
    })?;

    for failure in graph.lookup_failures() {
        eprintln!(
            "{} {} (depth {})",
            style("⚠").yellow(),
            failure.error,
            failure.depth
        );
    }

    Ok(graph)
}

/// One-line description of the dependency source
pub(crate) fn describe_source(source: &SourceMode) -> String {
    match source {
        SourceMode::TestRepository(path) => format!("test repository {}", path.display()),
        SourceMode::Remote {
            repository_url,
            architecture,
            ..
        } => format!("{repository_url} ({architecture})"),
    }
}
