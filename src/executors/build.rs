//! Build command executor

use std::io;

use console::style;
use miette::{Result, WrapErr};
use serde_json::json;

use crate::cli::OutputFormat;
use crate::config::BuildConfig;
use crate::error::LineupError;
use crate::executors::{CommandExecutor, describe_source, discover_graph};
use crate::graph::{DependencyGraph, GraphRenderer};
use crate::utils::string::pluralize;

pub struct BuildExecutor;

impl CommandExecutor for BuildExecutor {
    type Config = BuildConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let discovery = &config.discovery;
        let root = discovery.package_name.as_str();

        eprintln!(
            "{} Building dependency graph of {} from {} (max depth {})",
            style("🔨").blue(),
            style(root).green().bold(),
            describe_source(&discovery.source),
            discovery.max_depth
        );

        let graph = discover_graph(discovery)?;

        match config.format {
            OutputFormat::Human => {
                let stats = graph.statistics();
                println!("\n{} Graph statistics:", style("📊").cyan());
                println!(
                    "  {} {}",
                    style(stats.total_packages).yellow().bold(),
                    pluralize("package", stats.total_packages)
                );
                println!(
                    "  {} {}",
                    style(stats.total_dependencies).yellow().bold(),
                    pluralize("dependency edge", stats.total_dependencies)
                );
                println!(
                    "  {} without dependencies",
                    style(stats.packages_without_dependencies).yellow().bold()
                );

                if config.ascii_tree {
                    println!();
                    GraphRenderer::default()
                        .render_ascii_tree(&graph, root, &mut io::stdout())
                        .wrap_err("Failed to render ASCII tree")?;
                }
            }
            OutputFormat::Json => {
                let output = graph_json(&graph, root)
                    .wrap_err("Failed to serialize dependency graph")?;
                println!("{output}");
            }
        }

        Ok(())
    }
}

fn graph_json(graph: &DependencyGraph, root: &str) -> Result<String, LineupError> {
    let packages: Vec<_> = graph
        .iter()
        .map(|(package, dependencies)| {
            json!({
                "package": package,
                "dependencies": dependencies,
            })
        })
        .collect();

    let lookup_failures: Vec<_> = graph
        .lookup_failures()
        .iter()
        .map(|failure| {
            json!({
                "package": failure.package,
                "depth": failure.depth,
                "error": failure.error.to_string(),
            })
        })
        .collect();

    let report = json!({
        "root": root,
        "statistics": graph.statistics(),
        "packages": packages,
        "lookup_failures": lookup_failures,
    });

    serde_json::to_string_pretty(&report).map_err(LineupError::Json)
}
