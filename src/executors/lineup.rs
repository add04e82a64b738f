//! Lineup command executor

use console::style;
use miette::{Result, WrapErr};
use serde_json::json;

use crate::cli::OutputFormat;
use crate::config::{LineupConfig, SourceMode};
use crate::core::PackageName;
use crate::dependency_filter::PackageFilter;
use crate::error::LineupError;
use crate::executors::CommandExecutor;

pub struct LineupExecutor;

impl CommandExecutor for LineupExecutor {
    type Config = LineupConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let discovery = &config.discovery;
        let root = discovery.package_name.as_str();

        let source = discovery
            .source
            .open()
            .wrap_err("Failed to open dependency source")?;

        let dependencies = source
            .dependencies(root)
            .map_err(LineupError::from)
            .wrap_err_with(|| format!("Failed to look up dependencies of '{root}'"))?;

        let filter = PackageFilter::from(discovery);
        let (filtered, kept): (Vec<PackageName>, Vec<PackageName>) = dependencies
            .into_iter()
            .partition(|dep| filter.should_skip(dep));

        match config.format {
            OutputFormat::Human => {
                println!("{} Configuration:", style("⚙").cyan());
                for (key, value) in configuration_entries(&config) {
                    println!("  {:<18} {}", style(key).bold(), value);
                }

                println!(
                    "\n{} Direct dependencies of {} ({}):",
                    style("📦").blue(),
                    style(root).green().bold(),
                    kept.len()
                );
                if kept.is_empty() {
                    println!("  {} (none)", style("└──").dim());
                }
                for dep in &kept {
                    println!("  {} {}", style("•").dim(), dep);
                }

                if !filtered.is_empty() {
                    println!(
                        "\n{} Left out by the package filter ({}):",
                        style("ℹ").blue(),
                        filtered.len()
                    );
                    for dep in &filtered {
                        println!("  {} {}", style("•").dim(), style(dep).dim());
                    }
                }
            }
            OutputFormat::Json => {
                let configuration: serde_json::Map<String, serde_json::Value> =
                    configuration_entries(&config)
                        .into_iter()
                        .map(|(key, value)| (key.to_string(), json!(value)))
                        .collect();

                let report = json!({
                    "configuration": configuration,
                    "package": root,
                    "dependencies": kept,
                    "filtered": filtered,
                });
                let output = serde_json::to_string_pretty(&report)
                    .map_err(LineupError::Json)
                    .wrap_err("Failed to serialize lineup report")?;
                println!("{output}");
            }
        }

        Ok(())
    }
}

fn configuration_entries(config: &LineupConfig) -> Vec<(&'static str, String)> {
    let discovery = &config.discovery;
    let mut entries = vec![
        ("package_name", discovery.package_name.clone()),
        ("filter_substring", discovery.filter_substring.clone()),
        ("max_depth", discovery.max_depth.to_string()),
    ];

    match &discovery.source {
        SourceMode::TestRepository(path) => {
            entries.push(("test_repository", path.display().to_string()));
        }
        SourceMode::Remote {
            repository_url,
            architecture,
            timeout,
        } => {
            entries.push(("repository_url", repository_url.clone()));
            entries.push(("architecture", architecture.clone()));
            entries.push(("timeout_seconds", timeout.as_secs().to_string()));
        }
    }

    entries
}
