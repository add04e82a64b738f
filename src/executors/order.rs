//! Order command executor

use console::style;
use miette::{Result, WrapErr};

use crate::analyzer::LoadOrderAnalyzer;
use crate::cli::OutputFormat;
use crate::config::OrderConfig;
use crate::executors::{CommandExecutor, describe_source, discover_graph};
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};

pub struct OrderExecutor;

impl CommandExecutor for OrderExecutor {
    type Config = OrderConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let discovery = &config.discovery;

        eprintln!(
            "{} Computing load orders for {} from {}",
            style("🧭").cyan(),
            style(&discovery.package_name).green().bold(),
            describe_source(&discovery.source)
        );

        let graph = discover_graph(discovery)?;
        let report = LoadOrderAnalyzer::new().analyze(&graph, &discovery.package_name);

        let generator: Box<dyn ReportGenerator> = match config.format {
            OutputFormat::Human => Box::new(HumanReportGenerator::new(config.max_cycles)),
            OutputFormat::Json => Box::new(JsonReportGenerator::new()),
        };

        let output = generator
            .generate_report(&report)
            .wrap_err("Failed to generate load order report")?;
        println!("{output}");

        Ok(())
    }
}
