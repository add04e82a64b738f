//! Render command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::analyzer::LoadOrderAnalyzer;
use crate::cli::GraphFormat;
use crate::config::RenderOptions;
use crate::executors::{CommandExecutor, discover_graph};
use crate::graph::GraphRenderer;

pub struct RenderExecutor;

impl CommandExecutor for RenderExecutor {
    type Config = RenderOptions;

    fn execute(config: Self::Config) -> Result<()> {
        let root = config.discovery.package_name.as_str();

        eprintln!(
            "{} Rendering {} dependency graph of {}...",
            style("📊").cyan(),
            format!("{:?}", config.format).to_lowercase(),
            style(root).green().bold()
        );

        let graph = discover_graph(&config.discovery)?;

        let cycles = if config.highlight_cycles {
            LoadOrderAnalyzer::new().find_cycles(&graph)
        } else {
            Vec::new()
        };

        let renderer = GraphRenderer::new(config.highlight_cycles);

        // Determine output destination
        let mut output_writer: Box<dyn Write> = if let Some(output_path) = config.output.as_ref()
        {
            Box::new(BufWriter::new(
                File::create(output_path)
                    .into_diagnostic()
                    .wrap_err_with(|| {
                        format!("Failed to create output file '{}'", output_path.display())
                    })?,
            ))
        } else {
            Box::new(io::stdout())
        };

        match config.format {
            GraphFormat::Ascii => {
                renderer
                    .render_ascii_tree(&graph, root, output_writer.as_mut())
                    .wrap_err("Failed to render ASCII tree")?;
            }
            GraphFormat::PlantUml => {
                renderer
                    .render_plantuml(&graph, root, &cycles, output_writer.as_mut())
                    .wrap_err("Failed to render PlantUML graph")?;
            }
            GraphFormat::Mermaid => {
                renderer
                    .render_mermaid(&graph, root, &cycles, output_writer.as_mut())
                    .wrap_err("Failed to render Mermaid graph")?;
            }
            GraphFormat::Dot => {
                renderer
                    .render_dot(&graph, root, &cycles, output_writer.as_mut())
                    .wrap_err("Failed to render DOT graph")?;
            }
        }

        output_writer
            .flush()
            .into_diagnostic()
            .wrap_err("Failed to flush graph output")?;

        if let Some(output_path) = config.output {
            eprintln!(
                "{} Graph written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}
