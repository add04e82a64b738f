use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{CommonArgs, CycleDisplayArgs, FormatArgs};

#[derive(Parser)]
#[command(
    name = "pkg-lineup",
    about = "🧭 Discover package dependency graphs and compute safe load orders",
    long_about = "pkg-lineup walks the dependencies of a package breadth-first, either from an \
                  APK repository index or from a local test repository file, and reports the \
                  resulting graph, its circular dependencies and the order in which packages \
                  can be installed.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the configuration and the direct dependencies of the root package
    ///
    /// Performs a single lookup, without walking the graph. Useful for
    /// checking that the dependency source is reachable and the package name
    /// is right before running a full discovery.
    #[command(
        long_about = "Print the effective configuration (after merging the config file, \
                      environment and command-line arguments) and the direct dependencies of \
                      the root package. Dependencies the package filter would drop during \
                      discovery are listed separately."
    )]
    Lineup {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Build the dependency graph of the root package
    ///
    /// Walks the dependencies breadth-first up to the depth limit and prints
    /// graph statistics followed by an ASCII tree.
    #[command(
        long_about = "Discover the transitive dependencies of the root package. Names matching \
                      the filter substring and shared-object or file-path references are left \
                      out. Discovery stops with an error when a circular dependency is found or \
                      when the root package itself is filtered."
    )]
    Build {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        /// Do not print the ASCII dependency tree
        #[arg(long, env = "PKG_LINEUP_NO_TREE")]
        no_tree: bool,
    },

    /// Compute and compare load orders for the root package
    ///
    /// Builds the graph, then compares the topological, BFS and DFS orders and
    /// prints dependency levels, cycles and a recommended installation order.
    #[command(
        long_about = "Compute three installation orders over the discovered graph: Kahn's \
                      topological order (dependencies first), a level-synchronous breadth-first \
                      order and a depth-first postorder. The orders are compared side by side \
                      and the topological order is printed as the recommended load order."
    )]
    Order {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cycle_display: CycleDisplayArgs,
    },

    /// Render the dependency graph as a diagram
    ///
    /// Writes an ASCII tree, PlantUML, Mermaid or Graphviz DOT description of
    /// the graph to stdout or to a file.
    #[command(
        long_about = "Render the discovered dependency graph. PlantUML output colours the root, \
                      intermediate and leaf packages differently; Mermaid and DOT output \
                      highlight packages on dependency cycles. The output file defaults to \
                      `output_filename` from the configuration file."
    )]
    Render {
        #[command(flatten)]
        common: CommonArgs,

        /// Graph format
        #[arg(
            short,
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_GRAPH_FORMAT,
            env = "PKG_LINEUP_GRAPH_FORMAT"
        )]
        format: GraphFormat,

        /// Output file (stdout if neither this nor `output_filename` is set)
        #[arg(short, long, env = "PKG_LINEUP_OUTPUT")]
        output: Option<PathBuf>,

        /// Highlight cycles in the graph
        #[arg(
            long,
            action = clap::ArgAction::Set,
            default_value_t = true,
            env = "PKG_LINEUP_HIGHLIGHT_CYCLES"
        )]
        highlight_cycles: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum GraphFormat {
    Ascii,
    #[value(name = "plantuml")]
    PlantUml,
    Mermaid,
    Dot,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render_defaults() {
        let cli = Cli::try_parse_from(["pkg-lineup", "render", "--package", "A"]).unwrap();

        match cli.command {
            Commands::Render {
                format,
                output,
                highlight_cycles,
                common,
            } => {
                assert_eq!(format, GraphFormat::PlantUml);
                assert_eq!(output, None);
                assert!(highlight_cycles);
                assert_eq!(common.package.as_deref(), Some("A"));
            }
            _ => panic!("Expected render command"),
        }
    }

    #[test]
    fn test_parse_order_with_options() {
        let cli = Cli::try_parse_from([
            "pkg-lineup",
            "order",
            "--package",
            "nginx",
            "--filter",
            "doc",
            "--max-depth",
            "3",
            "--format",
            "json",
            "--max-cycles",
            "2",
        ])
        .unwrap();

        match cli.command {
            Commands::Order {
                common,
                format,
                cycle_display,
            } => {
                assert_eq!(common.filter.as_deref(), Some("doc"));
                assert_eq!(common.max_depth, Some(3));
                assert_eq!(format.format, OutputFormat::Json);
                assert_eq!(cycle_display.max_cycles, Some(2));
            }
            _ => panic!("Expected order command"),
        }
    }
}
