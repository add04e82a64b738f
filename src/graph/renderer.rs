use std::collections::HashSet;
use std::io::Write;

use miette::Result;
use petgraph::visit::EdgeRef;

use crate::detector::DependencyCycle;
use crate::error::LineupError;
use crate::graph::DependencyGraph;

mod colors {
    pub const ROOT_NODE_FILL: &str = "#FFEBCD"; // Blanched almond
    pub const INTERMEDIATE_NODE_FILL: &str = "#E6E6FA"; // Lavender
    pub const LEAF_NODE_FILL: &str = "#F0F0F0"; // Light grey
    pub const NORMAL_NODE_STROKE: &str = "#1976D2"; // Medium blue
    pub const CYCLE_NODE_STROKE: &str = "#F57C00"; // Vibrant orange
    pub const NORMAL_EDGE: &str = "#64B5F6"; // Soft blue
    pub const CYCLE_EDGE: &str = "#FF6500"; // Deep orange
}

const CYCLE_MARKER: &str = "(cycle)";
const TREE_RULE_WIDTH: usize = 40;

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(LineupError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(LineupError::from)
    };
}

/// Position of a package within the rendered graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeRole {
    Root,
    Intermediate,
    Leaf,
}

impl NodeRole {
    fn fill(self) -> &'static str {
        match self {
            NodeRole::Root => colors::ROOT_NODE_FILL,
            NodeRole::Intermediate => colors::INTERMEDIATE_NODE_FILL,
            NodeRole::Leaf => colors::LEAF_NODE_FILL,
        }
    }
}

struct TreeFrame<'a> {
    package: &'a str,
    children_prefix: String,
    next: usize,
}

pub struct GraphRenderer {
    highlight_cycles: bool,
}

impl Default for GraphRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl GraphRenderer {
    pub fn new(highlight_cycles: bool) -> Self {
        Self { highlight_cycles }
    }

    /// Render the graph as an indented tree rooted at `root`.
    ///
    /// Shared dependencies are expanded under every parent. A package that
    /// already appears on the current branch is printed once more with a
    /// `(cycle)` marker and not expanded again.
    pub fn render_ascii_tree(
        &self,
        graph: &DependencyGraph,
        root: &str,
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "Dependency tree:")?;
        writeln_out!(output, "{}", "=".repeat(TREE_RULE_WIDTH))?;
        writeln_out!(output, "└── {root}")?;

        let mut on_branch: HashSet<&str> = HashSet::from([root]);
        let mut stack = vec![TreeFrame {
            package: root,
            children_prefix: "    ".to_string(),
            next: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let children = graph.dependencies_or_empty(frame.package);
            let Some(child) = children.get(frame.next) else {
                on_branch.remove(frame.package);
                stack.pop();
                continue;
            };

            frame.next += 1;
            let is_last = frame.next == children.len();
            let connector = if is_last { "└── " } else { "├── " };
            let prefix = &frame.children_prefix;

            if on_branch.contains(child.as_str()) {
                writeln_out!(output, "{prefix}{connector}{child} {CYCLE_MARKER}")?;
                continue;
            }

            writeln_out!(output, "{prefix}{connector}{child}")?;
            let children_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });

            on_branch.insert(child.as_str());
            stack.push(TreeFrame {
                package: child.as_str(),
                children_prefix,
                next: 0,
            });
        }

        Ok(())
    }

    /// Render a PlantUML component diagram.
    ///
    /// Nodes are sorted by name and coloured by role; each distinct edge is
    /// written once.
    pub fn render_plantuml(
        &self,
        graph: &DependencyGraph,
        root: &str,
        cycles: &[DependencyCycle],
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "@startuml")?;
        writeln_out!(output, "skinparam shadowing false")?;
        writeln_out!(output, "title Dependency graph of package: {root}")?;
        writeln_out!(output)?;

        let mut nodes = graph.all_packages();
        nodes.sort_unstable();

        for node in nodes {
            writeln_out!(
                output,
                r#"rectangle "{}" {}"#,
                node,
                self.role(graph, root, node).fill()
            )?;
        }

        writeln_out!(output)?;

        for (from, to) in unique_edges(graph) {
            if self.highlight_cycles && is_edge_in_cycle(from, to, cycles) {
                writeln_out!(
                    output,
                    r#""{}" -[{}]-> "{}""#,
                    from,
                    colors::CYCLE_EDGE,
                    to
                )?;
            } else {
                writeln_out!(output, r#""{}" --> "{}""#, from, to)?;
            }
        }

        writeln_out!(output, "@enduml")?;
        Ok(())
    }

    pub fn render_mermaid(
        &self,
        graph: &DependencyGraph,
        root: &str,
        cycles: &[DependencyCycle],
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "graph TD")?;

        for node in graph.all_packages() {
            let node_id = mermaid_id(node);
            let in_cycle = self.highlight_cycles && cycles.iter().any(|c| c.contains(node));
            let fill = self.role(graph, root, node).fill();

            if in_cycle {
                writeln_out!(output, "    {}((\"{}\"))", node_id, node)?;
                writeln_out!(
                    output,
                    "    style {} fill:{},stroke:{},stroke-width:3px",
                    node_id,
                    fill,
                    colors::CYCLE_NODE_STROKE
                )?;
            } else {
                writeln_out!(output, "    {}[\"{}\"]", node_id, node)?;
                writeln_out!(
                    output,
                    "    style {} fill:{},stroke:{},stroke-width:2px",
                    node_id,
                    fill,
                    colors::NORMAL_NODE_STROKE
                )?;
            }
        }

        writeln_out!(output)?;

        for (link_style_index, (from, to)) in unique_edges(graph).into_iter().enumerate() {
            writeln_out!(output, "    {} --> {}", mermaid_id(from), mermaid_id(to))?;

            let (color, width) = if self.highlight_cycles && is_edge_in_cycle(from, to, cycles) {
                (colors::CYCLE_EDGE, 3)
            } else {
                (colors::NORMAL_EDGE, 2)
            };
            writeln_out!(
                output,
                "    linkStyle {} stroke:{},stroke-width:{}px",
                link_style_index,
                color,
                width
            )?;
        }

        Ok(())
    }

    pub fn render_dot(
        &self,
        graph: &DependencyGraph,
        root: &str,
        cycles: &[DependencyCycle],
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "digraph package_dependencies {{")?;
        writeln_out!(output, "    rankdir=TB;")?;
        writeln_out!(output, "    node [shape=box, style=rounded];")?;
        writeln_out!(output)?;

        let (dag, _) = graph.to_petgraph();

        for node in dag.node_indices() {
            let name = dag[node].as_str();
            let in_cycle = self.highlight_cycles && cycles.iter().any(|c| c.contains(name));
            let stroke = if in_cycle {
                colors::CYCLE_NODE_STROKE
            } else {
                colors::NORMAL_NODE_STROKE
            };

            writeln_out!(
                output,
                r#"    "{}" [style=filled, fillcolor="{}", color="{}", penwidth={}];"#,
                name,
                self.role(graph, root, name).fill(),
                stroke,
                if in_cycle { 3 } else { 2 }
            )?;
        }

        writeln_out!(output)?;

        let mut seen = HashSet::new();
        for edge in dag.edge_references() {
            let from = dag[edge.source()].as_str();
            let to = dag[edge.target()].as_str();
            if !seen.insert((from, to)) {
                continue;
            }

            if self.highlight_cycles && is_edge_in_cycle(from, to, cycles) {
                writeln_out!(
                    output,
                    r#"    "{}" -> "{}" [color="{}", penwidth=3];"#,
                    from,
                    to,
                    colors::CYCLE_EDGE
                )?;
            } else {
                writeln_out!(
                    output,
                    r#"    "{}" -> "{}" [color="{}"];"#,
                    from,
                    to,
                    colors::NORMAL_EDGE
                )?;
            }
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    fn role(&self, graph: &DependencyGraph, root: &str, package: &str) -> NodeRole {
        if package == root {
            NodeRole::Root
        } else if !graph.dependencies_or_empty(package).is_empty() {
            NodeRole::Intermediate
        } else {
            NodeRole::Leaf
        }
    }
}

/// Distinct `(from, to)` pairs in graph order
fn unique_edges(graph: &DependencyGraph) -> Vec<(&str, &str)> {
    let mut seen = HashSet::new();
    graph
        .iter()
        .flat_map(|(from, deps)| deps.iter().map(move |to| (from, to.as_str())))
        .filter(|edge| seen.insert(*edge))
        .collect()
}

fn is_edge_in_cycle(from: &str, to: &str, cycles: &[DependencyCycle]) -> bool {
    cycles.iter().any(|cycle| cycle.has_edge(from, to))
}

fn mermaid_id(name: &str) -> String {
    // Replace non-alphanumeric characters with underscores for valid Mermaid IDs
    name.chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}
