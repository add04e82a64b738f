//! # Graph Construction and Rendering Module
//!
//! This module builds the dependency graph of a root package and turns it into
//! something a person can read.
//!
//! ## Components
//!
//! ### Graph Building
//! - **DependencyGraphBuilder**: Breadth-first discovery from a root package,
//!   with filtering, a depth bound and cycle detection
//! - **DependencyGraph**: Adjacency mapping in visit order, plus the lookup
//!   failures recorded while it was built
//!
//! ### Graph Rendering
//! - **GraphRenderer**: ASCII tree, PlantUML, Mermaid and DOT output, with
//!   optional cycle highlighting
//!
//! ## Example
//!
//! ```
//! use pkg_lineup::graph::{DependencyGraphBuilder, GraphRenderer};
//! use pkg_lineup::source::FixtureRepository;
//!
//! # fn main() -> miette::Result<()> {
//! let repository = FixtureRepository::parse_str("A: B C\nB: D\nC: D\nD:", "inline")?;
//!
//! let graph = DependencyGraphBuilder::default().build_graph("A", &repository, None)?;
//! assert_eq!(graph.len(), 4);
//!
//! let mut output = Vec::new();
//! GraphRenderer::default().render_plantuml(&graph, "A", &[], &mut output)?;
//!
//! let uml = String::from_utf8(output).expect("renderer writes UTF-8");
//! assert!(uml.contains(r#""A" --> "B""#));
//! # Ok(())
//! # }
//! ```

mod builder;
mod renderer;
mod types;

pub use builder::DependencyGraphBuilder;
pub use renderer::GraphRenderer;
pub use types::DependencyGraph;
