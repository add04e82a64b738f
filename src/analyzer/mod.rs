//! # Load Order Analysis Module
//!
//! Computes installation orders over a finished dependency graph.
//!
//! ## Key Components
//!
//! - **LoadOrderAnalyzer**: Topological (Kahn), level-synchronous BFS and DFS
//!   postorder load orders, dependency levels and whole-graph cycle search
//! - **TopologicalOrder**: Kahn result that also says which packages could not
//!   be ordered because of a cycle
//! - **LoadOrderComparison**: The three orders side by side
//! - **AnalysisReport**: Everything the report generators print
//!
//! ## Example
//!
//! ```
//! use pkg_lineup::analyzer::LoadOrderAnalyzer;
//! use pkg_lineup::graph::DependencyGraph;
//!
//! let graph = DependencyGraph::from_iter([
//!     ("A", vec!["B", "C"]),
//!     ("B", vec!["D"]),
//!     ("C", vec!["D"]),
//!     ("D", vec![]),
//! ]);
//!
//! let analyzer = LoadOrderAnalyzer::new();
//! assert_eq!(analyzer.bfs_load_order(&graph, "A"), ["A", "B", "C", "D"]);
//! assert_eq!(analyzer.dfs_load_order(&graph, "A"), ["D", "B", "C", "A"]);
//!
//! let topo = analyzer.topological_order(&graph);
//! assert!(topo.is_complete());
//! assert_eq!(topo.order().first().map(String::as_str), Some("D"));
//! ```

mod analyzer_impl;
pub use analyzer_impl::*;
