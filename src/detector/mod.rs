//! # Cycle Detection Module
//!
//! This module enumerates circular dependencies over a whole dependency
//! graph, independent of any root package.
//!
//! ## Algorithm
//!
//! A depth-first scan keeps a global visited set and the current recursion
//! path. Every edge that points back into the current path is reported as a
//! cycle (the path slice from that package onward), and the scan restarts
//! from each unvisited package so disconnected components are covered.
//!
//! The scan uses an explicit stack, so deep graphs do not grow the call stack.
//! Densely cyclic graphs can produce overlapping or nested reports: every
//! back edge found is reported, and none are deduplicated.
//!
//! ## Example
//!
//! ```
//! use pkg_lineup::detector::CycleDetector;
//! use pkg_lineup::graph::DependencyGraph;
//!
//! let graph = DependencyGraph::from_iter([
//!     ("I", vec!["A"]),
//!     ("A", vec!["B"]),
//!     ("B", vec!["I"]),
//! ]);
//!
//! let mut detector = CycleDetector::new();
//! detector.detect_cycles(&graph);
//!
//! assert!(detector.has_cycles());
//! assert_eq!(detector.cycles()[0].packages(), ["I", "A", "B"]);
//! ```

mod detector_impl;

pub use detector_impl::*;
