//! Core type definitions
//!
//! This module contains the basic data structures shared by the builder,
//! the analyzer and the reporting layer, with minimal logic.

use serde::Serialize;

use crate::error::LookupError;

/// Opaque package identifier; equality is exact string equality
pub type PackageName = String;

/// A dependency lookup that failed while the graph was being discovered.
///
/// The package is still present in the graph, with an empty dependency list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupFailure {
    pub package: PackageName,
    pub depth: usize,
    pub error: LookupError,
}

/// Summary counts for a finished dependency graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GraphStatistics {
    /// Number of visited packages (graph keys)
    pub total_packages: usize,
    /// Number of dependency edges across all visited packages
    pub total_dependencies: usize,
    /// Visited packages whose filtered dependency list is empty
    pub packages_without_dependencies: usize,
}
