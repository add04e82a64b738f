//! Core graph types
//!
//! This module contains the adjacency mapping produced by discovery and
//! consumed by every analysis and rendering step.

use std::collections::{HashMap, HashSet};

use petgraph::graph::{DiGraph, NodeIndex};

use crate::core::{GraphStatistics, LookupFailure, PackageName};

/// Directed adjacency mapping from a package to its direct dependencies.
///
/// Keys are the visited packages, kept in visit order. A name may appear as a
/// dependency without being a key when it was beyond the depth limit of the
/// discovery that produced the graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    order: Vec<PackageName>,
    dependencies: HashMap<PackageName, Vec<PackageName>>,
    lookup_failures: Vec<LookupFailure>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visited package. Re-inserting a package replaces its
    /// dependency list but keeps its original position.
    pub fn insert(&mut self, package: impl Into<PackageName>, dependencies: Vec<PackageName>) {
        let package = package.into();
        if !self.dependencies.contains_key(&package) {
            self.order.push(package.clone());
        }
        self.dependencies.insert(package, dependencies);
    }

    pub(crate) fn record_lookup_failure(&mut self, failure: LookupFailure) {
        self.lookup_failures.push(failure);
    }

    /// Direct dependencies of a visited package
    pub fn dependencies(&self, package: &str) -> Option<&[PackageName]> {
        self.dependencies.get(package).map(Vec::as_slice)
    }

    /// Direct dependencies, or an empty slice for packages that are not keys
    pub fn dependencies_or_empty(&self, package: &str) -> &[PackageName] {
        self.dependencies(package).unwrap_or(&[])
    }

    pub fn contains(&self, package: &str) -> bool {
        self.dependencies.contains_key(package)
    }

    /// Visited packages in visit order
    pub fn packages(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// `(package, dependencies)` pairs in visit order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[PackageName])> {
        self.order
            .iter()
            .map(|package| (package.as_str(), self.dependencies_or_empty(package)))
    }

    /// Every name in the graph: keys in visit order, then dangling
    /// dependency names in first-seen order
    pub fn all_packages(&self) -> Vec<&str> {
        let mut seen: HashSet<&str> = self.packages().collect();
        let mut all: Vec<&str> = self.packages().collect();

        for (_, deps) in self.iter() {
            for dep in deps {
                if seen.insert(dep.as_str()) {
                    all.push(dep.as_str());
                }
            }
        }

        all
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.dependencies.values().map(Vec::len).sum()
    }

    /// Lookups that failed during discovery, in the order they happened
    pub fn lookup_failures(&self) -> &[LookupFailure] {
        &self.lookup_failures
    }

    pub fn statistics(&self) -> GraphStatistics {
        GraphStatistics {
            total_packages: self.len(),
            total_dependencies: self.edge_count(),
            packages_without_dependencies: self
                .dependencies
                .values()
                .filter(|deps| deps.is_empty())
                .count(),
        }
    }

    /// Convert into a petgraph graph holding every name as a node.
    ///
    /// Returns the graph together with the name-to-index lookup.
    pub fn to_petgraph(&self) -> (DiGraph<PackageName, ()>, HashMap<PackageName, NodeIndex>) {
        let mut graph = DiGraph::new();
        let mut indices = HashMap::new();

        for package in self.all_packages() {
            let idx = graph.add_node(package.to_string());
            indices.insert(package.to_string(), idx);
        }

        for (package, deps) in self.iter() {
            let from = indices[package];
            for dep in deps {
                graph.add_edge(from, indices[dep.as_str()], ());
            }
        }

        (graph, indices)
    }
}

impl<P, D> FromIterator<(P, Vec<D>)> for DependencyGraph
where
    P: Into<PackageName>,
    D: Into<PackageName>,
{
    fn from_iter<I: IntoIterator<Item = (P, Vec<D>)>>(iter: I) -> Self {
        let mut graph = Self::new();
        for (package, deps) in iter {
            graph.insert(package, deps.into_iter().map(Into::into).collect());
        }
        graph
    }
}
