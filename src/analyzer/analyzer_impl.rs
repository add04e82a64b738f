use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

use serde::Serialize;
use tracing::{info, warn};

use crate::core::{GraphStatistics, LookupFailure, PackageName};
use crate::detector::{CycleDetector, DependencyCycle};
use crate::graph::DependencyGraph;

/// Result of Kahn's algorithm over a dependency graph.
///
/// `order` always names every package once. When the graph has a cycle,
/// only the first `resolved` entries form a valid load order; the rest are
/// the packages left on cycles, appended in graph order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopologicalOrder {
    order: Vec<PackageName>,
    resolved: usize,
}

impl TopologicalOrder {
    pub fn order(&self) -> &[PackageName] {
        &self.order
    }

    /// The prefix of `order` that respects every dependency edge
    pub fn resolved(&self) -> &[PackageName] {
        &self.order[..self.resolved]
    }

    /// Packages that could not be ordered because they sit on or behind a cycle
    pub fn unresolved(&self) -> &[PackageName] {
        &self.order[self.resolved..]
    }

    /// True when the order is a valid topological order
    pub fn is_complete(&self) -> bool {
        self.resolved == self.order.len()
    }

    pub fn into_order(self) -> Vec<PackageName> {
        self.order
    }
}

/// The three primary load orders side by side
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadOrderComparison {
    pub topological: TopologicalOrder,
    pub bfs: Vec<PackageName>,
    pub dfs: Vec<PackageName>,
}

impl LoadOrderComparison {
    /// True when all three orders are identical
    pub fn all_identical(&self) -> bool {
        self.bfs == self.dfs && self.dfs == self.topological.order()
    }

    /// BFS is level-synchronous while the topological order is
    /// dependency-driven, so a mismatch is expected and not an error
    pub fn bfs_matches_topological(&self) -> bool {
        self.bfs == self.topological.order()
    }

    pub fn dfs_matches_topological(&self) -> bool {
        self.dfs == self.topological.order()
    }
}

/// Everything the reporting layer prints for one root
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub root: PackageName,
    pub statistics: GraphStatistics,
    pub comparison: LoadOrderComparison,
    pub levels: BTreeMap<usize, Vec<PackageName>>,
    pub cycles: Vec<DependencyCycle>,
    pub lookup_failures: Vec<LookupFailure>,
}

/// Computes load orders over a finished dependency graph.
///
/// Every method is read-only; the same graph can be analyzed any number
/// of times.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOrderAnalyzer;

impl LoadOrderAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Kahn's algorithm, dependencies first.
    ///
    /// A package becomes ready once all of its direct dependencies have been
    /// emitted. Packages are seeded and released in graph order (visited
    /// packages in visit order, then dangling names), which keeps the result
    /// deterministic.
    pub fn topological_order(&self, graph: &DependencyGraph) -> TopologicalOrder {
        let nodes = graph.all_packages();

        let mut pending: HashMap<&str, usize> = nodes.iter().map(|&n| (n, 0)).collect();
        let mut dependents: HashMap<&str, Vec<&str>> = HashMap::new();
        for (package, deps) in graph.iter() {
            for dep in deps {
                *pending.entry(package).or_default() += 1;
                dependents.entry(dep.as_str()).or_default().push(package);
            }
        }

        let mut queue: VecDeque<&str> = nodes
            .iter()
            .copied()
            .filter(|n| pending[n] == 0)
            .collect();
        let mut order: Vec<PackageName> = Vec::with_capacity(nodes.len());

        while let Some(package) = queue.pop_front() {
            order.push(package.to_string());

            for &dependent in dependents.get(package).into_iter().flatten() {
                if let Some(count) = pending.get_mut(dependent) {
                    *count -= 1;
                    if *count == 0 {
                        queue.push_back(dependent);
                    }
                }
            }
        }

        let resolved = order.len();
        if resolved < nodes.len() {
            let emitted: HashSet<&str> = order.iter().map(String::as_str).collect();
            let remaining: Vec<&str> = nodes
                .into_iter()
                .filter(|n| !emitted.contains(n))
                .collect();

            warn!(
                packages = ?remaining,
                "circular dependencies prevent a complete topological order"
            );
            order.extend(remaining.into_iter().map(str::to_string));
        }

        TopologicalOrder { order, resolved }
    }

    /// Level-synchronous breadth-first order from `root`.
    ///
    /// Each level is sorted lexicographically before it is appended, so the
    /// result does not depend on the order of adjacency lists.
    pub fn bfs_load_order(&self, graph: &DependencyGraph, root: &str) -> Vec<PackageName> {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::from([root]);
        let mut order = Vec::new();

        while !queue.is_empty() {
            let mut level = Vec::new();

            for _ in 0..queue.len() {
                let Some(package) = queue.pop_front() else {
                    break;
                };
                if !visited.insert(package) {
                    continue;
                }
                level.push(package);

                for dep in graph.dependencies_or_empty(package) {
                    if !visited.contains(dep.as_str()) {
                        queue.push_back(dep.as_str());
                    }
                }
            }

            level.sort_unstable();
            order.extend(level.into_iter().map(str::to_string));
        }

        order
    }

    /// Depth-first postorder from `root`: every package follows its
    /// dependencies. Siblings are explored in adjacency-list order.
    pub fn dfs_load_order(&self, graph: &DependencyGraph, root: &str) -> Vec<PackageName> {
        let mut visited: HashSet<&str> = HashSet::from([root]);
        let mut stack: Vec<(&str, usize)> = vec![(root, 0)];
        let mut order = Vec::new();

        while let Some((package, next)) = stack.last_mut() {
            let deps = graph.dependencies_or_empty(package);

            match deps.get(*next) {
                Some(dep) => {
                    *next += 1;
                    if visited.insert(dep.as_str()) {
                        stack.push((dep.as_str(), 0));
                    }
                }
                None => {
                    order.push(package.to_string());
                    stack.pop();
                }
            }
        }

        order
    }

    /// Breadth-first distance from `root`, grouped by level.
    ///
    /// A package keeps the level at which it was first reached.
    pub fn dependency_levels(
        &self,
        graph: &DependencyGraph,
        root: &str,
    ) -> BTreeMap<usize, Vec<PackageName>> {
        let mut levels: BTreeMap<usize, Vec<PackageName>> = BTreeMap::new();
        let mut visited: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<(&str, usize)> = VecDeque::from([(root, 0)]);

        while let Some((package, level)) = queue.pop_front() {
            if !visited.insert(package) {
                continue;
            }
            levels.entry(level).or_default().push(package.to_string());

            for dep in graph.dependencies_or_empty(package) {
                if !visited.contains(dep.as_str()) {
                    queue.push_back((dep.as_str(), level + 1));
                }
            }
        }

        levels
    }

    /// Enumerate cycles across the whole graph
    pub fn find_cycles(&self, graph: &DependencyGraph) -> Vec<DependencyCycle> {
        let mut detector = CycleDetector::new();
        detector.detect_cycles(graph);
        detector.into_cycles()
    }

    /// Compute the three primary orders for `root`
    pub fn compare_load_orders(&self, graph: &DependencyGraph, root: &str) -> LoadOrderComparison {
        let comparison = LoadOrderComparison {
            topological: self.topological_order(graph),
            bfs: self.bfs_load_order(graph, root),
            dfs: self.dfs_load_order(graph, root),
        };

        if !comparison.bfs_matches_topological() {
            info!(
                root,
                "BFS order differs from topological order (level-synchronous vs dependency-driven)"
            );
        }

        comparison
    }

    /// Full analysis of one root: statistics, orders, levels, cycles and the
    /// lookup failures recorded during discovery
    pub fn analyze(&self, graph: &DependencyGraph, root: &str) -> AnalysisReport {
        AnalysisReport {
            root: root.to_string(),
            statistics: graph.statistics(),
            comparison: self.compare_load_orders(graph, root),
            levels: self.dependency_levels(graph, root),
            cycles: self.find_cycles(graph),
            lookup_failures: graph.lookup_failures().to_vec(),
        }
    }
}
