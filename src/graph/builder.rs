use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info, warn};

use super::types::DependencyGraph;
use crate::constants::discovery::DEFAULT_MAX_DEPTH;
use crate::core::{LookupFailure, PackageName};
use crate::dependency_filter::PackageFilter;
use crate::error::LineupError;
use crate::progress::ProgressReporter;
use crate::source::DependencySource;

/// Builder for discovering dependency graphs
///
/// Performs a bounded breadth-first walk from a root package, querying a
/// [`DependencySource`] once per visited package. Filtered names never enter
/// the graph, and a dependency cycle aborts the build.
#[derive(Debug, Clone)]
pub struct DependencyGraphBuilder {
    filter: PackageFilter,
    max_depth: usize,
    cancel: Option<Arc<AtomicBool>>,
}

impl Default for DependencyGraphBuilder {
    fn default() -> Self {
        Self::new(PackageFilter::default(), DEFAULT_MAX_DEPTH)
    }
}

/// Transient breadth-first discovery state, owned by one build
struct Frontier {
    queue: VecDeque<(PackageName, usize)>,
    visited: HashSet<PackageName>,
    parent: HashMap<PackageName, PackageName>,
}

impl Frontier {
    fn new(root: &str) -> Self {
        Self {
            queue: VecDeque::from([(root.to_string(), 0)]),
            visited: HashSet::new(),
            parent: HashMap::new(),
        }
    }

    /// A package is discovered once it is visited or claimed by a parent
    fn is_discovered(&self, package: &str) -> bool {
        self.visited.contains(package) || self.parent.contains_key(package)
    }

    /// Walk parent links from `current` looking for `ancestor`.
    ///
    /// Returns the closed path `ancestor -> ... -> current -> ancestor`.
    fn path_to_ancestor(&self, current: &str, ancestor: &str) -> Option<Vec<PackageName>> {
        let mut path = vec![current.to_string()];
        let mut node = current;

        while node != ancestor {
            node = self.parent.get(node)?.as_str();
            path.push(node.to_string());
        }

        path.reverse();
        path.push(ancestor.to_string());
        Some(path)
    }
}

impl DependencyGraphBuilder {
    /// Create a new dependency graph builder
    ///
    /// # Arguments
    /// * `filter` - Names excluded from traversal
    /// * `max_depth` - Inclusive BFS depth bound from the root
    pub fn new(filter: PackageFilter, max_depth: usize) -> Self {
        Self {
            filter,
            max_depth,
            cancel: None,
        }
    }

    /// Stop discovery before the next lookup once `flag` is set
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn filter(&self) -> &PackageFilter {
        &self.filter
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Discover the dependency graph reachable from `root`
    ///
    /// Lookup failures are recorded on the graph and the package is kept with
    /// an empty dependency list. Fails when the root itself is filtered, when
    /// a dependency cycle is found, or when the build is cancelled.
    pub fn build_graph(
        &self,
        root: &str,
        source: &dyn DependencySource,
        progress: Option<&ProgressReporter>,
    ) -> Result<DependencyGraph, LineupError> {
        if self.filter.should_skip(root) {
            return Err(LineupError::FilteredRoot {
                package: root.to_string(),
                filter: self.filter.filter_substring().to_string(),
            });
        }

        let mut graph = DependencyGraph::new();
        let mut frontier = Frontier::new(root);

        while let Some((package, depth)) = frontier.queue.pop_front() {
            if frontier.visited.contains(&package) {
                continue;
            }

            if depth > self.max_depth {
                info!(%package, max_depth = self.max_depth, "max depth reached, not expanding");
                continue;
            }

            if self
                .cancel
                .as_ref()
                .is_some_and(|flag| flag.load(Ordering::Relaxed))
            {
                return Err(LineupError::Cancelled { package });
            }

            frontier.visited.insert(package.clone());
            debug!(%package, depth, "analyzing package");
            if let Some(p) = progress {
                p.visiting_package(&package, depth);
            }

            let deps = match source.dependencies(&package) {
                Ok(deps) => self.filter_dependencies(deps),
                Err(error) => {
                    warn!(%package, %error, "dependency lookup failed, treating as leaf");
                    graph.record_lookup_failure(LookupFailure {
                        package: package.clone(),
                        depth,
                        error,
                    });
                    Vec::new()
                }
            };

            graph.insert(package.clone(), deps.clone());

            for dep in deps {
                if frontier.is_discovered(&dep) {
                    if let Some(cycle) = find_cycle(&frontier, &graph, &package, &dep) {
                        return Err(LineupError::CircularDependency { cycle });
                    }
                    continue;
                }

                frontier.parent.insert(dep.clone(), package.clone());
                frontier.queue.push_back((dep, depth + 1));
            }
        }

        Ok(graph)
    }

    fn filter_dependencies(&self, deps: Vec<PackageName>) -> Vec<PackageName> {
        deps.into_iter()
            .filter(|dep| {
                let skip = self.filter.should_skip(dep);
                if skip {
                    debug!(
                        dependency = %dep,
                        filter = self.filter.filter_substring(),
                        "skipping dependency"
                    );
                }
                !skip
            })
            .collect()
    }
}

/// Check whether the edge `package -> dep` closes a cycle.
///
/// The parent links are tried first; when `dep` is not an ancestor of
/// `package` in the discovery tree, the edges recorded so far are searched
/// for a path from `dep` back to `package`.
fn find_cycle(
    frontier: &Frontier,
    graph: &DependencyGraph,
    package: &str,
    dep: &str,
) -> Option<Vec<PackageName>> {
    frontier
        .path_to_ancestor(package, dep)
        .or_else(|| recorded_path(graph, dep, package))
}

/// Shortest path `from -> ... -> to -> from` over recorded edges
fn recorded_path(graph: &DependencyGraph, from: &str, to: &str) -> Option<Vec<PackageName>> {
    let mut previous: HashMap<&str, &str> = HashMap::new();
    let mut queue = VecDeque::from([from]);
    let mut seen = HashSet::from([from]);

    while let Some(node) = queue.pop_front() {
        if node == to {
            let mut path = vec![to.to_string()];
            let mut cursor = to;
            while let Some(&prev) = previous.get(cursor) {
                path.push(prev.to_string());
                cursor = prev;
            }
            path.reverse();
            path.push(from.to_string());
            return Some(path);
        }

        for next in graph.dependencies_or_empty(node) {
            if seen.insert(next.as_str()) {
                previous.insert(next.as_str(), node);
                queue.push_back(next.as_str());
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::LookupError;
    use crate::source::FixtureRepository;

    fn repo(content: &str) -> FixtureRepository {
        FixtureRepository::parse_str(content, "test").unwrap()
    }

    fn builder(filter: &str, max_depth: usize) -> DependencyGraphBuilder {
        DependencyGraphBuilder::new(PackageFilter::new(filter), max_depth)
    }

    fn assert_closed_walk(graph_edges: &str, cycle: &[String]) {
        let repo = repo(graph_edges);
        assert_eq!(cycle.first(), cycle.last());
        for pair in cycle.windows(2) {
            let deps = repo.dependencies(&pair[0]).unwrap();
            assert!(
                deps.contains(&pair[1]),
                "{} -> {} is not an edge",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_diamond_builds() {
        let repo = repo("A: B C\nB: D\nC: D\nD:\n");
        let graph = builder("", 10).build_graph("A", &repo, None).unwrap();

        assert_eq!(graph.packages().collect::<Vec<_>>(), vec!["A", "B", "C", "D"]);
        assert_eq!(graph.dependencies("A").unwrap(), ["B", "C"]);
        assert!(graph.dependencies("D").unwrap().is_empty());
    }

    #[test]
    fn test_two_node_cycle() {
        let edges = "A: B\nB: A\n";
        let err = builder("", 10)
            .build_graph("A", &repo(edges), None)
            .unwrap_err();

        match err {
            LineupError::CircularDependency { cycle } => {
                assert_eq!(cycle, vec!["A", "B", "A"]);
                assert_closed_walk(edges, &cycle);
            }
            other => panic!("Expected CircularDependency, got {other:?}"),
        }
    }

    #[test]
    fn test_self_loop() {
        let err = builder("", 10)
            .build_graph("A", &repo("A: A\n"), None)
            .unwrap_err();

        match err {
            LineupError::CircularDependency { cycle } => assert_eq!(cycle, vec!["A", "A"]),
            other => panic!("Expected CircularDependency, got {other:?}"),
        }
    }

    #[test]
    fn test_cycle_outside_discovery_tree() {
        // C -> D and D -> C, where D was first claimed through B
        let edges = "A: B C\nB: D\nC: D\nD: C\n";
        let err = builder("", 10)
            .build_graph("A", &repo(edges), None)
            .unwrap_err();

        match err {
            LineupError::CircularDependency { cycle } => {
                assert!(cycle.contains(&"C".to_string()));
                assert!(cycle.contains(&"D".to_string()));
                assert_closed_walk(edges, &cycle);
            }
            other => panic!("Expected CircularDependency, got {other:?}"),
        }
    }

    #[test]
    fn test_long_cycle_back_to_root() {
        let edges = "I: A\nA: B\nB: C\nC: I\n";
        let err = builder("", 10)
            .build_graph("I", &repo(edges), None)
            .unwrap_err();

        match err {
            LineupError::CircularDependency { cycle } => {
                assert_eq!(cycle, vec!["I", "A", "B", "C", "I"]);
            }
            other => panic!("Expected CircularDependency, got {other:?}"),
        }
    }

    #[test]
    fn test_filtered_root() {
        let err = builder("H", 10)
            .build_graph("HA", &repo("HA: B\n"), None)
            .unwrap_err();
        assert!(matches!(err, LineupError::FilteredRoot { .. }));

        let err = builder("", 10)
            .build_graph("so:libc.so.6", &repo("A: B\n"), None)
            .unwrap_err();
        assert!(matches!(err, LineupError::FilteredRoot { .. }));
    }

    #[test]
    fn test_filter_removes_keys_and_values() {
        let repo = repo("A: B H\nB: HX C\nH: C\nC:\n");
        let graph = builder("H", 10).build_graph("A", &repo, None).unwrap();

        for (package, deps) in graph.iter() {
            assert!(!package.contains('H'));
            assert!(deps.iter().all(|dep| !dep.contains('H')));
        }
        assert_eq!(graph.len(), 3);
    }

    #[test]
    fn test_runtime_references_are_dropped() {
        let repo = repo("app: so:libc.musl.so.1 /bin/sh libz.so.1 zlib\nzlib:\n");
        let graph = builder("", 10).build_graph("app", &repo, None).unwrap();

        assert_eq!(graph.dependencies("app").unwrap(), ["zlib"]);
    }

    #[test]
    fn test_depth_limit() {
        let repo = repo("A: B\nB: C\nC: D\nD: E\nE:\n");
        let graph = builder("", 2).build_graph("A", &repo, None).unwrap();

        assert_eq!(graph.packages().collect::<Vec<_>>(), vec!["A", "B", "C"]);
        // D sits at depth 3: dangling value, never a key
        assert_eq!(graph.dependencies("C").unwrap(), ["D"]);
        assert!(!graph.contains("D"));
    }

    #[test]
    fn test_zero_depth_visits_only_root() {
        let repo = repo("A: B\nB:\n");
        let graph = builder("", 0).build_graph("A", &repo, None).unwrap();

        assert_eq!(graph.len(), 1);
        assert_eq!(graph.dependencies("A").unwrap(), ["B"]);
    }

    #[test]
    fn test_lookup_failure_is_recorded_not_fatal() {
        let lookup = |package: &str| -> Result<Vec<PackageName>, LookupError> {
            match package {
                "A" => Ok(vec!["B".to_string(), "C".to_string()]),
                "B" => Err(LookupError::Unavailable {
                    package: package.to_string(),
                    reason: "timeout".to_string(),
                }),
                "C" => Ok(vec!["D".to_string()]),
                _ => Ok(vec![]),
            }
        };

        let graph = builder("", 10).build_graph("A", &lookup, None).unwrap();

        assert_eq!(graph.len(), 4);
        assert!(graph.dependencies("B").unwrap().is_empty());
        assert_eq!(graph.lookup_failures().len(), 1);
        assert_eq!(graph.lookup_failures()[0].package, "B");
        assert_eq!(graph.lookup_failures()[0].depth, 1);
    }

    #[test]
    fn test_lookup_called_once_per_package() {
        let calls = std::cell::RefCell::new(HashMap::<String, usize>::new());
        let repo = repo("A: B C\nB: D\nC: D\nD:\n");
        let lookup = |package: &str| {
            *calls.borrow_mut().entry(package.to_string()).or_default() += 1;
            repo.dependencies(package)
        };

        builder("", 10).build_graph("A", &lookup, None).unwrap();

        assert!(calls.borrow().values().all(|&count| count == 1));
        assert_eq!(calls.borrow().len(), 4);
    }

    #[test]
    fn test_cancel_flag() {
        let flag = Arc::new(AtomicBool::new(true));
        let err = builder("", 10)
            .with_cancel_flag(flag)
            .build_graph("A", &repo("A: B\n"), None)
            .unwrap_err();

        assert!(matches!(err, LineupError::Cancelled { package } if package == "A"));
    }
}
