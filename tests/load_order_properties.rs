use std::collections::{HashMap, HashSet};

use petgraph::algo::{tarjan_scc, toposort};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Bfs;
use pkg_lineup::analyzer::LoadOrderAnalyzer;
use pkg_lineup::core::PackageName;
use pkg_lineup::dependency_filter::PackageFilter;
use pkg_lineup::error::{LineupError, LookupError};
use pkg_lineup::graph::{DependencyGraph, DependencyGraphBuilder};
use proptest::prelude::*;

const ROOT: &str = "p0";

/// Random repository: `n` packages `p0..pn` and up to `2n` edges, duplicates
/// and self-loops included
fn arb_repository() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..8).prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..n * 2)))
}

fn name(index: usize) -> PackageName {
    format!("p{index}")
}

/// Repository as the lookup closure sees it
fn adjacency(n: usize, edges: &[(usize, usize)]) -> HashMap<PackageName, Vec<PackageName>> {
    let mut adjacency: HashMap<PackageName, Vec<PackageName>> =
        (0..n).map(|i| (name(i), Vec::new())).collect();
    for &(from, to) in edges {
        if let Some(deps) = adjacency.get_mut(&name(from)) {
            deps.push(name(to));
        }
    }
    adjacency
}

fn build(
    n: usize,
    edges: &[(usize, usize)],
    filter: &str,
    max_depth: usize,
) -> Result<DependencyGraph, LineupError> {
    let repository = adjacency(n, edges);
    let lookup = move |package: &str| -> Result<Vec<PackageName>, LookupError> {
        Ok(repository.get(package).cloned().unwrap_or_default())
    };

    DependencyGraphBuilder::new(PackageFilter::new(filter), max_depth).build_graph(
        ROOT,
        &lookup,
        None,
    )
}

/// Reference model of the repository, with BFS distances from the root
struct Model {
    graph: DiGraph<usize, ()>,
    distance: HashMap<PackageName, usize>,
}

impl Model {
    fn new(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut graph = DiGraph::new();
        let nodes: Vec<NodeIndex> = (0..n).map(|i| graph.add_node(i)).collect();
        for &(from, to) in edges {
            graph.add_edge(nodes[from], nodes[to], ());
        }

        let mut distance = HashMap::from([(name(0), 0)]);
        let mut bfs = Bfs::new(&graph, nodes[0]);
        while let Some(node) = bfs.next(&graph) {
            let current = distance[&name(graph[node])];
            for next in graph.neighbors(node) {
                distance.entry(name(graph[next])).or_insert(current + 1);
            }
        }

        Self { graph, distance }
    }

    fn reachable(&self) -> HashSet<PackageName> {
        self.distance.keys().cloned().collect()
    }

    /// Whether a cycle is reachable from the root
    fn has_reachable_cycle(&self) -> bool {
        tarjan_scc(&self.graph).into_iter().any(|scc| {
            let reachable = self.distance.contains_key(&name(self.graph[scc[0]]));
            let cyclic = scc.len() > 1 || self.graph.contains_edge(scc[0], scc[0]);
            reachable && cyclic
        })
    }
}

fn position(order: &[PackageName], package: &str) -> usize {
    order
        .iter()
        .position(|p| p == package)
        .unwrap_or_else(|| panic!("{package} missing from {order:?}"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn build_fails_exactly_on_reachable_cycles((n, edges) in arb_repository()) {
        let model = Model::new(n, &edges);
        let adjacency = adjacency(n, &edges);

        match build(n, &edges, "", n + 1) {
            Ok(graph) => {
                prop_assert!(!model.has_reachable_cycle());
                let keys: HashSet<PackageName> = graph.packages().map(str::to_string).collect();
                prop_assert_eq!(keys, model.reachable());
            }
            Err(LineupError::CircularDependency { cycle }) => {
                prop_assert!(model.has_reachable_cycle());
                prop_assert_eq!(cycle.first(), cycle.last());
                for pair in cycle.windows(2) {
                    prop_assert!(adjacency[&pair[0]].contains(&pair[1]));
                }
            }
            Err(other) => prop_assert!(false, "unexpected error: {other:?}"),
        }
    }

    #[test]
    fn load_orders_respect_dependencies((n, edges) in arb_repository()) {
        let Ok(graph) = build(n, &edges, "", n + 1) else {
            return Ok(());
        };
        let model = Model::new(n, &edges);
        let analyzer = LoadOrderAnalyzer::new();

        let (petgraph, _) = graph.to_petgraph();
        prop_assert!(toposort(&petgraph, None).is_ok());

        let topo = analyzer.topological_order(&graph);
        prop_assert!(topo.is_complete());
        let dfs = analyzer.dfs_load_order(&graph, ROOT);
        prop_assert_eq!(dfs.len(), graph.len());

        for (package, deps) in graph.iter() {
            for dep in deps {
                prop_assert!(position(topo.order(), dep) < position(topo.order(), package));
                prop_assert!(position(&dfs, dep) < position(&dfs, package));
            }
        }

        let bfs = analyzer.bfs_load_order(&graph, ROOT);
        let unique: HashSet<&PackageName> = bfs.iter().collect();
        prop_assert_eq!(unique.len(), bfs.len());
        prop_assert_eq!(bfs.len(), model.reachable().len());
        prop_assert_eq!(bfs.first().map(String::as_str), Some(ROOT));

        for (level, packages) in analyzer.dependency_levels(&graph, ROOT) {
            for package in packages {
                prop_assert_eq!(model.distance[&package], level);
            }
        }
    }

    #[test]
    fn depth_bound_limits_expansion((n, edges) in arb_repository(), max_depth in 0usize..4) {
        let model = Model::new(n, &edges);

        if let Ok(graph) = build(n, &edges, "", max_depth) {
            let expected: HashSet<PackageName> = model
                .distance
                .iter()
                .filter(|&(_, &distance)| distance <= max_depth)
                .map(|(package, _)| package.clone())
                .collect();
            let keys: HashSet<PackageName> = graph.packages().map(str::to_string).collect();
            prop_assert_eq!(keys, expected);
        }
    }

    #[test]
    fn filtered_names_never_appear((n, edges) in arb_repository(), filtered in 1usize..8) {
        let filter = name(filtered);

        match build(n, &edges, &filter, n + 1) {
            Ok(graph) => {
                prop_assert!(graph.all_packages().iter().all(|package| *package != filter));
            }
            Err(LineupError::CircularDependency { cycle }) => {
                prop_assert!(!cycle.contains(&filter));
            }
            Err(other) => prop_assert!(false, "unexpected error: {other:?}"),
        }
    }
}
