//! Integration tests for pkg-lineup using the library interface

use std::fs;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use pkg_lineup::analyzer::LoadOrderAnalyzer;
use pkg_lineup::common::ConfigBuilder;
use pkg_lineup::config::{DiscoveryOptions, SourceMode};
use pkg_lineup::core::PackageName;
use pkg_lineup::dependency_filter::PackageFilter;
use pkg_lineup::error::{LineupError, LookupError};
use pkg_lineup::graph::{DependencyGraph, DependencyGraphBuilder};
use pkg_lineup::source::{DependencySource, FixtureRepository};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const REPOSITORY: &str = "\
# Sample test repository
A: B C
B: D E
C: E F
D: G
E: H
F: G
G:
H: G

# I -> J -> K -> I
I: J
J: K
K: I
";

/// Write the sample repository to a temporary file and load it back
fn load_repository(temp_dir: &TempDir) -> FixtureRepository {
    let path = temp_dir.path().join("test_repository.txt");
    fs::write(&path, REPOSITORY).unwrap();
    FixtureRepository::from_path(&path).unwrap()
}

fn build(
    repository: &FixtureRepository,
    root: &str,
    filter: &str,
    max_depth: usize,
) -> DependencyGraph {
    DependencyGraphBuilder::new(PackageFilter::new(filter), max_depth)
        .build_graph(root, repository, None)
        .unwrap()
}

fn position(order: &[PackageName], package: &str) -> usize {
    order.iter().position(|p| p == package).unwrap()
}

#[test]
fn test_every_dependency_is_a_key_without_limits() {
    let temp_dir = TempDir::new().unwrap();
    let repository = load_repository(&temp_dir);
    let graph = build(&repository, "A", "", 10);

    assert_eq!(graph.len(), 8);
    for (_, deps) in graph.iter() {
        for dep in deps {
            assert!(graph.contains(dep), "{dep} should be a key");
        }
    }
    assert!(!graph.contains("I"));
}

#[test]
fn test_visit_order_is_breadth_first() {
    let temp_dir = TempDir::new().unwrap();
    let repository = load_repository(&temp_dir);
    let graph = build(&repository, "A", "", 10);

    let visited: Vec<&str> = graph.packages().collect();
    assert_eq!(visited, vec!["A", "B", "C", "D", "E", "F", "G", "H"]);
}

#[test]
fn test_cycle_aborts_build() {
    let temp_dir = TempDir::new().unwrap();
    let repository = load_repository(&temp_dir);

    let err = DependencyGraphBuilder::default()
        .build_graph("I", &repository, None)
        .unwrap_err();

    match err {
        LineupError::CircularDependency { cycle } => {
            assert_eq!(cycle, vec!["I", "J", "K", "I"]);
            for pair in cycle.windows(2) {
                let deps = repository.dependencies(&pair[0]).unwrap();
                assert!(deps.contains(&pair[1]), "{} -> {} is not an edge", pair[0], pair[1]);
            }
        }
        other => panic!("Expected CircularDependency, got {other:?}"),
    }
}

#[test]
fn test_two_node_cycle_is_reported() {
    let repository = FixtureRepository::parse_str("A: B\nB: A", "inline").unwrap();

    let err = DependencyGraphBuilder::default()
        .build_graph("A", &repository, None)
        .unwrap_err();

    match err {
        LineupError::CircularDependency { cycle } => {
            assert!(cycle.contains(&"A".to_string()));
            assert!(cycle.contains(&"B".to_string()));
            assert_eq!(cycle.first(), cycle.last());
        }
        other => panic!("Expected CircularDependency, got {other:?}"),
    }
}

#[test]
fn test_filter_removes_names_everywhere() {
    let temp_dir = TempDir::new().unwrap();
    let repository = load_repository(&temp_dir);
    let graph = build(&repository, "A", "H", 10);

    for name in graph.all_packages() {
        assert!(!name.contains('H'), "{name} should have been filtered");
    }
    assert_eq!(graph.dependencies("E"), Some(&[][..]));
}

#[test]
fn test_filtered_root_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let repository = load_repository(&temp_dir);

    let err = DependencyGraphBuilder::new(PackageFilter::new("A"), 10)
        .build_graph("A", &repository, None)
        .unwrap_err();

    assert!(matches!(err, LineupError::FilteredRoot { .. }));
}

#[test]
fn test_depth_limit() {
    let temp_dir = TempDir::new().unwrap();
    let repository = load_repository(&temp_dir);
    let graph = build(&repository, "A", "", 2);

    let levels = LoadOrderAnalyzer::new().dependency_levels(&graph, "A");
    for package in graph.packages() {
        let level = levels
            .iter()
            .find(|(_, packages)| packages.iter().any(|p| p == package))
            .map(|(level, _)| *level)
            .unwrap();
        assert!(level <= 2, "{package} was expanded at depth {level}");
    }

    assert!(!graph.contains("G"));
    assert!(!graph.contains("H"));
    // Still listed as dependencies of depth-2 packages
    assert_eq!(graph.dependencies("D"), Some(&["G".to_string()][..]));
}

#[test]
fn test_lookup_failures_are_recorded() {
    let lookup = |package: &str| -> Result<Vec<PackageName>, LookupError> {
        match package {
            "app" => Ok(vec!["lib".to_string(), "broken".to_string()]),
            "lib" => Ok(vec![]),
            other => Err(LookupError::Unavailable {
                package: other.to_string(),
                reason: "mirror timed out".to_string(),
            }),
        }
    };

    let graph = DependencyGraphBuilder::default()
        .build_graph("app", &lookup, None)
        .unwrap();

    assert_eq!(graph.len(), 3);
    assert_eq!(graph.dependencies("broken"), Some(&[][..]));
    assert_eq!(graph.lookup_failures().len(), 1);
    assert_eq!(graph.lookup_failures()[0].package, "broken");
    assert_eq!(graph.lookup_failures()[0].depth, 1);
}

#[test]
fn test_cancelled_build() {
    let cancel = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancel);

    let lookup = move |package: &str| -> Result<Vec<PackageName>, LookupError> {
        // Cancel after the root has been looked up
        flag.store(true, Ordering::Relaxed);
        Ok(vec![format!("{package}-dep")])
    };

    let err = DependencyGraphBuilder::default()
        .with_cancel_flag(cancel)
        .build_graph("root", &lookup, None)
        .unwrap_err();

    match err {
        LineupError::Cancelled { package } => assert_eq!(package, "root-dep"),
        other => panic!("Expected Cancelled, got {other:?}"),
    }
}

#[test]
fn test_load_orders_on_diamond() {
    let repository = FixtureRepository::parse_str("A: B C\nB: D\nC: D\nD:", "diamond").unwrap();
    let graph = DependencyGraphBuilder::default()
        .build_graph("A", &repository, None)
        .unwrap();

    let analyzer = LoadOrderAnalyzer::new();

    assert_eq!(analyzer.bfs_load_order(&graph, "A"), vec!["A", "B", "C", "D"]);

    let dfs = analyzer.dfs_load_order(&graph, "A");
    assert!(position(&dfs, "D") < position(&dfs, "B"));
    assert!(position(&dfs, "D") < position(&dfs, "C"));
    assert!(position(&dfs, "B") < position(&dfs, "A"));
    assert!(position(&dfs, "C") < position(&dfs, "A"));

    let levels = analyzer.dependency_levels(&graph, "A");
    assert_eq!(levels[&0], vec!["A"]);
    assert_eq!(levels[&1], vec!["B", "C"]);
    assert_eq!(levels[&2], vec!["D"]);
}

#[test]
fn test_topological_order_of_sample_repository() {
    let temp_dir = TempDir::new().unwrap();
    let repository = load_repository(&temp_dir);
    let graph = build(&repository, "A", "", 10);

    let topo = LoadOrderAnalyzer::new().topological_order(&graph);
    assert!(topo.is_complete());
    assert_eq!(topo.order().len(), 8);

    for (package, deps) in graph.iter() {
        for dep in deps {
            assert!(position(topo.order(), dep) < position(topo.order(), package));
        }
    }
}

#[test]
fn test_find_cycles_on_unbuilt_graph() {
    // FindCycles works on any mapping, including ones the builder would reject
    let graph = DependencyGraph::from_iter([
        ("I", vec!["A"]),
        ("A", vec!["B"]),
        ("B", vec!["C"]),
        ("C", vec!["I"]),
    ]);

    let cycles = LoadOrderAnalyzer::new().find_cycles(&graph);
    assert_eq!(cycles.len(), 1);

    let mut members = cycles[0].packages().to_vec();
    members.sort();
    assert_eq!(members, vec!["A", "B", "C", "I"]);
}

#[test]
fn test_discovery_options_from_fixture_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("test_repository.txt");
    fs::write(&path, REPOSITORY).unwrap();

    let options = DiscoveryOptions::builder()
        .with_package_name("C")
        .with_max_depth(10)
        .with_source(SourceMode::TestRepository(path))
        .build()
        .unwrap();

    let source = options.source.open().unwrap();
    let graph = options
        .graph_builder()
        .build_graph(&options.package_name, source.as_ref(), None)
        .unwrap();

    let visited: Vec<&str> = graph.packages().collect();
    assert_eq!(visited, vec!["C", "E", "F", "H", "G"]);
}

#[test]
fn test_malformed_fixture_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.txt");
    fs::write(&path, "A: B\nthis line has no separator\n").unwrap();

    let err = FixtureRepository::from_path(&path).unwrap_err();
    assert!(matches!(err, LineupError::FixtureParseError(_)));
}
