use pkg_lineup::analyzer::LoadOrderAnalyzer;
use pkg_lineup::graph::{DependencyGraph, DependencyGraphBuilder, GraphRenderer};
use pkg_lineup::source::FixtureRepository;

const REPOSITORY: &str = "\
A: B C
B: D E
C: E F
D: G
E: H
F: G
G:
H: G
";

fn sample_graph() -> DependencyGraph {
    let repository = FixtureRepository::parse_str(REPOSITORY, "sample").unwrap();
    DependencyGraphBuilder::default()
        .build_graph("A", &repository, None)
        .unwrap()
}

/// A graph the builder would refuse: B and C depend on each other
fn cyclic_graph() -> DependencyGraph {
    DependencyGraph::from_iter([
        ("A", vec!["B"]),
        ("B", vec!["C"]),
        ("C", vec!["B", "D"]),
        ("D", vec![]),
    ])
}

fn to_string(output: Vec<u8>) -> String {
    String::from_utf8(output).unwrap()
}

#[test]
fn test_ascii_tree_of_built_graph() {
    let graph = sample_graph();
    let mut output = Vec::new();
    GraphRenderer::default()
        .render_ascii_tree(&graph, "A", &mut output)
        .unwrap();
    let tree = to_string(output);

    assert!(tree.starts_with("Dependency tree:\n"));
    assert!(tree.contains("└── A\n"));
    // E is shared by B and C and expanded under both
    assert_eq!(tree.matches("── E\n").count(), 2);
    assert!(!tree.contains("(cycle)"));
}

#[test]
fn test_plantuml_of_built_graph() {
    let graph = sample_graph();
    let mut output = Vec::new();
    GraphRenderer::default()
        .render_plantuml(&graph, "A", &[], &mut output)
        .unwrap();
    let uml = to_string(output);

    assert!(uml.starts_with("@startuml"));
    assert!(uml.contains("title Dependency graph of package: A"));
    assert!(uml.contains(r#"rectangle "A" #FFEBCD"#));
    assert!(uml.contains(r#"rectangle "E" #E6E6FA"#));
    assert!(uml.contains(r#"rectangle "G" #F0F0F0"#));
    assert_eq!(uml.matches(" --> ").count(), graph.edge_count());
    assert!(!uml.contains("monochrome"));
}

#[test]
fn test_mermaid_highlights_cycles() {
    let graph = cyclic_graph();
    let cycles = LoadOrderAnalyzer::new().find_cycles(&graph);
    assert_eq!(cycles.len(), 1);

    let mut output = Vec::new();
    GraphRenderer::new(true)
        .render_mermaid(&graph, "A", &cycles, &mut output)
        .unwrap();
    let mermaid = to_string(output);

    assert!(mermaid.starts_with("graph TD\n"));
    assert!(mermaid.contains("    B((\"B\"))"));
    assert!(mermaid.contains("    C((\"C\"))"));
    assert!(mermaid.contains("    A[\"A\"]"));
    assert_eq!(mermaid.matches("stroke:#FF6500,stroke-width:3px").count(), 2);
}

#[test]
fn test_mermaid_without_highlighting() {
    let graph = cyclic_graph();
    let cycles = LoadOrderAnalyzer::new().find_cycles(&graph);

    let mut output = Vec::new();
    GraphRenderer::new(false)
        .render_mermaid(&graph, "A", &cycles, &mut output)
        .unwrap();
    let mermaid = to_string(output);

    assert!(!mermaid.contains("(("));
    assert!(!mermaid.contains("#FF6500"));
}

#[test]
fn test_dot_of_cyclic_graph() {
    let graph = cyclic_graph();
    let cycles = LoadOrderAnalyzer::new().find_cycles(&graph);

    let mut output = Vec::new();
    GraphRenderer::default()
        .render_dot(&graph, "A", &cycles, &mut output)
        .unwrap();
    let dot = to_string(output);

    assert!(dot.starts_with("digraph package_dependencies {"));
    assert!(dot.trim_end().ends_with('}'));
    assert!(dot.contains(r##""B" -> "C" [color="#FF6500", penwidth=3];"##));
    assert!(dot.contains(r##""C" -> "B" [color="#FF6500", penwidth=3];"##));
    assert!(dot.contains(r##""A" -> "B" [color="#64B5F6"];"##));
    assert!(dot.contains(r##""A" [style=filled, fillcolor="#FFEBCD""##));
}
