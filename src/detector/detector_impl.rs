use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::core::PackageName;
use crate::graph::DependencyGraph;

/// Detector for finding dependency cycles in a finished graph
#[derive(Debug, Clone, Default)]
pub struct CycleDetector {
    cycles: Vec<DependencyCycle>,
}

/// Packages forming a cycle, in edge order.
///
/// Each package depends on the next one, and the last depends on the first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DependencyCycle {
    packages: Vec<PackageName>,
}

impl DependencyCycle {
    pub fn new(packages: Vec<PackageName>) -> Self {
        Self { packages }
    }

    pub fn packages(&self) -> &[PackageName] {
        &self.packages
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn contains(&self, package: &str) -> bool {
        self.packages.iter().any(|p| p == package)
    }

    /// Check whether `from -> to` is one of the cycle's edges
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        let n = self.packages.len();
        (0..n).any(|i| self.packages[i] == from && self.packages[(i + 1) % n] == to)
    }
}

impl fmt::Display for DependencyCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.packages.join(" -> "))?;
        if let Some(first) = self.packages.first() {
            write!(f, " -> {first}")?;
        }
        Ok(())
    }
}

/// One package on the depth-first path, with the next dependency to examine
struct Frame<'a> {
    package: &'a str,
    next: usize,
}

impl CycleDetector {
    /// Create a new cycle detector
    pub fn new() -> Self {
        Self { cycles: Vec::new() }
    }

    /// Scan the whole graph and record every back edge as a cycle
    pub fn detect_cycles(&mut self, graph: &DependencyGraph) {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut on_path: HashSet<&str> = HashSet::new();

        for start in graph.packages() {
            if visited.contains(start) {
                continue;
            }

            visited.insert(start);
            on_path.insert(start);
            let mut stack = vec![Frame {
                package: start,
                next: 0,
            }];

            while let Some(frame) = stack.last_mut() {
                let deps = graph.dependencies_or_empty(frame.package);

                let Some(dep) = deps.get(frame.next) else {
                    on_path.remove(frame.package);
                    stack.pop();
                    continue;
                };
                frame.next += 1;
                let dep = dep.as_str();

                if on_path.contains(dep) {
                    let position = stack
                        .iter()
                        .position(|f| f.package == dep)
                        .unwrap_or_default();
                    let packages = stack[position..]
                        .iter()
                        .map(|f| f.package.to_string())
                        .collect();
                    self.cycles.push(DependencyCycle::new(packages));
                } else if visited.insert(dep) {
                    on_path.insert(dep);
                    stack.push(Frame {
                        package: dep,
                        next: 0,
                    });
                }
            }
        }
    }

    /// Get all detected cycles
    pub fn cycles(&self) -> &[DependencyCycle] {
        &self.cycles
    }

    /// Check if any cycles were detected
    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    /// Get the number of detected cycles
    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }

    pub fn into_cycles(self) -> Vec<DependencyCycle> {
        self.cycles
    }
}
