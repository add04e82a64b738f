//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::analyzer::AnalysisReport;
use crate::core::PackageName;
use crate::error::LineupError;
use crate::utils::string::pluralize;

pub struct HumanReportGenerator {
    max_cycles: Option<usize>,
}

impl HumanReportGenerator {
    pub fn new(max_cycles: Option<usize>) -> Self {
        Self { max_cycles }
    }

    fn write_order(
        &self,
        output: &mut String,
        label: &str,
        order: &[PackageName],
    ) -> Result<(), LineupError> {
        writeln!(
            output,
            "  {:<13} {}",
            style(label).bold(),
            order.join(" → ")
        )?;
        Ok(())
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, report: &AnalysisReport) -> Result<String, LineupError> {
        let mut output = String::new();
        let stats = &report.statistics;

        writeln!(
            output,
            "\n{} Load order analysis for {}\n",
            style("📦").blue(),
            style(&report.root).green().bold()
        )?;

        writeln!(output, "{} Statistics:", style("📊").cyan())?;
        writeln!(
            output,
            "  {} {}",
            style(stats.total_packages).yellow().bold(),
            pluralize("package", stats.total_packages)
        )?;
        writeln!(
            output,
            "  {} {}",
            style(stats.total_dependencies).yellow().bold(),
            pluralize("dependency edge", stats.total_dependencies)
        )?;
        writeln!(
            output,
            "  {} without dependencies",
            style(stats.packages_without_dependencies).yellow().bold()
        )?;

        if !report.lookup_failures.is_empty() {
            writeln!(
                output,
                "\n{} {} {} failed (recorded as leaves):",
                style("⚠️").yellow(),
                report.lookup_failures.len(),
                pluralize("lookup", report.lookup_failures.len())
            )?;
            for failure in &report.lookup_failures {
                writeln!(
                    output,
                    "  {} {} (depth {})",
                    style("•").dim(),
                    failure.error,
                    failure.depth
                )?;
            }
        }

        let comparison = &report.comparison;
        writeln!(output, "\n{} Load orders:", style("🔀").cyan())?;
        self.write_order(&mut output, "Topological", comparison.topological.order())?;
        self.write_order(&mut output, "BFS", &comparison.bfs)?;
        self.write_order(&mut output, "DFS", &comparison.dfs)?;

        if comparison.all_identical() {
            writeln!(
                output,
                "\n{} All three orders are identical",
                style("✅").green()
            )?;
        } else {
            writeln!(output, "\n{} The orders differ:", style("ℹ️").blue())?;
            if !comparison.bfs_matches_topological() {
                writeln!(
                    output,
                    "  {} BFS is level-synchronous and ignores dependency direction within a level",
                    style("•").dim()
                )?;
            }
            if !comparison.dfs_matches_topological() {
                writeln!(
                    output,
                    "  {} DFS postorder only covers packages reachable from the root and follows \
                     adjacency order",
                    style("•").dim()
                )?;
            }
        }

        writeln!(output, "\n{} Dependency levels:", style("📶").cyan())?;
        for (level, packages) in &report.levels {
            writeln!(output, "  Level {}: {}", level, packages.join(", "))?;
        }

        if report.cycles.is_empty() {
            writeln!(
                output,
                "\n{} No dependency cycles detected",
                style("✅").green().bold()
            )?;
        } else {
            let total = report.cycles.len();
            writeln!(
                output,
                "\n{} Found {} dependency {}:",
                style("❌").red().bold(),
                style(total).red().bold(),
                pluralize("cycle", total)
            )?;

            let shown = self.max_cycles.map_or(total, |limit| limit.min(total));
            for (i, cycle) in report.cycles.iter().take(shown).enumerate() {
                let first = cycle.packages().first().map(String::as_str).unwrap_or("");
                writeln!(
                    output,
                    "  {} Cycle #{}: {} → {}",
                    style("🔄").yellow(),
                    i + 1,
                    cycle.packages().join(" → "),
                    first
                )?;
            }

            if shown < total {
                writeln!(
                    output,
                    "\n{} Showing {} of {} cycles. Use --max-cycles to see more.",
                    style("ℹ️").blue(),
                    style(shown).yellow(),
                    style(total).yellow()
                )?;
            }
        }

        let topological = &comparison.topological;
        writeln!(output, "\n{} Recommended load order:", style("💡").yellow())?;
        for (i, package) in topological.resolved().iter().enumerate() {
            writeln!(output, "  {:>3}. {}", i + 1, package)?;
        }
        if !topological.is_complete() {
            writeln!(
                output,
                "\n{} {} {} cannot be ordered because of circular dependencies: {}",
                style("⚠️").yellow(),
                topological.unresolved().len(),
                pluralize("package", topological.unresolved().len()),
                topological.unresolved().join(", ")
            )?;
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::LoadOrderAnalyzer;
    use crate::graph::DependencyGraph;

    fn diamond_report() -> AnalysisReport {
        let graph = DependencyGraph::from_iter([
            ("A", vec!["B", "C"]),
            ("B", vec!["D"]),
            ("C", vec!["D"]),
            ("D", vec![]),
        ]);
        LoadOrderAnalyzer::new().analyze(&graph, "A")
    }

    #[test]
    fn test_human_report_acyclic() {
        console::set_colors_enabled(false);
        let report = HumanReportGenerator::new(None)
            .generate_report(&diamond_report())
            .unwrap();

        assert!(report.contains("Load order analysis for A"));
        assert!(report.contains("4 packages"));
        assert!(report.contains("A → B → C → D"));
        assert!(report.contains("Level 2: D"));
        assert!(report.contains("No dependency cycles detected"));
        assert!(report.contains("  1. D"));
        assert!(report.contains("  4. A"));
        assert!(!report.contains("cannot be ordered"));
    }

    #[test]
    fn test_human_report_with_cycles() {
        console::set_colors_enabled(false);
        let graph = DependencyGraph::from_iter([
            ("A", vec!["B"]),
            ("B", vec!["A", "C"]),
            ("C", vec!["C"]),
        ]);
        let analysis = LoadOrderAnalyzer::new().analyze(&graph, "A");

        let report = HumanReportGenerator::new(Some(1))
            .generate_report(&analysis)
            .unwrap();

        assert!(report.contains("Found 2 dependency cycles"));
        assert!(report.contains("Cycle #1: A → B → A"));
        assert!(!report.contains("Cycle #2"));
        assert!(report.contains("Showing 1 of 2 cycles"));
        assert!(report.contains("cannot be ordered"));
    }
}
