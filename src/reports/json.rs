//! JSON format report generation

use serde_json::json;

use super::ReportGenerator;
use crate::analyzer::AnalysisReport;
use crate::error::LineupError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, report: &AnalysisReport) -> Result<String, LineupError> {
        let comparison = &report.comparison;

        let lookup_failures: Vec<_> = report
            .lookup_failures
            .iter()
            .map(|failure| {
                json!({
                    "package": failure.package,
                    "depth": failure.depth,
                    "error": failure.error.to_string(),
                })
            })
            .collect();

        let report = json!({
            "root": report.root,
            "statistics": report.statistics,
            "load_orders": {
                "topological": comparison.topological.order(),
                "topological_complete": comparison.topological.is_complete(),
                "unresolved": comparison.topological.unresolved(),
                "bfs": comparison.bfs,
                "dfs": comparison.dfs,
            },
            "all_identical": comparison.all_identical(),
            "bfs_matches_topological": comparison.bfs_matches_topological(),
            "levels": report.levels,
            "has_cycles": !report.cycles.is_empty(),
            "cycles": report.cycles,
            "lookup_failures": lookup_failures,
        });

        serde_json::to_string_pretty(&report).map_err(LineupError::Json)
    }
}
