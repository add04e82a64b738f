//! Report generation modules for different output formats
//!
//! This module contains report generators for a finished load-order analysis:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use

pub mod human;
pub mod json;

use crate::analyzer::AnalysisReport;
use crate::error::LineupError;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from a load-order analysis
    fn generate_report(&self, report: &AnalysisReport) -> Result<String, LineupError>;
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
