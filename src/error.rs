use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid fixture line {line} in '{file}': {reason}")]
#[diagnostic(
    code(pkg_lineup::fixture_parse_error),
    help("Fixture lines look like `name: dep1 dep2`; blank lines and `#` comments are ignored")
)]
pub struct FixtureParseError {
    pub file: String,
    pub line: usize,
    pub reason: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("offending line")]
    pub span: Option<SourceSpan>,
}

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid TOML syntax in '{file}'")]
#[diagnostic(
    code(pkg_lineup::config_parse_error),
    help("Check the TOML syntax near the highlighted position")
)]
pub struct ConfigParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum LineupError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(pkg_lineup::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    FixtureParseError(Box<FixtureParseError>),

    #[error("Test repository '{path}' contains no packages")]
    #[diagnostic(
        code(pkg_lineup::empty_fixture),
        help("Add at least one `name: deps...` line to the fixture")
    )]
    EmptyFixture { path: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    ConfigParseError(Box<ConfigParseError>),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(pkg_lineup::config_error),
        help("Check your command arguments and configuration file")
    )]
    ConfigurationError { message: String },

    #[error("Root package '{package}' is excluded by the package filter '{filter}'")]
    #[diagnostic(
        code(pkg_lineup::filtered_root),
        help(
            "The root matches the filter substring or looks like a shared-object reference; \
             pick another root or change the filter"
        )
    )]
    FilteredRoot { package: String, filter: String },

    #[error("Circular dependency detected: {}", .cycle.join(" -> "))]
    #[diagnostic(
        code(pkg_lineup::circular_dependency),
        help("Remove at least one dependency along the reported path")
    )]
    CircularDependency { cycle: Vec<String> },

    #[error("Graph discovery cancelled before visiting '{package}'")]
    #[diagnostic(code(pkg_lineup::cancelled))]
    Cancelled { package: String },

    #[error("Dependency lookup failed: {0}")]
    #[diagnostic(
        code(pkg_lineup::lookup_failed),
        help("Check the package name and that the dependency source is reachable")
    )]
    Lookup(#[from] LookupError),

    #[error("Package index error: {message}")]
    #[diagnostic(
        code(pkg_lineup::index_error),
        help("Check the repository URL and architecture")
    )]
    IndexError { message: String },

    #[error("HTTP request failed")]
    #[diagnostic(
        code(pkg_lineup::http_error),
        help("Check your network connection and the repository URL")
    )]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(pkg_lineup::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(pkg_lineup::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(pkg_lineup::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),
}

/// Failure of a single dependency lookup.
///
/// These never abort graph discovery; the builder records them on the
/// finished graph and treats the package as having no dependencies.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("package '{package}' not found{}", format_suggestions(.suggestions))]
    UnknownPackage {
        package: String,
        suggestions: Vec<String>,
    },

    #[error("dependencies of '{package}' unavailable: {reason}")]
    Unavailable { package: String, reason: String },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {}?)", suggestions.join(", "))
    }
}
