//! Configuration constants for pkg-lineup
//!
//! This module contains the defaults and naming markers used throughout the
//! application. Most defaults can be overridden through the configuration file,
//! command-line arguments or environment variables.

use std::time::Duration;

/// Graph discovery defaults
pub mod discovery {
    /// Default maximum BFS depth (inclusive) from the root package
    pub const DEFAULT_MAX_DEPTH: usize = 10;

    /// Prefix of shared-object provider names in package indexes
    pub const SHARED_OBJECT_PREFIX: &str = "so:";

    /// Prefix of file-path provider names
    pub const ABSOLUTE_PATH_PREFIX: &str = "/";

    /// Infix found in versioned shared-object file names (`libz.so.1`)
    pub const SHARED_OBJECT_VERSION_INFIX: &str = ".so.";
}

/// Package index defaults
pub mod index {
    /// Architecture used when the configuration does not name one
    pub const DEFAULT_ARCHITECTURE: &str = "x86_64";

    /// Archive name below `{repository}/{architecture}/`
    pub const INDEX_ARCHIVE: &str = "APKINDEX.tar.gz";

    /// Name of the index entry inside the archive
    pub const INDEX_ENTRY: &str = "APKINDEX";

    /// Characters that start a version constraint in a dependency token
    pub const CONSTRAINT_CHARS: &[char] = &['<', '=', '>', '!', '|', '~'];

    /// Number of "did you mean" suggestions for unknown packages
    pub const MAX_SUGGESTIONS: usize = 5;

    /// Default per-request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
}

/// Progress spinner configuration
pub mod progress {
    use super::*;

    /// Duration between spinner updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames for the compass animation
    pub const SPINNER_FRAMES: &[&str] = &["🧭◐", "🧭◓", "🧭◑", "🧭◒", "✓"];
}

/// Output formatting configuration
pub mod output {
    /// Default report format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Default graph rendering format
    pub const DEFAULT_GRAPH_FORMAT: &str = "plantuml";
}

/// Logging configuration
pub mod logging {
    /// Environment variable holding the tracing filter directive
    pub const ENV_FILTER_VAR: &str = "PKG_LINEUP_LOG";

    /// Directive used when the environment variable is unset
    pub const DEFAULT_DIRECTIVE: &str = "warn";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discovery_constants() {
        assert_eq!(discovery::DEFAULT_MAX_DEPTH, 10);
        assert_eq!(discovery::SHARED_OBJECT_PREFIX, "so:");
        assert_eq!(discovery::SHARED_OBJECT_VERSION_INFIX, ".so.");
    }

    #[test]
    fn test_progress_constants() {
        assert_eq!(progress::TICK_INTERVAL, Duration::from_millis(100));
        assert_eq!(progress::SPINNER_FRAMES.last(), Some(&"✓"));
    }

    #[test]
    fn test_output_constants() {
        assert_eq!(output::DEFAULT_FORMAT, "human");
        assert_eq!(output::DEFAULT_GRAPH_FORMAT, "plantuml");
    }
}
