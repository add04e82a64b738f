//! Package name filtering

use crate::constants::discovery::{
    ABSOLUTE_PATH_PREFIX, SHARED_OBJECT_PREFIX, SHARED_OBJECT_VERSION_INFIX,
};

/// Decides which package names are excluded from graph discovery.
///
/// A name is skipped when any of these hold:
/// - the configured substring is non-empty and occurs in the name
/// - the name starts with a shared-object marker (`so:`) or a path (`/`)
/// - the name contains a shared-object version infix (`.so.`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageFilter {
    filter_substring: String,
}

impl PackageFilter {
    pub fn new(filter_substring: impl Into<String>) -> Self {
        Self {
            filter_substring: filter_substring.into(),
        }
    }

    pub fn filter_substring(&self) -> &str {
        &self.filter_substring
    }

    /// Check if a package should be left out of the graph
    pub fn should_skip(&self, package: &str) -> bool {
        self.matches_substring(package) || is_runtime_library_reference(package)
    }

    fn matches_substring(&self, package: &str) -> bool {
        !self.filter_substring.is_empty() && package.contains(&self.filter_substring)
    }
}

fn is_runtime_library_reference(package: &str) -> bool {
    package.starts_with(SHARED_OBJECT_PREFIX)
        || package.starts_with(ABSOLUTE_PATH_PREFIX)
        || package.contains(SHARED_OBJECT_VERSION_INFIX)
}

impl From<&crate::config::DiscoveryOptions> for PackageFilter {
    fn from(options: &crate::config::DiscoveryOptions) -> Self {
        Self::new(options.filter_substring.clone())
    }
}
