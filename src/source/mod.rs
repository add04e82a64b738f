//! # Dependency Sources
//!
//! A dependency source answers one question: what are the direct
//! dependencies of a package? The graph builder queries it once per visited
//! package.
//!
//! ## Implementations
//!
//! - **FixtureRepository**: static `name: dep1 dep2` test repositories
//! - **ApkIndex**: a parsed APK package index (`P:`/`V:`/`D:` records)
//! - **RemoteIndexSource**: downloads an APK index on first use
//! - any `Fn(&str) -> Result<Vec<String>, LookupError>` closure
//!
//! ## Example
//!
//! ```
//! use pkg_lineup::source::{DependencySource, FixtureRepository};
//!
//! # fn main() -> miette::Result<()> {
//! let repo = FixtureRepository::parse_str("A: B C\nB:\nC:\n", "inline")?;
//! assert_eq!(repo.dependencies("A").unwrap(), vec!["B", "C"]);
//! # Ok(())
//! # }
//! ```

mod apk_index;
mod fixture;
mod remote;

pub use apk_index::{ApkIndex, IndexedPackage};
pub use fixture::FixtureRepository;
pub use remote::RemoteIndexSource;

use crate::core::PackageName;
use crate::error::LookupError;

/// Capability returning the direct dependencies of a package
pub trait DependencySource {
    fn dependencies(&self, package: &str) -> Result<Vec<PackageName>, LookupError>;
}

impl<F> DependencySource for F
where
    F: Fn(&str) -> Result<Vec<PackageName>, LookupError>,
{
    fn dependencies(&self, package: &str) -> Result<Vec<PackageName>, LookupError> {
        self(package)
    }
}
