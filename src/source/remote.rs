use std::cell::OnceCell;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, warn};

use super::{ApkIndex, DependencySource};
use crate::constants::index::INDEX_ARCHIVE;
use crate::core::PackageName;
use crate::error::{LineupError, LookupError};

/// APK repository index fetched over HTTP on first lookup.
///
/// Every request uses the configured timeout, so a stalled repository fails
/// the affected lookups instead of blocking discovery forever.
pub struct RemoteIndexSource {
    client: Client,
    index_url: String,
    index: OnceCell<Result<ApkIndex, String>>,
}

impl RemoteIndexSource {
    pub fn new(
        repository_url: &str,
        architecture: &str,
        timeout: Duration,
    ) -> Result<Self, LineupError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            index_url: index_url(repository_url, architecture),
            index: OnceCell::new(),
        })
    }

    pub fn index_url(&self) -> &str {
        &self.index_url
    }

    /// Download and parse the index, bypassing the lazy cache
    pub fn fetch(&self) -> Result<ApkIndex, LineupError> {
        debug!(url = %self.index_url, "downloading package index");

        let response = self.client.get(&self.index_url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(LineupError::IndexError {
                message: format!("{} returned HTTP {status}", self.index_url),
            });
        }

        ApkIndex::from_tar_gz(response)
    }

    fn index(&self) -> &Result<ApkIndex, String> {
        self.index.get_or_init(|| {
            self.fetch().map_err(|err| {
                warn!(url = %self.index_url, error = %err, "package index unavailable");
                err.to_string()
            })
        })
    }
}

impl DependencySource for RemoteIndexSource {
    fn dependencies(&self, package: &str) -> Result<Vec<PackageName>, LookupError> {
        match self.index() {
            Ok(index) => index.dependencies(package),
            Err(reason) => Err(LookupError::Unavailable {
                package: package.to_string(),
                reason: reason.clone(),
            }),
        }
    }
}

fn index_url(repository_url: &str, architecture: &str) -> String {
    format!(
        "{}/{}/{}",
        repository_url.trim_end_matches('/'),
        architecture,
        INDEX_ARCHIVE
    )
}
