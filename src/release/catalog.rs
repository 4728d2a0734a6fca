//! Release catalog listing
//!
//! Builds the display-ready release list: releases by name, each with its
//! versions in version order. `currently_deployed` and `job_names` are read
//! from the store on every call and never cached.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::release::comparator::{compare_release_names, matches_prefix, sort_versions};
use crate::release::error::StoreError;
use crate::release::store::ReleaseStore;
use crate::release::types::{Release, ReleaseSummary, ReleaseVersion, ReleaseVersionSummary};
use crate::release::version::VersionForm;

pub struct ReleaseCatalog {
    store: Arc<dyn ReleaseStore>,
}

impl ReleaseCatalog {
    pub fn new(store: Arc<dyn ReleaseStore>) -> Self {
        Self { store }
    }

    /// All releases sorted by name, each with its sorted versions
    pub fn all_releases(&self) -> Result<Vec<ReleaseSummary>, StoreError> {
        let mut releases = self.store.releases()?;
        releases.sort_by(|a, b| compare_release_names(&a.name, &b.name));
        debug!("Listing {} releases", releases.len());

        releases
            .into_iter()
            .map(|release| -> Result<ReleaseSummary, StoreError> {
                let release_versions = self.sorted_release_versions(&release, None)?;
                Ok(ReleaseSummary {
                    name: release.name,
                    release_versions,
                })
            })
            .collect()
    }

    /// Versions of `release` sorted ascending, optionally limited to those
    /// whose version string starts with `prefix`
    ///
    /// A prefix matching nothing yields an empty list.
    pub fn sorted_release_versions(
        &self,
        release: &Release,
        prefix: Option<&str>,
    ) -> Result<Vec<ReleaseVersionSummary>, StoreError> {
        let mut versions: Vec<ReleaseVersion> = self
            .store
            .versions(release)?
            .into_iter()
            .filter(|v| prefix.is_none_or(|p| matches_prefix(&v.version, p)))
            .collect();

        for invalid in versions
            .iter()
            .filter(|v| VersionForm::parse(&v.version).is_none())
        {
            warn!(
                "Stored version {}/{} is not a valid release version, listing it last",
                release.name, invalid.version
            );
        }

        sort_versions(&mut versions, |v| v.version.as_str());

        versions
            .into_iter()
            .map(|version| self.summarize(version))
            .collect()
    }

    fn summarize(&self, version: ReleaseVersion) -> Result<ReleaseVersionSummary, StoreError> {
        let currently_deployed = !self.store.deployments(&version)?.is_empty();
        let job_names = self
            .store
            .templates(&version)?
            .into_iter()
            .map(|t| t.name)
            .collect();

        Ok(ReleaseVersionSummary {
            version: version.version,
            commit_hash: version.commit_hash,
            uncommitted_changes: version.uncommitted_changes,
            currently_deployed,
            job_names,
        })
    }
}
