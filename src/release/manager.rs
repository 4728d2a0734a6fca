//! Release manager facade
//!
//! Combines version resolution and catalog listing with the handful of
//! operations that hand work to the job dispatcher.

use std::path::Path;
use std::sync::Arc;

use serde_json::{Map, Value, json};
use tracing::{info, warn};

use crate::release::catalog::ReleaseCatalog;
use crate::release::error::DirectorError;
use crate::release::jobs::{FileChecker, JobKind, JobQueue, TaskHandle};
use crate::release::resolver;
use crate::release::store::ReleaseStore;
use crate::release::types::{Release, ReleaseSummary, ReleaseVersion, ReleaseVersionSummary};

pub struct ReleaseManager {
    store: Arc<dyn ReleaseStore>,
    catalog: ReleaseCatalog,
    job_queue: Arc<dyn JobQueue>,
    files: Arc<dyn FileChecker>,
}

impl ReleaseManager {
    pub fn new(
        store: Arc<dyn ReleaseStore>,
        job_queue: Arc<dyn JobQueue>,
        files: Arc<dyn FileChecker>,
    ) -> Self {
        Self {
            catalog: ReleaseCatalog::new(Arc::clone(&store)),
            store,
            job_queue,
            files,
        }
    }

    pub fn find_by_name(&self, name: &str) -> Result<Release, DirectorError> {
        resolver::find_release(self.store.as_ref(), name)
    }

    /// Resolve `requested` to one of `release`'s stored versions, accepting
    /// either dev-build notation
    pub fn find_version(
        &self,
        release: &Release,
        requested: &str,
    ) -> Result<ReleaseVersion, DirectorError> {
        let versions = self.store.versions(release)?;
        resolver::find_version(release, &versions, requested).cloned()
    }

    pub fn all_releases(&self) -> Result<Vec<ReleaseSummary>, DirectorError> {
        Ok(self.catalog.all_releases()?)
    }

    pub fn sorted_release_versions(
        &self,
        release: &Release,
        prefix: Option<&str>,
    ) -> Result<Vec<ReleaseVersionSummary>, DirectorError> {
        Ok(self.catalog.sorted_release_versions(release, prefix)?)
    }

    pub fn create_release_from_url(
        &self,
        user: &str,
        url: &str,
        rebase: bool,
        skip_if_exists: bool,
    ) -> Result<TaskHandle, DirectorError> {
        let args = json!([
            url,
            { "remote": true, "rebase": rebase, "skip_if_exists": skip_if_exists }
        ]);
        self.enqueue(user, JobKind::UpdateRelease, "create release", args)
    }

    pub fn create_release_from_file_path(
        &self,
        user: &str,
        path: &Path,
        rebase: bool,
    ) -> Result<TaskHandle, DirectorError> {
        if !self.files.exists(path) {
            warn!("Release file {} does not exist", path.display());
            return Err(DirectorError::Director(format!(
                "Failed to create release: file not found - {}",
                path.display()
            )));
        }

        let Some(path) = path.to_str() else {
            return Err(DirectorError::Director(format!(
                "Failed to create release: path is not valid UTF-8 - {}",
                path.display()
            )));
        };

        let args = json!([path, { "rebase": rebase }]);
        self.enqueue(user, JobKind::UpdateRelease, "create release", args)
    }

    pub fn delete_release(
        &self,
        user: &str,
        release: &Release,
        options: &Map<String, Value>,
    ) -> Result<TaskHandle, DirectorError> {
        let args = json!([release.name, options]);
        self.enqueue(
            user,
            JobKind::DeleteRelease,
            &format!("delete release: {}", release.name),
            args,
        )
    }

    fn enqueue(
        &self,
        user: &str,
        kind: JobKind,
        description: &str,
        args: Value,
    ) -> Result<TaskHandle, DirectorError> {
        let task = self.job_queue.enqueue(user, kind, description, args)?;
        info!(
            "Enqueued {} job for {} as task {}",
            kind.as_str(),
            user,
            task.0
        );
        Ok(task)
    }
}
