//! Records read from the release store

use serde::Serialize;

/// A named collection of versioned bundles
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Release {
    pub id: i64,
    pub name: String,
}

/// One immutable version of a release, as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseVersion {
    pub id: i64,
    pub release_id: i64,
    pub version: String,
    pub commit_hash: String,
    pub uncommitted_changes: bool,
}

/// A job definition shipped by a release version
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    pub id: i64,
    pub release_id: i64,
    pub name: String,
}

/// A deployment; only its association with release versions matters here
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deployment {
    pub id: i64,
    pub name: String,
}

/// Catalog entry for a release
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseSummary {
    pub name: String,
    pub release_versions: Vec<ReleaseVersionSummary>,
}

/// Catalog entry for a release version, with read-time derived fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseVersionSummary {
    pub version: String,
    pub commit_hash: String,
    pub uncommitted_changes: bool,
    pub currently_deployed: bool,
    pub job_names: Vec<String>,
}
