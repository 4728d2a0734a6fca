//! Read access to persisted releases

#[cfg(test)]
use mockall::automock;

use crate::release::error::StoreError;
use crate::release::types::{Deployment, Release, ReleaseVersion, Template};

/// Trait for reading releases and their relations from the store
///
/// Implementations should return a read-consistent view for the duration of a
/// single call. Nothing in this crate writes through this trait.
#[cfg_attr(test, automock)]
pub trait ReleaseStore: Send + Sync {
    /// All releases, in no particular order
    fn releases(&self) -> Result<Vec<Release>, StoreError>;

    /// Look up a release by its unique name
    fn find_release(&self, name: &str) -> Result<Option<Release>, StoreError>;

    /// All versions belonging to a release
    fn versions(&self, release: &Release) -> Result<Vec<ReleaseVersion>, StoreError>;

    /// Templates provided by a version, in template order
    fn templates(&self, version: &ReleaseVersion) -> Result<Vec<Template>, StoreError>;

    /// Deployments currently using a version
    fn deployments(&self, version: &ReleaseVersion) -> Result<Vec<Deployment>, StoreError>;
}
