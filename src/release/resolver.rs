//! Resolution of requested release names and version strings to stored records

use tracing::debug;

use crate::release::comparator::compare_versions;
use crate::release::error::DirectorError;
use crate::release::store::ReleaseStore;
use crate::release::types::{Release, ReleaseVersion};
use crate::release::version::VersionForm;

/// Look up a release by name, failing with `ReleaseNotFound` when it is unknown
pub fn find_release(store: &dyn ReleaseStore, name: &str) -> Result<Release, DirectorError> {
    store
        .find_release(name)?
        .ok_or_else(|| DirectorError::ReleaseNotFound {
            name: name.to_string(),
        })
}

/// Find the stored version matching `requested`.
///
/// The request must be a valid version. An exact match on the stored string
/// wins; otherwise a dev request is retried in its other notation, so
/// `9+dev.1` finds a record stored as `9.1-dev` and vice versa. Last, any
/// stored dev build naming the same build counts, so `9+dev.1` also finds
/// `9.01-dev`; the lowest in version order wins if several do.
///
/// # Errors
/// * `ReleaseVersionInvalid` - `requested` is not a version
/// * `ReleaseVersionNotFound` - no stored version matches in either notation
pub fn find_version<'a>(
    release: &Release,
    versions: &'a [ReleaseVersion],
    requested: &str,
) -> Result<&'a ReleaseVersion, DirectorError> {
    let Some(form) = VersionForm::parse(requested) else {
        return Err(DirectorError::ReleaseVersionInvalid {
            version: requested.to_string(),
        });
    };

    if let Some(found) = find_exact(versions, requested) {
        return Ok(found);
    }

    if let Some(alternate) = form.alternate().map(|alt| alt.to_string()) {
        debug!(
            "Version {}/{} not stored as requested, trying {}",
            release.name, requested, alternate
        );
        if let Some(found) = find_exact(versions, &alternate) {
            return Ok(found);
        }

        let equivalent = versions
            .iter()
            .filter(|v| VersionForm::parse(&v.version).is_some_and(|f| f.same_build(&form)))
            .min_by(|a, b| compare_versions(&a.version, &b.version));
        if let Some(found) = equivalent {
            debug!(
                "Version {}/{} resolved to equivalent {}",
                release.name, requested, found.version
            );
            return Ok(found);
        }
    }

    Err(DirectorError::ReleaseVersionNotFound {
        release: release.name.clone(),
        version: requested.to_string(),
    })
}

fn find_exact<'a>(versions: &'a [ReleaseVersion], version: &str) -> Option<&'a ReleaseVersion> {
    versions.iter().find(|v| v.version == version)
}
