//! Store test utilities

use std::sync::Arc;

use tempfile::TempDir;

use release_director::release::sqlite::SqliteStore;
use release_director::release::types::{Release, ReleaseVersion};

/// Create a store backed by a database in a fresh temporary directory
pub fn create_test_store() -> (TempDir, Arc<SqliteStore>) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let store = SqliteStore::open(&db_path).unwrap();

    (temp_dir, Arc::new(store))
}

/// Create a release with the given versions, each without templates or deployments
pub fn seed_release(
    store: &SqliteStore,
    name: &str,
    versions: &[&str],
) -> (Release, Vec<ReleaseVersion>) {
    let release = store.create_release(name).unwrap();
    let versions = versions
        .iter()
        .map(|v| store.create_version(&release, v, "", false).unwrap())
        .collect();

    (release, versions)
}
