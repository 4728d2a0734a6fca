use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{Connection, OptionalExtension, Row};
use tracing::{debug, info};

use crate::release::error::StoreError;
use crate::release::store::ReleaseStore;
use crate::release::types::{Deployment, Release, ReleaseVersion, Template};

/// Schema migrations applied on top of the base schema
/// Each version contains a list of SQL statements to execute; none yet
const MIGRATIONS: &[&[&str]] = &[];

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn open(db_path: &Path) -> Result<Self, StoreError> {
        info!("Opening release database at {:?}", db_path);

        let conn = Connection::open(db_path)?;

        // Enable WAL mode for better concurrency
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;

        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.pragma_update(None, "foreign_keys", "ON")?;
        debug!("Database connection established");

        let store = Self {
            conn: Mutex::new(conn),
        };
        store.create_schema()?;

        Ok(store)
    }

    /// Acquire database connection lock with proper error handling
    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::LockPoisoned)
    }

    fn create_schema(&self) -> Result<(), StoreError> {
        debug!("Creating database schema");

        let conn = self.lock_conn()?;

        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS releases (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE
            );

            CREATE TABLE IF NOT EXISTS release_versions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                release_id INTEGER NOT NULL,
                version TEXT NOT NULL,
                commit_hash TEXT NOT NULL DEFAULT '',
                uncommitted_changes INTEGER NOT NULL DEFAULT 0,
                FOREIGN KEY (release_id) REFERENCES releases(id) ON DELETE CASCADE,
                UNIQUE(release_id, version)
            );

            CREATE INDEX IF NOT EXISTS idx_release_versions_release_id
                ON release_versions(release_id);

            CREATE TABLE IF NOT EXISTS templates (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                release_id INTEGER NOT NULL,
                name TEXT NOT NULL,
                FOREIGN KEY (release_id) REFERENCES releases(id) ON DELETE CASCADE
            );

            CREATE TABLE IF NOT EXISTS release_versions_templates (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                release_version_id INTEGER NOT NULL,
                template_id INTEGER NOT NULL,
                FOREIGN KEY (release_version_id) REFERENCES release_versions(id) ON DELETE CASCADE,
                FOREIGN KEY (template_id) REFERENCES templates(id) ON DELETE CASCADE,
                UNIQUE(release_version_id, template_id)
            );

            CREATE TABLE IF NOT EXISTS deployments (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE
            );

            CREATE TABLE IF NOT EXISTS deployments_release_versions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                deployment_id INTEGER NOT NULL,
                release_version_id INTEGER NOT NULL,
                FOREIGN KEY (deployment_id) REFERENCES deployments(id) ON DELETE CASCADE,
                FOREIGN KEY (release_version_id) REFERENCES release_versions(id) ON DELETE CASCADE,
                UNIQUE(deployment_id, release_version_id)
            );

            CREATE INDEX IF NOT EXISTS idx_deployments_release_versions_version
                ON deployments_release_versions(release_version_id);
            "#,
        )?;

        // Apply migrations
        Self::apply_migrations(&conn)?;

        debug!("Database schema created successfully");
        Ok(())
    }

    /// Apply pending migrations based on user_version pragma
    fn apply_migrations(conn: &Connection) -> Result<(), StoreError> {
        let current_version: i32 =
            conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

        for (i, statements) in MIGRATIONS.iter().enumerate() {
            let version = (i + 1) as i32;
            if version > current_version {
                for sql in *statements {
                    conn.execute(sql, [])?;
                }
                debug!("Applied migration v{}", version);
            }
        }

        let target_version = MIGRATIONS.len() as i32;
        if target_version > current_version {
            conn.pragma_update(None, "user_version", target_version)?;
            debug!("Updated schema version to v{}", target_version);
        }

        Ok(())
    }

    /// Register a release. Release creation belongs to the upload workflow;
    /// this is its entry point into the store.
    pub fn create_release(&self, name: &str) -> Result<Release, StoreError> {
        let conn = self.lock_conn()?;
        conn.execute("INSERT INTO releases (name) VALUES (?1)", [name])?;

        Ok(Release {
            id: conn.last_insert_rowid(),
            name: name.to_string(),
        })
    }

    pub fn create_version(
        &self,
        release: &Release,
        version: &str,
        commit_hash: &str,
        uncommitted_changes: bool,
    ) -> Result<ReleaseVersion, StoreError> {
        let conn = self.lock_conn()?;
        conn.execute(
            r#"
            INSERT INTO release_versions (release_id, version, commit_hash, uncommitted_changes)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            (release.id, version, commit_hash, uncommitted_changes),
        )?;

        debug!("Stored version {}/{}", release.name, version);

        Ok(ReleaseVersion {
            id: conn.last_insert_rowid(),
            release_id: release.id,
            version: version.to_string(),
            commit_hash: commit_hash.to_string(),
            uncommitted_changes,
        })
    }

    pub fn create_template(&self, release: &Release, name: &str) -> Result<Template, StoreError> {
        let conn = self.lock_conn()?;
        conn.execute(
            "INSERT INTO templates (release_id, name) VALUES (?1, ?2)",
            (release.id, name),
        )?;

        Ok(Template {
            id: conn.last_insert_rowid(),
            release_id: release.id,
            name: name.to_string(),
        })
    }

    pub fn add_template(
        &self,
        version: &ReleaseVersion,
        template: &Template,
    ) -> Result<(), StoreError> {
        let conn = self.lock_conn()?;
        conn.execute(
            "INSERT OR IGNORE INTO release_versions_templates (release_version_id, template_id) VALUES (?1, ?2)",
            (version.id, template.id),
        )?;
        Ok(())
    }

    pub fn create_deployment(&self, name: &str) -> Result<Deployment, StoreError> {
        let conn = self.lock_conn()?;
        conn.execute("INSERT INTO deployments (name) VALUES (?1)", [name])?;

        Ok(Deployment {
            id: conn.last_insert_rowid(),
            name: name.to_string(),
        })
    }

    pub fn add_deployment(
        &self,
        version: &ReleaseVersion,
        deployment: &Deployment,
    ) -> Result<(), StoreError> {
        let conn = self.lock_conn()?;
        conn.execute(
            "INSERT OR IGNORE INTO deployments_release_versions (deployment_id, release_version_id) VALUES (?1, ?2)",
            (deployment.id, version.id),
        )?;
        Ok(())
    }
}

fn release_from_row(row: &Row<'_>) -> rusqlite::Result<Release> {
    Ok(Release {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

impl ReleaseStore for SqliteStore {
    fn releases(&self) -> Result<Vec<Release>, StoreError> {
        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare("SELECT id, name FROM releases")?;

        let releases = stmt
            .query_map([], release_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(releases)
    }

    fn find_release(&self, name: &str) -> Result<Option<Release>, StoreError> {
        let conn = self.lock_conn()?;
        let release = conn
            .query_row(
                "SELECT id, name FROM releases WHERE name = ?1",
                [name],
                release_from_row,
            )
            .optional()?;

        Ok(release)
    }

    fn versions(&self, release: &Release) -> Result<Vec<ReleaseVersion>, StoreError> {
        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, release_id, version, commit_hash, uncommitted_changes
            FROM release_versions
            WHERE release_id = ?1
            "#,
        )?;

        let versions = stmt
            .query_map([release.id], |row| {
                Ok(ReleaseVersion {
                    id: row.get(0)?,
                    release_id: row.get(1)?,
                    version: row.get(2)?,
                    commit_hash: row.get(3)?,
                    uncommitted_changes: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "Loaded {} versions for release {}",
            versions.len(),
            release.name
        );
        Ok(versions)
    }

    fn templates(&self, version: &ReleaseVersion) -> Result<Vec<Template>, StoreError> {
        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT t.id, t.release_id, t.name FROM templates t
            JOIN release_versions_templates rvt ON rvt.template_id = t.id
            WHERE rvt.release_version_id = ?1
            ORDER BY rvt.id
            "#,
        )?;

        let templates = stmt
            .query_map([version.id], |row| {
                Ok(Template {
                    id: row.get(0)?,
                    release_id: row.get(1)?,
                    name: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(templates)
    }

    fn deployments(&self, version: &ReleaseVersion) -> Result<Vec<Deployment>, StoreError> {
        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT d.id, d.name FROM deployments d
            JOIN deployments_release_versions drv ON drv.deployment_id = d.id
            WHERE drv.release_version_id = ?1
            "#,
        )?;

        let deployments = stmt
            .query_map([version.id], |row| {
                Ok(Deployment {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(deployments)
    }
}
