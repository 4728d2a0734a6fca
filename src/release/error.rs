use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Database connection lock poisoned")]
    LockPoisoned,
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Job rejected by dispatcher: {0}")]
    Rejected(String),
}

#[derive(Debug, Error)]
pub enum DirectorError {
    #[error("Release version `{version}' is invalid")]
    ReleaseVersionInvalid { version: String },

    #[error("Release version `{release}/{version}' doesn't exist")]
    ReleaseVersionNotFound { release: String, version: String },

    #[error("Release `{name}' doesn't exist")]
    ReleaseNotFound { name: String },

    #[error("{0}")]
    Director(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}
