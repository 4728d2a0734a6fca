//! Job dispatcher and file-presence abstractions

use std::path::Path;

#[cfg(test)]
use mockall::automock;
use serde::Serialize;

use crate::release::error::DispatchError;

/// Kind of background job handed to the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum JobKind {
    UpdateRelease,
    DeleteRelease,
}

impl JobKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobKind::UpdateRelease => "update_release",
            JobKind::DeleteRelease => "delete_release",
        }
    }
}

/// Handle of an enqueued task, as issued by the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TaskHandle(pub u64);

/// Trait for submitting background work
#[cfg_attr(test, automock)]
pub trait JobQueue: Send + Sync {
    /// Enqueue a job and return its task handle without waiting for it to run
    ///
    /// # Arguments
    /// * `user` - Name of the user the task runs on behalf of
    /// * `kind` - Job to run
    /// * `description` - Human readable task description
    /// * `args` - Job arguments, passed to the job as-is
    fn enqueue(
        &self,
        user: &str,
        kind: JobKind,
        description: &str,
        args: serde_json::Value,
    ) -> Result<TaskHandle, DispatchError>;
}

/// Trait for checking that a local file is present
#[cfg_attr(test, automock)]
pub trait FileChecker: Send + Sync {
    fn exists(&self, path: &Path) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_kind_as_str() {
        assert_eq!(JobKind::UpdateRelease.as_str(), "update_release");
        assert_eq!(JobKind::DeleteRelease.as_str(), "delete_release");
    }
}
