//! Job dispatcher and file checker test doubles

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use release_director::release::error::DispatchError;
use release_director::release::jobs::{FileChecker, JobKind, JobQueue, TaskHandle};

/// A job as received by [`RecordingJobQueue`]
#[derive(Debug, Clone, PartialEq)]
pub struct EnqueuedJob {
    pub user: String,
    pub kind: JobKind,
    pub description: String,
    pub args: serde_json::Value,
}

/// Job queue that records every submission and hands out sequential task ids
#[derive(Default)]
pub struct RecordingJobQueue {
    jobs: Mutex<Vec<EnqueuedJob>>,
}

impl RecordingJobQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jobs(&self) -> Vec<EnqueuedJob> {
        self.jobs.lock().unwrap().clone()
    }
}

impl JobQueue for RecordingJobQueue {
    fn enqueue(
        &self,
        user: &str,
        kind: JobKind,
        description: &str,
        args: serde_json::Value,
    ) -> Result<TaskHandle, DispatchError> {
        let mut jobs = self.jobs.lock().unwrap();
        jobs.push(EnqueuedJob {
            user: user.to_string(),
            kind,
            description: description.to_string(),
            args,
        });
        Ok(TaskHandle(jobs.len() as u64))
    }
}

/// File checker that only knows about a fixed set of paths
pub struct StaticFileChecker {
    existing: Vec<PathBuf>,
}

impl StaticFileChecker {
    pub fn new(existing: &[&str]) -> Self {
        Self {
            existing: existing.iter().map(PathBuf::from).collect(),
        }
    }
}

impl FileChecker for StaticFileChecker {
    fn exists(&self, path: &Path) -> bool {
        self.existing.iter().any(|p| p == path)
    }
}
