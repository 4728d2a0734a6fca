#![allow(dead_code)]

mod jobs;
mod store;

pub use jobs::{EnqueuedJob, RecordingJobQueue, StaticFileChecker};
pub use store::{create_test_store, seed_release};
