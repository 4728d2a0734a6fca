//! Release management layer
//!
//! This module resolves caller-supplied version strings to stored release
//! versions and produces the ordered release catalog. Everything that touches
//! the outside world (the relational store, the job dispatcher, the filesystem)
//! sits behind a trait so the resolution and ordering logic stays pure.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Manager   │────▶│   Catalog   │────▶│    Store    │
//! │  (facade)   │     │  (listing)  │     │  (SQLite)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Resolver   │────▶│ Comparator  │────▶│   Version   │
//! │ (find one)  │     │ (ordering)  │     │  (grammar)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`version`]: Version grammar and dev-build notation normalization
//! - [`comparator`]: Total ordering over versions, prefix filter, release name order
//! - [`resolver`]: Exact-then-normalized lookup of a requested version
//! - [`catalog`]: Sorted, display-ready release listing
//! - [`manager`]: Facade combining lookups with job submission
//! - [`store`]: Store trait the catalog and manager read from
//! - [`sqlite`]: SQLite implementation of the store
//! - [`jobs`]: Job dispatcher and file-presence traits
//! - [`error`]: Error types
//! - [`types`]: Release, version, template and deployment records

pub mod catalog;
pub mod comparator;
pub mod error;
pub mod jobs;
pub mod manager;
pub mod resolver;
pub mod sqlite;
pub mod store;
pub mod types;
pub mod version;
