//! # status-store
//!
//! PostgreSQL persistence component for user status update posts.
//!
//! This crate is the data-access layer for one entity: the short text
//! "status update" (SSU) a user posts. The HTTP/API layer that invokes
//! it, request validation, and authentication live elsewhere; this crate
//! owns the SQL, the row-to-entity mapping, generated-key handling, and
//! the write-path sentinel policy.
//!
//! ## Architecture
//!
//! ```text
//! API layer (out of scope)
//!     │
//!     ├── DatabaseFactory contract (persistence/)
//!     │       └── StatusUpdateStore ── sqlx::PgPool ── PostgreSQL
//!     │               └── row mapper (persistence/row)
//!     │
//!     └── StatusUpdate / StatusUpdatePostData (domain/)
//! ```
//!
//! Read operations propagate [`error::StoreError`]; write operations
//! convert recoverable failures into sentinel results (`"-1"` / `-1`)
//! and log them, so a single bad request cannot crash the caller.

pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
