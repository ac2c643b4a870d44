//! Persistence layer: generic store contract and PostgreSQL implementation.
//!
//! Provides the [`DatabaseFactory`] trait every entity store implements,
//! the pure row mapper for the `ssu` table, and [`postgres::StatusUpdateStore`],
//! the concrete component backed by `sqlx::PgPool`.

pub mod postgres;
pub mod row;

use async_trait::async_trait;

use crate::error::StoreError;

/// Generic persistence contract, parameterized by entity type `E` and
/// creation payload type `P`.
///
/// Each entity's store implements this independently; there is no shared
/// base implementation, only the shared contract. Entity-specific
/// operations (user scoping, delete, update) live on the concrete store.
#[async_trait]
pub trait DatabaseFactory<E, P>: Send + Sync {
    /// Returns every stored entity, most recently inserted first.
    ///
    /// # Errors
    ///
    /// Propagates any [`StoreError`] raised while querying or mapping;
    /// no sentinel read result is defined.
    async fn get_all_from_database(&self) -> Result<Vec<E>, StoreError>;

    /// Returns the entity with the given identifier, or `None` when no
    /// matching row exists. Absence is never signalled with a
    /// placeholder entity.
    ///
    /// # Errors
    ///
    /// Propagates any [`StoreError`] raised while querying or mapping.
    async fn get_by_id(&self, id: &str) -> Result<Option<E>, StoreError>;

    /// Persists a new entity built from `data` and returns the
    /// store-generated identifier as a string.
    ///
    /// Recoverable rejections (malformed post date, key constraint
    /// violation) are logged and reported as `Ok` with the sentinel id
    /// `"-1"`; callers must check for it rather than assume success.
    ///
    /// # Errors
    ///
    /// Propagates any other [`StoreError`], e.g. a lost connection.
    async fn insert_to_database(&self, data: &P) -> Result<String, StoreError>;
}
