//! Base repository trait for store operations.

use crate::db::errors::Result;
use std::sync::Arc;

/// Store surface consumed by the API layer, one implementation per entity
/// per backend.
///
/// `save` is insert-or-update: a record without an identity is inserted and
/// the store assigns one; a record with an identity overwrites the stored
/// row. `delete` is unconditional - removing a missing identity is a no-op
/// indistinguishable from success.
#[async_trait::async_trait]
pub trait Repository: Send + Sync {
    /// The full entity record type
    type Record: Send + Sync;

    /// The identifier type for lookups
    type Id: Send + Sync;

    /// Fetch a record by identity
    async fn get(&self, id: Self::Id) -> Result<Option<Self::Record>>;

    /// Return the entire collection, unfiltered
    async fn list(&self) -> Result<Vec<Self::Record>>;

    /// Whether a record with this identity exists
    async fn exists(&self, id: Self::Id) -> Result<bool>;

    /// Persist the record, assigning an identity on insert
    async fn save(&self, record: &Self::Record) -> Result<Self::Record>;

    /// Remove a record by identity
    async fn delete(&self, id: Self::Id) -> Result<()>;
}

/// Shared, type-erased store handle held in application state.
pub type DynRepository<R, I> = Arc<dyn Repository<Record = R, Id = I>>;
