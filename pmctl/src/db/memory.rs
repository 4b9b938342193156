//! In-memory store backend.
//!
//! Selected by the `memory` database configuration for dependency-free
//! local runs, and used by the handler tests. One generic [`MemoryStore`]
//! serves every entity; the per-entity differences (how to read an
//! identity, how to assign a surrogate one, how to normalize a record
//! after a save) are supplied as plain function pointers when the store
//! is built in [`crate::db::Stores::memory`].

use crate::db::errors::Result;
use crate::db::handlers::repository::Repository;
use anyhow::anyhow;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{
    Mutex, MutexGuard, PoisonError,
    atomic::{AtomicI64, Ordering},
};

pub struct MemoryStore<R, I> {
    records: Mutex<HashMap<I, R>>,
    sequence: AtomicI64,
    identify: fn(&R) -> Option<I>,
    assign: fn(&mut R, i64),
    finalize: fn(&mut R),
}

impl<R, I> MemoryStore<R, I>
where
    I: Eq + Hash,
{
    /// `identify` reads the record's identity; `assign` stamps a surrogate
    /// identity onto it (a no-op for caller-keyed records); `finalize`
    /// normalizes a record on its way into the map (e.g. marking it
    /// persisted).
    pub fn new(identify: fn(&R) -> Option<I>, assign: fn(&mut R, i64), finalize: fn(&mut R)) -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            sequence: AtomicI64::new(0),
            identify,
            assign,
            finalize,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<I, R>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait::async_trait]
impl<R, I> Repository for MemoryStore<R, I>
where
    R: Clone + Send + Sync + 'static,
    I: Eq + Hash + Clone + Send + Sync + 'static,
{
    type Record = R;
    type Id = I;

    async fn get(&self, id: I) -> Result<Option<R>> {
        Ok(self.lock().get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<R>> {
        // Iteration order is unspecified, matching the unordered contract
        Ok(self.lock().values().cloned().collect())
    }

    async fn exists(&self, id: I) -> Result<bool> {
        Ok(self.lock().contains_key(&id))
    }

    async fn save(&self, record: &R) -> Result<R> {
        let mut saved = record.clone();
        let id = match (self.identify)(&saved) {
            Some(id) => id,
            None => {
                let next = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
                (self.assign)(&mut saved, next);
                (self.identify)(&saved).ok_or_else(|| anyhow!("store failed to assign an identity"))?
            }
        };
        (self.finalize)(&mut saved);
        self.lock().insert(id, saved.clone());
        Ok(saved)
    }

    async fn delete(&self, id: I) -> Result<()> {
        // Removing a missing identity is a successful no-op
        self.lock().remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::emp_posts::{EmpPost, RecordState};
    use crate::db::models::tenants::Tenant;
    use crate::types::{EmpPostId, TenantId};

    fn tenant_store() -> MemoryStore<Tenant, TenantId> {
        MemoryStore::new(|r| r.id, |r, n| r.id = Some(n), |_| {})
    }

    fn tenant(name: &str) -> Tenant {
        Tenant {
            id: None,
            name: name.to_string(),
            created_at: None,
            created_by: None,
            last_updated_at: None,
            last_update_by: None,
        }
    }

    #[tokio::test]
    async fn save_assigns_sequential_identities() {
        let store = tenant_store();
        let first = store.save(&tenant("one")).await.unwrap();
        let second = store.save(&tenant("two")).await.unwrap();
        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
    }

    #[tokio::test]
    async fn save_with_identity_overwrites() {
        let store = tenant_store();
        let created = store.save(&tenant("before")).await.unwrap();

        let mut updated = created.clone();
        updated.name = "after".to_string();
        store.save(&updated).await.unwrap();

        let fetched = store.get(created.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(fetched.name, "after");
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_missing_identity_is_a_noop() {
        let store = tenant_store();
        store.delete(42).await.unwrap();
        assert!(store.get(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn finalize_marks_emp_posts_persisted() {
        let store: MemoryStore<EmpPost, EmpPostId> =
            MemoryStore::new(|r| r.id, |_, _| {}, |r| r.state = RecordState::Persisted);

        let id = EmpPostId { emp_id: 1, post_id: 2 };
        let transient = EmpPost {
            id: Some(id),
            tenant_id: Some(7),
            created_at: None,
            created_by: None,
            last_updated_at: None,
            last_update_by: None,
            state: RecordState::Transient,
        };

        let saved = store.save(&transient).await.unwrap();
        assert_eq!(saved.state, RecordState::Persisted);

        let fetched = store.get(id).await.unwrap().unwrap();
        assert_eq!(fetched.state, RecordState::Persisted);
    }
}
