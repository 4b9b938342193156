//! Persistence layer.
//!
//! ```text
//! ┌──────────────┐
//! │ API handlers │  (identity contract, HTTP mapping)
//! └──────┬───────┘
//!        │
//!        ↓
//! ┌──────────────┐
//! │    Stores    │  (db::handlers - PostgreSQL, db::memory - in-memory)
//! └──────┬───────┘
//!        │
//!        ↓
//! ┌──────────────┐
//! │    Models    │  (db::models - table records)
//! └──────────────┘
//! ```
//!
//! Each entity has one store per backend, all implementing
//! [`handlers::Repository`]. The API layer only ever sees the trait, held
//! as a [`Stores`] bundle in application state, so the backend is picked
//! once at startup and never leaks into handler code.

pub mod errors;
pub mod handlers;
pub mod memory;
pub mod models;

use crate::types::{EffortRecordId, EmpId, EmpPostId, OrgId, OrgTypeId, ProjectId, ProjectMemberId, TenantId};
use handlers::DynRepository;
use memory::MemoryStore;
use models::{EffortRecord, Emp, EmpPost, Org, OrgType, Project, ProjectMember, RecordState, Tenant};
use sqlx::PgPool;
use std::sync::Arc;

/// One store handle per entity, shared across all request handlers.
#[derive(Clone)]
pub struct Stores {
    pub tenants: DynRepository<Tenant, TenantId>,
    pub org_types: DynRepository<OrgType, OrgTypeId>,
    pub orgs: DynRepository<Org, OrgId>,
    pub emps: DynRepository<Emp, EmpId>,
    pub emp_posts: DynRepository<EmpPost, EmpPostId>,
    pub projects: DynRepository<Project, ProjectId>,
    pub project_members: DynRepository<ProjectMember, ProjectMemberId>,
    pub effort_records: DynRepository<EffortRecord, EffortRecordId>,
}

impl Stores {
    /// Stores backed by a PostgreSQL pool.
    pub fn postgres(pool: &PgPool) -> Self {
        Self {
            tenants: Arc::new(handlers::Tenants::new(pool.clone())),
            org_types: Arc::new(handlers::OrgTypes::new(pool.clone())),
            orgs: Arc::new(handlers::Orgs::new(pool.clone())),
            emps: Arc::new(handlers::Emps::new(pool.clone())),
            emp_posts: Arc::new(handlers::EmpPosts::new(pool.clone())),
            projects: Arc::new(handlers::Projects::new(pool.clone())),
            project_members: Arc::new(handlers::ProjectMembers::new(pool.clone())),
            effort_records: Arc::new(handlers::EffortRecords::new(pool.clone())),
        }
    }

    /// Process-local stores with no external dependencies.
    pub fn memory() -> Self {
        Self {
            tenants: Arc::new(MemoryStore::new(|r: &Tenant| r.id, |r, n| r.id = Some(n), |_| {})),
            org_types: Arc::new(MemoryStore::new(|r: &OrgType| r.id, |r, n| r.id = Some(n), |_| {})),
            orgs: Arc::new(MemoryStore::new(|r: &Org| r.id, |r, n| r.id = Some(n), |_| {})),
            emps: Arc::new(MemoryStore::new(|r: &Emp| r.id, |r, n| r.id = Some(n), |_| {})),
            // Composite identity is caller-assigned: no surrogate to hand out,
            // but saved records must come back marked persisted.
            emp_posts: Arc::new(MemoryStore::new(
                |r: &EmpPost| r.id,
                |_, _| {},
                |r| r.state = RecordState::Persisted,
            )),
            projects: Arc::new(MemoryStore::new(|r: &Project| r.id, |r, n| r.id = Some(n), |_| {})),
            project_members: Arc::new(MemoryStore::new(
                |r: &ProjectMember| r.id,
                |r, n| r.id = Some(n),
                |_| {},
            )),
            effort_records: Arc::new(MemoryStore::new(
                |r: &EffortRecord| r.id,
                |r, n| r.id = Some(n),
                |_| {},
            )),
        }
    }
}
