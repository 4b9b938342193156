//! Store implementations backed by PostgreSQL.
//!
//! One store struct per entity, each wrapping the shared connection pool
//! and implementing the [`Repository`] trait. Stores are intentionally
//! thin: query construction and row mapping only. The identity contract
//! (who may create, what must match, what must exist) lives in the API
//! layer, not here.

pub mod effort_records;
pub mod emp_posts;
pub mod emps;
pub mod org_types;
pub mod orgs;
pub mod project_members;
pub mod projects;
pub mod repository;
pub mod tenants;

pub use effort_records::EffortRecords;
pub use emp_posts::EmpPosts;
pub use emps::Emps;
pub use org_types::OrgTypes;
pub use orgs::Orgs;
pub use project_members::ProjectMembers;
pub use projects::Projects;
pub use repository::{DynRepository, Repository};
pub use tenants::Tenants;
