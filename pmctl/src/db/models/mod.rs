//! Store record models matching table schemas.
//!
//! Each struct here corresponds to a database table row and is the value
//! the store traits traffic in. Surrogate identities are `Option<_>`: a
//! record without one has not been persisted yet, and the store assigns
//! the identity on insert. API request/response shapes live separately in
//! [`crate::api::models`] so the two can evolve independently.

pub mod effort_records;
pub mod emp_posts;
pub mod emps;
pub mod org_types;
pub mod orgs;
pub mod project_members;
pub mod projects;
pub mod tenants;

pub use effort_records::EffortRecord;
pub use emp_posts::{EmpPost, RecordState};
pub use emps::{Emp, Gender};
pub use org_types::OrgType;
pub use orgs::Org;
pub use project_members::ProjectMember;
pub use projects::Project;
pub use tenants::Tenant;
