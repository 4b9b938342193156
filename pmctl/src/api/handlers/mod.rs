//! Axum route handlers, one module per entity.
//!
//! Every module exposes the same six operations and enforces the same
//! contract through [`crate::api::identity`]:
//!
//! - `create_*`: identity must be absent (surrogate keys) or present
//!   (the caller-keyed `emp-posts`); field constraints are validated.
//! - `replace_*`: body identity must be present and equal the path
//!   identity, the target must exist; the stored record is fully
//!   overwritten, absent nullable fields becoming null.
//! - `merge_*`: same identity and existence rules, but only the fields
//!   present in the body overwrite stored values, with no field
//!   validation.
//! - `list_*` / `get_*` / `delete_*`: plain pass-throughs; delete never
//!   reports whether the record existed.

pub mod effort_records;
pub mod emp_posts;
pub mod emps;
pub mod org_types;
pub mod orgs;
pub mod project_members;
pub mod projects;
pub mod tenants;
