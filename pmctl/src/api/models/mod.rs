//! API request/response models.
//!
//! Three shapes per entity, all `camelCase` on the wire:
//!
//! - `*Payload` - create/replace body. Required columns are required
//!   fields, so a missing one is rejected at deserialization; nullable
//!   columns are `Option` and an absent value overwrites with null on
//!   replace. `validate()` enforces lengths and numeric bounds.
//! - `*Merge` - partial-update body. Every field is `Option`; `apply()`
//!   copies only the present ones onto the stored record, field by field.
//! - `*Response` - the persisted record as returned to the caller.
//!
//! Payloads and merges implement [`crate::api::identity::Identified`] so
//! the identity contract can be checked generically.

pub mod effort_records;
pub mod emp_posts;
pub mod emps;
pub mod org_types;
pub mod orgs;
pub mod project_members;
pub mod projects;
pub mod tenants;
