//! Store model for organizations.

use crate::types::OrgId;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// An organization row. `parent_org_id` forms the org hierarchy but no
/// hierarchy invariant is enforced here; the value is stored as given.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Org {
    pub id: Option<OrgId>,
    pub name: String,
    pub tenant_id: Option<i32>,
    pub org_type: Option<i32>,
    pub head_id: Option<i32>,
    pub parent_org_id: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: Option<i32>,
    pub last_updated_at: Option<DateTime<Utc>>,
    pub last_update_by: Option<i32>,
}
