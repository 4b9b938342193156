//! Store model for tenants.

use crate::types::TenantId;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A tenant row. The only entity without a `tenant_id` column: tenants are
/// the partition roots themselves.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Tenant {
    pub id: Option<TenantId>,
    pub name: String,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: Option<i32>,
    pub last_updated_at: Option<DateTime<Utc>>,
    pub last_update_by: Option<i32>,
}
