//! Store model for projects.

use crate::types::ProjectId;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Project {
    pub id: Option<ProjectId>,
    pub num: String,
    pub name: String,
    /// Two-character status code
    pub status: String,
    pub mng_id: Option<i32>,
    pub contract_id: Option<i32>,
    pub tenant_id: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: Option<i32>,
    pub last_updated_at: Option<DateTime<Utc>>,
    pub last_update_by: Option<i32>,
}
