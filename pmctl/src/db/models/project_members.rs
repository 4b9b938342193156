//! Store model for project memberships.

use crate::types::ProjectMemberId;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ProjectMember {
    pub id: Option<ProjectMemberId>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    /// Two-character status code
    pub status: String,
    /// Planned involvement as a whole-number percentage
    pub estimate_invest_ratio: Option<i32>,
    pub emp_id: Option<i32>,
    pub project_id: Option<i32>,
    pub tenant_id: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: Option<i32>,
    pub last_updated_at: Option<DateTime<Utc>>,
    pub last_update_by: Option<i32>,
}
