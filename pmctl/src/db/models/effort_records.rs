//! Store model for effort records.

use crate::types::EffortRecordId;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct EffortRecord {
    pub id: Option<EffortRecordId>,
    /// Person-days booked, 0 to 99.9
    pub effort: f32,
    pub work_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub project_id: Option<i32>,
    pub emp_id: Option<i32>,
    pub tenant_id: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: Option<i32>,
    pub last_updated_at: Option<DateTime<Utc>>,
    pub last_update_by: Option<i32>,
}
