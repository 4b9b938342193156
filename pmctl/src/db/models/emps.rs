//! Store model for employees.

use crate::types::EmpId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Employee gender, stored as an upper-case string column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Emp {
    pub id: Option<EmpId>,
    pub name: String,
    pub org_id: Option<i32>,
    /// Employee number within the tenant
    pub num: String,
    /// Government identity document number
    pub id_num: String,
    pub gender: Option<Gender>,
    pub dob: Option<DateTime<Utc>>,
    pub tenant_id: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: Option<i32>,
    pub last_updated_at: Option<DateTime<Utc>>,
    pub last_update_by: Option<i32>,
}
