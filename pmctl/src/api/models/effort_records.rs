//! API request/response models for effort records.

use crate::api::identity::Identified;
use crate::db::models::effort_records::EffortRecord;
use crate::errors::{Error, Result};
use crate::types::EffortRecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body for create and replace.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EffortRecordPayload {
    pub id: Option<EffortRecordId>,
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

impl EffortRecordPayload {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=99.9).contains(&self.effort) {
            return Err(Error::BadRequest {
                message: "effort must be between 0 and 99.9".to_string(),
            });
        }
        if let Some(notes) = &self.notes {
            if notes.chars().count() > 255 {
                return Err(Error::BadRequest {
                    message: "notes must be at most 255 characters".to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn into_record(self) -> EffortRecord {
        EffortRecord {
            id: self.id,
            effort: self.effort,
            work_date: self.work_date,
            notes: self.notes,
            project_id: self.project_id,
            emp_id: self.emp_id,
            tenant_id: self.tenant_id,
            created_at: self.created_at,
            created_by: self.created_by,
            last_updated_at: self.last_updated_at,
            last_update_by: self.last_update_by,
        }
    }
}

impl Identified for EffortRecordPayload {
    type Id = EffortRecordId;

    fn identity(&self) -> Option<&EffortRecordId> {
        self.id.as_ref()
    }
}

/// Body for merge. Only present fields overwrite stored values.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EffortRecordMerge {
    pub id: Option<EffortRecordId>,
    pub effort: Option<f32>,
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

impl EffortRecordMerge {
    pub fn apply(self, record: &mut EffortRecord) {
        if let Some(effort) = self.effort {
            record.effort = effort;
        }
        if let Some(work_date) = self.work_date {
            record.work_date = Some(work_date);
        }
        if let Some(notes) = self.notes {
            record.notes = Some(notes);
        }
        if let Some(project_id) = self.project_id {
            record.project_id = Some(project_id);
        }
        if let Some(emp_id) = self.emp_id {
            record.emp_id = Some(emp_id);
        }
        if let Some(tenant_id) = self.tenant_id {
            record.tenant_id = Some(tenant_id);
        }
        if let Some(created_at) = self.created_at {
            record.created_at = Some(created_at);
        }
        if let Some(created_by) = self.created_by {
            record.created_by = Some(created_by);
        }
        if let Some(last_updated_at) = self.last_updated_at {
            record.last_updated_at = Some(last_updated_at);
        }
        if let Some(last_update_by) = self.last_update_by {
            record.last_update_by = Some(last_update_by);
        }
    }
}

impl Identified for EffortRecordMerge {
    type Id = EffortRecordId;

    fn identity(&self) -> Option<&EffortRecordId> {
        self.id.as_ref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EffortRecordResponse {
    pub id: Option<EffortRecordId>,
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

impl From<EffortRecord> for EffortRecordResponse {
    fn from(db: EffortRecord) -> Self {
        Self {
            id: db.id,
            effort: db.effort,
            work_date: db.work_date,
            notes: db.notes,
            project_id: db.project_id,
            emp_id: db.emp_id,
            tenant_id: db.tenant_id,
            created_at: db.created_at,
            created_by: db.created_by,
            last_updated_at: db.last_updated_at,
            last_update_by: db.last_update_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_enforces_effort_bounds() {
        let payload = |effort: f32| EffortRecordPayload {
            id: None,
            effort,
            work_date: None,
            notes: None,
            project_id: None,
            emp_id: None,
            tenant_id: None,
            created_at: None,
            created_by: None,
            last_updated_at: None,
            last_update_by: None,
        };
        assert!(payload(0.0).validate().is_ok());
        assert!(payload(99.9).validate().is_ok());
        assert!(payload(-0.1).validate().is_err());
        assert!(payload(100.0).validate().is_err());
    }
}
