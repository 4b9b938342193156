//! API request/response models for project memberships.

use crate::api::identity::Identified;
use crate::db::models::project_members::ProjectMember;
use crate::errors::{Error, Result};
use crate::types::ProjectMemberId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body for create and replace.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMemberPayload {
    pub id: Option<ProjectMemberId>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub status: String,
    pub estimate_invest_ratio: Option<i32>,
    pub emp_id: Option<i32>,
    pub project_id: Option<i32>,
    pub tenant_id: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: Option<i32>,
    pub last_updated_at: Option<DateTime<Utc>>,
    pub last_update_by: Option<i32>,
}

impl ProjectMemberPayload {
    pub fn validate(&self) -> Result<()> {
        if self.status.chars().count() > 2 {
            return Err(Error::BadRequest {
                message: "status must be at most 2 characters".to_string(),
            });
        }
        Ok(())
    }

    pub fn into_record(self) -> ProjectMember {
        ProjectMember {
            id: self.id,
            start_at: self.start_at,
            end_at: self.end_at,
            status: self.status,
            estimate_invest_ratio: self.estimate_invest_ratio,
            emp_id: self.emp_id,
            project_id: self.project_id,
            tenant_id: self.tenant_id,
            created_at: self.created_at,
            created_by: self.created_by,
            last_updated_at: self.last_updated_at,
            last_update_by: self.last_update_by,
        }
    }
}

impl Identified for ProjectMemberPayload {
    type Id = ProjectMemberId;

    fn identity(&self) -> Option<&ProjectMemberId> {
        self.id.as_ref()
    }
}

/// Body for merge. Only present fields overwrite stored values.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMemberMerge {
    pub id: Option<ProjectMemberId>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub status: Option<String>,
    pub estimate_invest_ratio: Option<i32>,
    pub emp_id: Option<i32>,
    pub project_id: Option<i32>,
    pub tenant_id: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: Option<i32>,
    pub last_updated_at: Option<DateTime<Utc>>,
    pub last_update_by: Option<i32>,
}

impl ProjectMemberMerge {
    pub fn apply(self, record: &mut ProjectMember) {
        if let Some(start_at) = self.start_at {
            record.start_at = Some(start_at);
        }
        if let Some(end_at) = self.end_at {
            record.end_at = Some(end_at);
        }
        if let Some(status) = self.status {
            record.status = status;
        }
        if let Some(estimate_invest_ratio) = self.estimate_invest_ratio {
            record.estimate_invest_ratio = Some(estimate_invest_ratio);
        }
        if let Some(emp_id) = self.emp_id {
            record.emp_id = Some(emp_id);
        }
        if let Some(project_id) = self.project_id {
            record.project_id = Some(project_id);
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

impl Identified for ProjectMemberMerge {
    type Id = ProjectMemberId;

    fn identity(&self) -> Option<&ProjectMemberId> {
        self.id.as_ref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMemberResponse {
    pub id: Option<ProjectMemberId>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub status: String,
    pub estimate_invest_ratio: Option<i32>,
    pub emp_id: Option<i32>,
    pub project_id: Option<i32>,
    pub tenant_id: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: Option<i32>,
    pub last_updated_at: Option<DateTime<Utc>>,
    pub last_update_by: Option<i32>,
}

impl From<ProjectMember> for ProjectMemberResponse {
    fn from(db: ProjectMember) -> Self {
        Self {
            id: db.id,
            start_at: db.start_at,
            end_at: db.end_at,
            status: db.status,
            estimate_invest_ratio: db.estimate_invest_ratio,
            emp_id: db.emp_id,
            project_id: db.project_id,
            tenant_id: db.tenant_id,
            created_at: db.created_at,
            created_by: db.created_by,
            last_updated_at: db.last_updated_at,
            last_update_by: db.last_update_by,
        }
    }
}
