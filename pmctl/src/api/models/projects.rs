//! API request/response models for projects.

use crate::api::identity::Identified;
use crate::db::models::projects::Project;
use crate::errors::{Error, Result};
use crate::types::ProjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body for create and replace.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPayload {
    pub id: Option<ProjectId>,
    pub num: String,
    pub name: String,
    pub status: String,
    pub mng_id: Option<i32>,
    pub contract_id: Option<i32>,
    pub tenant_id: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: Option<i32>,
    pub last_updated_at: Option<DateTime<Utc>>,
    pub last_update_by: Option<i32>,
}

impl ProjectPayload {
    pub fn validate(&self) -> Result<()> {
        if self.num.chars().count() > 50 {
            return Err(Error::BadRequest {
                message: "num must be at most 50 characters".to_string(),
            });
        }
        if self.name.chars().count() > 50 {
            return Err(Error::BadRequest {
                message: "name must be at most 50 characters".to_string(),
            });
        }
        if self.status.chars().count() > 2 {
            return Err(Error::BadRequest {
                message: "status must be at most 2 characters".to_string(),
            });
        }
        Ok(())
    }

    pub fn into_record(self) -> Project {
        Project {
            id: self.id,
            num: self.num,
            name: self.name,
            status: self.status,
            mng_id: self.mng_id,
            contract_id: self.contract_id,
            tenant_id: self.tenant_id,
            created_at: self.created_at,
            created_by: self.created_by,
            last_updated_at: self.last_updated_at,
            last_update_by: self.last_update_by,
        }
    }
}

impl Identified for ProjectPayload {
    type Id = ProjectId;

    fn identity(&self) -> Option<&ProjectId> {
        self.id.as_ref()
    }
}

/// Body for merge. Only present fields overwrite stored values.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMerge {
    pub id: Option<ProjectId>,
    pub num: Option<String>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub mng_id: Option<i32>,
    pub contract_id: Option<i32>,
    pub tenant_id: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: Option<i32>,
    pub last_updated_at: Option<DateTime<Utc>>,
    pub last_update_by: Option<i32>,
}

impl ProjectMerge {
    pub fn apply(self, record: &mut Project) {
        if let Some(num) = self.num {
            record.num = num;
        }
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(status) = self.status {
            record.status = status;
        }
        if let Some(mng_id) = self.mng_id {
            record.mng_id = Some(mng_id);
        }
        if let Some(contract_id) = self.contract_id {
            record.contract_id = Some(contract_id);
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

impl Identified for ProjectMerge {
    type Id = ProjectId;

    fn identity(&self) -> Option<&ProjectId> {
        self.id.as_ref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub id: Option<ProjectId>,
    pub num: String,
    pub name: String,
    pub status: String,
    pub mng_id: Option<i32>,
    pub contract_id: Option<i32>,
    pub tenant_id: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: Option<i32>,
    pub last_updated_at: Option<DateTime<Utc>>,
    pub last_update_by: Option<i32>,
}

impl From<Project> for ProjectResponse {
    fn from(db: Project) -> Self {
        Self {
            id: db.id,
            num: db.num,
            name: db.name,
            status: db.status,
            mng_id: db.mng_id,
            contract_id: db.contract_id,
            tenant_id: db.tenant_id,
            created_at: db.created_at,
            created_by: db.created_by,
            last_updated_at: db.last_updated_at,
            last_update_by: db.last_update_by,
        }
    }
}
