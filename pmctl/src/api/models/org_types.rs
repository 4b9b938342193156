//! API request/response models for organization types.

use crate::api::identity::Identified;
use crate::db::models::org_types::OrgType;
use crate::errors::{Error, Result};
use crate::types::OrgTypeId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body for create and replace.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrgTypePayload {
    pub id: Option<OrgTypeId>,
    pub name: String,
    pub tenant_id: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: Option<i32>,
    pub last_updated_at: Option<DateTime<Utc>>,
    pub last_update_by: Option<i32>,
}

impl OrgTypePayload {
    pub fn validate(&self) -> Result<()> {
        if self.name.chars().count() > 50 {
            return Err(Error::BadRequest {
                message: "name must be at most 50 characters".to_string(),
            });
        }
        Ok(())
    }

    pub fn into_record(self) -> OrgType {
        OrgType {
            id: self.id,
            name: self.name,
            tenant_id: self.tenant_id,
            created_at: self.created_at,
            created_by: self.created_by,
            last_updated_at: self.last_updated_at,
            last_update_by: self.last_update_by,
        }
    }
}

impl Identified for OrgTypePayload {
    type Id = OrgTypeId;

    fn identity(&self) -> Option<&OrgTypeId> {
        self.id.as_ref()
    }
}

/// Body for merge. Only present fields overwrite stored values.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrgTypeMerge {
    pub id: Option<OrgTypeId>,
    pub name: Option<String>,
    pub tenant_id: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: Option<i32>,
    pub last_updated_at: Option<DateTime<Utc>>,
    pub last_update_by: Option<i32>,
}

impl OrgTypeMerge {
    pub fn apply(self, record: &mut OrgType) {
        if let Some(name) = self.name {
            record.name = name;
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

impl Identified for OrgTypeMerge {
    type Id = OrgTypeId;

    fn identity(&self) -> Option<&OrgTypeId> {
        self.id.as_ref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrgTypeResponse {
    pub id: Option<OrgTypeId>,
    pub name: String,
    pub tenant_id: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: Option<i32>,
    pub last_updated_at: Option<DateTime<Utc>>,
    pub last_update_by: Option<i32>,
}

impl From<OrgType> for OrgTypeResponse {
    fn from(db: OrgType) -> Self {
        Self {
            id: db.id,
            name: db.name,
            tenant_id: db.tenant_id,
            created_at: db.created_at,
            created_by: db.created_by,
            last_updated_at: db.last_updated_at,
            last_update_by: db.last_update_by,
        }
    }
}
