//! API request/response models for organizations.

use crate::api::identity::Identified;
use crate::db::models::orgs::Org;
use crate::errors::{Error, Result};
use crate::types::OrgId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body for create and replace.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrgPayload {
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

impl OrgPayload {
    pub fn validate(&self) -> Result<()> {
        if self.name.chars().count() > 50 {
            return Err(Error::BadRequest {
                message: "name must be at most 50 characters".to_string(),
            });
        }
        Ok(())
    }

    pub fn into_record(self) -> Org {
        Org {
            id: self.id,
            name: self.name,
            tenant_id: self.tenant_id,
            org_type: self.org_type,
            head_id: self.head_id,
            parent_org_id: self.parent_org_id,
            created_at: self.created_at,
            created_by: self.created_by,
            last_updated_at: self.last_updated_at,
            last_update_by: self.last_update_by,
        }
    }
}

impl Identified for OrgPayload {
    type Id = OrgId;

    fn identity(&self) -> Option<&OrgId> {
        self.id.as_ref()
    }
}

/// Body for merge. Only present fields overwrite stored values.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrgMerge {
    pub id: Option<OrgId>,
    pub name: Option<String>,
    pub tenant_id: Option<i32>,
    pub org_type: Option<i32>,
    pub head_id: Option<i32>,
    pub parent_org_id: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: Option<i32>,
    pub last_updated_at: Option<DateTime<Utc>>,
    pub last_update_by: Option<i32>,
}

impl OrgMerge {
    pub fn apply(self, record: &mut Org) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(tenant_id) = self.tenant_id {
            record.tenant_id = Some(tenant_id);
        }
        if let Some(org_type) = self.org_type {
            record.org_type = Some(org_type);
        }
        if let Some(head_id) = self.head_id {
            record.head_id = Some(head_id);
        }
        if let Some(parent_org_id) = self.parent_org_id {
            record.parent_org_id = Some(parent_org_id);
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

impl Identified for OrgMerge {
    type Id = OrgId;

    fn identity(&self) -> Option<&OrgId> {
        self.id.as_ref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrgResponse {
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

impl From<Org> for OrgResponse {
    fn from(db: Org) -> Self {
        Self {
            id: db.id,
            name: db.name,
            tenant_id: db.tenant_id,
            org_type: db.org_type,
            head_id: db.head_id,
            parent_org_id: db.parent_org_id,
            created_at: db.created_at,
            created_by: db.created_by,
            last_updated_at: db.last_updated_at,
            last_update_by: db.last_update_by,
        }
    }
}
