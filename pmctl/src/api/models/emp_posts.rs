//! API request/response models for employee-post assignments.
//!
//! The composite identity travels as an opaque `"emp-post"` string in both
//! paths and JSON bodies. Creation requires it (the caller assigns it),
//! unlike the surrogate-keyed entities where creation forbids it.

use crate::api::identity::Identified;
use crate::db::models::emp_posts::{EmpPost, RecordState};
use crate::types::EmpPostId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body for create and replace.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmpPostPayload {
    #[schema(value_type = Option<String>, example = "1-2")]
    pub id: Option<EmpPostId>,
    pub tenant_id: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: Option<i32>,
    pub last_updated_at: Option<DateTime<Utc>>,
    pub last_update_by: Option<i32>,
}

impl EmpPostPayload {
    /// Builds a record in the given persistence state: `Transient` for
    /// create (save inserts), `Persisted` for replace (save updates).
    pub fn into_record(self, state: RecordState) -> EmpPost {
        EmpPost {
            id: self.id,
            tenant_id: self.tenant_id,
            created_at: self.created_at,
            created_by: self.created_by,
            last_updated_at: self.last_updated_at,
            last_update_by: self.last_update_by,
            state,
        }
    }
}

impl Identified for EmpPostPayload {
    type Id = EmpPostId;

    fn identity(&self) -> Option<&EmpPostId> {
        self.id.as_ref()
    }
}

/// Body for merge. Only present fields overwrite stored values.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmpPostMerge {
    #[schema(value_type = Option<String>, example = "1-2")]
    pub id: Option<EmpPostId>,
    pub tenant_id: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: Option<i32>,
    pub last_updated_at: Option<DateTime<Utc>>,
    pub last_update_by: Option<i32>,
}

impl EmpPostMerge {
    pub fn apply(self, record: &mut EmpPost) {
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

impl Identified for EmpPostMerge {
    type Id = EmpPostId;

    fn identity(&self) -> Option<&EmpPostId> {
        self.id.as_ref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmpPostResponse {
    #[schema(value_type = Option<String>, example = "1-2")]
    pub id: Option<EmpPostId>,
    pub tenant_id: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: Option<i32>,
    pub last_updated_at: Option<DateTime<Utc>>,
    pub last_update_by: Option<i32>,
}

impl From<EmpPost> for EmpPostResponse {
    fn from(db: EmpPost) -> Self {
        Self {
            id: db.id,
            tenant_id: db.tenant_id,
            created_at: db.created_at,
            created_by: db.created_by,
            last_updated_at: db.last_updated_at,
            last_update_by: db.last_update_by,
        }
    }
}
