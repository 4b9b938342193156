//! API request/response models for tenants.

use crate::api::identity::Identified;
use crate::db::models::tenants::Tenant;
use crate::errors::{Error, Result};
use crate::types::TenantId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body for create and replace. Audit values are caller-supplied; absent
/// nullable fields persist as null on replace.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TenantPayload {
    pub id: Option<TenantId>,
    pub name: String,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: Option<i32>,
    pub last_updated_at: Option<DateTime<Utc>>,
    pub last_update_by: Option<i32>,
}

impl TenantPayload {
    pub fn validate(&self) -> Result<()> {
        if self.name.chars().count() > 50 {
            return Err(Error::BadRequest {
                message: "name must be at most 50 characters".to_string(),
            });
        }
        Ok(())
    }

    pub fn into_record(self) -> Tenant {
        Tenant {
            id: self.id,
            name: self.name,
            created_at: self.created_at,
            created_by: self.created_by,
            last_updated_at: self.last_updated_at,
            last_update_by: self.last_update_by,
        }
    }
}

impl Identified for TenantPayload {
    type Id = TenantId;

    fn identity(&self) -> Option<&TenantId> {
        self.id.as_ref()
    }
}

/// Body for merge. Only present fields overwrite stored values.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TenantMerge {
    pub id: Option<TenantId>,
    pub name: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: Option<i32>,
    pub last_updated_at: Option<DateTime<Utc>>,
    pub last_update_by: Option<i32>,
}

impl TenantMerge {
    /// Field-by-field conditional overwrite of the stored record.
    pub fn apply(self, record: &mut Tenant) {
        if let Some(name) = self.name {
            record.name = name;
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

impl Identified for TenantMerge {
    type Id = TenantId;

    fn identity(&self) -> Option<&TenantId> {
        self.id.as_ref()
    }
}

/// Full tenant details returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TenantResponse {
    pub id: Option<TenantId>,
    pub name: String,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: Option<i32>,
    pub last_updated_at: Option<DateTime<Utc>>,
    pub last_update_by: Option<i32>,
}

impl From<Tenant> for TenantResponse {
    fn from(db: Tenant) -> Self {
        Self {
            id: db.id,
            name: db.name,
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
    fn merge_preserves_absent_fields() {
        let mut record = Tenant {
            id: Some(1),
            name: "acme".to_string(),
            created_at: None,
            created_by: Some(10),
            last_updated_at: None,
            last_update_by: None,
        };

        let patch = TenantMerge {
            id: Some(1),
            name: None,
            created_at: None,
            created_by: None,
            last_updated_at: None,
            last_update_by: Some(99),
        };
        patch.apply(&mut record);

        assert_eq!(record.name, "acme");
        assert_eq!(record.created_by, Some(10));
        assert_eq!(record.last_update_by, Some(99));
    }

    #[test]
    fn merge_is_idempotent() {
        let mut once = Tenant {
            id: Some(1),
            name: "acme".to_string(),
            created_at: None,
            created_by: None,
            last_updated_at: None,
            last_update_by: None,
        };
        let mut twice = once.clone();

        let patch = TenantMerge {
            id: Some(1),
            name: Some("globex".to_string()),
            created_at: None,
            created_by: Some(5),
            last_updated_at: None,
            last_update_by: None,
        };
        patch.clone().apply(&mut once);
        patch.clone().apply(&mut twice);
        patch.apply(&mut twice);

        assert_eq!(once, twice);
    }

    #[test]
    fn validate_rejects_overlong_name() {
        let payload = TenantPayload {
            id: None,
            name: "x".repeat(51),
            created_at: None,
            created_by: None,
            last_updated_at: None,
            last_update_by: None,
        };
        assert!(payload.validate().is_err());
    }
}
