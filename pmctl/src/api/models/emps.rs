//! API request/response models for employees.

use crate::api::identity::Identified;
use crate::db::models::emps::{Emp, Gender};
use crate::errors::{Error, Result};
use crate::types::EmpId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body for create and replace.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmpPayload {
    pub id: Option<EmpId>,
    pub name: String,
    pub org_id: Option<i32>,
    pub num: String,
    pub id_num: String,
    pub gender: Option<Gender>,
    pub dob: Option<DateTime<Utc>>,
    pub tenant_id: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: Option<i32>,
    pub last_updated_at: Option<DateTime<Utc>>,
    pub last_update_by: Option<i32>,
}

impl EmpPayload {
    pub fn validate(&self) -> Result<()> {
        if self.name.chars().count() > 50 {
            return Err(Error::BadRequest {
                message: "name must be at most 50 characters".to_string(),
            });
        }
        if self.num.chars().count() > 20 {
            return Err(Error::BadRequest {
                message: "num must be at most 20 characters".to_string(),
            });
        }
        if self.id_num.chars().count() > 20 {
            return Err(Error::BadRequest {
                message: "id_num must be at most 20 characters".to_string(),
            });
        }
        Ok(())
    }

    pub fn into_record(self) -> Emp {
        Emp {
            id: self.id,
            name: self.name,
            org_id: self.org_id,
            num: self.num,
            id_num: self.id_num,
            gender: self.gender,
            dob: self.dob,
            tenant_id: self.tenant_id,
            created_at: self.created_at,
            created_by: self.created_by,
            last_updated_at: self.last_updated_at,
            last_update_by: self.last_update_by,
        }
    }
}

impl Identified for EmpPayload {
    type Id = EmpId;

    fn identity(&self) -> Option<&EmpId> {
        self.id.as_ref()
    }
}

/// Body for merge. Only present fields overwrite stored values.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmpMerge {
    pub id: Option<EmpId>,
    pub name: Option<String>,
    pub org_id: Option<i32>,
    pub num: Option<String>,
    pub id_num: Option<String>,
    pub gender: Option<Gender>,
    pub dob: Option<DateTime<Utc>>,
    pub tenant_id: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: Option<i32>,
    pub last_updated_at: Option<DateTime<Utc>>,
    pub last_update_by: Option<i32>,
}

impl EmpMerge {
    pub fn apply(self, record: &mut Emp) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(org_id) = self.org_id {
            record.org_id = Some(org_id);
        }
        if let Some(num) = self.num {
            record.num = num;
        }
        if let Some(id_num) = self.id_num {
            record.id_num = id_num;
        }
        if let Some(gender) = self.gender {
            record.gender = Some(gender);
        }
        if let Some(dob) = self.dob {
            record.dob = Some(dob);
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

impl Identified for EmpMerge {
    type Id = EmpId;

    fn identity(&self) -> Option<&EmpId> {
        self.id.as_ref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmpResponse {
    pub id: Option<EmpId>,
    pub name: String,
    pub org_id: Option<i32>,
    pub num: String,
    pub id_num: String,
    pub gender: Option<Gender>,
    pub dob: Option<DateTime<Utc>>,
    pub tenant_id: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: Option<i32>,
    pub last_updated_at: Option<DateTime<Utc>>,
    pub last_update_by: Option<i32>,
}

impl From<Emp> for EmpResponse {
    fn from(db: Emp) -> Self {
        Self {
            id: db.id,
            name: db.name,
            org_id: db.org_id,
            num: db.num,
            id_num: db.id_num,
            gender: db.gender,
            dob: db.dob,
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
    fn gender_serializes_upper_case() {
        assert_eq!(serde_json::to_value(Gender::Female).unwrap(), "FEMALE");
        let parsed: Gender = serde_json::from_value(serde_json::json!("MALE")).unwrap();
        assert_eq!(parsed, Gender::Male);
    }

    #[test]
    fn validate_enforces_field_lengths() {
        let base = EmpPayload {
            id: None,
            name: "Ada".to_string(),
            org_id: None,
            num: "E-1".to_string(),
            id_num: "X123".to_string(),
            gender: None,
            dob: None,
            tenant_id: None,
            created_at: None,
            created_by: None,
            last_updated_at: None,
            last_update_by: None,
        };
        assert!(base.validate().is_ok());

        let mut overlong = base.clone();
        overlong.num = "9".repeat(21);
        assert!(overlong.validate().is_err());

        let mut overlong = base;
        overlong.id_num = "9".repeat(21);
        assert!(overlong.validate().is_err());
    }
}
