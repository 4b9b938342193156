//! Common type definitions.
//!
//! Surrogate entity identities are `i64` aliases, assigned by the store on
//! insert. Referencing columns (`tenant_id`, `created_by`, `org_id`, ...)
//! stay plain `i32` to match the schema. [`EmpPostId`] is the one composite
//! identity: caller-assigned, carried as a single opaque `emp-post` path
//! segment and JSON string.

use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;

// Type aliases for surrogate IDs
pub type TenantId = i64;
pub type OrgTypeId = i64;
pub type OrgId = i64;
pub type EmpId = i64;
pub type ProjectId = i64;
pub type ProjectMemberId = i64;
pub type EffortRecordId = i64;

/// Composite identity of an employee-post assignment.
///
/// Rendered as `"{emp_id}-{post_id}"` in paths and JSON bodies so the two
/// halves travel as one opaque value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub struct EmpPostId {
    pub emp_id: i32,
    pub post_id: i32,
}

impl fmt::Display for EmpPostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.emp_id, self.post_id)
    }
}

impl FromStr for EmpPostId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (emp, post) = s
            .split_once('-')
            .ok_or_else(|| format!("invalid emp-post identity '{s}': expected '<emp_id>-<post_id>'"))?;
        let emp_id = emp
            .parse::<i32>()
            .map_err(|e| format!("invalid emp_id in '{s}': {e}"))?;
        let post_id = post
            .parse::<i32>()
            .map_err(|e| format!("invalid post_id in '{s}': {e}"))?;
        Ok(EmpPostId { emp_id, post_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emp_post_id_round_trips_through_display() {
        let id = EmpPostId { emp_id: 7, post_id: 42 };
        let parsed: EmpPostId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn emp_post_id_rejects_malformed_segments() {
        assert!("7".parse::<EmpPostId>().is_err());
        assert!("a-2".parse::<EmpPostId>().is_err());
        assert!("1-b".parse::<EmpPostId>().is_err());
    }
}
