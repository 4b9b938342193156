//! Identity checks shared by every mutating endpoint.
//!
//! The same three rules guard all entities, so they are written once,
//! generic over anything that can expose an optional identity:
//!
//! - creation of a surrogate-keyed record must not carry an identity
//!   ([`require_unassigned`]),
//! - creation of a caller-keyed record must carry one
//!   ([`require_assigned`]),
//! - replace and merge must carry an identity equal to the path identity
//!   ([`require_matching`]) - the body is never trusted on its own.
//!
//! Existence of the target record is checked separately by each handler,
//! after these checks and before any write.

use crate::errors::{Error, Result};
use std::fmt::Display;

/// A request body that may carry the identity of the record it describes.
pub trait Identified {
    type Id: PartialEq + Display;

    fn identity(&self) -> Option<&Self::Id>;
}

/// Fails with `IdentityConflict` when a creation body already carries an
/// identity. Surrogate identities are assigned by the store, never
/// accepted from the caller.
pub fn require_unassigned<B: Identified>(body: &B, resource: &'static str) -> Result<()> {
    match body.identity() {
        Some(_) => Err(Error::IdentityConflict { resource }),
        None => Ok(()),
    }
}

/// Fails with `MissingIdentity` when a body carries no identity. Used for
/// creation of caller-keyed records and as the first half of
/// [`require_matching`].
pub fn require_assigned<'a, B: Identified>(body: &'a B, resource: &'static str) -> Result<&'a B::Id> {
    body.identity().ok_or(Error::MissingIdentity { resource })
}

/// Fails with `MissingIdentity` when the body has no identity and with
/// `IdentityMismatch` when it disagrees with the path identity.
pub fn require_matching<B: Identified>(path: &B::Id, body: &B, resource: &'static str) -> Result<()> {
    let body_id = require_assigned(body, resource)?;
    if body_id != path {
        return Err(Error::IdentityMismatch {
            resource,
            path: path.to_string(),
            body: body_id.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Body {
        id: Option<i64>,
    }

    impl Identified for Body {
        type Id = i64;

        fn identity(&self) -> Option<&i64> {
            self.id.as_ref()
        }
    }

    #[test]
    fn unassigned_rejects_present_identity() {
        assert!(require_unassigned(&Body { id: None }, "Thing").is_ok());
        assert!(matches!(
            require_unassigned(&Body { id: Some(1) }, "Thing"),
            Err(Error::IdentityConflict { .. })
        ));
    }

    #[test]
    fn assigned_rejects_absent_identity() {
        assert!(matches!(
            require_assigned(&Body { id: None }, "Thing"),
            Err(Error::MissingIdentity { .. })
        ));
        assert_eq!(require_assigned(&Body { id: Some(3) }, "Thing").unwrap(), &3);
    }

    #[test]
    fn matching_checks_missing_before_mismatch() {
        assert!(matches!(
            require_matching(&5, &Body { id: None }, "Thing"),
            Err(Error::MissingIdentity { .. })
        ));
        assert!(matches!(
            require_matching(&5, &Body { id: Some(6) }, "Thing"),
            Err(Error::IdentityMismatch { .. })
        ));
        assert!(require_matching(&5, &Body { id: Some(5) }, "Thing").is_ok());
    }
}
