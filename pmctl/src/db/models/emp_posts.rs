//! Store model for employee-post assignments.
//!
//! This is the one entity keyed by a caller-assigned composite identity,
//! so identity presence alone cannot tell the store whether a save is an
//! insert or an update. The record carries an explicit [`RecordState`]
//! instead: `Transient` until the first successful save, `Persisted` for
//! anything loaded from or written to the store.

use crate::types::EmpPostId;
use chrono::{DateTime, Utc};

/// Persistence state of a caller-keyed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordState {
    /// Not yet saved; `save` must insert.
    #[default]
    Transient,
    /// Known to the store; `save` must update.
    Persisted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmpPost {
    pub id: Option<EmpPostId>,
    pub tenant_id: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: Option<i32>,
    pub last_updated_at: Option<DateTime<Utc>>,
    pub last_update_by: Option<i32>,
    pub state: RecordState,
}
