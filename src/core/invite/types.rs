//! Invitation data model
//!
//! Wire shape of a pending invitation as served by the case frontend, plus the
//! record and operation types the store works with.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Annotation stored with every invitation registered by the relay
pub const DEFAULT_ANNOTATION: &str = "Invited via system";

/// A pending invitation as delivered by the upstream system-of-record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invitation {
    /// Upstream invitation id, the idempotency key
    #[serde(rename = "_id")]
    pub id: String,
    /// User id of the inviter
    #[serde(rename = "invitedBy", default)]
    pub invited_by: i64,
    /// User id of the invitee
    #[serde(default)]
    pub invitee: i64,
    /// Human-readable role name, resolved through the role table
    #[serde(default)]
    pub role: String,
    /// Whether the invitee occupies the unit
    #[serde(rename = "isOccupant", default)]
    pub is_occupant: bool,
    /// Case the invitation is scoped to; zero or absent means none
    #[serde(rename = "caseId", default)]
    pub case_id: Option<i64>,
    /// Unit the invitation targets
    #[serde(rename = "unitId", default)]
    pub unit_id: i64,
    /// Free-form invitation classification
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl Invitation {
    /// Case id when the invitation is scoped to a case
    pub fn case(&self) -> Option<i64> {
        self.case_id.filter(|id| *id != 0)
    }

    /// Grant operation this invitation needs
    pub fn grant_operation(&self) -> Operation {
        if self.case().is_some() {
            Operation::GrantCaseAccess
        } else {
            Operation::GrantUnitRole
        }
    }
}

/// Deployment environment code selecting the operation variant to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvironmentCode(pub i32);

impl Default for EnvironmentCode {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for EnvironmentCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Named side-effecting operations applied to a registered invitation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Grant the invitee the resolved role at unit level
    GrantUnitRole,
    /// Grant the invitee access to the invitation's case
    GrantCaseAccess,
    /// Append an "invitation sent" message to the case feed
    PostCaseNotification,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::GrantUnitRole => "grant_unit_role",
            Operation::GrantCaseAccess => "grant_case_access",
            Operation::PostCaseNotification => "post_case_notification",
        }
    }

    /// Whether a successful run marks the invitation as processed
    pub fn completes_invitation(&self) -> bool {
        matches!(self, Operation::GrantUnitRole | Operation::GrantCaseAccess)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row written by the register step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInvitationRecord {
    pub invitation: Invitation,
    pub role_type_id: i32,
    pub annotation: String,
}

impl NewInvitationRecord {
    pub fn new(invitation: Invitation, role_type_id: i32) -> Self {
        Self {
            invitation,
            role_type_id,
            annotation: DEFAULT_ANNOTATION.to_string(),
        }
    }
}

/// Persisted state of an invitation as seen by the idempotency checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordState {
    /// When all required side effects landed, if they have
    pub processed_at: Option<DateTime<Utc>>,
}
