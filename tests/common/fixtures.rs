//! Invitation fixtures
//!
//! Wire-shaped invitations as the case frontend serves them.

use invite_relay::core::invite::Invitation;
use serde_json::{Value, json};

/// Factory for creating test invitations
pub struct InvitationFactory;

impl InvitationFactory {
    /// Invitation granting a role at unit level
    pub fn unit(id: &str, role: &str) -> Invitation {
        Invitation {
            id: id.to_string(),
            invited_by: 2,
            invitee: 7,
            role: role.to_string(),
            is_occupant: role == "occupant",
            case_id: Some(0),
            unit_id: 3,
            kind: "type_assigned".to_string(),
        }
    }

    /// Invitation scoped to a case
    pub fn case(id: &str, role: &str, case_id: i64) -> Invitation {
        Invitation {
            case_id: Some(case_id),
            kind: "type_cc".to_string(),
            ..Self::unit(id, role)
        }
    }

    /// JSON body for a list of invitations
    pub fn body(invitations: &[Invitation]) -> Value {
        json!(invitations)
    }
}
