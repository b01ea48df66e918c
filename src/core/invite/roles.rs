//! Role name to role id resolution

use super::error::InviteError;
use super::store::InvitationStore;
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub struct RoleResolver {
    store: Arc<dyn InvitationStore>,
}

impl RoleResolver {
    pub fn new(store: Arc<dyn InvitationStore>) -> Self {
        Self { store }
    }

    /// Exact-match lookup. An unknown role is terminal for the invitation.
    pub async fn resolve(&self, role: &str) -> Result<i32, InviteError> {
        let role_type_id = self
            .store
            .find_role_type_id(role)
            .await
            .map_err(InviteError::LookupFailure)?
            .ok_or_else(|| InviteError::UnknownRole {
                role: role.to_string(),
            })?;

        debug!(role, role_type_id, "role resolved");
        Ok(role_type_id)
    }
}
