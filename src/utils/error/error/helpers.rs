//! Helper functions for creating specific error types

use super::types::RelayError;

impl RelayError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Self::Upstream(message.into())
    }

    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether the caller, not the relay, is at fault
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::BadRequest(_) | Self::NotFound(_))
    }
}
