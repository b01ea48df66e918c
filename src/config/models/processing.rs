//! Invitation processing configuration

use crate::core::invite::EnvironmentCode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Deployment environment whose operation variants run
    #[serde(default)]
    pub environment_code: EnvironmentCode,
}
