//! Build and release metadata reported by `/version`

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_commit")]
    pub commit: String,
    #[serde(default = "default_date")]
    pub date: String,
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_commit() -> String {
    env!("GIT_HASH").to_string()
}

fn default_date() -> String {
    env!("BUILD_TIME").to_string()
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            commit: default_commit(),
            date: default_date(),
        }
    }
}

impl std::fmt::Display for BuildConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, commit {}, built at {}",
            self.version, self.commit, self.date
        )
    }
}
