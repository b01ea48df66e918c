//! # invite-relay
//!
//! Relays pending invitations from the case frontend into the relational
//! store. Each invitation is registered, granted at unit or case level and
//! reported back upstream, with redelivery of the same invitation being a
//! no-op.
//!
//! ## Server mode
//!
//! ```rust,no_run
//! use invite_relay::{Config, server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config/relay.yaml").await?;
//!     server::run_server(config).await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::invite::{
    BatchError, BatchSummary, EnvironmentCode, Invitation, InviteError, InviteService, Operation,
    Stage,
};
pub use utils::error::{RelayError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
