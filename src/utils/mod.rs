//! Utility modules for the relay
//!
//! - **error**: crate-wide error type and its HTTP mapping
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod logging;

pub use logging::init_logging;
