//! Integration tests for invite-relay
//!
//! These tests run the real store against SQLite and the real upstream
//! client against a mock server.

pub mod config_tests;
pub mod pipeline_tests;
pub mod server_tests;
pub mod store_tests;
