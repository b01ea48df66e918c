//! HTTP route modules
//!
//! The invitation routes answer in plain text like the case frontend expects.
//! Errors go through [`RelayError`](crate::utils::error::RelayError)'s JSON body.

pub mod health;
pub mod invitations;

use actix_web::web;

/// Register every route on the application
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    invitations::configure_routes(cfg);
    health::configure_routes(cfg);
}
