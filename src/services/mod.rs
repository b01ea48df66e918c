//! Services module
//!
//! Clients for the systems the relay talks to

pub mod upstream;

pub use upstream::UpstreamClient;
