//! Common test utilities for invite-relay

pub mod database;
pub mod fixtures;
pub mod upstream;

// Re-export commonly used items
pub use database::TestDatabase;
pub use fixtures::InvitationFactory;
pub use upstream::MockUpstream;

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}
