//! Invitation relay workflow
//!
//! Pending invitations arrive either pulled from the case frontend or pushed
//! by a trusted caller. Each one is checked against the invitation record,
//! registered with its resolved role, granted access at unit or case level and,
//! on the pull path, reported back upstream once complete.

pub mod error;
pub mod executor;
pub mod in_flight;
pub mod oracle;
pub mod outcome;
pub mod processor;
pub mod roles;
pub mod service;
pub mod store;
pub mod types;


pub use error::{BatchError, InviteError, ItemFailure, Stage, StoreError};
pub use executor::StepExecutor;
pub use in_flight::{InFlight, InFlightGuard};
pub use oracle::IdempotencyOracle;
pub use outcome::{BatchOutcome, BatchSummary, Completed};
pub use processor::BatchProcessor;
pub use roles::RoleResolver;
pub use service::InviteService;
pub use store::{CompletionReporter, InvitationSource, InvitationStore};
pub use types::{
    DEFAULT_ANNOTATION, EnvironmentCode, Invitation, NewInvitationRecord, Operation, RecordState,
};
