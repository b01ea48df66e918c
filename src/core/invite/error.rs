//! Error taxonomy for invitation processing

use super::types::Operation;
use std::fmt;
use thiserror::Error;

/// Errors raised by an [`InvitationStore`](super::store::InvitationStore)
#[derive(Error, Debug)]
pub enum StoreError {
    /// Unique key on the invitation id rejected the insert
    #[error("duplicate invitation record: {0}")]
    Duplicate(String),

    /// Underlying database error
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Any other backend failure
    #[error("{0}")]
    Backend(String),
}

impl StoreError {
    pub fn backend<S: Into<String>>(message: S) -> Self {
        Self::Backend(message.into())
    }
}

/// Per-invitation failure causes
#[derive(Error, Debug)]
pub enum InviteError {
    /// Invitation payload violates an input invariant
    #[error("invalid invitation: {0}")]
    InvalidInvitation(String),

    /// Store unreachable or returned a malformed row
    #[error("lookup failed: {0}")]
    LookupFailure(#[source] StoreError),

    /// Role name has no row in the role table
    #[error("unknown role {role:?}")]
    UnknownRole { role: String },

    /// Register hit an existing record, either a concurrent run or a stale check
    #[error("invitation {id} is already registered")]
    DuplicateRegistration { id: String },

    /// A side-effecting step failed
    #[error("{operation} failed: {source}")]
    StepFailure {
        operation: Operation,
        #[source]
        source: StoreError,
    },

    /// Grant reported success but no completion timestamp is set
    #[error("no completion timestamp after {operation}")]
    Inconsistency { operation: Operation },

    /// Upstream did not acknowledge the completion report
    #[error("completion report failed: {0}")]
    ReportFailure(String),
}

/// Stage of the per-item workflow a failure happened in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Validate,
    CompletionCheck,
    ExistenceCheck,
    RoleLookup,
    Register,
    Grant,
    Confirm,
    Report,
    Notify,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Validate => "validate",
            Stage::CompletionCheck => "completion_check",
            Stage::ExistenceCheck => "existence_check",
            Stage::RoleLookup => "role_lookup",
            Stage::Register => "register",
            Stage::Grant => "grant",
            Stage::Confirm => "confirm",
            Stage::Report => "report",
            Stage::Notify => "notify",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One failed invitation, tagged with where it failed
#[derive(Error, Debug)]
#[error("{id} [{stage}]: {error}")]
pub struct ItemFailure {
    pub id: String,
    pub stage: Stage,
    #[source]
    pub error: InviteError,
}

impl ItemFailure {
    pub fn new(id: impl Into<String>, stage: Stage, error: InviteError) -> Self {
        Self {
            id: id.into(),
            stage,
            error,
        }
    }
}

/// Aggregate of every per-item failure in one batch
#[derive(Debug, Default)]
pub struct BatchError {
    failures: Vec<ItemFailure>,
}

impl BatchError {
    pub fn new(failures: Vec<ItemFailure>) -> Self {
        Self { failures }
    }

    pub fn failures(&self) -> &[ItemFailure] {
        &self.failures
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Whether any failure for `id` happened at `stage`
    pub fn contains(&self, id: &str, stage: Stage) -> bool {
        self.failures
            .iter()
            .any(|f| f.id == id && f.stage == stage)
    }
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.failures.len() {
            1 => writeln!(f, "1 error occurred:")?,
            n => writeln!(f, "{} errors occurred:", n)?,
        }
        for failure in &self.failures {
            writeln!(f, "\t* {}", failure)?;
        }
        Ok(())
    }
}

impl std::error::Error for BatchError {}
