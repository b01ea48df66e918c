//! Validation trait definition

/// Implemented by every configuration section; returns a human-readable
/// reason when the section cannot be used
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
