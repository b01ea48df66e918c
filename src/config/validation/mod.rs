//! Configuration validation
//!
//! - `trait_def`: the `Validate` trait
//! - `config_validators`: one implementation per configuration section
//! - `tests`: test suite for all validators

mod config_validators;
mod trait_def;

pub use config_validators::validate_http_url;
pub use trait_def::Validate;
