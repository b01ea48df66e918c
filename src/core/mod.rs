//! Core functionality for the relay
//!
//! This module contains the invitation workflow and its data structures.

pub mod invite;
