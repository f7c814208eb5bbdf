//! Core utilities and types for the brandon scaffolding generator.
//!
//! This crate provides fundamental types and utilities used across
//! the brandon crates.

mod file;
mod types;
mod utils;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// Fundamental types
pub use types::{ArgType, Scalar};
// String utilities
pub use utils::{normalize_identifier, to_class_name, to_constant_name};
