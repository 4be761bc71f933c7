//! Core utilities and types for the axgen client generator.
//!
//! This crate provides the name normalizer, path helpers, file writing and
//! package versioning used across the axgen crates.

mod file;
mod paths;
mod utils;
mod version;

// File operations
pub use file::{FileRules, GENERATED_HEADER, GeneratedFile, Overwrite, WriteResult};
// Path helpers
pub use paths::{relative_import, relative_path};
// Name normalizer
pub use utils::{to_camel_case, to_pascal_case};
pub use version::Version;
