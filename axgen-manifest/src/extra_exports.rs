//! Existence checks for extra export paths.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Verify that every path exists.
///
/// All missing paths are collected into a single error, one
/// `Wrong extra export path: <path>` line each.
pub fn check_existing_paths<P: AsRef<Path>>(paths: &[P]) -> Result<()> {
    let missing: Vec<PathBuf> = paths
        .iter()
        .map(|p| p.as_ref())
        .filter(|p| !p.exists())
        .map(Path::to_path_buf)
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    let message = missing
        .iter()
        .map(|p| format!("Wrong extra export path: {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");
    Err(Box::new(Error::MissingExtraExports {
        message,
        paths: missing,
    }))
}
