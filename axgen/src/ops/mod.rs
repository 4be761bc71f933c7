//! Core operations.
//!
//! This module contains the business logic for axgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;

use std::path::Path;

use axgen_ir::RouteRecord;
use axgen_manifest::{ClientSettings, Overrides};

pub use check::check;
pub use generate::{GenerateOptions, generate};

/// A resolved project and its scanned routes.
pub struct Project {
    pub settings: ClientSettings,
    pub routes: Vec<RouteRecord>,
}

impl Project {
    /// Resolve the settings of `dir` and run the discovery pass.
    pub fn load(dir: &Path, overrides: &Overrides) -> axgen_manifest::Result<Self> {
        tracing::debug!(project = %dir.display(), "loading project");
        let settings = ClientSettings::resolve(dir, overrides)?;
        let routes = axgen_scan::scan_project(&settings)?;
        Ok(Self { settings, routes })
    }
}
