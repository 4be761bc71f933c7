//! Files of the generated client package and how they land on disk.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Header placed on top of every generated TypeScript source.
pub const GENERATED_HEADER: &str = "// Generated by axgen. Do not edit.";

/// A file of the client package.
///
/// Implementors only provide a location and a body; [`GeneratedFile::contents`]
/// and [`GeneratedFile::write`] apply the file's [`FileRules`].
pub trait GeneratedFile {
    /// Location of the file under `base`.
    fn path(&self, base: &Path) -> PathBuf;

    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    /// Body of the file, without header.
    fn render(&self) -> String;

    /// Exact bytes written to disk.
    fn contents(&self) -> String {
        self.rules().decorate(self.render())
    }

    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        if !self.rules().should_write(&path) {
            return Ok(WriteResult::Skipped);
        }
        create_parent_and_write(&path, &self.contents())?;
        Ok(WriteResult::Written)
    }
}

fn create_parent_and_write(path: &Path, content: &str) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .wrap_err_with(|| format!("failed to create '{}'", dir.display()))?;
    }
    std::fs::write(path, content).wrap_err_with(|| format!("failed to write '{}'", path.display()))
}

/// Outcome of [`GeneratedFile::write`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    Written,
    /// Left untouched because it already exists and belongs to the user.
    Skipped,
}

/// When a file may be replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    #[default]
    Always,
    IfMissing,
}

/// Overwrite policy and optional header of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
    pub header: Option<&'static str>,
}

impl FileRules {
    /// Rewritten on every run and marked with [`GENERATED_HEADER`].
    pub fn generated() -> Self {
        Self {
            overwrite: Overwrite::Always,
            header: Some(GENERATED_HEADER),
        }
    }

    /// Created on the first run, then owned by the user.
    pub fn create_once() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
            header: None,
        }
    }

    fn should_write(&self, path: &Path) -> bool {
        self.overwrite == Overwrite::Always || !path.exists()
    }

    fn decorate(&self, body: String) -> String {
        match self.header {
            Some(header) => format!("{header}\n\n{body}"),
            None => body,
        }
    }
}
