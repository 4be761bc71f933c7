//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use axgen_core::WriteResult;
use eyre::Result;

/// A client generator for one target language.
pub trait LanguageCodegen {
    /// Language identifier (e.g. "typescript").
    fn language(&self) -> &'static str;

    /// Every file that [`generate`](Self::generate) would write, rendered.
    fn preview(&self) -> Vec<PreviewFile>;

    /// Write all files under `output_dir`.
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Outcome of a generation run.
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files written (created or overwritten).
    pub written: Vec<PathBuf>,
    /// Files left alone because they already existed.
    pub skipped: Vec<PathBuf>,
}

impl GenerateResult {
    /// Record the outcome of writing `path`.
    pub fn record(&mut self, path: PathBuf, result: WriteResult) {
        match result {
            WriteResult::Written => self.written.push(path),
            WriteResult::Skipped => self.skipped.push(path),
        }
    }
}

/// A generated file for preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Path relative to the output directory, `/`-separated.
    pub path: String,
    pub content: String,
}
