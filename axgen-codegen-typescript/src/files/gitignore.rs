use std::path::{Path, PathBuf};

use axgen_core::{FileRules, GeneratedFile};

/// The client's .gitignore, written once.
pub struct GitIgnore;

impl GeneratedFile for GitIgnore {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(".gitignore")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        "node_modules/\ndist/\n".to_string()
    }
}
