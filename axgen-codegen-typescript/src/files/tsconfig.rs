//! tsconfig.json of the generated client.

use std::path::{Path, PathBuf};

use axgen_core::GeneratedFile;
use indexmap::IndexMap;
use serde_json::{Value, json};

/// Compiler settings of the client, plus the host project's path aliases
/// rewritten relative to the client's `src` folder.
pub struct TsConfig {
    pub paths: IndexMap<String, Vec<String>>,
}

impl GeneratedFile for TsConfig {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("tsconfig.json")
    }

    fn render(&self) -> String {
        let mut config = json!({
            "compilerOptions": {
                "target": "ES2019",
                "module": "commonjs",
                "lib": ["ES2019", "DOM"],
                "declaration": true,
                "outDir": "dist",
                "strict": true,
                "esModuleInterop": true,
                "skipLibCheck": true,
                "baseUrl": "src"
            },
            "include": ["src"]
        });
        if !self.paths.is_empty() {
            config["compilerOptions"]["paths"] = json!(self.paths);
        }
        format!("{:#}\n", config)
    }
}
