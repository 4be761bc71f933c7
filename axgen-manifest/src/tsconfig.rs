//! Path aliases of the host project's tsconfig.

use std::path::{Path, PathBuf};

use axgen_core::relative_path;
use indexmap::IndexMap;
use serde::Deserialize;

use crate::{Result, SourceContext};

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RawTsConfig {
    #[serde(default)]
    compiler_options: RawCompilerOptions,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RawCompilerOptions {
    base_url: Option<String>,
    #[serde(default)]
    paths: IndexMap<String, Vec<String>>,
}

/// `compilerOptions.paths` of the host project, resolved to absolute targets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TsConfigPaths {
    aliases: IndexMap<String, Vec<PathBuf>>,
}

impl TsConfigPaths {
    /// Load the aliases from `<project>/<tsconfig>`.
    ///
    /// A missing file means no aliases. Files that are not plain JSON (tsconfig
    /// allows comments) are skipped with a warning.
    pub fn load(project: &Path, tsconfig: &str) -> Result<Self> {
        let path = project.join(tsconfig);
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no tsconfig, no path aliases");
            return Ok(Self::default());
        }
        let ctx = SourceContext::read(&path)?;
        let raw: RawTsConfig = match serde_json::from_str(ctx.src()) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "tsconfig is not plain JSON, path aliases skipped");
                return Ok(Self::default());
            }
        };

        let config_dir = path.parent().unwrap_or(project);
        Ok(Self::from_raw(config_dir, raw.compiler_options))
    }

    fn from_raw(config_dir: &Path, options: RawCompilerOptions) -> Self {
        let base = match &options.base_url {
            Some(base_url) => config_dir.join(base_url),
            None => config_dir.to_path_buf(),
        };
        let aliases = options
            .paths
            .into_iter()
            .filter(|(_, targets)| !targets.is_empty())
            .map(|(alias, targets)| {
                let resolved = targets.iter().map(|t| base.join(t)).collect();
                (alias, resolved)
            })
            .collect();
        Self { aliases }
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// The aliases rewritten relative to `dir` (the generated client's `src`).
    pub fn relative_to(&self, dir: &Path) -> IndexMap<String, Vec<String>> {
        self.aliases
            .iter()
            .map(|(alias, targets)| {
                let relative = targets
                    .iter()
                    .map(|t| {
                        relative_path(dir, t)
                            .components()
                            .map(|c| c.as_os_str().to_string_lossy().into_owned())
                            .collect::<Vec<_>>()
                            .join("/")
                    })
                    .collect();
                (alias.clone(), relative)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_relative_to_client_src() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("tsconfig.json"),
            r#"{"compilerOptions": {"baseUrl": "src", "paths": {"@/*": ["*"], "@entities/*": ["entities/*"]}}}"#,
        )
        .unwrap();

        let paths = TsConfigPaths::load(temp.path(), "tsconfig.json").unwrap();
        let client_src = temp.path().join("api-client").join("src");
        let relative = paths.relative_to(&client_src);

        assert_eq!(relative["@/*"], vec!["../../src/*".to_string()]);
        assert_eq!(relative["@entities/*"], vec!["../../src/entities/*".to_string()]);
    }

    #[test]
    fn test_missing_tsconfig() {
        let temp = TempDir::new().unwrap();
        assert!(TsConfigPaths::load(temp.path(), "tsconfig.json").unwrap().is_empty());
    }

    #[test]
    fn test_tsconfig_with_comments_is_skipped() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("tsconfig.json"),
            "{\n  // comment\n  \"compilerOptions\": {}\n}",
        )
        .unwrap();
        assert!(TsConfigPaths::load(temp.path(), "tsconfig.json").unwrap().is_empty());
    }
}
