//! Reading the fields axgen needs from a `package.json`.

use std::path::Path;

use axgen_core::Version;
use serde::Deserialize;

use crate::{Result, SourceContext};

/// The subset of `package.json` used for naming and versioning the client.
///
/// Fields with an unexpected type are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageJsonData {
    pub name: Option<String>,
    pub version: Option<String>,
    pub author: Option<String>,
}

#[derive(Deserialize)]
struct RawPackageJson {
    #[serde(default)]
    name: serde_json::Value,
    #[serde(default)]
    version: serde_json::Value,
    #[serde(default)]
    author: serde_json::Value,
}

fn as_string(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    }
}

impl PackageJsonData {
    /// Parse from a JSON string.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let raw: RawPackageJson = serde_json::from_str(content).map_err(|e| ctx.json_error(e))?;
        Ok(Self {
            name: as_string(raw.name),
            version: as_string(raw.version),
            author: as_string(raw.author),
        })
    }

    /// Load `<dir>/package.json`. A missing file yields empty data.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join("package.json");
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no package.json");
            return Ok(Self::default());
        }
        let ctx = SourceContext::read(&path)?;
        Self::from_str_with_filename(ctx.src(), ctx.filename())
    }

    /// Package name, or `unknown` when absent.
    pub fn name_or_unknown(&self) -> &str {
        self.name.as_deref().unwrap_or("unknown")
    }

    /// Version for the next client release: the current one with its patch
    /// bumped, or `1.0.0` when there is no usable current version.
    pub fn next_version(&self) -> Version {
        match self.version.as_deref().map(str::parse::<Version>) {
            Some(Ok(current)) => current.bump_patch(),
            Some(Err(reason)) => {
                tracing::warn!(%reason, "ignoring client package version");
                Version::initial()
            }
            None => Version::initial(),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_parse_fields() {
        let data = PackageJsonData::from_str_with_filename(
            r#"{"name": "enutrof", "version": "2.3.4", "author": {"name": "x"}}"#,
            "package.json",
        )
        .unwrap();
        assert_eq!(data.name.as_deref(), Some("enutrof"));
        assert_eq!(data.version.as_deref(), Some("2.3.4"));
        assert_eq!(data.author, None);
    }

    #[test]
    fn test_next_version() {
        let mut data = PackageJsonData::default();
        assert_eq!(data.next_version(), Version::new(1, 0, 0));

        data.version = Some("1.2.9".to_string());
        assert_eq!(data.next_version(), Version::new(1, 2, 10));

        data.version = Some("latest".to_string());
        assert_eq!(data.next_version(), Version::new(1, 0, 0));
    }

    #[test]
    fn test_missing_file() {
        let temp = TempDir::new().unwrap();
        let data = PackageJsonData::load(temp.path()).unwrap();
        assert_eq!(data.name_or_unknown(), "unknown");
    }
}
