//! `axiosClient.config.json` parsing.

use std::path::Path;

use serde::Deserialize;

use crate::{Result, SourceContext};

/// Default name of the configuration file at the project root.
pub const DEFAULT_CONFIG_FILE: &str = "axiosClient.config.json";

/// Optional project-level configuration. Every field is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxiosClientConfig {
    /// Folder of the generated client, relative to the project.
    pub folder_name: Option<String>,
    /// `name` of the generated package.json.
    pub package_name: Option<String>,
    /// tsconfig whose `paths` aliases are carried over to the client.
    pub ts_config_path: Option<String>,
    /// Extra project files re-exported from the client's index.
    pub extra_exports: Option<Vec<String>>,
    /// Route sub-paths to keep (relative to `src/routes`).
    pub included_routes: Option<Vec<String>>,
    /// Route sub-paths to drop (relative to `src/routes`).
    pub excluded_routes: Option<Vec<String>>,
}

impl AxiosClientConfig {
    /// Parse configuration from a JSON string.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        serde_json::from_str(content).map_err(|e| ctx.json_error(e))
    }

    /// Load `<project>/<file>`; a missing file yields the default configuration.
    pub fn load(project: &Path, file: &str) -> Result<Self> {
        let path = project.join(file);
        if !path.is_file() {
            tracing::info!(path = %path.display(), "no client configuration found, using defaults");
            return Ok(Self::default());
        }
        let ctx = SourceContext::read(&path)?;
        Self::from_str_with_filename(ctx.src(), ctx.filename())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::Error;

    #[test]
    fn test_parse_full_config() {
        let config = AxiosClientConfig::from_str_with_filename(
            r#"{
                "folderName": "api-client",
                "packageName": "@acme/api-client",
                "extraExports": ["src/entities/Traveler.ts"],
                "includedRoutes": ["private"],
                "excludedRoutes": ["private/Quotas"]
            }"#,
            DEFAULT_CONFIG_FILE,
        )
        .unwrap();

        assert_eq!(config.folder_name.as_deref(), Some("api-client"));
        assert_eq!(config.package_name.as_deref(), Some("@acme/api-client"));
        assert_eq!(config.ts_config_path, None);
        assert_eq!(
            config.extra_exports,
            Some(vec!["src/entities/Traveler.ts".to_string()])
        );
        assert_eq!(config.included_routes, Some(vec!["private".to_string()]));
        assert_eq!(
            config.excluded_routes,
            Some(vec!["private/Quotas".to_string()])
        );
    }

    #[test]
    fn test_parse_empty_object() {
        let config = AxiosClientConfig::from_str_with_filename("{}", DEFAULT_CONFIG_FILE).unwrap();
        assert_eq!(config, AxiosClientConfig::default());
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        let err =
            AxiosClientConfig::from_str_with_filename(r#"{"extraExports": "x"}"#, "cfg.json")
                .unwrap_err();
        assert!(matches!(*err, Error::ParseJson { .. }));
    }

    #[test]
    fn test_missing_file_yields_default() {
        let temp = TempDir::new().unwrap();
        let config = AxiosClientConfig::load(temp.path(), DEFAULT_CONFIG_FILE).unwrap();
        assert_eq!(config, AxiosClientConfig::default());
    }

    #[test]
    fn test_load_from_disk() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("custom.json"),
            r#"{"folderName": "sdk"}"#,
        )
        .unwrap();
        let config = AxiosClientConfig::load(temp.path(), "custom.json").unwrap();
        assert_eq!(config.folder_name.as_deref(), Some("sdk"));
    }
}
