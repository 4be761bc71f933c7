//! Resolved generator settings.
//!
//! Every setting follows the same precedence: command line, then the
//! configuration file, then a default derived from the host project.

use std::path::{Path, PathBuf};

use axgen_core::Version;

use crate::{
    AxiosClientConfig, DEFAULT_CONFIG_FILE, PackageJsonData, Result, TsConfigPaths,
    check_existing_paths,
};

/// Folder holding the route definitions, relative to the project.
pub const ROUTES_DIR: &str = "src/routes";

const DEFAULT_TSCONFIG: &str = "tsconfig.json";

/// Settings given on the command line. `None` or empty means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config_file: Option<String>,
    pub folder_name: Option<String>,
    pub package_name: Option<String>,
    pub ts_config_path: Option<String>,
    pub extra_exports: Vec<String>,
    pub included_routes: Vec<String>,
    pub excluded_routes: Vec<String>,
}

/// Everything needed to scan a project and generate its client.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// `<project>/src/routes`
    pub routes_root: PathBuf,
    /// `name` of the host package.json.
    pub service_name: String,
    /// `author` of the host package.json, copied to the client's.
    pub author: Option<String>,
    pub folder_name: String,
    pub package_name: String,
    /// `<project>/<folder_name>`
    pub client_folder: PathBuf,
    /// `<client_folder>/src`
    pub src_folder: PathBuf,
    pub version: Version,
    pub included_routes: Vec<PathBuf>,
    pub excluded_routes: Vec<PathBuf>,
    /// Absolute paths, all known to exist.
    pub extra_exports: Vec<PathBuf>,
    pub ts_paths: TsConfigPaths,
}

fn pick<T>(cli: Option<T>, config: Option<T>) -> Option<T> {
    cli.or(config)
}

fn pick_list(cli: Vec<String>, config: Option<Vec<String>>) -> Vec<String> {
    if cli.is_empty() {
        config.unwrap_or_default()
    } else {
        cli
    }
}

impl ClientSettings {
    pub fn resolve(project: &Path, overrides: &Overrides) -> Result<Self> {
        let config_file = overrides
            .config_file
            .as_deref()
            .unwrap_or(DEFAULT_CONFIG_FILE);
        let config = AxiosClientConfig::load(project, config_file)?;
        Self::from_parts(project, overrides.clone(), config)
    }

    fn from_parts(project: &Path, overrides: Overrides, config: AxiosClientConfig) -> Result<Self> {
        let service = PackageJsonData::load(project)?;
        let service_name = service.name_or_unknown().to_string();
        let author = service.author.clone();
        let default_name = format!("{service_name}-client");

        let folder_name = pick(overrides.folder_name, config.folder_name)
            .unwrap_or_else(|| default_name.clone());
        let package_name =
            pick(overrides.package_name, config.package_name).unwrap_or(default_name);

        let client_folder = project.join(&folder_name);
        let src_folder = client_folder.join("src");
        let version = PackageJsonData::load(&client_folder)?.next_version();

        let extra_exports: Vec<PathBuf> = pick_list(overrides.extra_exports, config.extra_exports)
            .into_iter()
            .map(|p| project.join(p))
            .collect();
        check_existing_paths(&extra_exports)?;

        let ts_config_path = pick(overrides.ts_config_path, config.ts_config_path)
            .unwrap_or_else(|| DEFAULT_TSCONFIG.to_string());
        let ts_paths = TsConfigPaths::load(project, &ts_config_path)?;

        let to_paths =
            |list: Vec<String>| list.into_iter().map(PathBuf::from).collect::<Vec<_>>();

        tracing::debug!(
            folder = %folder_name,
            package = %package_name,
            %version,
            "resolved client settings"
        );

        Ok(Self {
            routes_root: project.join(ROUTES_DIR),
            service_name,
            author,
            folder_name,
            package_name,
            client_folder,
            src_folder,
            version,
            included_routes: to_paths(pick_list(overrides.included_routes, config.included_routes)),
            excluded_routes: to_paths(pick_list(overrides.excluded_routes, config.excluded_routes)),
            extra_exports,
            ts_paths,
        })
    }
}
