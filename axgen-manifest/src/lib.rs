//! Configuration and route metadata loading for axgen.
//!
//! Everything read from the host project that is not TypeScript source lives
//! here: `axiosClient.config.json`, the host and client `package.json`, the
//! host `tsconfig.json` and each route's documentation file.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod doc;
mod error;
mod extra_exports;
mod package_json;
mod settings;
mod tsconfig;

pub use config::{AxiosClientConfig, DEFAULT_CONFIG_FILE};
pub use doc::{DOC_FILE_SUFFIXES, RouteDoc};
pub use error::{Error, Result, SourceContext};
pub use extra_exports::check_existing_paths;
pub use package_json::PackageJsonData;
pub use settings::{ClientSettings, Overrides, ROUTES_DIR};
pub use tsconfig::TsConfigPaths;
