//! Every file of the generated client package.

use std::path::{Path, PathBuf};

mod client_types_ts;
mod gitignore;
mod index_ts;
mod mock_ts;
mod package_json;
mod readme;
mod request_types_ts;
mod route_client_ts;
mod route_types_ts;
mod tsconfig;

pub use client_types_ts::ClientTypesTs;
pub use gitignore::GitIgnore;
pub use index_ts::IndexTs;
pub use mock_ts::MockTs;
pub use package_json::PackageJson;
pub use readme::Readme;
pub use request_types_ts::RequestTypesTs;
pub use route_client_ts::RouteClientTs;
pub use route_types_ts::RouteTypesTs;
pub use tsconfig::TsConfig;

/// Where the client package lives on disk.
///
/// Route records carry absolute paths under `client_folder`; writing to
/// another base re-roots them.
#[derive(Debug, Clone)]
pub struct ClientLayout {
    pub client_folder: PathBuf,
    pub src_folder: PathBuf,
}

impl ClientLayout {
    pub fn new(client_folder: impl Into<PathBuf>, src_folder: impl Into<PathBuf>) -> Self {
        Self {
            client_folder: client_folder.into(),
            src_folder: src_folder.into(),
        }
    }

    /// A file directly in the client's `src` folder.
    pub fn src_file(&self, name: &str) -> PathBuf {
        self.src_folder.join(name)
    }

    pub(crate) fn rebase(&self, base: &Path, path: &Path) -> PathBuf {
        match path.strip_prefix(&self.client_folder) {
            Ok(relative) => base.join(relative),
            Err(_) => path.to_path_buf(),
        }
    }
}
