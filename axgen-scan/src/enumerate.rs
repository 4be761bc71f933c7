//! Route file discovery.

use std::path::{Component, Path, PathBuf};

use axgen_ir::RoutePath;
use axgen_manifest::{Error, Result};
use walkdir::WalkDir;

/// File name suffix of a route definition.
pub const ROUTE_FILE_SUFFIX: &str = ".route.ts";

/// Name of the folder every route lives under.
const ROUTES_MARKER: &str = "routes";

fn is_route_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(ROUTE_FILE_SUFFIX))
}

/// `path` with `/` separators and without `.` or root components.
fn slash_string(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Include/exclude filtering on a path relative to the routes folder.
///
/// Matching is a plain string prefix, so `Enrichments/Create` selects
/// `Enrichments/CreateEnrichment/...` and `Quotas` also selects `QuotasV2/...`.
fn is_selected(relative: &Path, include: &[PathBuf], exclude: &[PathBuf]) -> bool {
    let relative = slash_string(relative);
    let matches = |prefixes: &[PathBuf]| {
        prefixes
            .iter()
            .any(|p| relative.starts_with(slash_string(p).as_str()))
    };
    (include.is_empty() || matches(include)) && !matches(exclude)
}

fn walk_error(root: &Path, error: walkdir::Error) -> Box<Error> {
    let path = error.path().unwrap_or(root).to_path_buf();
    Error::io(path, error.into())
}

/// Every route file under `routes_root`, filtered.
///
/// Route files sit at least one folder below the routes folder. The walk is
/// sorted by file name so repeated runs yield the same order.
pub fn enumerate_routes(
    routes_root: &Path,
    include: &[PathBuf],
    exclude: &[PathBuf],
) -> Result<Vec<PathBuf>> {
    if !routes_root.is_dir() {
        tracing::warn!(path = %routes_root.display(), "routes folder not found");
        return Ok(Vec::new());
    }

    let mut routes = Vec::new();
    for entry in WalkDir::new(routes_root).min_depth(2).sort_by_file_name() {
        let entry = entry.map_err(|e| walk_error(routes_root, e))?;
        if !entry.file_type().is_file() || !is_route_file(entry.path()) {
            continue;
        }
        let relative = entry.path().strip_prefix(routes_root).unwrap_or(entry.path());
        if !is_selected(relative, include, exclude) {
            tracing::trace!(route = %relative.display(), "route filtered out");
            continue;
        }
        routes.push(entry.into_path());
    }
    Ok(routes)
}

/// Folder segments of a route file, between the last `routes` folder and the
/// file itself.
///
/// Returns `None` when the file is not below a `routes` folder, sits
/// directly in it, or has a folder name that is not valid UTF-8.
pub fn route_folders_of(route_file: &Path) -> Option<RoutePath> {
    let folders = route_file
        .parent()?
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_str()),
            _ => None,
        })
        .collect::<Option<Vec<&str>>>()?;
    let marker = folders.iter().rposition(|f| *f == ROUTES_MARKER)?;
    RoutePath::new(folders[marker + 1..].iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_folders_of() {
        let folders = route_folders_of(Path::new(
            "/app/src/routes/private/Enrichments/CreateEnrichment/CreateEnrichment.route.ts",
        ))
        .unwrap();
        assert_eq!(
            folders.segments(),
            ["private", "Enrichments", "CreateEnrichment"]
        );
        assert_eq!(folders.name(), "CreateEnrichment");
    }

    #[test]
    fn test_route_folders_use_last_marker() {
        let folders =
            route_folders_of(Path::new("/routes/app/src/routes/public/Get/Get.route.ts")).unwrap();
        assert_eq!(folders.to_string(), "public/Get");
    }

    #[test]
    fn test_route_folders_outside_routes() {
        assert!(route_folders_of(Path::new("/app/src/api/Get/Get.route.ts")).is_none());
        assert!(route_folders_of(Path::new("/app/src/routes/Get.route.ts")).is_none());
    }

    #[test]
    fn test_is_selected() {
        let include = vec![PathBuf::from("Enrichments")];
        let exclude = vec![PathBuf::from("Enrichments/DeleteEnrichment")];
        let selected = |p: &str| is_selected(Path::new(p), &include, &exclude);

        assert!(selected("Enrichments/CreateEnrichment/CreateEnrichment.route.ts"));
        assert!(!selected("Enrichments/DeleteEnrichment/DeleteEnrichment.route.ts"));
        assert!(selected("EnrichmentsV2/Get/Get.route.ts"));
        assert!(!selected("Quotas/GetQuotas/GetQuotas.route.ts"));
        assert!(is_selected(Path::new("Quotas/Get/Get.route.ts"), &[], &[]));
    }

    #[test]
    fn test_is_selected_by_partial_folder_name() {
        let include = vec![PathBuf::from("Enrichments/Create")];
        assert!(is_selected(
            Path::new("Enrichments/CreateEnrichment/CreateEnrichment.route.ts"),
            &include,
            &[]
        ));
        assert!(!is_selected(
            Path::new("Enrichments/GetEnrichments/GetEnrichments.route.ts"),
            &include,
            &[]
        ));

        let exclude = vec![PathBuf::from("./Enrich")];
        assert!(!is_selected(
            Path::new("Enrichments/GetEnrichments/GetEnrichments.route.ts"),
            &[],
            &exclude
        ));
        assert!(is_selected(Path::new("Quotas/GetQuotas/GetQuotas.route.ts"), &[], &exclude));
    }

    #[cfg(unix)]
    #[test]
    fn test_route_folders_reject_non_utf8_names() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        let path = Path::new("/app/src/routes/private")
            .join(OsStr::from_bytes(b"Bad\xff"))
            .join("Get/Get.route.ts");
        assert!(route_folders_of(&path).is_none());
    }

    #[test]
    fn test_is_route_file() {
        assert!(is_route_file(Path::new("a/Login.route.ts")));
        assert!(!is_route_file(Path::new("a/Login.interfaces.ts")));
        assert!(!is_route_file(Path::new("a/Login.route.ts.bak")));
    }
}
