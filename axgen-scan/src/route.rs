//! Building a [`RouteRecord`] from one route file.

use std::path::{Path, PathBuf};

use axgen_core::{to_camel_case, to_pascal_case};
use axgen_ir::{GeneratedPaths, RouteRecord};
use axgen_manifest::{DOC_FILE_SUFFIXES, Error, Result, RouteDoc};

use crate::{extract_interfaces, route_folders_of};

/// File name suffix of a route's interface file.
pub const INTERFACE_FILE_SUFFIX: &str = ".interfaces.ts";

/// First file in `folder` ending with one of `suffixes`.
///
/// Suffixes are tried in order; within a suffix, files are taken in name order.
fn first_file_with_suffix(folder: &Path, suffixes: &[&str]) -> Result<Option<PathBuf>> {
    let entries = std::fs::read_dir(folder).map_err(|e| Error::io(folder, e))?;
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(folder, e))?;
        if entry.path().is_file() {
            files.push(entry.path());
        }
    }
    files.sort();

    let found = suffixes.iter().find_map(|suffix| {
        files
            .iter()
            .find(|f| {
                f.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.ends_with(suffix))
            })
            .cloned()
    });
    Ok(found)
}

/// Collect every fact about the route defined by `route_file`.
///
/// `src_folder` is the generated client's source folder; the route's
/// generated files are placed under it using the route's folder segments.
pub fn build_route(route_file: &Path, src_folder: &Path) -> Result<RouteRecord> {
    let outside = || {
        Box::new(Error::RouteOutsideRoot {
            path: route_file.to_path_buf(),
        })
    };
    let folders = route_folders_of(route_file).ok_or_else(outside)?;
    let folder = route_file.parent().ok_or_else(outside)?;
    let route = folders.to_string();

    let interface_file = first_file_with_suffix(folder, &[INTERFACE_FILE_SUFFIX])?;
    let interfaces = match &interface_file {
        Some(path) => {
            let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
            Some(extract_interfaces(&content))
        }
        None => None,
    };

    let documentation_file =
        first_file_with_suffix(folder, DOC_FILE_SUFFIXES)?.ok_or_else(|| {
            Box::new(Error::MissingDocumentation {
                route: route.clone(),
                name: folders.name().to_string(),
                folder: folder.to_path_buf(),
            })
        })?;
    let doc = RouteDoc::load(&documentation_file, &route)?;

    let function_name = to_camel_case(folders.name());
    let function_interface_name = to_pascal_case(folders.name());

    let generated_folder = folders
        .segments()
        .iter()
        .fold(src_folder.to_path_buf(), |dir, segment| dir.join(segment));
    let generated = GeneratedPaths {
        type_file: generated_folder.join(format!("{function_name}.types.ts")),
        client_file: generated_folder.join(format!("{function_name}.client.ts")),
        folder: generated_folder,
    };

    Ok(RouteRecord {
        folders,
        route_file: route_file.to_path_buf(),
        interface_file,
        interfaces,
        documentation_file,
        method: doc.method,
        path: doc.path,
        description: doc.description,
        function_name,
        function_interface_name,
        generated,
    })
}
