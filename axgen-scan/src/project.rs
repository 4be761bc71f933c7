use axgen_ir::RouteRecord;
use axgen_manifest::{ClientSettings, Error, Result};

use crate::{build_route, enumerate_routes};

/// Discover and describe every selected route of the project.
///
/// Configuration problems of individual routes are collected and returned
/// together, so a single run reports all of them. I/O failures abort at once.
pub fn scan_project(settings: &ClientSettings) -> Result<Vec<RouteRecord>> {
    let files = enumerate_routes(
        &settings.routes_root,
        &settings.included_routes,
        &settings.excluded_routes,
    )?;
    tracing::info!(count = files.len(), "discovered route files");

    let mut routes = Vec::with_capacity(files.len());
    let mut problems = Vec::new();
    for file in &files {
        match build_route(file, &settings.src_folder) {
            Ok(route) => {
                tracing::debug!(
                    route = %route.folders,
                    method = %route.method,
                    path = %route.path,
                    "route"
                );
                routes.push(route);
            }
            Err(e) if e.is_configuration() => problems.push(*e),
            Err(e) => return Err(e),
        }
    }

    if !problems.is_empty() {
        return Err(Error::configuration(problems));
    }
    Ok(routes)
}
