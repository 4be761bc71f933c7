//! Check operation - discovery without writing.

use axgen_codegen_typescript::ClientTrees;

use super::Project;
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Builds the client trees from the scanned routes and reports routes that
/// would be left out of the client.
pub fn check(project: &Project) -> CheckReport {
    let settings = &project.settings;
    let trees = ClientTrees::build(&project.routes);

    CheckReport {
        service_name: settings.service_name.clone(),
        package_name: settings.package_name.clone(),
        client_folder: settings.client_folder.clone(),
        routes: project
            .routes
            .iter()
            .map(|route| format!("{} {} ({})", route.method, route.path, route.folders))
            .collect(),
        shadowed_routes: trees
            .shadowed(&project.routes)
            .iter()
            .map(|route| route.folders.to_string())
            .collect(),
        docs: trees.client_docs(),
    }
}
