//! Route discovery for axgen.
//!
//! Finds the route files of a project, reads their interface and
//! documentation files, and produces one [`axgen_ir::RouteRecord`] per route.

mod enumerate;
mod extract;
mod project;
mod route;

pub use enumerate::{ROUTE_FILE_SUFFIX, enumerate_routes, route_folders_of};
pub use extract::{exported_type_names, extract_interfaces};
pub use project::scan_project;
pub use route::{INTERFACE_FILE_SUFFIX, build_route};
