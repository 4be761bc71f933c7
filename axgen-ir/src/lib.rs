//! Route data model for the axgen client generator.
//!
//! ```text
//! src/routes/** (TypeScript) → axgen-scan (discovery) → axgen-ir (route records) → codegen
//! ```
//!
//! Records are built once per discovery pass and are read-only afterwards.

mod interfaces;
mod route;
mod types;

pub use interfaces::RouteInterfaces;
pub use route::{GeneratedPaths, RoutePath, RouteRecord};
pub use types::{HttpMethod, ParseMethodError};
