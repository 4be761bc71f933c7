use std::{fmt, path::PathBuf};

use serde::Serialize;

use crate::{HttpMethod, RouteInterfaces};

/// Folder segments between the `routes` root and a route's own folder.
///
/// Never empty; the last segment is the route's logical name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RoutePath(Vec<String>);

impl RoutePath {
    /// Build a route path, returning `None` for an empty segment list.
    pub fn new<I, S>(segments: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            None
        } else {
            Some(Self(segments))
        }
    }

    /// Parse a `/`-separated path such as `private/Quotas/GetQuotas`.
    pub fn parse(path: &str) -> Option<Self> {
        Self::new(path.split('/').filter(|s| !s.is_empty()))
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Top-level namespace (e.g. `private` or `public`).
    pub fn root(&self) -> &str {
        &self.0[0]
    }

    /// Logical route name: the deepest folder.
    pub fn name(&self) -> &str {
        &self.0[self.0.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("/"))
    }
}

/// Where the generated sources of one route are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPaths {
    /// `<client src>/<folders...>`
    pub folder: PathBuf,
    /// `<folder>/<functionName>.types.ts`
    pub type_file: PathBuf,
    /// `<folder>/<functionName>.client.ts`
    pub client_file: PathBuf,
}

/// Everything known about one discovered route, ready for code generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRecord {
    pub folders: RoutePath,
    pub route_file: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface_file: Option<PathBuf>,
    /// Absent when the route has no interface file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interfaces: Option<RouteInterfaces>,
    pub documentation_file: PathBuf,
    pub method: HttpMethod,
    /// URL template, may contain `:param` placeholders.
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// camelCase of the route name.
    pub function_name: String,
    /// PascalCase of the route name.
    pub function_interface_name: String,
    pub generated: GeneratedPaths,
}

impl RouteRecord {
    pub fn name(&self) -> &str {
        self.folders.name()
    }

    /// Interfaces of the route, empty when it has no interface file.
    pub fn interfaces_or_default(&self) -> RouteInterfaces {
        self.interfaces.clone().unwrap_or_default()
    }
}
