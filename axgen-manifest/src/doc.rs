//! Route documentation files.
//!
//! Each route folder holds one declarative file describing the endpoint:
//!
//! ```toml
//! method = "post"
//! path = "/enrichments/:prospectId"
//! description = "Create an enrichment request"
//! ```
//!
//! The same keys are accepted in a `*.doc.json` file.

use std::path::Path;

use axgen_ir::HttpMethod;
use serde::Deserialize;

use crate::{Error, Result, SourceContext};

/// File name suffixes recognised as route documentation, in lookup order.
pub const DOC_FILE_SUFFIXES: &[&str] = &[".doc.toml", ".doc.json"];

/// HTTP metadata of one route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDoc {
    pub method: HttpMethod,
    /// URL template, may contain `:param` placeholders.
    pub path: String,
    pub description: Option<String>,
}

#[derive(Deserialize)]
struct RawRouteDoc {
    method: Option<String>,
    path: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocFormat {
    Toml,
    Json,
}

impl DocFormat {
    fn of(path: &Path) -> DocFormat {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => DocFormat::Json,
            _ => DocFormat::Toml,
        }
    }
}

impl RouteDoc {
    /// Load the documentation file of `route`.
    pub fn load(path: &Path, route: &str) -> Result<Self> {
        let ctx = SourceContext::read(path)?;
        Self::parse(&ctx, DocFormat::of(path), route)
    }

    /// Parse TOML documentation content.
    pub fn from_toml(content: &str, filename: &str, route: &str) -> Result<Self> {
        Self::parse(&SourceContext::new(content, filename), DocFormat::Toml, route)
    }

    /// Parse JSON documentation content.
    pub fn from_json(content: &str, filename: &str, route: &str) -> Result<Self> {
        Self::parse(&SourceContext::new(content, filename), DocFormat::Json, route)
    }

    fn parse(ctx: &SourceContext, format: DocFormat, route: &str) -> Result<Self> {
        let raw: RawRouteDoc = match format {
            DocFormat::Toml => toml::from_str(ctx.src()).map_err(|e| ctx.toml_error(e))?,
            DocFormat::Json => serde_json::from_str(ctx.src()).map_err(|e| ctx.json_error(e))?,
        };

        let Some(method) = raw.method else {
            return Err(Box::new(Error::MissingMethod {
                route: route.to_string(),
                src: ctx.named_source(),
            }));
        };
        let method = method.parse::<HttpMethod>().map_err(|_| {
            Box::new(Error::InvalidMethod {
                route: route.to_string(),
                span: ctx.find_value_span("method", &method),
                method: method.clone(),
                src: ctx.named_source(),
            })
        })?;

        let Some(path) = raw.path else {
            return Err(Box::new(Error::MissingPath {
                route: route.to_string(),
                src: ctx.named_source(),
            }));
        };

        Ok(Self {
            method,
            path,
            description: raw.description.filter(|d| !d.trim().is_empty()),
        })
    }
}
