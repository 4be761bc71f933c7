use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest and scan operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Keeps the content and filename of the file being parsed together so error
/// factories can attach labelled spans.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Read a file into a source context.
    pub fn read(path: &Path) -> Result<Self> {
        let src = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Ok(Self::new(src, path.display().to_string()))
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Span of `needle` in the value assigned to `key`.
    ///
    /// The key is the first occurrence of `key` followed by `=` (TOML) or
    /// `":` (JSON); `needle` is searched after it.
    pub fn find_value_span(&self, key: &str, needle: &str) -> Option<SourceSpan> {
        if needle.is_empty() {
            return None;
        }
        let value_start = self.src.match_indices(key).find_map(|(pos, _)| {
            let rest = self.src[pos + key.len()..].trim_start_matches('"').trim_start();
            rest.starts_with(['=', ':'])
                .then(|| self.src.len() - rest.len() + 1)
        })?;
        self.src[value_start..]
            .find(needle)
            .map(|pos| SourceSpan::from((value_start + pos, needle.len())))
    }

    /// Create a parse error from a serde_json error.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = line_col_offset(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 1)));
        Box::new(Error::ParseJson {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a parse error from a toml error.
    pub fn toml_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::ParseToml {
            src: self.named_source(),
            span,
            source,
        })
    }
}

/// Byte offset of a 1-based line/column position.
fn line_col_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = line_start + column.saturating_sub(1);
    (offset < src.len()).then_some(offset)
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(axgen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON")]
    #[diagnostic(code(axgen::parse_json))]
    ParseJson {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse TOML")]
    #[diagnostic(code(axgen::parse_toml))]
    ParseToml {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("route '{route}' has no documentation file")]
    #[diagnostic(
        code(axgen::missing_documentation),
        help("add a '{name}.doc.toml' file with method, path and description next to the route")
    )]
    MissingDocumentation {
        route: String,
        /// Deepest folder of the route.
        name: String,
        folder: PathBuf,
    },

    #[error("route '{route}' does not declare an HTTP method")]
    #[diagnostic(
        code(axgen::missing_method),
        help("add `method = \"get\"` (or post, put, delete) to the documentation file")
    )]
    MissingMethod {
        route: String,
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("route '{route}' uses unknown HTTP method '{method}'")]
    #[diagnostic(
        code(axgen::invalid_method),
        help("valid methods are: get, post, put, delete")
    )]
    InvalidMethod {
        route: String,
        method: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown method")]
        span: Option<SourceSpan>,
    },

    #[error("route '{route}' does not declare a URL path")]
    #[diagnostic(
        code(axgen::missing_path),
        help("add `path = \"/...\"` to the documentation file")
    )]
    MissingPath {
        route: String,
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("'{path}' is not inside a routes folder")]
    #[diagnostic(code(axgen::outside_routes))]
    RouteOutsideRoot { path: PathBuf },

    #[error("{message}")]
    #[diagnostic(
        code(axgen::extra_exports),
        help("extra export paths are resolved relative to the project folder")
    )]
    MissingExtraExports { message: String, paths: Vec<PathBuf> },

    #[error("{count} route(s) are misconfigured")]
    #[diagnostic(code(axgen::configuration))]
    Configuration {
        count: usize,
        #[related]
        problems: Vec<Error>,
    },
}

impl Error {
    /// Create an I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Aggregate several per-route problems into one configuration error
    pub fn configuration(problems: Vec<Error>) -> Box<Self> {
        Box::new(Error::Configuration {
            count: problems.len(),
            problems,
        })
    }

    /// True for errors caused by the project's own configuration, as opposed
    /// to I/O failures.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, Error::Io { .. })
    }
}
