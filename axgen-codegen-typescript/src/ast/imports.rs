//! TypeScript import builder.

use axgen_codegen::builder::{CodeFragment, Renderable};

/// An `import` statement.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    default: Option<String>,
    named: Vec<String>,
    type_only: bool,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            default: None,
            named: Vec::new(),
            type_only: false,
        }
    }

    /// Import a default export.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    pub fn named_all(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.named.extend(names.into_iter().map(Into::into));
        self
    }

    /// `import type { ... }`
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.default.is_none() && self.named.is_empty()
    }

    fn statement(&self) -> String {
        let type_kw = if self.type_only { "type " } else { "" };
        match (&self.default, self.named.is_empty()) {
            (Some(def), true) => format!("import {type_kw}{def} from '{}';", self.from),
            (Some(def), false) => format!(
                "import {type_kw}{def}, {{ {} }} from '{}';",
                self.named.join(", "),
                self.from
            ),
            (None, false) => format!(
                "import {type_kw}{{ {} }} from '{}';",
                self.named.join(", "),
                self.from
            ),
            (None, true) => format!("import '{}';", self.from),
        }
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.statement())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_import() {
        assert_eq!(Import::new("axios").default("axios").statement(), "import axios from 'axios';");
    }

    #[test]
    fn test_named_import() {
        let import = Import::new("./client.types").named("AxiosClient").named("BaseParams");
        assert_eq!(
            import.statement(),
            "import { AxiosClient, BaseParams } from './client.types';"
        );
    }

    #[test]
    fn test_type_only_import() {
        let import = Import::new("axios").named("AxiosRequestConfig").type_only();
        assert_eq!(
            import.statement(),
            "import type { AxiosRequestConfig } from 'axios';"
        );
    }

    #[test]
    fn test_side_effect_import() {
        assert_eq!(Import::new("./polyfill").statement(), "import './polyfill';");
    }
}
