//! TypeScript export builder.

use axgen_codegen::builder::{CodeFragment, Renderable};

/// An `export` statement re-exporting from another module.
#[derive(Debug, Clone)]
pub struct Export {
    from: String,
    named: Vec<String>,
}

impl Export {
    /// `export * from '<module>'`
    pub fn all(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
        }
    }

    /// Restrict the re-export to named items.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    fn statement(&self) -> String {
        if self.named.is_empty() {
            format!("export * from '{}';", self.from)
        } else {
            format!("export {{ {} }} from '{}';", self.named.join(", "), self.from)
        }
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.statement())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_re_export_all() {
        assert_eq!(
            Export::all("./request.types").statement(),
            "export * from './request.types';"
        );
    }

    #[test]
    fn test_re_export_named() {
        let export = Export::all("./mock").named("getAxiosClientMock");
        assert_eq!(
            export.statement(),
            "export { getAxiosClientMock } from './mock';"
        );
    }
}
