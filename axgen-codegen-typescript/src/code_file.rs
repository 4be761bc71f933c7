//! Assembling a TypeScript module from statements.

use axgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use crate::ast::{Export, Import};

/// A TypeScript module: import statements, re-exports, then declarations.
///
/// Non-empty sections and declarations are separated by one blank line.
/// An import that names nothing is dropped, so callers can pass
/// `named_all` over a possibly empty list.
#[derive(Default)]
pub struct CodeFile {
    imports: Vec<Import>,
    exports: Vec<Export>,
    declarations: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn import(mut self, import: Import) -> Self {
        if !import.is_empty() {
            self.imports.push(import);
        }
        self
    }

    pub fn imports(self, imports: impl IntoIterator<Item = Import>) -> Self {
        imports.into_iter().fold(self, Self::import)
    }

    pub fn export(mut self, export: Export) -> Self {
        self.exports.push(export);
        self
    }

    pub fn exports(mut self, exports: impl IntoIterator<Item = Export>) -> Self {
        self.exports.extend(exports);
        self
    }

    /// Add a top-level declaration.
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, declaration: R) -> Self {
        self.declarations.push(declaration.to_fragments());
        self
    }

    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        let sections = [self.imports.to_fragments(), self.exports.to_fragments()]
            .into_iter()
            .chain(self.declarations.iter().cloned())
            .filter(|section| !section.is_empty());
        for (i, section) in sections.enumerate() {
            if i > 0 {
                builder.write(&CodeFragment::Blank);
            }
            builder.write(&section);
        }
        builder.build()
    }
}

/// Pre-formatted source, one fragment per line.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0.lines().map(CodeFragment::line).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file() {
        assert_eq!(CodeFile::new().render(), "");
    }

    #[test]
    fn test_sections_are_separated() {
        let code = CodeFile::new()
            .import(Import::new("./client.types").named("AxiosClient"))
            .import(Import::new("./unused"))
            .export(Export::all("./request.types"))
            .add(RawCode::new("const a = 1;"))
            .add(RawCode::new("const b = 2;"))
            .render();
        assert_eq!(
            code,
            "import { AxiosClient } from './client.types';\n\nexport * from './request.types';\n\nconst a = 1;\n\nconst b = 2;\n"
        );
    }

    #[test]
    fn test_declarations_only() {
        let code = CodeFile::new().add(RawCode::new("export type A = 1;")).render();
        assert_eq!(code, "export type A = 1;\n");
    }
}
