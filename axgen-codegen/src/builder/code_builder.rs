//! Indentation-aware string building for generated sources.

use super::{CodeFragment, Indent, Renderable};

/// Chainable writer of indented lines.
///
/// ```
/// use axgen_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::typescript()
///     .block_with_close("export const ping = () => {", "};", |b| {
///         b.line("return 'pong';")
///     })
///     .build();
///
/// assert_eq!(code, "export const ping = () => {\n  return 'pong';\n};\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent: Indent,
    level: usize,
    out: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent,
            level: 0,
            out: String::new(),
        }
    }

    /// Two-space indentation.
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Append `text` at the current level. Empty text gives a bare newline.
    pub fn write_line(&mut self, text: &str) {
        if !text.is_empty() {
            self.out.push_str(&self.indent.repeat(self.level));
            self.out.push_str(text);
        }
        self.out.push('\n');
    }

    /// Append every fragment of `node` at the current level.
    pub fn write(&mut self, node: &(impl Renderable + ?Sized)) {
        for fragment in node.to_fragments() {
            self.write_fragment(&fragment);
        }
    }

    fn write_fragment(&mut self, fragment: &CodeFragment) {
        match fragment {
            CodeFragment::Line(text) => self.write_line(text),
            CodeFragment::Blank => self.out.push('\n'),
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.write_line(header);
                self.level += 1;
                for inner in body {
                    self.write_fragment(inner);
                }
                self.level -= 1;
                self.write_line(close);
            }
        }
    }

    pub fn line(mut self, text: &str) -> Self {
        self.write_line(text);
        self
    }

    pub fn indent(mut self) -> Self {
        self.level += 1;
        self
    }

    pub fn dedent(mut self) -> Self {
        self.level = self.level.saturating_sub(1);
        self
    }

    pub fn render(mut self, node: &(impl Renderable + ?Sized)) -> Self {
        self.write(node);
        self
    }

    /// `header`, then the lines added by `body` one level deeper, then `close`.
    pub fn block_with_close<F>(self, header: &str, close: &str, body: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        body(self.line(header).indent()).dedent().line(close)
    }

    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    pub fn build(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_blocks() {
        let code = CodeBuilder::typescript()
            .block_with_close("try {", "}", |b| {
                b.block_with_close("await axios.request({", "});", |b| b.line("method: 'get',"))
            })
            .build();
        assert_eq!(code, "try {\n  await axios.request({\n    method: 'get',\n  });\n}\n");
    }

    #[test]
    fn test_empty_line_has_no_trailing_whitespace() {
        let code = CodeBuilder::typescript().indent().line("").build();
        assert_eq!(code, "\n");
    }

    #[test]
    fn test_when() {
        let code = CodeBuilder::typescript()
            .when(false, |b| b.line("data: body,"))
            .when(true, |b| b.line("params: query,"))
            .build();
        assert_eq!(code, "params: query,\n");
    }

    #[test]
    fn test_block_fragment_is_indented_from_current_level() {
        let failure = CodeFragment::block(
            "const failure: RequestError = {",
            vec![CodeFragment::line("hasFailed: true,")],
            "};",
        );
        let code = CodeBuilder::typescript().indent().render(&failure).build();
        assert_eq!(
            code,
            "  const failure: RequestError = {\n    hasFailed: true,\n  };\n"
        );
    }

    #[test]
    fn test_markdown_indent() {
        let code = CodeBuilder::new(Indent::MARKDOWN).indent().line("- **get**").build();
        assert_eq!(code, "\t- **get**\n");
    }
}
