/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the given width, capped at 8.
    Spaces(u8),
    Tab,
}

const SPACES: &str = "        ";

impl Indent {
    /// 2-space indentation used for TypeScript and JSON output.
    pub const TYPESCRIPT: Self = Self::Spaces(2);

    /// Tab indentation used by the Markdown outline.
    pub const MARKDOWN: Self = Self::Tab;

    /// One level of indentation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(n) => &SPACES[..usize::from(*n).min(SPACES.len())],
            Self::Tab => "\t",
        }
    }

    /// `levels` levels of indentation.
    pub fn repeat(&self, levels: usize) -> String {
        self.as_str().repeat(levels)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TYPESCRIPT
    }
}
