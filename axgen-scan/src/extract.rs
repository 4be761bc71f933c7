//! Extraction of the conventional type names from a route's interface file.
//!
//! Only the headers of top-level exported declarations are looked at:
//!
//! ```text
//! export [declare] (interface | type) <Name>
//! ```
//!
//! A small tokenizer skips comments, string and template literals and tracks
//! brace depth, so nested fields, imports and names mentioned in comments are
//! never mistaken for declarations.

use axgen_ir::RouteInterfaces;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Ident(&'a str),
    Open,
    Close,
    Other,
}

struct Lexer<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn skip_line_comment(&mut self) {
        while let Some(b) = self.peek(0) {
            self.pos += 1;
            if b == b'\n' {
                return;
            }
        }
    }

    fn skip_block_comment(&mut self) {
        self.pos += 2;
        while let Some(b) = self.peek(0) {
            if b == b'*' && self.peek(1) == Some(b'/') {
                self.pos += 2;
                return;
            }
            self.pos += 1;
        }
    }

    fn skip_string(&mut self, quote: u8) {
        self.pos += 1;
        while let Some(b) = self.peek(0) {
            match b {
                b'\\' => self.pos += 2,
                b'\n' => {
                    // unterminated
                    self.pos += 1;
                    return;
                }
                _ if b == quote => {
                    self.pos += 1;
                    return;
                }
                _ => self.pos += 1,
            }
        }
    }

    fn skip_template(&mut self) {
        self.pos += 1;
        while let Some(b) = self.peek(0) {
            match b {
                b'\\' => self.pos += 2,
                b'`' => {
                    self.pos += 1;
                    return;
                }
                b'$' if self.peek(1) == Some(b'{') => {
                    self.pos += 2;
                    self.skip_substitution();
                }
                _ => self.pos += 1,
            }
        }
    }

    /// Skip a `${ ... }` template substitution, up to its closing brace.
    fn skip_substitution(&mut self) {
        let mut depth = 1usize;
        while let Some(token) = self.next() {
            match token {
                Token::Open => depth += 1,
                Token::Close => {
                    depth -= 1;
                    if depth == 0 {
                        return;
                    }
                }
                _ => {}
            }
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        loop {
            let b = self.peek(0)?;
            match b {
                _ if b.is_ascii_whitespace() => self.pos += 1,
                b'/' if self.peek(1) == Some(b'/') => self.skip_line_comment(),
                b'/' if self.peek(1) == Some(b'*') => self.skip_block_comment(),
                b'"' | b'\'' => self.skip_string(b),
                b'`' => self.skip_template(),
                b'{' => {
                    self.pos += 1;
                    return Some(Token::Open);
                }
                b'}' => {
                    self.pos += 1;
                    return Some(Token::Close);
                }
                _ if is_ident_start(b) => {
                    let start = self.pos;
                    while self.peek(0).is_some_and(is_ident_continue) {
                        self.pos += 1;
                    }
                    return Some(Token::Ident(&self.src[start..self.pos]));
                }
                _ => {
                    self.pos += 1;
                    return Some(Token::Other);
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Header {
    None,
    Export,
    Keyword,
}

/// Names of every top-level `export interface` / `export type`, in file order.
pub fn exported_type_names(content: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut depth = 0usize;
    let mut header = Header::None;

    for token in Lexer::new(content) {
        header = match token {
            Token::Open => {
                depth += 1;
                Header::None
            }
            Token::Close => {
                depth = depth.saturating_sub(1);
                Header::None
            }
            Token::Ident(word) if depth == 0 => match (header, word) {
                (_, "export") => Header::Export,
                (Header::Export, "declare") => Header::Export,
                (Header::Export, "interface" | "type") => Header::Keyword,
                (Header::Keyword, name) => {
                    names.push(name);
                    Header::None
                }
                _ => Header::None,
            },
            _ => Header::None,
        };
    }
    names
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Path,
    Query,
    Body,
    Response,
}

/// `name` ends with `suffix` and has a non-empty stem before it.
fn has_suffix(name: &str, suffix: &str) -> bool {
    name.len() > suffix.len() && name.ends_with(suffix)
}

/// Category of a declaration name, decided by its final suffix only.
///
/// A name belongs to at most one category: `UpdatePathBody` is a body.
fn classify(name: &str) -> Option<Kind> {
    if has_suffix(name, "Path") {
        return Some(Kind::Path);
    }
    if has_suffix(name, "Query") {
        return Some(Kind::Query);
    }
    if has_suffix(name, "Body") {
        return Some(Kind::Body);
    }
    let stem = name.trim_end_matches(|c: char| c.is_ascii_digit());
    has_suffix(stem, "Response").then_some(Kind::Response)
}

/// Extract the path/query/body/response declarations of an interface file.
///
/// Path, query and body keep their first declaration; responses keep all of
/// them in file order. Finding nothing is not an error.
pub fn extract_interfaces(content: &str) -> RouteInterfaces {
    let mut interfaces = RouteInterfaces::default();
    for name in exported_type_names(content) {
        let slot = match classify(name) {
            Some(Kind::Path) => &mut interfaces.path_interface,
            Some(Kind::Query) => &mut interfaces.query_interface,
            Some(Kind::Body) => &mut interfaces.body_interface,
            Some(Kind::Response) => {
                interfaces.responses_interfaces.push(name.to_string());
                continue;
            }
            None => continue,
        };
        if slot.is_none() {
            *slot = Some(name.to_string());
        }
    }
    interfaces
}
