//! Where reports are rendered.

use std::io::{self, Write};

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render.
pub trait Output {
    fn section(&mut self, name: &str);

    fn key_value(&mut self, key: &str, value: &str);

    fn list_item(&mut self, text: &str);

    /// A problem worth attention that does not stop the command.
    fn warning(&mut self, msg: &str);

    /// A separator labelled with, for instance, a file path.
    fn divider(&mut self, label: &str);

    fn preformatted(&mut self, text: &str);

    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Plain text on two streams: warnings go to `err`, everything else to `out`.
///
/// Write failures (a closed pipe, typically) are ignored.
pub struct TerminalOutput<O = io::Stdout, E = io::Stderr> {
    out: O,
    err: E,
}

impl TerminalOutput {
    pub fn new() -> Self {
        Self::with_writers(io::stdout(), io::stderr())
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Write, E: Write> TerminalOutput<O, E> {
    pub fn with_writers(out: O, err: E) -> Self {
        Self { out, err }
    }

    #[cfg(test)]
    pub fn into_writers(self) -> (O, E) {
        (self.out, self.err)
    }

    fn emit(&mut self, text: std::fmt::Arguments<'_>) {
        let _ = writeln!(self.out, "{text}");
    }
}

impl<O: Write, E: Write> Output for TerminalOutput<O, E> {
    fn section(&mut self, name: &str) {
        self.emit(format_args!("{name}:"));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.emit(format_args!("{key}: {value}"));
    }

    fn list_item(&mut self, text: &str) {
        self.emit(format_args!("  - {text}"));
    }

    fn warning(&mut self, msg: &str) {
        let _ = writeln!(self.err, "warning: {msg}");
    }

    fn divider(&mut self, label: &str) {
        self.emit(format_args!("── {label} ──"));
    }

    fn preformatted(&mut self, text: &str) {
        self.emit(format_args!("{text}"));
    }

    fn newline(&mut self) {
        let _ = writeln!(self.out);
    }
}

/// Render `report` into memory, returning what went to stdout and stderr.
#[cfg(test)]
pub fn render_to_strings(report: &dyn Report) -> (String, String) {
    let mut output = TerminalOutput::with_writers(Vec::new(), Vec::new());
    report.render(&mut output);
    let (out, err) = output.into_writers();
    (
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}
