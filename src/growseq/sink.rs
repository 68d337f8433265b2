//! Line-oriented output targets
//!
//! The demonstrations never print directly. They hand finished lines to an
//! [`OutputSink`], so the binary can write to stdout while tests collect lines in a
//! [`MemorySink`].

use std::fmt::Display;
use std::io::{self, Write};

/// Anything that accepts lines of text
pub trait OutputSink {
    /// Write one line. `text` must not contain the trailing newline.
    fn line(&mut self, text: &str) -> io::Result<()>;

    /// Write `"{label}: {value}"`
    fn field(&mut self, label: &str, value: &dyn Display) -> io::Result<()> {
        self.line(&format!("{label}: {value}"))
    }
}

/// Writes each line, newline-terminated, to an [`io::Write`]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")
    }
}

/// Collects lines in memory
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All collected lines joined with `\n`, with a trailing newline when non-empty
    pub fn transcript(&self) -> String {
        let mut out = self.lines.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }
}

impl OutputSink for MemorySink {
    fn line(&mut self, text: &str) -> io::Result<()> {
        self.lines.push(text.to_string());
        Ok(())
    }
}
