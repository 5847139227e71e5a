//! Tagged output lines and the sink abstraction the simulation writes to.
//!
//! The core never reads back from a sink; sinks are append-only.

use std::fmt;
use std::io;

use serde::Serialize;

/// Semantic tag attached to every output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Failure,
    Informational,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputLine {
    pub tone: Tone,
    pub text: String,
}

impl OutputLine {
    pub fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            tone,
            text: text.into(),
        }
    }

    pub fn neutral(text: impl Into<String>) -> Self {
        Self::new(Tone::Neutral, text)
    }
}

impl fmt::Display for OutputLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Ordered, append-only destination for output lines.
pub trait OutputSink {
    fn emit(&mut self, line: OutputLine) -> io::Result<()>;
}

impl OutputSink for Vec<OutputLine> {
    fn emit(&mut self, line: OutputLine) -> io::Result<()> {
        self.push(line);
        Ok(())
    }
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn emit(&mut self, line: OutputLine) -> io::Result<()> {
        (**self).emit(line)
    }
}
