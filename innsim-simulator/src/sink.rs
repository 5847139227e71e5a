//! Concrete output sinks.

use std::io::{self, Write};

use innsim_core::output::{OutputLine, OutputSink, Tone};

/// Writes each line to a `Write`, prefixed with a short marker for its tone.
pub struct ConsoleSink<W: Write> {
    writer: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn marker(tone: Tone) -> &'static str {
    match tone {
        Tone::Success => "[+] ",
        Tone::Failure => "[-] ",
        Tone::Informational => "[i] ",
        Tone::Neutral => "",
    }
}

impl<W: Write> OutputSink for ConsoleSink<W> {
    fn emit(&mut self, line: OutputLine) -> io::Result<()> {
        writeln!(self.writer, "{}{}", marker(line.tone), line.text)
    }
}

/// Forwards lines to `tracing`; failures are logged as warnings.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl OutputSink for TracingSink {
    fn emit(&mut self, line: OutputLine) -> io::Result<()> {
        match line.tone {
            Tone::Failure => tracing::warn!(tone = ?line.tone, "{}", line.text),
            _ => tracing::info!(tone = ?line.tone, "{}", line.text),
        }
        Ok(())
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl OutputSink for NullSink {
    fn emit(&mut self, _line: OutputLine) -> io::Result<()> {
        Ok(())
    }
}
