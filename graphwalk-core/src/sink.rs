//! Line-oriented output for the printing queries.

use std::io::{self, Write};

use crate::error::GraphwalkResult;

/// Destination for emitted values, one per line.
pub trait LineSink {
    fn emit_line(&mut self, line: &str) -> GraphwalkResult<()>;
}

/// Collects lines in memory.
impl LineSink for Vec<String> {
    fn emit_line(&mut self, line: &str) -> GraphwalkResult<()> {
        self.push(line.to_string());
        Ok(())
    }
}

/// Writes each line, newline-terminated, to an [`io::Write`].
#[derive(Debug)]
pub struct WriteSink<W: Write> {
    writer: W,
}

impl<W: Write> WriteSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriteSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> LineSink for WriteSink<W> {
    fn emit_line(&mut self, line: &str) -> GraphwalkResult<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }
}
