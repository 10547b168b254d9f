use std::io::Write;

use super::ReceiverError;

/// A receiver that reports each call it gets as text
///
/// Each operation writes a short description of its arguments to the sink
/// `W`, e.g. `long value '39'`. Point it at standard output to watch a queue
/// drain, or at a `Vec<u8>` to inspect what ran.
pub struct TextReceiver<W: Write> {
    sink: W,
    invocation_count: usize,
}

impl<W: Write> TextReceiver<W> {
    /// Create a receiver that writes to `sink`
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            invocation_count: 0,
        }
    }

    /// Report a single integral value
    pub fn exec_long(&mut self, value: i64) -> Result<(), ReceiverError> {
        self.begin("long");
        writeln!(self.sink, "long value '{value}'")?;
        Ok(())
    }

    /// Report a single owned string
    pub fn exec_string(&mut self, value: String) -> Result<(), ReceiverError> {
        self.begin("string");
        writeln!(self.sink, "string value '{value}'")?;
        Ok(())
    }

    /// Report a single string literal
    pub fn exec_literal(&mut self, value: &'static str) -> Result<(), ReceiverError> {
        self.begin("literal");
        writeln!(self.sink, "string literal '{value}'")?;
        Ok(())
    }

    /// Report four values of different kinds in one call
    pub fn exec_multiple(
        &mut self,
        number: i64,
        text: String,
        owned_text: Box<str>,
        literal: &'static str,
    ) -> Result<(), ReceiverError> {
        self.begin("multiple");
        writeln!(self.sink, "command accepting multiple arguments:")?;
        writeln!(self.sink, "\tlong value '{number}'")?;
        writeln!(self.sink, "\tstring value '{text}'")?;
        writeln!(self.sink, "\towned string value '{owned_text}'")?;
        writeln!(self.sink, "\tstring literal '{literal}'")?;
        Ok(())
    }

    /// The number of operations called so far
    pub fn invocation_count(&self) -> usize {
        self.invocation_count
    }

    /// The sink the receiver writes to
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Give back the sink
    pub fn into_inner(self) -> W {
        self.sink
    }

    fn begin(&mut self, operation: &'static str) {
        self.invocation_count += 1;
        tracing::debug!(operation, invocation = self.invocation_count, "receiver invoked");
    }
}
