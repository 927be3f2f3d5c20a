use std::io::Write;

use crate::error::ViewError;

/// Output capture primitive used while a view renders.
///
/// Capture levels form a stack: `start_capture` pushes a level and every
/// subsequent `write` lands in the innermost one until it is stopped or
/// discarded. Levels never flush implicitly.
pub trait Capturer {
    /// Push a new capture level.
    fn start_capture(&mut self);

    /// Pop the innermost level and return everything written to it.
    fn stop_capture_and_retrieve(&mut self) -> Result<String, ViewError>;

    /// Pop the innermost level and drop its contents.
    fn discard_capture(&mut self) -> Result<(), ViewError>;

    /// Append rendered text to the innermost level, or to the underlying
    /// output when no level is open.
    fn write(&mut self, text: &str) -> Result<(), ViewError>;

    /// Number of open capture levels.
    fn level(&self) -> usize;
}

/// A stack of in-memory capture levels on top of an `io::Write` sink.
#[derive(Debug)]
pub struct OutputBuffer<W: Write> {
    levels: Vec<String>,
    sink: W,
}

impl<W: Write> OutputBuffer<W> {
    pub fn new(sink: W) -> Self {
        OutputBuffer {
            levels: Vec::new(),
            sink,
        }
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    /// Consume the buffer and return the sink. Open levels are dropped.
    pub fn into_inner(self) -> W {
        if !self.levels.is_empty() {
            tracing::warn!(levels = self.levels.len(), "dropping unclosed capture levels");
        }
        self.sink
    }
}

impl<W: Write> Capturer for OutputBuffer<W> {
    fn start_capture(&mut self) {
        self.levels.push(String::new());
        tracing::trace!(depth = self.levels.len(), "capture started");
    }

    fn stop_capture_and_retrieve(&mut self) -> Result<String, ViewError> {
        let text = self.levels.pop().ok_or(ViewError::NoActiveCapture)?;
        tracing::trace!(depth = self.levels.len() + 1, bytes = text.len(), "capture stopped");
        Ok(text)
    }

    fn discard_capture(&mut self) -> Result<(), ViewError> {
        let text = self.levels.pop().ok_or(ViewError::NoActiveCapture)?;
        tracing::trace!(depth = self.levels.len() + 1, bytes = text.len(), "capture discarded");
        Ok(())
    }

    fn write(&mut self, text: &str) -> Result<(), ViewError> {
        match self.levels.last_mut() {
            Some(level) => level.push_str(text),
            None => self.sink.write_all(text.as_bytes())?,
        }
        Ok(())
    }

    fn level(&self) -> usize {
        self.levels.len()
    }
}
