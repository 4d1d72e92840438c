use crate::domain::record::Record;
use crate::error::Result;
use std::io::Write;

/// Writes records as pretty-printed JSON documents, one after another.
pub struct RecordWriter<W: Write> {
    writer: W,
}

impl<W: Write> RecordWriter<W> {
    /// Creates a new `RecordWriter` over any `Write` sink (e.g. stdout).
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Writes one record followed by a newline and flushes the sink.
    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, record)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
