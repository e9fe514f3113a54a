//! Framing encoder matching the decoder's accepted shapes.

use std::io::{self, Write};

use crate::value::Record;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Start,
    InArray,
    Done,
}

/// Writes scalars and records in the line-delimited framing format.
///
/// Records go out one per line with the array brackets alone on their own
/// lines; every record but the last carries the separating comma, so the
/// output is strict JSON and decodes back to the same sequence. A stream is
/// either one scalar or one array, never both.
pub struct StreamEncoder<W> {
    sink: W,
    state: State,
    pending: Option<String>,
}

impl<W: Write> StreamEncoder<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            state: State::Start,
            pending: None,
        }
    }

    /// Writes a single quoted scalar stream. Terminal.
    pub fn scalar(&mut self, text: &str) -> io::Result<()> {
        if self.state != State::Start {
            return Err(misuse("scalar written into an open array stream"));
        }
        let line = json_line(serde_json::to_string(text))?;
        writeln!(self.sink, "{line}")?;
        self.state = State::Done;
        self.sink.flush()
    }

    /// Appends one record to the array stream, opening it if needed.
    ///
    /// The record's line is held back until the next write decides whether
    /// it needs the separating comma.
    pub fn record(&mut self, record: &Record) -> io::Result<()> {
        match self.state {
            State::Start => {
                writeln!(self.sink, "[")?;
                self.state = State::InArray;
            }
            State::InArray => {}
            State::Done => return Err(misuse("record written after the stream ended")),
        }
        if let Some(pending) = self.pending.take() {
            writeln!(self.sink, "{pending},")?;
        }
        self.pending = Some(json_line(serde_json::to_string(record))?);
        Ok(())
    }

    /// Closes the stream, writing `[]` when nothing was appended. Terminal.
    pub fn finish(&mut self) -> io::Result<()> {
        match self.state {
            State::Start => writeln!(self.sink, "[]")?,
            State::InArray => {
                if let Some(pending) = self.pending.take() {
                    writeln!(self.sink, "{pending}")?;
                }
                writeln!(self.sink, "]")?;
            }
            State::Done => return Err(misuse("stream finished twice")),
        }
        self.state = State::Done;
        self.sink.flush()
    }

    /// Consumes the encoder, handing the sink back.
    pub fn into_inner(self) -> W {
        self.sink
    }
}

fn json_line(line: serde_json::Result<String>) -> io::Result<String> {
    line.map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}

fn misuse(message: &str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, message)
}
