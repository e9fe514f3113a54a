//! Incremental decoder for array-shaped text streams.

use std::io::BufRead;

use crate::error::FramingError;
use crate::value::{Record, ValueDecoder};

/// One logical value pulled out of a framed stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decoded {
    /// The stream held no content at all.
    Empty,
    /// The stream held a single quoted value.
    Scalar(String),
    /// One element of the stream's array.
    Record(Record),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Start,
    InArray,
    Done,
}

/// Incremental reader that yields one [`Decoded`] value per call without
/// buffering the whole stream.
///
/// The accepted input is line-delimited: nothing at all, a single quoted
/// scalar, or a flat array with `[` and `]` alone on their own lines and
/// each record's text ending in `}` or `},` on the line that completes it.
/// Parsing of one accumulated record or scalar is delegated to the injected
/// [`ValueDecoder`].
///
/// The decoder owns its cursor: one instance serves one stream and one
/// logical caller. It performs no retries and is not resumable after an
/// error.
pub struct StreamDecoder<R, V> {
    reader: R,
    values: V,
    state: State,
    line: u64,
    buffer: String,
}

impl<R: BufRead, V: ValueDecoder> StreamDecoder<R, V> {
    pub fn new(reader: R, values: V) -> Self {
        Self {
            reader,
            values,
            state: State::Start,
            line: 0,
            buffer: String::new(),
        }
    }

    /// Number of lines consumed so far.
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Pulls the next value out of the stream.
    ///
    /// Returns `Ok(None)` once the stream has correctly ended; every later
    /// call returns it again. A stream that ends inside an open array is
    /// [`FramingError::TruncatedStream`], never the end sentinel.
    pub fn read(&mut self) -> Result<Option<Decoded>, FramingError> {
        if self.state == State::Done {
            return Ok(None);
        }
        let mut raw = String::new();
        loop {
            raw.clear();
            if self.reader.read_line(&mut raw)? == 0 {
                return self.end_of_stream();
            }
            self.line += 1;
            let line = raw.trim_end_matches(['\n', '\r']);

            if self.state == State::Start {
                match self.start_line(line)? {
                    Some(value) => return Ok(Some(value)),
                    // Entered array mode; the next line starts a record.
                    None => continue,
                }
            }

            if line == "]" {
                if !self.buffer.is_empty() {
                    return Err(FramingError::TruncatedStream);
                }
                self.state = State::Done;
                return Ok(None);
            }

            self.buffer.push_str(line.trim());
            if let Some(text) = self.take_complete_record() {
                let record = self.decode_record(&text)?;
                return Ok(Some(Decoded::Record(record)));
            }
        }
    }

    fn start_line(&mut self, line: &str) -> Result<Option<Decoded>, FramingError> {
        if line.starts_with('"') && line.ends_with('"') {
            self.state = State::Done;
            let scalar = self.decode_scalar(line)?;
            return Ok(Some(Decoded::Scalar(scalar)));
        }
        if line == "[]" {
            self.state = State::Done;
            return Ok(Some(Decoded::Empty));
        }
        if line == "[" {
            self.state = State::InArray;
            return Ok(None);
        }
        Err(FramingError::MalformedFraming { line: self.line })
    }

    fn end_of_stream(&mut self) -> Result<Option<Decoded>, FramingError> {
        match self.state {
            // An empty stream still yields one value before the sentinel.
            State::Start => {
                self.state = State::Done;
                Ok(Some(Decoded::Empty))
            }
            State::InArray => Err(FramingError::TruncatedStream),
            State::Done => Ok(None),
        }
    }

    /// Takes the buffer's contents when its trailing characters complete a
    /// record, stripping the separating comma.
    fn take_complete_record(&mut self) -> Option<String> {
        let end = if self.buffer.len() > 1 && self.buffer.ends_with('}') {
            self.buffer.len()
        } else if self.buffer.len() > 2 && self.buffer.ends_with("},") {
            self.buffer.len() - 1
        } else {
            return None;
        };
        let text = self.buffer[..end].to_owned();
        self.buffer.clear();
        Some(text)
    }

    fn decode_record(&mut self, text: &str) -> Result<Record, FramingError> {
        self.values
            .decode_record(text)
            .map_err(|source| self.value_error(text, source))
    }

    fn decode_scalar(&mut self, text: &str) -> Result<String, FramingError> {
        self.values
            .decode_scalar(text)
            .map_err(|source| self.value_error(text, source))
    }

    fn value_error(&self, text: &str, source: V::Error) -> FramingError {
        FramingError::ValueDecode {
            line: self.line,
            text: text.to_owned(),
            source: Box::new(source),
        }
    }
}
