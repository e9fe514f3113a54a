//! Framing decoder error type.

use std::error::Error as StdError;
use thiserror::Error;

/// Errors surfaced while pulling values out of a framed stream.
///
/// A correctly ended stream is not an error; the decoder reports it as the
/// `Ok(None)` end sentinel instead.
#[derive(Debug, Error)]
pub enum FramingError {
    /// The stream ended while an array or record was still open.
    #[error("unexpected end of stream while reading an array value")]
    TruncatedStream,
    /// A line matched none of the accepted stream shapes.
    #[error("line {line} does not match any accepted stream shape")]
    MalformedFraming { line: u64 },
    /// The value decoder rejected one accumulated record or scalar.
    ///
    /// This failure is scoped to a single record; the calling pipeline may
    /// drop the record and keep reading from a fresh decoder.
    #[error("could not decode value ending at line {line}: {text}")]
    ValueDecode {
        line: u64,
        text: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
    /// The underlying reader failed.
    #[error("stream read failed")]
    Io(#[from] std::io::Error),
}
