//! Line-delimited framing codec for array-shaped JSON text streams.
//!
//! An exported dump file holds nothing, a single quoted scalar, or a flat
//! array of single-level records. [`StreamDecoder`] pulls one value at a
//! time out of such a stream without reading the whole document into
//! memory; [`StreamEncoder`] writes the same shapes back out. Parsing of a
//! single accumulated value sits behind the [`ValueDecoder`] capability,
//! with [`JsonValueDecoder`] as the bundled serde_json implementation.

mod decoder;
mod encoder;
mod error;
mod value;

pub use decoder::{Decoded, StreamDecoder};
pub use encoder::StreamEncoder;
pub use error::FramingError;
pub use value::{JsonValueDecoder, Record, ValueDecoder};
