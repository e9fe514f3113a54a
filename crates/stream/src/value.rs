//! Single-value decoding capability behind the framing layer.

use std::collections::BTreeMap;
use std::error::Error as StdError;

use serde_json::Value;

/// Flat field map produced for one array element.
///
/// Field values are kept in their textual form; order of fields carries no
/// meaning.
pub type Record = BTreeMap<String, String>;

/// External single-value decoder capability.
///
/// The framing layer hands over the exact text of one accumulated record or
/// one quoted scalar line; turning that text into a value is entirely this
/// collaborator's business. Implementations may reject shapes the importer
/// cannot use, such as nested structures.
pub trait ValueDecoder {
    type Error: StdError + Send + Sync + 'static;

    /// Decodes the text of one flat record into a field map.
    fn decode_record(&mut self, text: &str) -> Result<Record, Self::Error>;

    /// Decodes one quoted scalar line into its string contents.
    fn decode_scalar(&mut self, text: &str) -> Result<String, Self::Error>;
}

/// serde_json-backed [`ValueDecoder`].
///
/// Scalar fields take their JSON textual form (`1` becomes `"1"`, `null`
/// becomes `"null"`); string fields keep their contents. Nested arrays and
/// objects are flattened to their compact JSON text, since the framing
/// layer does not support nesting anyway.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonValueDecoder;

impl ValueDecoder for JsonValueDecoder {
    type Error = serde_json::Error;

    fn decode_record(&mut self, text: &str) -> Result<Record, Self::Error> {
        let fields: serde_json::Map<String, Value> = serde_json::from_str(text)?;
        Ok(fields
            .into_iter()
            .map(|(name, value)| (name, text_of(&value)))
            .collect())
    }

    fn decode_scalar(&mut self, text: &str) -> Result<String, Self::Error> {
        serde_json::from_str(text)
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
