use std::any::type_name;

use serde::{Deserialize, Serialize};
use serde_json::error::Category;

use crate::codec::{Codec, DynValue, ResponseType};
use crate::error::{Error, Result};

/// JSON codec backed by `serde_json`
///
/// Decode failures only name the failure category, so response contents
/// never end up in error messages. Use [`JsonCodec::detailed`] to get the
/// full parser message (line, column, offending token) while debugging.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec {
    detailed_errors: bool,
}

impl JsonCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Codec whose decode errors carry the full parser message
    pub fn detailed() -> Self {
        Self {
            detailed_errors: true,
        }
    }

    fn decode_error(&self, type_name: &'static str, err: serde_json::Error) -> Error {
        let reason = if self.detailed_errors {
            err.to_string()
        } else {
            match err.classify() {
                Category::Syntax => "malformed JSON",
                Category::Data => "JSON does not match the expected shape",
                Category::Eof => "unexpected end of input",
                Category::Io => "failed to read input",
            }
            .to_string()
        };

        Error::Deserialization { type_name, reason }
    }
}

impl Codec for JsonCodec {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        serde_json::to_string(value).map_err(|e| Error::Serialization(e.to_string()))
    }

    fn decode<T: for<'de> Deserialize<'de>>(&self, text: &str) -> Result<T> {
        serde_json::from_str(text).map_err(|e| self.decode_error(type_name::<T>(), e))
    }

    fn decode_dynamic(&self, text: &str, response_type: &ResponseType) -> Result<DynValue> {
        response_type
            .from_json(text)
            .map_err(|e| self.decode_error(response_type.name(), e))
    }
}
