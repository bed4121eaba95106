use serde::{Deserialize, Serialize};

use crate::error::Result;

pub mod json;
pub mod response_type;

pub use self::json::JsonCodec;
pub use self::response_type::{DynValue, ResponseType};

/// Codec trait for turning values into wire text and back
///
/// Decoding is addressed either by a static type parameter ([`Codec::decode`])
/// or by a runtime descriptor ([`Codec::decode_dynamic`]). Both must produce
/// structurally equal values for the same input.
pub trait Codec: Send + Sync {
    /// Encode a value into text
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<String>;

    /// Decode text into a value
    fn decode<T: for<'de> Deserialize<'de>>(&self, text: &str) -> Result<T>;

    /// Decode text into the type described by `response_type`
    fn decode_dynamic(&self, text: &str, response_type: &ResponseType) -> Result<DynValue>;
}
