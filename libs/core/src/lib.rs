//! Courier Core - Serialization service and error taxonomy
//!
//! Provides the [`Codec`](codec::Codec) abstraction used to turn response
//! text into values, either through a static type parameter or through a
//! runtime [`ResponseType`](codec::ResponseType) descriptor.
//!
//! # Example
//!
//! ```
//! use courier_core::codec::{Codec, JsonCodec, ResponseType};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize, PartialEq)]
//! struct Echo { a: i32 }
//!
//! # fn example() -> courier_core::Result<()> {
//! let codec = JsonCodec::new();
//! let typed: Echo = codec.decode(r#"{"a":1}"#)?;
//!
//! let dynamic = codec.decode_dynamic(r#"{"a":1}"#, &ResponseType::of::<Echo>())?;
//! assert_eq!(dynamic.downcast_ref::<Echo>(), Some(&typed));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod codec;
pub mod error;

pub use error::{Error, Result};
