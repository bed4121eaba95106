//! Courier Fabric - Outbound request layer
//!
//! Provides the transport boundary ([`HttpClient`]) and request kinds built on
//! top of it. Requests resolve their response through a
//! [`Codec`](courier_core::codec::Codec), either into a static type or into a
//! type described at runtime.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use courier_core::codec::ResponseType;
//! use courier_fabric::{HttpClient, JsonPostRequest, NetworkRequest};
//! use serde::Deserialize;
//! use tokio_util::sync::CancellationToken;
//!
//! #[derive(Deserialize)]
//! struct Echo { a: i32 }
//!
//! # async fn example(client: Arc<dyn HttpClient>) -> courier_fabric::Result<()> {
//! let request = JsonPostRequest::new(client, "https://api.example.test/echo")
//!     .with_payload(r#"{"a":1}"#);
//!
//! // Statically typed
//! let echo: Echo = request.execute(None).await?;
//!
//! // Runtime typed, with a cancellation path
//! let cancel = CancellationToken::new();
//! let value = request
//!     .execute_dynamic(&ResponseType::of::<Echo>(), Some(&cancel))
//!     .await?;
//! let echo = value.downcast::<Echo>().ok();
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod request;
pub mod transport;

// Re-exports for convenience
pub use error::{Error, Result};
pub use request::{post_json, JsonPostRequest, NetworkRequest, RequestTarget};
pub use transport::{Completion, HttpClient, HttpRequest, HttpResponse};
