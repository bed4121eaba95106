use std::fmt;
use std::pin::Pin;

use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode, Uri};
use tokio::io::AsyncRead;

use crate::error::Result;

#[cfg(feature = "reqwest")]
pub mod reqwest;

#[cfg(feature = "reqwest")]
pub use self::reqwest::ReqwestClient;

/// Readable response body
pub type ResponseBody = Pin<Box<dyn AsyncRead + Send>>;

/// When [`HttpClient::send`] should hand the response back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Completion {
    /// As soon as the status line and headers are available, body unread
    #[default]
    HeadersRead,
    /// After the whole body has been received
    ContentRead,
}

/// Outbound message handed to an [`HttpClient`]
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Response returned by an [`HttpClient`]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: ResponseBody,
}

impl HttpResponse {
    /// Response with a body that is already fully in memory
    pub fn buffered(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: Box::pin(std::io::Cursor::new(body.into())),
        }
    }
}

impl fmt::Debug for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpResponse")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

/// Transport trait for exchanging one HTTP message
///
/// A client is shared by every request that uses it and may serve several
/// exchanges concurrently. Pooling, retries and redirects are its business.
/// Dropping the returned future aborts the exchange.
#[async_trait::async_trait]
pub trait HttpClient: Send + Sync {
    /// Send a request and return the response at the requested completion point
    async fn send(&self, request: HttpRequest, completion: Completion) -> Result<HttpResponse>;
}
