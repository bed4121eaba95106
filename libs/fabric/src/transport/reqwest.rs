use std::io;

use futures::TryStreamExt;
use tokio_util::io::StreamReader;

use crate::error::{Error, Result};
use crate::transport::{Completion, HttpClient, HttpRequest, HttpResponse, ResponseBody};

/// [`HttpClient`] backed by a `reqwest` connection pool
///
/// Cloning is cheap and clones share the pool.
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    inner: ::reqwest::Client,
}

impl ReqwestClient {
    /// Create a client with reqwest's default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already configured reqwest client
    pub fn from_client(inner: ::reqwest::Client) -> Self {
        Self { inner }
    }
}

#[async_trait::async_trait]
impl HttpClient for ReqwestClient {
    async fn send(&self, request: HttpRequest, completion: Completion) -> Result<HttpResponse> {
        let response = self
            .inner
            .request(request.method, request.uri.to_string())
            .headers(request.headers)
            .body(request.body)
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        let status = response.status();
        let headers = response.headers().clone();

        let body: ResponseBody = match completion {
            Completion::HeadersRead => {
                let stream = response.bytes_stream().map_err(io::Error::other);
                Box::pin(StreamReader::new(stream))
            }
            Completion::ContentRead => {
                let bytes = response
                    .bytes()
                    .await
                    .map_err(|e| Error::transport(e.to_string()))?;
                Box::pin(io::Cursor::new(bytes))
            }
        };

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
