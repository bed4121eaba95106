use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use courier_core::codec::{DynValue, ResponseType};
use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::uri::{InvalidUri, Uri};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::error::{Error, Result};
use crate::transport::HttpClient;

pub mod json_post;

pub use self::json_post::{JsonPostRequest, JsonPostRequestBuilder, JSON_CONTENT_TYPE};

/// Extra headers attached to a request, header name to header value
pub type Headers = HashMap<String, String>;

/// Capability shared by every request kind
///
/// A request resolves its response either into a type known at compile time
/// ([`NetworkRequest::execute`]) or into a type described at runtime
/// ([`NetworkRequest::execute_dynamic`]). Given the same request and response
/// bytes, both produce structurally equal values.
#[async_trait::async_trait]
pub trait NetworkRequest: Send + Sync {
    /// Target address of the request
    fn address(&self) -> &str;

    /// Extra headers, if any were configured
    fn headers(&self) -> Option<&Headers>;

    /// Execute the request and decode the response into `T`
    async fn execute<T>(&self, cancel: Option<&CancellationToken>) -> Result<T>
    where
        T: for<'de> Deserialize<'de> + Send + 'static;

    /// Execute the request and decode the response into the described type
    async fn execute_dynamic(
        &self,
        response_type: &ResponseType,
        cancel: Option<&CancellationToken>,
    ) -> Result<DynValue>;
}

/// Address and headers of a request
///
/// Both are validated when the request executes, not when they are set, so a
/// target may be built empty and filled in later.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestTarget {
    address: String,
    headers: Option<Headers>,
}

impl RequestTarget {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            headers: None,
        }
    }

    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = Some(headers);
        self
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    pub fn headers(&self) -> Option<&Headers> {
        self.headers.as_ref()
    }

    /// Parse the address, which must be an absolute URI
    pub fn uri(&self) -> Result<Uri> {
        if self.address.trim().is_empty() {
            return Err(Error::configuration(
                "no address has been specified for the request",
            ));
        }

        let uri: Uri = self.address.parse().map_err(|e: InvalidUri| {
            Error::configuration(format!("invalid address `{}`: {}", self.address, e))
        })?;

        if uri.scheme().is_none() || uri.authority().is_none() {
            return Err(Error::configuration(format!(
                "address `{}` is not an absolute URI",
                self.address
            )));
        }

        Ok(uri)
    }

    /// Append every configured header onto `target`
    ///
    /// Entries are appended, never replaced: a name already present in
    /// `target` ends up with several values.
    pub fn apply_headers(&self, target: &mut HeaderMap) -> Result<()> {
        let Some(headers) = &self.headers else {
            return Ok(());
        };

        for (name, value) in headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                Error::configuration(format!("invalid header name `{}`: {}", name, e))
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                Error::configuration(format!("invalid value for header `{}`: {}", name, e))
            })?;
            target.append(name, value);
        }

        Ok(())
    }
}

/// Run `operation`, giving up with [`Error::Cancelled`] once `cancel` fires
///
/// A token that is already cancelled wins over an operation that is ready.
pub(crate) async fn cancellable<F, T>(cancel: Option<&CancellationToken>, operation: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let Some(token) = cancel else {
        return operation.await;
    };

    tokio::select! {
        biased;
        _ = token.cancelled() => Err(Error::Cancelled),
        result = operation => result,
    }
}

/// Perform a one-off JSON POST
///
/// Encodes `request` as the payload, sends it to `address` and decodes the
/// response.
pub async fn post_json<Req, Res>(
    client: Arc<dyn HttpClient>,
    address: impl Into<String>,
    request: &Req,
    cancel: Option<&CancellationToken>,
) -> Result<Res>
where
    Req: Serialize + ?Sized,
    Res: for<'de> Deserialize<'de> + Send + 'static,
{
    let mut post = JsonPostRequest::new(client, address);
    post.set_json(request)?;
    post.execute(cancel).await
}
