use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use courier_core::codec::{Codec, DynValue, JsonCodec, ResponseType};
use http::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use http::Method;
use serde::{Deserialize, Serialize};
use tokio::io::AsyncReadExt;
use tokio_util::sync::CancellationToken;

use crate::error::{Error, Result};
use crate::request::{cancellable, Headers, NetworkRequest, RequestTarget};
use crate::transport::{Completion, HttpClient, HttpRequest};

/// Content type of every JSON POST body
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// POST request with a JSON body and a JSON response
///
/// The transport client is shared with the caller. Dropping the request
/// leaves the client untouched.
pub struct JsonPostRequest<C = JsonCodec> {
    client: Arc<dyn HttpClient>,
    target: RequestTarget,
    payload: String,
    codec: C,
}

impl JsonPostRequest<JsonCodec> {
    /// Create a request with an empty payload and no extra headers
    pub fn new(client: Arc<dyn HttpClient>, address: impl Into<String>) -> Self {
        Self {
            client,
            target: RequestTarget::new(address),
            payload: String::new(),
            codec: JsonCodec::new(),
        }
    }

    /// Create a builder for configuring the request
    pub fn builder() -> JsonPostRequestBuilder {
        JsonPostRequestBuilder::new()
    }
}

impl<C: Codec> JsonPostRequest<C> {
    pub fn with_payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = payload.into();
        self
    }

    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.target = self.target.with_headers(headers);
        self
    }

    /// The JSON body that will be posted
    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn set_payload(&mut self, payload: impl Into<String>) {
        self.payload = payload.into();
    }

    /// Encode `value` with the request's codec and use it as the payload
    pub fn set_json<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.payload = self.codec.encode(value)?;
        Ok(())
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.target.set_address(address);
    }

    pub fn target(&self) -> &RequestTarget {
        &self.target
    }

    pub fn client(&self) -> &Arc<dyn HttpClient> {
        &self.client
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Build the outbound message from the current state
    fn message(&self) -> Result<HttpRequest> {
        let uri = self.target.uri()?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        self.target.apply_headers(&mut headers)?;

        Ok(HttpRequest {
            method: Method::POST,
            uri,
            headers,
            body: Bytes::from(self.payload.clone()),
        })
    }

    /// Perform the exchange and return the raw response text
    ///
    /// Control comes back from the transport as soon as the headers arrive,
    /// so a non-success status fails without the body ever being read. The
    /// cancellation token is observed during the send and the body read.
    pub async fn body(&self, cancel: Option<&CancellationToken>) -> Result<String> {
        let message = self.message()?;

        let response = cancellable(
            cancel,
            self.client.send(message, Completion::HeadersRead),
        )
        .await?;

        if !response.status.is_success() {
            return Err(Error::HttpStatus {
                status: response.status.as_u16(),
            });
        }

        let mut body = response.body;
        let mut bytes = Vec::new();
        cancellable(cancel, async {
            body.read_to_end(&mut bytes).await?;
            Ok::<(), Error>(())
        })
        .await?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[async_trait::async_trait]
impl<C: Codec> NetworkRequest for JsonPostRequest<C> {
    fn address(&self) -> &str {
        self.target.address()
    }

    fn headers(&self) -> Option<&Headers> {
        self.target.headers()
    }

    async fn execute<T>(&self, cancel: Option<&CancellationToken>) -> Result<T>
    where
        T: for<'de> Deserialize<'de> + Send + 'static,
    {
        let body = self.body(cancel).await?;
        self.codec.decode(&body)
    }

    async fn execute_dynamic(
        &self,
        response_type: &ResponseType,
        cancel: Option<&CancellationToken>,
    ) -> Result<DynValue> {
        let body = self.body(cancel).await?;
        self.codec.decode_dynamic(&body, response_type)
    }
}

impl<C: fmt::Debug> fmt::Debug for JsonPostRequest<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonPostRequest")
            .field("target", &self.target)
            .field("payload_len", &self.payload.len())
            .field("codec", &self.codec)
            .finish_non_exhaustive()
    }
}

/// Builder for configuring a [`JsonPostRequest`]
pub struct JsonPostRequestBuilder<C = JsonCodec> {
    client: Option<Arc<dyn HttpClient>>,
    address: String,
    payload: String,
    headers: Option<Headers>,
    codec: C,
}

impl Default for JsonPostRequestBuilder {
    fn default() -> Self {
        Self {
            client: None,
            address: String::new(),
            payload: String::new(),
            headers: None,
            codec: JsonCodec::new(),
        }
    }
}

impl JsonPostRequestBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Codec> JsonPostRequestBuilder<C> {
    /// Set the transport client the request will be sent through
    pub fn client(mut self, client: Arc<dyn HttpClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the address to post to
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Set the JSON payload
    pub fn payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = payload.into();
        self
    }

    /// Add a single header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(Headers::new)
            .insert(name.into(), value.into());
        self
    }

    /// Replace all headers
    pub fn headers(mut self, headers: Headers) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Use a different codec for encoding and decoding
    pub fn codec<D: Codec>(self, codec: D) -> JsonPostRequestBuilder<D> {
        JsonPostRequestBuilder {
            client: self.client,
            address: self.address,
            payload: self.payload,
            headers: self.headers,
            codec,
        }
    }

    /// Build the request
    ///
    /// Only the client is required here; the address is checked when the
    /// request executes.
    pub fn build(self) -> Result<JsonPostRequest<C>> {
        let client = self.client.ok_or_else(|| {
            Error::configuration("no transport client has been specified for the request")
        })?;

        let mut target = RequestTarget::new(self.address);
        if let Some(headers) = self.headers {
            target = target.with_headers(headers);
        }

        Ok(JsonPostRequest {
            client,
            target,
            payload: self.payload,
            codec: self.codec,
        })
    }
}
