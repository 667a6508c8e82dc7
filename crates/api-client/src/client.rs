//! The HTTP fetch client.
//!
//! One call does one request: build, send under the configured timeouts,
//! classify the transport outcome, then run the body through the envelope
//! decode pipeline. There are no retries at this layer and no shared state
//! between calls; cancellation is dropping the returned future, which
//! aborts the in-flight request and guarantees no outcome is delivered
//! afterwards.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::endpoints::Endpoint;
use crate::envelope::{ApiEnvelope, ApiErrorBody};
use crate::errors::{ApiError, ConnectionReason, HttpBucket};

/// Where the demo fixtures are published.
pub const DEFAULT_BASE_URL: &str = "https://willywu0201.github.io/data";

/// A JSON object request body, keyed by field name.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// HTTP methods the API uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Construction-time configuration for [`ApiClient`].
///
/// There is deliberately no process-wide client; construct one of these and
/// pass the resulting client to the services that need it.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub base_url: String,
    /// Timeout for establishing the connection.
    pub connect_timeout: Duration,
    /// Timeout for the whole request, body included.
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(60),
            request_timeout: Duration::from_secs(60),
        }
    }
}

/// Seam between services and the network.
///
/// [`ApiClient`] is the production implementation; tests substitute canned
/// transports. Implementations perform transport-level validation only and
/// hand back the raw body bytes; envelope semantics live in
/// [`fetch_envelope`] so every transport shares one decode pipeline.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetches the raw response body for `endpoint`.
    ///
    /// Returns an error for anything short of an HTTP 2xx with a readable
    /// body. Dropping the returned future cancels the request; the future
    /// resolves at most once.
    async fn fetch_raw(
        &self,
        endpoint: Endpoint,
        method: HttpMethod,
        body: Option<&JsonMap>,
    ) -> Result<Vec<u8>, ApiError>;
}

/// Fetches `endpoint` through `transport` and decodes the envelope.
///
/// This is the only success path for a typed fetch: transport success plus
/// an envelope whose message code is the success sentinel.
pub async fn fetch_envelope<C, T>(
    transport: &C,
    endpoint: Endpoint,
    method: HttpMethod,
    body: Option<&JsonMap>,
) -> Result<ApiEnvelope<T>, ApiError>
where
    C: Transport + ?Sized,
    T: DeserializeOwned,
{
    let bytes = transport.fetch_raw(endpoint, method, body).await?;
    decode_envelope(&bytes)
}

/// Runs the envelope decode pipeline over a raw response body.
///
/// - Envelope decodes with the success code: the envelope is returned.
/// - Envelope decodes with any other code: the same bytes are re-read as an
///   [`ApiErrorBody`] and surfaced as [`ApiError::Api`]; if even that fails
///   the structural error wins as [`ApiError::DecodeFailed`].
/// - Envelope does not decode at all: fall back to the error payload shape,
///   and surface it as [`ApiError::Api`] when it carries a non-success code.
pub fn decode_envelope<T: DeserializeOwned>(bytes: &[u8]) -> Result<ApiEnvelope<T>, ApiError> {
    match serde_json::from_slice::<ApiEnvelope<T>>(bytes) {
        Ok(envelope) if envelope.is_success() => Ok(envelope),
        Ok(envelope) => {
            log::debug!(
                "non-success message code {}, re-reading body as error payload",
                envelope.msg_code
            );
            match serde_json::from_slice::<ApiErrorBody>(bytes) {
                Ok(body) => Err(ApiError::Api(body)),
                Err(err) => Err(ApiError::DecodeFailed(err)),
            }
        }
        Err(err) => match serde_json::from_slice::<ApiErrorBody>(bytes) {
            Ok(body) if body.msg_code != crate::envelope::SUCCESS_CODE => {
                log::debug!(
                    "envelope undecodable, error payload fallback carried {}",
                    body.msg_code
                );
                Err(ApiError::Api(body))
            }
            _ => Err(ApiError::DecodeFailed(err)),
        },
    }
}

/// HTTP implementation of [`Transport`] over a pooled [`reqwest::Client`].
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client from the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|err| ApiError::ConnectionFailed(ConnectionReason::Other(err)))?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Typed fetch: transport plus envelope decode in one call.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        method: HttpMethod,
        body: Option<&JsonMap>,
    ) -> Result<ApiEnvelope<T>, ApiError> {
        fetch_envelope(self, endpoint, method, body).await
    }

    /// Typed GET without a body, the common case for the fixture endpoints.
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
    ) -> Result<ApiEnvelope<T>, ApiError> {
        self.fetch(endpoint, HttpMethod::Get, None).await
    }
}

#[async_trait]
impl Transport for ApiClient {
    async fn fetch_raw(
        &self,
        endpoint: Endpoint,
        method: HttpMethod,
        body: Option<&JsonMap>,
    ) -> Result<Vec<u8>, ApiError> {
        let url = endpoint.url(&self.base_url);
        log::debug!("{:?} {}", method, url);

        let mut request = match method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        }
        .header(ACCEPT, "application/json")
        .header(CONTENT_TYPE, "application/json;charset=utf-8");

        if let Some(body) = body {
            let encoded = serde_json::to_vec(body).map_err(ApiError::EncodingFailed)?;
            request = request.body(encoded);
        }

        let response = request.send().await.map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::ConnectionFailed(ConnectionReason::HttpCode(
                HttpBucket::from_status(status.as_u16()),
            )));
        }

        let bytes = response.bytes().await.map_err(classify_transport_error)?;
        Ok(bytes.to_vec())
    }
}

/// Maps a transport-level [`reqwest::Error`] onto a [`ConnectionReason`].
fn classify_transport_error(err: reqwest::Error) -> ApiError {
    let reason = if err.is_timeout() {
        ConnectionReason::TimedOut
    } else if err.is_connect() {
        ConnectionReason::NotConnectedToInternet
    } else {
        ConnectionReason::Other(err)
    };
    ApiError::ConnectionFailed(reason)
}
