//! Canned transports for service tests.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;

use rielbank_api_client::{
    ApiError, ConnectionReason, Endpoint, HttpBucket, HttpMethod, JsonMap, Transport,
};

/// A [`Transport`] that serves canned bodies by fixture id.
///
/// Unmapped endpoints answer 404 like the real fixture host; endpoints
/// registered through [`failing`](Self::failing) time out.
#[derive(Default)]
pub(crate) struct StubTransport {
    bodies: HashMap<String, Vec<u8>>,
    failing: HashSet<String>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `endpoint` to a success envelope wrapping `result_json`.
    pub fn with_success(mut self, endpoint: Endpoint, result_json: &str) -> Self {
        let body =
            format!(r#"{{"msgCode":"0000","msgContent":"OK","result":{result_json}}}"#);
        self.bodies.insert(endpoint.api_id(), body.into_bytes());
        self
    }

    /// Maps `endpoint` to a raw body, envelope included.
    pub fn with_body(mut self, endpoint: Endpoint, body: &str) -> Self {
        self.bodies
            .insert(endpoint.api_id(), body.as_bytes().to_vec());
        self
    }

    /// Makes `endpoint` fail with a timeout.
    pub fn failing(mut self, endpoint: Endpoint) -> Self {
        self.failing.insert(endpoint.api_id());
        self
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn fetch_raw(
        &self,
        endpoint: Endpoint,
        _method: HttpMethod,
        _body: Option<&JsonMap>,
    ) -> Result<Vec<u8>, ApiError> {
        let api_id = endpoint.api_id();
        if self.failing.contains(&api_id) {
            return Err(ApiError::ConnectionFailed(ConnectionReason::TimedOut));
        }
        self.bodies.get(&api_id).cloned().ok_or_else(|| {
            ApiError::ConnectionFailed(ConnectionReason::HttpCode(HttpBucket::Client(404)))
        })
    }
}
