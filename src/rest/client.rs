//! Signed REST client

use super::envelope::unwrap_response;
use super::error::{RestError, Result, TransportError};
use super::observer::{RequestEvent, RequestObserver, TracingObserver};
use super::transport::{HttpTransport, ReqwestTransport};
use super::types::{RawResponse, RequestSpec};
use crate::auth::{Credentials, RequestSigner};
use crate::config::ClientConfig;
use crate::endpoints::{self, EndpointDescriptor, Params};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Exchange REST client
///
/// Every call signs the request with the configured credentials, sends it
/// through the transport under a timeout and unwraps the response envelope.
/// The client is cheap to share behind an `Arc`; calls hold no locks.
pub struct RestClient {
    signer: RequestSigner,
    transport: Arc<dyn HttpTransport>,
    observer: Arc<dyn RequestObserver>,
    timeout: Duration,
}

impl RestClient {
    /// Create a client backed by a pooled `reqwest` transport
    pub fn new(config: &ClientConfig, credentials: Credentials) -> Result<Self> {
        let transport = ReqwestTransport::new(config.timeout())?;
        Self::with_transport(config, credentials, Arc::new(transport))
    }

    /// Create a client with a custom transport
    pub fn with_transport(
        config: &ClientConfig,
        credentials: Credentials,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self> {
        if config.timeout_secs == 0 {
            return Err(RestError::Configuration(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }

        let signer = RequestSigner::new(
            Arc::new(credentials),
            &config.base_url,
            config.header_prefix.clone(),
        )?;

        Ok(Self {
            signer,
            transport,
            observer: Arc::new(TracingObserver),
            timeout: config.timeout(),
        })
    }

    /// Replace the default [`TracingObserver`]
    pub fn with_observer(mut self, observer: Arc<dyn RequestObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Override the per-call timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn signer(&self) -> &RequestSigner {
        &self.signer
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Invoke a named endpoint from the endpoint table
    pub async fn call(&self, name: &str, params: &Params) -> Result<Value> {
        let endpoint = endpoints::find(name)
            .ok_or_else(|| RestError::InvalidRequest(format!("unknown endpoint '{name}'")))?;
        self.call_endpoint(endpoint, params).await
    }

    /// Invoke an endpoint descriptor
    pub async fn call_endpoint(
        &self,
        endpoint: &EndpointDescriptor,
        params: &Params,
    ) -> Result<Value> {
        let spec = endpoint.build_request(params)?;
        self.request(&spec).await
    }

    /// Invoke a named endpoint and deserialize its result
    pub async fn call_as<T: DeserializeOwned>(&self, name: &str, params: &Params) -> Result<T> {
        let result = self.call(name, params).await?;
        serde_json::from_value(result).map_err(|e| RestError::Decode(format!("{name}: {e}")))
    }

    pub async fn get(&self, path: &str, query: Map<String, Value>) -> Result<Value> {
        let spec = RequestSpec {
            query,
            ..RequestSpec::get(path)
        };
        self.request(&spec).await
    }

    pub async fn post(&self, path: &str, body: Map<String, Value>) -> Result<Value> {
        self.request(&RequestSpec::post(path).with_body(body)).await
    }

    pub async fn delete(&self, path: &str, body: Option<Map<String, Value>>) -> Result<Value> {
        let spec = match body {
            Some(body) => RequestSpec::delete(path).with_body(body),
            None => RequestSpec::delete(path),
        };
        self.request(&spec).await
    }

    /// Sign, send and unwrap an arbitrary request
    ///
    /// The observer sees exactly one event for every call that reaches this
    /// point, whatever its outcome.
    pub async fn request(&self, spec: &RequestSpec) -> Result<Value> {
        let request_id = Uuid::new_v4();
        let started = Instant::now();

        let (status, outcome) = match self.exchange(spec).await {
            Ok(response) => (
                Some(response.status),
                unwrap_response(response.status, &response.body),
            ),
            Err(e) => (e.status(), Err(e)),
        };

        self.observer.on_response(&RequestEvent {
            request_id,
            method: spec.method,
            path: &spec.path,
            status,
            elapsed: started.elapsed(),
            outcome: outcome.as_ref(),
        });

        outcome
    }

    async fn exchange(&self, spec: &RequestSpec) -> Result<RawResponse> {
        let signed = self.signer.sign(spec)?;

        let response = tokio::time::timeout(self.timeout, self.transport.send(&signed))
            .await
            .map_err(|_| TransportError::Timeout(self.timeout))??;

        Ok(response)
    }
}
