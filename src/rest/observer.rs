//! Request observation hooks
//!
//! The client reports every call to a [`RequestObserver`] supplied at
//! construction. Observers never see credentials or signatures.

use super::error::RestError;
use super::types::HttpMethod;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// Outcome of one client call
#[derive(Debug)]
pub struct RequestEvent<'a> {
    /// Unique id of this call
    pub request_id: Uuid,
    pub method: HttpMethod,
    /// Relative path, without the query string
    pub path: &'a str,
    /// HTTP status, if a response was received
    pub status: Option<u16>,
    pub elapsed: Duration,
    pub outcome: Result<&'a Value, &'a RestError>,
}

impl RequestEvent<'_> {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// `ok` or the error kind
    pub fn outcome_label(&self) -> &'static str {
        match self.outcome {
            Ok(_) => "ok",
            Err(e) => e.kind(),
        }
    }
}

/// Receives one event per completed call
pub trait RequestObserver: Send + Sync {
    fn on_response(&self, event: &RequestEvent<'_>);
}

/// Discards all events
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RequestObserver for NoopObserver {
    fn on_response(&self, _event: &RequestEvent<'_>) {}
}

/// Logs every call through `tracing`
///
/// Successful calls log at debug, failures at warn. Result bodies are only
/// logged at trace level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl RequestObserver for TracingObserver {
    fn on_response(&self, event: &RequestEvent<'_>) {
        let elapsed_ms = event.elapsed.as_millis() as u64;
        match event.outcome {
            Ok(result) => {
                tracing::debug!(
                    request_id = %event.request_id,
                    method = %event.method,
                    path = event.path,
                    status = ?event.status,
                    elapsed_ms,
                    "Request succeeded"
                );
                tracing::trace!(request_id = %event.request_id, %result, "Response result");
            }
            Err(error) => {
                tracing::warn!(
                    request_id = %event.request_id,
                    method = %event.method,
                    path = event.path,
                    status = ?event.status,
                    elapsed_ms,
                    kind = error.kind(),
                    error = %error,
                    "Request failed"
                );
            }
        }
    }
}

/// Forwards events to several observers in order
#[derive(Clone, Default)]
pub struct FanoutObserver {
    observers: Vec<Arc<dyn RequestObserver>>,
}

impl FanoutObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, observer: Arc<dyn RequestObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl RequestObserver for FanoutObserver {
    fn on_response(&self, event: &RequestEvent<'_>) {
        for observer in &self.observers {
            observer.on_response(event);
        }
    }
}
