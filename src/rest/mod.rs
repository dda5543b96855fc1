//! Signed REST client
//!
//! Requests are described as [`RequestSpec`]s, signed by
//! [`RequestSigner`](crate::auth::RequestSigner), sent through an
//! [`HttpTransport`] and unwrapped from the exchange's
//! `{"success": ..., "result" | "error": ...}` envelope.

mod client;
mod envelope;
mod error;
mod observer;
mod transport;
pub(crate) mod types;

pub use client::RestClient;
pub use envelope::{unwrap_response, Envelope};
pub use error::{RestError, Result, TransportError};
pub use observer::{FanoutObserver, NoopObserver, RequestEvent, RequestObserver, TracingObserver};
pub use transport::{HttpTransport, ReqwestTransport};
pub use types::{HttpMethod, RawResponse, RequestSpec, SignedRequest};
