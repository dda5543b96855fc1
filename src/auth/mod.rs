//! Request authentication
//!
//! Every private request carries the API key, a millisecond timestamp and an
//! HMAC-SHA256 signature over `timestamp + METHOD + path?query + body`.

mod credentials;
mod signer;

pub use credentials::{Credentials, API_KEY_ENV, API_SECRET_ENV, SUBACCOUNT_ENV};
pub use signer::{RequestSigner, DEFAULT_HEADER_PREFIX};
