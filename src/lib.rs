//! ftx-rest: Signed REST client for the FTX exchange API
//!
//! This library provides:
//! - HMAC-SHA256 request signing with optional sub-account scoping
//! - Response envelope decoding into typed errors
//! - A declarative endpoint table with one generic dispatcher
//! - Pluggable HTTP transport and request observers
//! - Logging and Prometheus metrics

pub mod auth;
pub mod cli;
pub mod config;
pub mod endpoints;
pub mod rest;
pub mod telemetry;

pub use auth::Credentials;
pub use endpoints::Params;
pub use rest::{RestClient, RestError};
