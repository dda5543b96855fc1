//! Integration tests

mod client_test;
mod config_test;
mod endpoints_test;
mod support;
