//! CLI interface for ftx-rest
//!
//! Provides subcommands for:
//! - `endpoints`: List the endpoint table
//! - `call`: Invoke an endpoint with the credentials from the environment
//! - `config`: Show the effective configuration

mod call;
mod endpoints;

pub use call::{parse_param, CallArgs};
pub use endpoints::{describe, EndpointsArgs};

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ftx-rest")]
#[command(about = "Signed REST client for the FTX exchange API")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available endpoints
    Endpoints(EndpointsArgs),
    /// Call an endpoint
    Call(CallArgs),
    /// Show configuration
    Config,
}
