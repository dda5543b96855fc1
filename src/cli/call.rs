//! Call command implementation

use crate::auth::Credentials;
use crate::config::ClientConfig;
use crate::endpoints::Params;
use crate::rest::{FanoutObserver, RestClient, TracingObserver};
use crate::telemetry::MetricsObserver;
use clap::Args;
use serde_json::Value;
use std::sync::Arc;

#[derive(Args, Debug)]
pub struct CallArgs {
    /// Endpoint name, e.g. `get_orderbook`
    pub name: String,

    /// Parameter as key=value; values are parsed as JSON, falling back to a string
    #[arg(short, long = "param", value_parser = parse_param)]
    pub params: Vec<(String, Value)>,
}

impl CallArgs {
    pub async fn execute(&self, config: &ClientConfig) -> anyhow::Result<()> {
        let credentials = Credentials::from_env()?;
        let observer = FanoutObserver::new()
            .with(Arc::new(TracingObserver))
            .with(Arc::new(MetricsObserver));
        let client = RestClient::new(config, credentials)?.with_observer(Arc::new(observer));

        let params: Params = self.params.iter().cloned().collect();
        tracing::info!(endpoint = %self.name, params = params.keys().count(), "Calling endpoint");

        let result = client.call(&self.name, &params).await?;
        println!("{}", serde_json::to_string_pretty(&result)?);
        Ok(())
    }
}

/// Parse `key=value`
pub fn parse_param(arg: &str) -> Result<(String, Value), String> {
    let (key, raw) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{arg}'"))?;
    if key.is_empty() {
        return Err(format!("empty parameter name in '{arg}'"));
    }

    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}
