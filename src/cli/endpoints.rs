//! Endpoints command implementation

use crate::endpoints::{self, EndpointDescriptor, ENDPOINTS};
use clap::Args;

#[derive(Args, Debug)]
pub struct EndpointsArgs {
    /// Only list endpoints in this group (case-insensitive)
    #[arg(short, long)]
    pub group: Option<String>,
}

impl EndpointsArgs {
    pub fn execute(&self) -> anyhow::Result<()> {
        let selected: Vec<&EndpointDescriptor> = match &self.group {
            Some(group) => endpoints::in_group(group).collect(),
            None => ENDPOINTS.iter().collect(),
        };

        if selected.is_empty() {
            anyhow::bail!(
                "No endpoints in group '{}'. Groups: {}",
                self.group.as_deref().unwrap_or_default(),
                endpoints::groups().join(", ")
            );
        }

        for endpoint in selected {
            println!("{}", describe(endpoint));
        }
        Ok(())
    }
}

/// One-line summary, e.g. `get_orderbook  GET markets/{market_name}/orderbook [depth?]`
pub fn describe(endpoint: &EndpointDescriptor) -> String {
    let params: Vec<String> = endpoint
        .params
        .iter()
        .map(|p| {
            if p.required {
                p.name.to_string()
            } else {
                format!("{}?", p.name)
            }
        })
        .collect();

    let mut line = format!(
        "{:<52} {:<6} {}",
        endpoint.name, endpoint.method, endpoint.path
    );
    if !params.is_empty() {
        line.push_str(&format!(" [{}]", params.join(", ")));
    }
    line
}
