//! Endpoint table and generic dispatch
//!
//! Each exchange operation is a static [`EndpointDescriptor`]: a verb, a path
//! template and the parameters it accepts. [`EndpointDescriptor::build_request`]
//! turns caller [`Params`] into a [`RequestSpec`](crate::rest::RequestSpec).

mod dispatch;
mod params;
mod table;

pub use dispatch::render_path;
pub use params::Params;
pub use table::ENDPOINTS;

use crate::rest::HttpMethod;

/// Where an endpoint's declared parameters are sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    /// Only path placeholders; no query string or body
    PathOnly,
    /// URL query string
    Query,
    /// JSON object body
    Body,
}

/// A declared parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    /// Name as sent on the wire, e.g. `start_time` or `orderId`
    pub name: &'static str,
    pub required: bool,
}

impl ParamSpec {
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            required: true,
        }
    }

    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
        }
    }
}

/// Static description of one exchange operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointDescriptor {
    /// Operation name, e.g. `get_orderbook`
    pub name: &'static str,
    /// API section, e.g. `Markets`
    pub group: &'static str,
    pub method: HttpMethod,
    /// Path relative to the base URL with `{placeholder}` segments
    pub path: &'static str,
    pub params: &'static [ParamSpec],
    pub location: ParamLocation,
}

impl EndpointDescriptor {
    /// Placeholder names in the path template, in order
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.path;
        while let Some(start) = rest.find('{') {
            let Some(len) = rest[start..].find('}') else {
                break;
            };
            names.push(&rest[start + 1..start + len]);
            rest = &rest[start + len + 1..];
        }
        names
    }

    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }
}

/// Look up an endpoint by operation name
pub fn find(name: &str) -> Option<&'static EndpointDescriptor> {
    ENDPOINTS.iter().find(|e| e.name == name)
}

/// All endpoints in a group, in table order
pub fn in_group(group: &str) -> impl Iterator<Item = &'static EndpointDescriptor> + '_ {
    ENDPOINTS
        .iter()
        .filter(move |e| e.group.eq_ignore_ascii_case(group))
}

/// Group names in table order, without duplicates
pub fn groups() -> Vec<&'static str> {
    let mut groups: Vec<&'static str> = Vec::new();
    for endpoint in ENDPOINTS {
        if !groups.contains(&endpoint.group) {
            groups.push(endpoint.group);
        }
    }
    groups
}
