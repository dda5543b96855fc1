//! Request construction from endpoint descriptors

use super::{EndpointDescriptor, ParamLocation, Params};
use crate::rest::types::scalar_to_string;
use crate::rest::{RequestSpec, RestError, Result};
use serde_json::Map;

impl EndpointDescriptor {
    /// Build the unsigned request for this endpoint
    ///
    /// Path placeholders are filled and escaped, declared parameters are routed
    /// to the query string or body, and absent optional parameters are left out.
    pub fn build_request(&self, params: &Params) -> Result<RequestSpec> {
        let placeholders = self.placeholders();

        if let Some(unknown) = params
            .keys()
            .find(|key| !placeholders.iter().any(|p| p == key) && self.param(key).is_none())
        {
            return Err(RestError::InvalidRequest(format!(
                "{}: unexpected parameter '{unknown}'",
                self.name
            )));
        }

        let path = render_path(self.path, params)
            .map_err(|e| RestError::InvalidRequest(format!("{}: {e}", self.name)))?;

        let mut values = Map::new();
        for spec in self.params {
            match params.get(spec.name) {
                Some(value) => {
                    values.insert(spec.name.to_string(), value.clone());
                }
                None if spec.required => {
                    return Err(RestError::InvalidRequest(format!(
                        "{}: missing required parameter '{}'",
                        self.name, spec.name
                    )));
                }
                None => {}
            }
        }

        let request = RequestSpec::new(self.method, path);
        Ok(match self.location {
            ParamLocation::PathOnly => request,
            ParamLocation::Query => RequestSpec {
                query: values,
                ..request
            },
            ParamLocation::Body => request.with_body(values),
        })
    }
}

/// Substitute `{name}` placeholders, percent-encoding each value as one segment
pub fn render_path(template: &str, params: &Params) -> std::result::Result<String, String> {
    let mut path = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        let end = rest[start..]
            .find('}')
            .map(|offset| start + offset)
            .ok_or_else(|| format!("unterminated placeholder in '{template}'"))?;
        let name = &rest[start + 1..end];
        let value = params
            .get(name)
            .ok_or_else(|| format!("missing path parameter '{name}'"))?;
        let raw = scalar_to_string(value);
        let segment = urlencoding::encode(&raw);
        if is_dot_or_empty_segment(&segment) {
            return Err(format!(
                "path parameter '{name}' must not be empty, '.' or '..'"
            ));
        }

        path.push_str(&rest[..start]);
        path.push_str(&segment);
        rest = &rest[end + 1..];
    }
    path.push_str(rest);

    Ok(path)
}

/// Segments that URL resolution would drop or collapse into the parent
fn is_dot_or_empty_segment(segment: &str) -> bool {
    let lowered = segment.to_ascii_lowercase();
    matches!(
        lowered.as_str(),
        "" | "." | ".." | "%2e" | ".%2e" | "%2e." | "%2e%2e"
    )
}
