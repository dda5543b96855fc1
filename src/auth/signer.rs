//! Signed request builder

use super::Credentials;
use crate::rest::types::{path_and_query, scalar_to_string};
use crate::rest::{RequestSpec, RestError, Result, SignedRequest};
use chrono::Utc;
use reqwest::Url;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Default authentication header prefix
pub const DEFAULT_HEADER_PREFIX: &str = "FTX";

/// Turns [`RequestSpec`]s into [`SignedRequest`]s
///
/// Holds no mutable state, so one signer can be shared by any number of
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credentials: Arc<Credentials>,
    base_url: Url,
    header_prefix: String,
}

impl RequestSigner {
    /// Create a signer for the given API base URL, e.g. `https://ftx.com/api/`
    pub fn new(
        credentials: Arc<Credentials>,
        base_url: &str,
        header_prefix: impl Into<String>,
    ) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;
        Ok(Self {
            credentials,
            base_url,
            header_prefix: header_prefix.into(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Name of an authentication header, e.g. `FTX-SIGN`
    pub fn header_name(&self, suffix: &str) -> String {
        format!("{}-{}", self.header_prefix, suffix)
    }

    /// Sign with the current time
    pub fn sign(&self, spec: &RequestSpec) -> Result<SignedRequest> {
        self.sign_at(spec, Utc::now().timestamp_millis())
    }

    /// Sign with an explicit millisecond timestamp
    pub fn sign_at(&self, spec: &RequestSpec, timestamp_ms: i64) -> Result<SignedRequest> {
        self.credentials.validate()?;

        let url = self.resolve_url(spec)?;
        let body = encode_body(spec.body.as_ref())?;
        let signature = self.credentials.sign(
            timestamp_ms,
            spec.method.as_str(),
            &path_and_query(&url),
            body.as_deref(),
        )?;

        let mut headers = BTreeMap::new();
        headers.insert(
            self.header_name("KEY"),
            self.credentials.api_key().to_string(),
        );
        headers.insert(self.header_name("SIGN"), signature.clone());
        headers.insert(self.header_name("TS"), timestamp_ms.to_string());
        if let Some(subaccount) = self.credentials.subaccount_header() {
            headers.insert(self.header_name("SUBACCOUNT"), subaccount);
        }
        if body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }

        Ok(SignedRequest {
            method: spec.method,
            url,
            headers,
            body,
            timestamp_ms,
            signature,
        })
    }

    fn resolve_url(&self, spec: &RequestSpec) -> Result<Url> {
        if spec.path.contains("://") {
            return Err(RestError::InvalidRequest(format!(
                "path must be relative to the base URL: {}",
                spec.path
            )));
        }

        let path = spec.path.trim_start_matches('/');
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| RestError::InvalidRequest(format!("invalid path '{path}': {e}")))?;

        let query = encode_query(&spec.query)?;
        if !query.is_empty() {
            url.set_query(Some(&query));
        }

        Ok(url)
    }
}

fn parse_base_url(base_url: &str) -> Result<Url> {
    let normalized = if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{base_url}/")
    };

    let url = Url::parse(&normalized)
        .map_err(|e| RestError::Configuration(format!("invalid base URL '{base_url}': {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(RestError::Configuration(format!(
            "base URL must be http or https: {base_url}"
        )));
    }

    Ok(url)
}

/// Form-encode the non-null query parameters
fn encode_query(query: &Map<String, Value>) -> Result<String> {
    let pairs: Vec<(&str, String)> = query
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| (key.as_str(), scalar_to_string(value)))
        .collect();

    serde_urlencoded::to_string(&pairs)
        .map_err(|e| RestError::InvalidRequest(format!("failed to encode query: {e}")))
}

/// Serialize the non-null body fields to compact JSON with sorted keys
fn encode_body(body: Option<&Map<String, Value>>) -> Result<Option<Vec<u8>>> {
    let Some(body) = body else {
        return Ok(None);
    };

    let sorted: BTreeMap<&str, &Value> = body
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| (key.as_str(), value))
        .collect();

    serde_json::to_vec(&sorted)
        .map(Some)
        .map_err(|e| RestError::InvalidRequest(format!("failed to encode body: {e}")))
}
