//! Response envelope decoding
//!
//! Every exchange response is wrapped as `{"success": true, "result": ...}` or
//! `{"success": false, "error": "..."}`.

use super::error::{RestError, Result, TransportError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Wire shape of an exchange response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Envelope {
    /// Read an envelope out of arbitrary JSON
    ///
    /// Missing or mistyped fields are treated as absent, so anything that is
    /// not an object with `success: true` reads as a failure.
    pub fn from_value(mut value: Value) -> Self {
        let success = value
            .get("success")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let error = value
            .get("error")
            .and_then(Value::as_str)
            .map(str::to_string);
        let result = value.get_mut("result").map(Value::take);

        Self {
            success,
            result,
            error,
        }
    }

    /// The result payload, or an API error carrying the exchange message
    pub fn into_result(self) -> Result<Value> {
        if self.success {
            Ok(self.result.unwrap_or(Value::Null))
        } else {
            Err(RestError::api(
                self.error.unwrap_or_else(|| "unknown error".to_string()),
            ))
        }
    }
}

/// Decode a raw response body into the envelope's result
pub fn unwrap_response(status: u16, body: &[u8]) -> Result<Value> {
    let value: Value = serde_json::from_slice(body).map_err(|_| TransportError::InvalidBody {
        status,
        body: String::from_utf8_lossy(body).into_owned(),
    })?;

    Envelope::from_value(value).into_result()
}
