//! API credential storage and HMAC signing

use crate::rest::{RestError, Result};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::fmt;
use zeroize::ZeroizeOnDrop;

type HmacSha256 = Hmac<Sha256>;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "API_KEY";
/// Environment variable holding the API secret
pub const API_SECRET_ENV: &str = "API_SECRET";
/// Environment variable holding the optional sub-account name
pub const SUBACCOUNT_ENV: &str = "SUBACCOUNT_NAME";

/// API key, secret and optional sub-account of one client
///
/// The secret is zeroized on drop and never printed.
#[derive(Clone, ZeroizeOnDrop)]
pub struct Credentials {
    #[zeroize(skip)]
    api_key: String,
    api_secret: Box<[u8]>,
    #[zeroize(skip)]
    subaccount: Option<String>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(stringify!(Credentials))
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("subaccount", &self.subaccount)
            .finish()
    }
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into().into_bytes().into_boxed_slice(),
            subaccount: None,
        }
    }

    /// Scope every request to the named sub-account
    ///
    /// An empty name means the main account.
    pub fn with_subaccount(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.subaccount = (!name.is_empty()).then_some(name);
        self
    }

    /// Read `API_KEY`, `API_SECRET` and `SUBACCOUNT_NAME` from the environment
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| RestError::Configuration(format!("{API_KEY_ENV} is not set")))?;
        let api_secret = std::env::var(API_SECRET_ENV)
            .map_err(|_| RestError::Configuration(format!("{API_SECRET_ENV} is not set")))?;

        let credentials = Self::new(api_key, api_secret);
        credentials.validate()?;

        Ok(match std::env::var(SUBACCOUNT_ENV) {
            Ok(name) => credentials.with_subaccount(name),
            Err(_) => credentials,
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn subaccount(&self) -> Option<&str> {
        self.subaccount.as_deref()
    }

    /// Percent-encoded sub-account name as sent in the sub-account header
    pub fn subaccount_header(&self) -> Option<String> {
        self.subaccount
            .as_deref()
            .map(|name| urlencoding::encode(name).into_owned())
    }

    /// Reject credentials that cannot sign a request
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(RestError::Configuration("API key is empty".to_string()));
        }
        if self.api_secret.is_empty() {
            return Err(RestError::Configuration("API secret is empty".to_string()));
        }
        Ok(())
    }

    /// Lowercase hex HMAC-SHA256 over `timestamp + method + path + body`
    ///
    /// The fields are concatenated without delimiters, exactly as the exchange
    /// verifies them.
    pub fn sign(
        &self,
        timestamp_ms: i64,
        method: &str,
        path: &str,
        body: Option<&[u8]>,
    ) -> Result<String> {
        self.validate()?;

        let timestamp = timestamp_ms.to_string();
        let mut mac = HmacSha256::new_from_slice(&self.api_secret)
            .map_err(|e| RestError::Configuration(format!("Invalid API secret: {e}")))?;
        mac.update(timestamp.as_bytes());
        mac.update(method.as_bytes());
        mac.update(path.as_bytes());
        if let Some(body) = body {
            mac.update(body);
        }

        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}
