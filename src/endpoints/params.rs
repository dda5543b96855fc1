//! Caller-supplied endpoint arguments

use serde_json::{Map, Value};

/// Named arguments for an endpoint call
///
/// Keys are path placeholder names or wire parameter names. A `null` value is
/// the same as not setting the key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(Map<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Set a value only when it is `Some`
    pub fn with_opt<V: Into<Value>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.set(key, value);
        }
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Value for `key`, treating `null` as absent
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Keys with non-null values
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, _)| k.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.keys().next().is_none()
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.set(key, value);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_is_absent() {
        let params = Params::new().with("a", 1).with("b", Value::Null);
        assert!(params.contains("a"));
        assert!(!params.contains("b"));
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["a"]);
    }

    #[test]
    fn test_with_opt() {
        let params = Params::new()
            .with_opt("market", Some("BTC-PERP"))
            .with_opt::<i64>("depth", None);
        assert_eq!(params.get("market"), Some(&json!("BTC-PERP")));
        assert!(params.get("depth").is_none());
    }

    #[test]
    fn test_from_iter() {
        let params: Params = vec![("coin", json!("USD")), ("size", json!(10))]
            .into_iter()
            .collect();
        assert_eq!(params.get("size"), Some(&json!(10)));
        assert!(!params.is_empty());
        assert!(Params::new().with("x", Value::Null).is_empty());
    }
}
