use crate::error::{Error, Result};
use crate::utils::base64url;

use serde_json::{Map, Value};

/// One decoded token section (headers or claims) and the exact text it came from
///
/// The encoded text is kept verbatim: signing payloads are rebuilt from it,
/// never from re-serialized fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    fields: Map<String, Value>,
    encoded: String,
}

impl Item {
    pub(crate) fn new(fields: Map<String, Value>, encoded: impl Into<String>) -> Self {
        Self {
            fields,
            encoded: encoded.into(),
        }
    }

    /// Serialize fields to JSON and Base64URL-encode them
    pub(crate) fn encode(fields: Map<String, Value>) -> Result<Self> {
        let json = serde_json::to_string(&fields)
            .map_err(|e| Error::FormatInvalidJson(format!("Failed to encode section: {e}")))?;
        let encoded = base64url::encode(&json);
        Ok(Self::new(fields, encoded))
    }

    /// Get a field
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Get a field, or `default` when it is absent
    pub fn get_or<'a>(&'a self, name: &str, default: &'a Value) -> &'a Value {
        self.fields.get(name).unwrap_or(default)
    }

    /// Get a field as a string slice, if present and a string
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    pub fn has(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// The Base64URL text this section was decoded from (or encoded to)
    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }
}
