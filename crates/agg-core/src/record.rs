use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::CoreError;

/// A single tool, agent, or category entry.
///
/// Records are kept as ordered JSON objects so that free-form descriptive
/// fields (tags, pricing, feature lists, ...) survive a load/save cycle
/// untouched and field-name validation can see exactly what is on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Convert a JSON value into a record.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the value is not a JSON object.
    pub fn from_value(value: Value) -> Result<Self, CoreError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(CoreError::Validation(format!(
                "expected a JSON object, found {}",
                kind_of(&other)
            ))),
        }
    }

    /// Builder-style field insertion, mostly for tests and fixtures.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// String value of `key`, if present and a string.
    #[must_use]
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Record identifier.
    ///
    /// Numeric ids are accepted too (remote sources are not consistent);
    /// they are rendered in their JSON form.
    #[must_use]
    pub fn id(&self) -> Option<String> {
        match self.0.get("id")? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.str_field("name").filter(|name| !name.is_empty())
    }

    #[must_use]
    pub fn logo(&self) -> Option<&str> {
        self.str_field("logo").filter(|logo| !logo.is_empty())
    }

    pub fn set_logo(&mut self, logo: impl Into<String>) {
        self.0.insert("logo".to_string(), Value::String(logo.into()));
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.str_field("url").filter(|url| !url.is_empty())
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.str_field("category")
    }

    #[must_use]
    pub fn subcategory(&self) -> Option<&str> {
        self.str_field("subcategory")
    }

    /// Field names in insertion order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Shallow overwrite: every field of `other` replaces the field of the
    /// same name in `self`; fields only present in `self` are kept.
    pub fn overwrite_from(&mut self, other: Self) {
        for (key, value) in other.0 {
            self.0.insert(key, value);
        }
    }

    /// Label used in logs and reports: the id, else the name, else `unknown`.
    #[must_use]
    pub fn label(&self) -> String {
        self.id()
            .or_else(|| self.name().map(str::to_string))
            .unwrap_or_else(|| "unknown".to_string())
    }

    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Convert a JSON array of objects into records.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] if the value is not an array or any
/// element is not an object.
pub fn records_from_value(value: Value) -> Result<Vec<Record>, CoreError> {
    let Value::Array(items) = value else {
        return Err(CoreError::Validation(format!(
            "expected a JSON array, found {}",
            kind_of(&value)
        )));
    };
    items.into_iter().map(Record::from_value).collect()
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
