use crate::error::{ConvertError, Result};
use ahash::AHashMap;
use serde_json::Value;
use std::fs;
use std::path::Path;

const ADDITIONAL_PARAMS_KEY: &str = "additionalParams";

/// Runtime values for additional parameters, read from an automation JSON document.
///
/// The document is either `{"additionalParams": {...}}` or a plain object of
/// parameter values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AutomationParameters {
    values: AHashMap<String, Value>,
}

impl AutomationParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load automation parameters from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut object) = value else {
            return Err(ConvertError::Json(
                "automation document must be a JSON object".to_string(),
            ));
        };
        let params = match object.remove(ADDITIONAL_PARAMS_KEY) {
            Some(Value::Object(params)) => params,
            Some(_) => {
                return Err(ConvertError::Json(format!(
                    "'{}' must be a JSON object",
                    ADDITIONAL_PARAMS_KEY
                )));
            }
            None => object,
        };
        Ok(params.into_iter().collect())
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// The text emitted for `name`: strings verbatim, null or absent as empty,
    /// anything else as its JSON text.
    pub fn value_text(&self, name: &str) -> String {
        match self.values.get(name) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, Value)> for AutomationParameters {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
