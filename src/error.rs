use itertools::Itertools;
use thiserror::Error;

/// Errors that can occur while loading inputs or projecting a service template.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    #[error("Missing required input: {0}")]
    MissingInput(String),

    #[error("Expected key '{path}' is absent from the service template")]
    Lookup { path: String },

    #[error("Template document has no '{name}' element")]
    MissingElement { name: String },

    #[error("I/O failure on '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    Yaml(String),

    #[error("Failed to parse JSON: {0}")]
    Json(String),

    #[error("XML error: {0}")]
    Xml(String),

    #[error("Schema compiler failed: {0}")]
    SchemaCompiler(String),
}

impl ConvertError {
    /// Builds a `Lookup` error from path segments, e.g. `["topology_template", "inputs"]`.
    pub fn lookup<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ConvertError::Lookup {
            path: segments.into_iter().map(|s| s.as_ref().to_owned()).join("."),
        }
    }

    pub(crate) fn io(path: impl AsRef<std::path::Path>, err: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.as_ref().display().to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn xml(err: impl std::fmt::Display) -> Self {
        ConvertError::Xml(err.to_string())
    }
}

impl From<serde_yaml::Error> for ConvertError {
    fn from(err: serde_yaml::Error) -> Self {
        ConvertError::Yaml(err.to_string())
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        ConvertError::Json(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
