//! Serde shapes of the TOSCA-like YAML document. Only the fields the converter
//! reads are declared; everything else is ignored.

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

#[derive(Debug, Deserialize)]
pub struct RawServiceTemplate {
    #[serde(default)]
    pub topology_template: Option<RawTopologyTemplate>,
}

#[derive(Debug, Deserialize)]
pub struct RawTopologyTemplate {
    #[serde(default)]
    pub inputs: Option<Mapping>,
    #[serde(default)]
    pub node_templates: Option<Mapping>,
    #[serde(default)]
    pub substitution_mappings: Option<RawSubstitutionMappings>,
}

#[derive(Debug, Deserialize)]
pub struct RawSubstitutionMappings {
    /// Either a sequence of single-entry mappings or one mapping.
    #[serde(default)]
    pub requirements: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct RawNodeTemplate {
    #[serde(rename = "type")]
    pub node_type: Option<String>,
    #[serde(default)]
    pub properties: Option<Mapping>,
    #[serde(default)]
    pub requirements: Option<Vec<Mapping>>,
}
