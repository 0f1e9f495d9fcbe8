use crate::error::{ConvertError, Result};
use serde_yaml::{Mapping, Value};

/// The canonical, format-independent view of a service template, ready for projection.
///
/// Node templates keep the declaration order of the source document; output
/// ordering depends on it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceTemplate {
    pub node_templates: Vec<NodeTemplate>,
    pub substitution_requirements: Vec<SubstitutionRequirement>,
    pub inputs: Vec<InputDeclaration>,
}

/// A single entry of `topology_template.node_templates`.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeTemplate {
    pub name: String,
    pub type_name: String,
    pub properties: Option<Mapping>,
    pub requirements: Vec<Mapping>,
}

/// Maps an externally exposed requirement to the node that satisfies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionRequirement {
    pub capability: String,
    pub node: String,
}

/// A declared deployment-time input and its raw metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct InputDeclaration {
    pub name: String,
    pub metadata: Value,
}

impl ServiceTemplate {
    pub fn node(&self, name: &str) -> Option<&NodeTemplate> {
        self.node_templates.iter().find(|n| n.name == name)
    }

    /// Like [`ServiceTemplate::node`], but a missing node is a lookup failure.
    pub fn require_node(&self, name: &str) -> Result<&NodeTemplate> {
        self.node(name).ok_or_else(|| {
            ConvertError::lookup(["topology_template", "node_templates", name])
        })
    }

    pub fn input_names(&self) -> impl Iterator<Item = &str> {
        self.inputs.iter().map(|i| i.name.as_str())
    }
}

impl NodeTemplate {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            properties: None,
            requirements: Vec::new(),
        }
    }

    pub fn with_properties(mut self, properties: Mapping) -> Self {
        self.properties = Some(properties);
        self
    }

    pub fn with_requirement(mut self, key: &str, value: impl Into<Value>) -> Self {
        let mut requirement = Mapping::new();
        requirement.insert(Value::from(key), value.into());
        self.requirements.push(requirement);
        self
    }

    fn lookup_path(&self, tail: &[&str]) -> ConvertError {
        let head = ["topology_template", "node_templates", self.name.as_str()];
        ConvertError::lookup(head.iter().chain(tail.iter()))
    }

    /// The node's `properties` mapping; its absence is a lookup failure.
    pub fn properties(&self) -> Result<&Mapping> {
        self.properties
            .as_ref()
            .ok_or_else(|| self.lookup_path(&["properties"]))
    }

    pub fn property(&self, key: &str) -> Result<Option<&Value>> {
        Ok(self.properties()?.get(key))
    }

    /// Like [`NodeTemplate::property`], but a missing key is a lookup failure.
    pub fn require_property(&self, key: &str) -> Result<&Value> {
        self.property(key)?
            .ok_or_else(|| self.lookup_path(&["properties", key]))
    }

    /// A required property rendered as text (strings verbatim, other scalars formatted).
    pub fn property_text(&self, key: &str) -> Result<String> {
        scalar_text(self.require_property(key)?)
            .ok_or_else(|| self.lookup_path(&["properties", key]))
    }

    /// Name of the compute node this node is bound to, taken from the first
    /// requirement's `virtual_binding`. Missing, empty or non-string bindings yield `None`.
    pub fn virtual_binding(&self) -> Option<&str> {
        self.requirements
            .first()
            .and_then(|r| r.get("virtual_binding"))
            .and_then(Value::as_str)
            .filter(|binding| !binding.is_empty())
    }

    /// `properties.management == true`.
    pub fn is_management(&self) -> Result<bool> {
        Ok(matches!(self.property("management")?, Some(Value::Bool(true))))
    }

    /// `properties.protocol[0].associated_layer_protocol`, each step required.
    pub fn layer_protocol(&self) -> Result<&Value> {
        let path = ["properties", "protocol", "0", "associated_layer_protocol"];
        self.require_property("protocol")?
            .get(0)
            .and_then(|p| p.get("associated_layer_protocol"))
            .ok_or_else(|| self.lookup_path(&path))
    }
}

/// Renders a YAML scalar as text. Sequences, mappings and null yield `None`.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        _ => None,
    }
}
