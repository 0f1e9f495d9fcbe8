use super::definition::{InputDeclaration, NodeTemplate, ServiceTemplate, SubstitutionRequirement};
use super::raw::{RawNodeTemplate, RawServiceTemplate};
use crate::error::{ConvertError, Result};
use serde_yaml::{Mapping, Value};

/// A trait for source documents that can be converted into a [`ServiceTemplate`].
///
/// This is the extension point that keeps the projector independent of the
/// input format. The crate implements it for the TOSCA-like YAML shape; other
/// formats only need their own implementation.
///
/// # Example
///
/// ```rust,no_run
/// use vnfinfo::error::Result;
/// use vnfinfo::model::{IntoServiceTemplate, NodeTemplate, ServiceTemplate};
///
/// struct Inventory {
///     servers: Vec<String>,
/// }
///
/// impl IntoServiceTemplate for Inventory {
///     fn into_service_template(self) -> Result<ServiceTemplate> {
///         Ok(ServiceTemplate {
///             node_templates: self
///                 .servers
///                 .into_iter()
///                 .map(|name| NodeTemplate::new(name, "tosca.nodes.nfv.Vdu.Compute"))
///                 .collect(),
///             ..Default::default()
///         })
///     }
/// }
/// ```
pub trait IntoServiceTemplate {
    /// Consumes the source and produces the canonical service template.
    fn into_service_template(self) -> Result<ServiceTemplate>;
}

impl IntoServiceTemplate for ServiceTemplate {
    fn into_service_template(self) -> Result<ServiceTemplate> {
        Ok(self)
    }
}

impl IntoServiceTemplate for RawServiceTemplate {
    fn into_service_template(self) -> Result<ServiceTemplate> {
        let topology = self
            .topology_template
            .ok_or_else(|| ConvertError::lookup(["topology_template"]))?;
        let node_mapping = topology
            .node_templates
            .ok_or_else(|| ConvertError::lookup(["topology_template", "node_templates"]))?;

        let node_templates = node_mapping
            .into_iter()
            .map(|(key, value)| convert_node(key_text(&key)?, value))
            .collect::<Result<Vec<_>>>()?;

        let inputs = topology
            .inputs
            .unwrap_or_default()
            .into_iter()
            .map(|(key, metadata)| -> Result<InputDeclaration> {
                Ok(InputDeclaration {
                    name: key_text(&key)?,
                    metadata,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let substitution_requirements = match topology.substitution_mappings {
            Some(mappings) => convert_requirements(mappings.requirements)?,
            None => Vec::new(),
        };

        Ok(ServiceTemplate {
            node_templates,
            substitution_requirements,
            inputs,
        })
    }
}

impl ServiceTemplate {
    /// Parses a TOSCA-like YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let raw: RawServiceTemplate = serde_yaml::from_str(yaml)?;
        raw.into_service_template()
    }
}

fn convert_node(name: String, value: Value) -> Result<NodeTemplate> {
    let raw: RawNodeTemplate = serde_yaml::from_value(value)
        .map_err(|e| ConvertError::Yaml(format!("node template '{}': {}", name, e)))?;
    let type_name = raw.node_type.ok_or_else(|| {
        ConvertError::lookup(["topology_template", "node_templates", name.as_str(), "type"])
    })?;
    Ok(NodeTemplate {
        name,
        type_name,
        properties: raw.properties,
        requirements: raw.requirements.unwrap_or_default(),
    })
}

fn convert_requirements(requirements: Option<Value>) -> Result<Vec<SubstitutionRequirement>> {
    let entries: Vec<Mapping> = match requirements {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Mapping(mapping)) => vec![mapping],
        Some(Value::Sequence(items)) => items
            .into_iter()
            .map(|item| match item {
                Value::Mapping(mapping) => Ok(mapping),
                other => Err(ConvertError::Yaml(format!(
                    "substitution requirement is not a mapping: {:?}",
                    other
                ))),
            })
            .collect::<Result<_>>()?,
        Some(other) => {
            return Err(ConvertError::Yaml(format!(
                "substitution_mappings.requirements has unexpected shape: {:?}",
                other
            )));
        }
    };

    let mut converted = Vec::new();
    for mapping in entries {
        for (key, value) in mapping {
            let capability = key_text(&key)?;
            let node = requirement_target(&value).ok_or_else(|| {
                ConvertError::lookup([
                    "topology_template",
                    "substitution_mappings",
                    "requirements",
                    capability.as_str(),
                ])
            })?;
            converted.push(SubstitutionRequirement { capability, node });
        }
    }
    Ok(converted)
}

/// A requirement target is a node name or a `[node, requirement]` pair.
fn requirement_target(value: &Value) -> Option<String> {
    match value {
        Value::String(node) => Some(node.clone()),
        Value::Sequence(pair) => pair.first().and_then(Value::as_str).map(str::to_string),
        _ => None,
    }
}

fn key_text(key: &Value) -> Result<String> {
    match key {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(ConvertError::Yaml(format!(
            "mapping key must be a scalar, found {:?}",
            other
        ))),
    }
}
