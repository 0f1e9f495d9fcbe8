use crate::config::ConvertConfig;
use crate::error::{ConvertError, Result};
use crate::model::{NodeClassifier, NodeKind, NodeTemplate, ServiceTemplate};
use crate::params::{AutomationParameters, SchemaGroupings};
use crate::resolver::RelationshipResolver;
use crate::xml::{Element, ElementExt, XmlDocument};
use itertools::Itertools;
use std::fmt;
use tracing::{debug, info, warn};

pub mod blocks;

use blocks::*;

/// Root element every block is appended under.
pub const VNF_INFO: &str = "vnf-info";
/// Node template whose properties seed the `vnf-info` header.
pub const VNF_NODE: &str = "vnf";

/// Projects a [`ServiceTemplate`] onto a `vnf-info` template document.
///
/// The projector never mutates its inputs. Each call to [`Projector::project`]
/// takes ownership of a document, appends blocks in a fixed order and hands
/// the document back:
///
/// 1. header placeholders (`name`, `description`, `vnfd`, `vnfd-flavour`)
/// 2. one `vdu` per compute node
/// 3. one `virtual-link` per virtual-link node
/// 4. one `vnfd-connection-point` per non-management substitution requirement
/// 5. one `additional-parameters` per parameter id
pub struct Projector<'a> {
    template: &'a ServiceTemplate,
    config: ConvertConfig,
    classifier: NodeClassifier,
    automation: AutomationParameters,
    schema: Option<SchemaGroupings>,
}

pub struct ProjectorBuilder<'a> {
    template: &'a ServiceTemplate,
    config: ConvertConfig,
    classifier: NodeClassifier,
    automation: AutomationParameters,
    schema: Option<SchemaGroupings>,
}

impl<'a> ProjectorBuilder<'a> {
    pub fn new(template: &'a ServiceTemplate, config: ConvertConfig) -> Self {
        Self {
            template,
            config,
            classifier: NodeClassifier::default(),
            automation: AutomationParameters::default(),
            schema: None,
        }
    }

    /// Treat nodes whose type is exactly `type_name` as `kind`.
    pub fn with_type_mapping(mut self, type_name: &str, kind: NodeKind) -> Self {
        self.classifier.insert(type_name, kind);
        self
    }

    pub fn with_automation(mut self, automation: AutomationParameters) -> Self {
        self.automation = automation;
        self
    }

    pub fn with_schema_groupings(mut self, schema: SchemaGroupings) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn build(self) -> Projector<'a> {
        Projector {
            template: self.template,
            config: self.config,
            classifier: self.classifier,
            automation: self.automation,
            schema: self.schema,
        }
    }
}

impl<'a> Projector<'a> {
    pub fn builder(template: &'a ServiceTemplate, config: ConvertConfig) -> ProjectorBuilder<'a> {
        ProjectorBuilder::new(template, config)
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Appends all blocks to the document's `vnf-info` element.
    ///
    /// Appends are not transactional: on error the partially populated
    /// document is dropped together with the error.
    pub fn project(&self, mut document: XmlDocument) -> Result<XmlDocument> {
        let vnf_info = document
            .root_mut()
            .find_mut(VNF_INFO)
            .ok_or_else(|| ConvertError::MissingElement {
                name: VNF_INFO.to_string(),
            })?;

        self.seed_header(vnf_info)?;
        self.append_vdus(vnf_info)?;
        self.append_virtual_links(vnf_info);
        self.append_vnfd_connection_points(vnf_info)?;
        self.append_additional_parameters(vnf_info)?;
        Ok(document)
    }

    fn nodes_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = &'a NodeTemplate> + '_ {
        self.template
            .node_templates
            .iter()
            .filter(move |n| self.classifier.classify(&n.type_name) == kind)
    }

    /// Fills the header placeholders from the `vnf` node's properties.
    pub fn seed_header(&self, vnf_info: &mut Element) -> Result<()> {
        let vnf = self.template.require_node(VNF_NODE)?;
        let label = format!("{}-vnf", vnf.property_text("product_name")?);
        let descriptor_id = vnf.property_text("descriptor_id")?;
        let flavour_id = vnf.property_text("flavour_id")?;

        let placeholders = [
            ("name", label.as_str()),
            ("description", label.as_str()),
            ("vnfd", descriptor_id.as_str()),
            ("vnfd-flavour", flavour_id.as_str()),
        ];
        for (placeholder, text) in placeholders {
            vnf_info
                .find_mut(placeholder)
                .ok_or_else(|| ConvertError::MissingElement {
                    name: placeholder.to_string(),
                })?
                .push_text(text);
        }
        Ok(())
    }

    fn append_vdus(&self, vnf_info: &mut Element) -> Result<()> {
        let resolver = RelationshipResolver::new(self.template, &self.classifier);
        for cp in resolver.unbound_connection_points() {
            warn!("Connection point '{}' has no virtual_binding", cp.name);
        }

        for compute in self.nodes_of_kind(NodeKind::Compute) {
            let block = self.vdu_block(compute)?;
            debug!(
                "VDU '{}' with {} connection points",
                block.id,
                block.connection_points.len()
            );
            vnf_info.push(block.to_element());
        }
        Ok(())
    }

    /// Builds the `vdu` block for one compute node.
    pub fn vdu_block(&self, compute: &NodeTemplate) -> Result<VduBlock> {
        let resolver = RelationshipResolver::new(self.template, &self.classifier);
        let bound = resolver.resolve(&compute.name);

        let mut connection_points = Vec::with_capacity(bound.len());
        for cp in &bound.internal {
            info!("Internal connection point: {}", cp.name);
            connection_points.push(VduConnectionPoint::Internal {
                id: cp.name.clone(),
                allowed_address_pair: cp.property("allowed_address_pairs")?.is_some(),
            });
        }
        for cp in &bound.external {
            info!("External connection point: {}", cp.name);
            connection_points.push(VduConnectionPoint::External {
                id: cp.name.clone(),
                ip_version: IpVersion::from_layer_protocol(cp.layer_protocol()?.as_str()),
            });
        }

        Ok(VduBlock {
            id: compute.name.clone(),
            resource_allocation: ResourceAllocation {
                vim: self.config.vim.clone(),
                zone_id: self.config.zone_id.clone(),
            },
            connection_points,
        })
    }

    fn append_virtual_links(&self, vnf_info: &mut Element) {
        for block in self.virtual_link_blocks() {
            debug!("Virtual link '{}'", block.id);
            vnf_info.push(block.to_element());
        }
    }

    pub fn virtual_link_blocks(&self) -> Vec<VirtualLinkBlock> {
        self.nodes_of_kind(NodeKind::VirtualLink)
            .map(|vl| VirtualLinkBlock {
                id: vl.name.clone(),
            })
            .collect()
    }

    fn append_vnfd_connection_points(&self, vnf_info: &mut Element) -> Result<()> {
        for block in self.vnfd_connection_point_blocks()? {
            vnf_info.push(block.to_element());
        }
        Ok(())
    }

    /// `vnfd-connection-point` blocks for every non-management substitution requirement.
    pub fn vnfd_connection_point_blocks(&self) -> Result<Vec<VnfdConnectionPointBlock>> {
        let mut blocks = Vec::new();
        for requirement in &self.template.substitution_requirements {
            let node = self.template.require_node(&requirement.node)?;
            if node.is_management()? {
                debug!(
                    "Skipping management connection point '{}' ({})",
                    node.name, requirement.capability
                );
                continue;
            }
            blocks.push(VnfdConnectionPointBlock {
                id: node.name.clone(),
            });
        }
        Ok(blocks)
    }

    fn append_additional_parameters(&self, vnf_info: &mut Element) -> Result<()> {
        for block in self.additional_parameter_blocks()? {
            vnf_info.push(block.to_element());
        }
        Ok(())
    }

    /// Parameter ids for the configured [`crate::config::ParameterSource`], in emission order.
    pub fn parameter_ids(&self) -> Result<Vec<String>> {
        let source = self.config.parameter_source;
        let model_ids = self
            .template
            .input_names()
            .map(str::to_string)
            .filter(|_| source.uses_model());

        let schema_ids = if source.uses_schema() {
            let schema = self.schema.as_ref().ok_or_else(|| {
                ConvertError::MissingInput(format!(
                    "schema groupings (required by the {:?} parameter source)",
                    source
                ))
            })?;
            schema.leaf_names(&self.config.groupings)
        } else {
            Vec::new()
        };

        Ok(model_ids.chain(schema_ids).unique().collect())
    }

    pub fn additional_parameter_blocks(&self) -> Result<Vec<AdditionalParameterBlock>> {
        Ok(self
            .parameter_ids()?
            .into_iter()
            .map(|id| AdditionalParameterBlock {
                value: self.automation.value_text(&id),
                id,
            })
            .collect())
    }
}

/// Counts of the blocks present under `vnf-info`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectionSummary {
    pub vdus: usize,
    pub virtual_links: usize,
    pub vnfd_connection_points: usize,
    pub additional_parameters: usize,
}

impl ProjectionSummary {
    pub fn of(document: &XmlDocument) -> Self {
        let Some(vnf_info) = document.root().find(VNF_INFO) else {
            return Self::default();
        };
        let count = |name: &str| vnf_info.children_named(name).count();
        Self {
            vdus: count("vdu"),
            virtual_links: count("virtual-link"),
            vnfd_connection_points: count("vnfd-connection-point"),
            additional_parameters: count("additional-parameters"),
        }
    }
}

impl fmt::Display for ProjectionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} VDUs, {} virtual links, {} vnfd connection points, {} additional parameters",
            self.vdus, self.virtual_links, self.vnfd_connection_points, self.additional_parameters
        )
    }
}
