//! Common test fixtures: service templates, vnf-info skeletons and automation documents.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use vnfinfo::prelude::*;

/// A small VNF with two compute nodes, four connection points and one virtual link.
///
/// - `int_cp` is bound to `vdu1` with two requirements (internal)
/// - `data_cp` is bound to `vdu1` with one requirement (external, IPv6)
/// - `mgmt_cp` is bound to `vdu2` and flagged as management
/// - `loose_cp` carries no `virtual_binding` at all
/// - inputs are declared out of alphabetical order
pub const SERVICE_TEMPLATE_YAML: &str = r#"
tosca_definitions_version: tosca_simple_yaml_1_3
description: Acme firewall VNF
topology_template:
  inputs:
    zone_param:
      type: string
    flavor_size:
      type: string
      default: small
    unused_param:
      type: string
  substitution_mappings:
    node_type: acme.nodes.Firewall
    requirements:
      - mgmt: mgmt_cp
      - data: [data_cp, virtual_link]
  node_templates:
    vnf:
      type: acme.nodes.Firewall
      properties:
        product_name: firewall
        descriptor_id: acme-fw-1.0
        flavour_id: default
    vdu1:
      type: tosca.nodes.nfv.Vdu.Compute
      properties:
        name: vdu1
    int_cp:
      type: tosca.nodes.nfv.VduCp
      properties:
        allowed_address_pairs:
          - ip_address: 10.0.0.10
      requirements:
        - virtual_binding: vdu1
        - virtual_link: net0
    data_cp:
      type: tosca.nodes.nfv.VduCp
      properties:
        protocol:
          - associated_layer_protocol: ipv6
      requirements:
        - virtual_binding: vdu1
    vdu2:
      type: tosca.nodes.nfv.Vdu.Compute
    mgmt_cp:
      type: tosca.nodes.nfv.VduCp
      properties:
        management: true
        protocol:
          - associated_layer_protocol: ipv4
      requirements:
        - virtual_binding: vdu2
    loose_cp:
      type: tosca.nodes.nfv.VduCp
      properties:
        protocol:
          - associated_layer_protocol: ipv4
    net0:
      type: tosca.nodes.nfv.VnfVirtualLink
      properties:
        connectivity_type:
          layer_protocols: [ipv4]
"#;

/// A `vnf-info` skeleton with the four header placeholders.
pub const VNF_INFO_TEMPLATE_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<config xmlns="http://tail-f.com/ns/config/1.0">
  <vnf-info>
    <name/>
    <description/>
    <vnfd/>
    <vnfd-flavour/>
  </vnf-info>
</config>
"#;

pub const AUTOMATION_JSON: &str = r#"{
  "vnfInstanceName": "fw-01",
  "additionalParams": {
    "flavor_size": "large",
    "zone_param": "az-2",
    "replicas": 3,
    "license_key": "ABC-123"
  }
}"#;

pub const SCHEMA_YIN: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<module name="acme-fw" xmlns="urn:ietf:params:xml:ns:yang:yin:1">
  <grouping name="licensing">
    <leaf name="license_key"><type name="string"/></leaf>
    <leaf name="flavor_size"><type name="string"/></leaf>
  </grouping>
  <grouping name="tuning">
    <leaf name="replicas"><type name="uint8"/></leaf>
  </grouping>
</module>
"#;

pub fn service_template() -> ServiceTemplate {
    ServiceTemplate::from_yaml_str(SERVICE_TEMPLATE_YAML).expect("fixture template parses")
}

pub fn skeleton() -> XmlDocument {
    XmlDocument::parse(VNF_INFO_TEMPLATE_XML).expect("fixture skeleton parses")
}

pub fn automation() -> AutomationParameters {
    AutomationParameters::from_json_str(AUTOMATION_JSON).expect("fixture automation parses")
}

pub fn schema() -> SchemaGroupings {
    SchemaGroupings::from_yin_str(SCHEMA_YIN).expect("fixture schema parses")
}

/// Projects the fixture template with the given config and no schema.
pub fn project_fixture(config: ConvertConfig) -> XmlDocument {
    let template = service_template();
    Projector::builder(&template, config)
        .with_automation(automation())
        .build()
        .project(skeleton())
        .expect("projection succeeds")
}

pub fn vnf_info(document: &XmlDocument) -> &Element {
    document.root().find("vnf-info").expect("vnf-info present")
}

/// Names of the direct children of `vnf-info`, in document order.
pub fn block_names(document: &XmlDocument) -> Vec<String> {
    vnf_info(document).elements().map(|e| e.name.clone()).collect()
}

/// Writes `content` to `dir/name` and returns the path.
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("fixture written");
    path
}
