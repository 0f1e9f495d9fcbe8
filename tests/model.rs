//! Tests for loading service templates and automation parameters.
mod common;
use common::*;
use serde_json::json;
use vnfinfo::prelude::*;

#[cfg(test)]
mod service_template_tests {
    use super::*;

    #[test]
    fn node_templates_keep_declaration_order() {
        let template = service_template();
        let names: Vec<_> = template.node_templates.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(
            names,
            ["vnf", "vdu1", "int_cp", "data_cp", "vdu2", "mgmt_cp", "loose_cp", "net0"]
        );
        assert_eq!(
            template.input_names().collect::<Vec<_>>(),
            ["zone_param", "flavor_size", "unused_param"]
        );
    }

    #[test]
    fn substitution_requirements_accept_names_and_pairs() {
        let template = service_template();
        assert_eq!(
            template.substitution_requirements,
            [
                SubstitutionRequirement {
                    capability: "mgmt".to_string(),
                    node: "mgmt_cp".to_string()
                },
                SubstitutionRequirement {
                    capability: "data".to_string(),
                    node: "data_cp".to_string()
                },
            ]
        );
    }

    #[test]
    fn substitution_requirements_may_be_a_single_mapping() {
        let yaml = r#"
topology_template:
  substitution_mappings:
    requirements:
      mgmt: mgmt_cp
      data: data_cp
  node_templates: {}
"#;
        let template = ServiceTemplate::from_yaml_str(yaml).unwrap();
        let nodes: Vec<_> = template
            .substitution_requirements
            .iter()
            .map(|r| r.node.as_str())
            .collect();
        assert_eq!(nodes, ["mgmt_cp", "data_cp"]);
    }

    #[test]
    fn missing_sections_are_lookup_errors() {
        let err = ServiceTemplate::from_yaml_str("description: nothing here").unwrap_err();
        assert_eq!(
            err,
            ConvertError::Lookup {
                path: "topology_template".to_string()
            }
        );

        let err = ServiceTemplate::from_yaml_str("topology_template:\n  inputs: {}\n").unwrap_err();
        assert_eq!(
            err,
            ConvertError::Lookup {
                path: "topology_template.node_templates".to_string()
            }
        );
    }

    #[test]
    fn node_without_type_is_a_lookup_error() {
        let yaml = "topology_template:\n  node_templates:\n    vdu1:\n      properties: {}\n";
        let err = ServiceTemplate::from_yaml_str(yaml).unwrap_err();
        assert_eq!(
            err,
            ConvertError::Lookup {
                path: "topology_template.node_templates.vdu1.type".to_string()
            }
        );
    }

    #[test]
    fn malformed_yaml_is_reported() {
        let err = ServiceTemplate::from_yaml_str("topology_template: [unclosed").unwrap_err();
        assert!(matches!(err, ConvertError::Yaml(_)));
    }

    #[test]
    fn node_helpers_read_properties() {
        let template = service_template();

        let mgmt = template.require_node("mgmt_cp").unwrap();
        assert!(mgmt.is_management().unwrap());
        assert_eq!(mgmt.virtual_binding(), Some("vdu2"));
        assert_eq!(mgmt.layer_protocol().unwrap().as_str(), Some("ipv4"));

        let data = template.require_node("data_cp").unwrap();
        assert!(!data.is_management().unwrap());

        let vdu2 = template.require_node("vdu2").unwrap();
        assert_eq!(
            vdu2.properties().unwrap_err(),
            ConvertError::Lookup {
                path: "topology_template.node_templates.vdu2.properties".to_string()
            }
        );
        assert_eq!(template.require_node("loose_cp").unwrap().virtual_binding(), None);
    }

    #[test]
    fn custom_sources_convert_through_the_trait() {
        struct Inventory(Vec<&'static str>);

        impl IntoServiceTemplate for Inventory {
            fn into_service_template(self) -> vnfinfo::error::Result<ServiceTemplate> {
                Ok(ServiceTemplate {
                    node_templates: self
                        .0
                        .into_iter()
                        .map(|name| NodeTemplate::new(name, "acme.Vdu.Compute"))
                        .collect(),
                    ..Default::default()
                })
            }
        }

        let template = Inventory(vec!["a", "b"]).into_service_template().unwrap();
        let projector = Projector::builder(&template, ConvertConfig::default()).build();
        let vdu = projector.vdu_block(template.node("b").unwrap()).unwrap();
        assert_eq!(vdu.id, "b");
        assert!(vdu.connection_points.is_empty());
    }
}

#[cfg(test)]
mod automation_tests {
    use super::*;

    #[test]
    fn additional_params_object_is_preferred() {
        let params = automation();
        assert_eq!(params.len(), 4);
        assert_eq!(params.value_text("flavor_size"), "large");
        assert!(params.get("vnfInstanceName").is_none());
    }

    #[test]
    fn plain_object_is_accepted() {
        let params = AutomationParameters::from_json_str(r#"{"flavor_size": "medium"}"#).unwrap();
        assert_eq!(params.value_text("flavor_size"), "medium");
    }

    #[test]
    fn values_render_as_text() {
        let params: AutomationParameters = [
            ("text".to_string(), json!("plain")),
            ("number".to_string(), json!(42)),
            ("flag".to_string(), json!(true)),
            ("nothing".to_string(), json!(null)),
            ("list".to_string(), json!(["a", "b"])),
        ]
        .into_iter()
        .collect();

        assert_eq!(params.value_text("text"), "plain");
        assert_eq!(params.value_text("number"), "42");
        assert_eq!(params.value_text("flag"), "true");
        assert_eq!(params.value_text("nothing"), "");
        assert_eq!(params.value_text("list"), r#"["a","b"]"#);
        assert_eq!(params.value_text("absent"), "");
    }

    #[test]
    fn non_object_documents_are_rejected() {
        assert!(matches!(
            AutomationParameters::from_json_str("[1, 2]"),
            Err(ConvertError::Json(_))
        ));
        assert!(matches!(
            AutomationParameters::from_json_str(r#"{"additionalParams": 5}"#),
            Err(ConvertError::Json(_))
        ));
        assert!(matches!(
            AutomationParameters::from_json_str("{not json"),
            Err(ConvertError::Json(_))
        ));
    }
}
