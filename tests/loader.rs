//! Tests for loading inputs from disk and running a whole conversion.
mod common;
use common::*;
use std::fs;
use tempfile::TempDir;
use vnfinfo::prelude::*;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        write_fixture(dir.path(), "service_template.yaml", SERVICE_TEMPLATE_YAML);
        write_fixture(dir.path(), "vnf_info_template.xml", VNF_INFO_TEMPLATE_XML);
        write_fixture(dir.path(), "automation.json", AUTOMATION_JSON);
        write_fixture(dir.path(), "acme-fw.yin", SCHEMA_YIN);
        Self { dir }
    }

    fn inputs(&self) -> ConversionInputs {
        ConversionInputs::new(
            self.dir.path().join("service_template.yaml"),
            self.dir.path().join("vnf_info_template.xml"),
        )
        .with_automation(Some(self.dir.path().join("automation.json")))
    }
}

#[cfg(test)]
mod loader_tests {
    use super::*;

    #[test]
    fn convert_matches_in_memory_projection() {
        let workspace = Workspace::new();

        let converted = convert(&workspace.inputs(), &ConvertConfig::default()).unwrap();

        assert_eq!(converted, project_fixture(ConvertConfig::default()));
    }

    #[test]
    fn missing_service_template_is_missing_input() {
        let workspace = Workspace::new();
        let inputs = ConversionInputs::new(
            workspace.dir.path().join("nope.yaml"),
            workspace.dir.path().join("vnf_info_template.xml"),
        );

        let err = convert(&inputs, &ConvertConfig::default()).unwrap_err();
        assert!(matches!(err, ConvertError::MissingInput(ref msg) if msg.contains("nope.yaml")));
    }

    #[test]
    fn missing_automation_file_is_missing_input() {
        let workspace = Workspace::new();
        let inputs = workspace
            .inputs()
            .with_automation(Some(workspace.dir.path().join("absent.json")));

        assert!(matches!(
            inputs.load(&ConvertConfig::default()),
            Err(ConvertError::MissingInput(_))
        ));
    }

    #[test]
    fn automation_is_optional() {
        let workspace = Workspace::new();
        let inputs = workspace.inputs().with_automation(None);

        let loaded = inputs.load(&ConvertConfig::default()).unwrap();
        assert!(loaded.automation.is_empty());

        let document = loaded.project(&ConvertConfig::default()).unwrap();
        let values: Vec<_> = vnf_info(&document)
            .children_named("additional-parameters")
            .map(|p| p.get_child("value").unwrap().text_content())
            .collect();
        assert_eq!(values, ["", "", ""]);
    }

    #[test]
    fn yin_schema_is_read_directly() {
        let workspace = Workspace::new();
        let inputs = workspace
            .inputs()
            .with_schema(Some(workspace.dir.path().join("acme-fw.yin")))
            .with_schema_compiler("definitely-not-a-schema-compiler");
        let config = ConvertConfig::default().with_parameter_source(ParameterSource::Schema);

        let document = convert(&inputs, &config).unwrap();
        let ids: Vec<_> = vnf_info(&document)
            .children_named("additional-parameters")
            .map(|p| p.get_child("id").unwrap().text_content())
            .collect();
        assert_eq!(ids, ["license_key", "flavor_size", "replicas"]);
    }

    #[test]
    fn schema_source_requires_schema_file() {
        let workspace = Workspace::new();
        let config = ConvertConfig::default().with_parameter_source(ParameterSource::Combined);

        assert!(matches!(
            workspace.inputs().load(&config),
            Err(ConvertError::MissingInput(_))
        ));
    }

    #[test]
    fn schema_is_ignored_for_model_source() {
        let workspace = Workspace::new();
        let inputs = workspace
            .inputs()
            .with_schema(Some(workspace.dir.path().join("acme-fw.yin")));

        let loaded = inputs.load(&ConvertConfig::default()).unwrap();
        assert!(loaded.schema.is_none());
    }

    #[test]
    fn write_to_creates_parent_directories() {
        let workspace = Workspace::new();
        let document = convert(&workspace.inputs(), &ConvertConfig::default()).unwrap();
        let output = workspace.dir.path().join("out/nested/vnf_info.xml");

        document.write_to(&output, false).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.starts_with("<?xml version=\"1.0\""));
        assert!(written.contains("\t<vnf-info>"));
        assert_eq!(written, document.to_pretty_string(false).unwrap());
    }
}
