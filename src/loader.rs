use crate::config::ConvertConfig;
use crate::error::{ConvertError, Result};
use crate::model::ServiceTemplate;
use crate::params::{AutomationParameters, DEFAULT_SCHEMA_COMPILER, SchemaGroupings};
use crate::projector::Projector;
use crate::xml::XmlDocument;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// File locations for a conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionInputs {
    /// The TOSCA-like service template (YAML).
    pub service_template: PathBuf,
    /// The `vnf-info` skeleton (XML).
    pub template: PathBuf,
    /// Automation parameter document (JSON).
    pub automation: Option<PathBuf>,
    /// Schema providing parameter groupings (YIN, or anything the compiler accepts).
    pub schema: Option<PathBuf>,
    pub schema_compiler: String,
}

/// Everything a projection needs, loaded into memory.
#[derive(Debug, Clone)]
pub struct LoadedInputs {
    pub service_template: ServiceTemplate,
    pub document: XmlDocument,
    pub automation: AutomationParameters,
    pub schema: Option<SchemaGroupings>,
}

impl ConversionInputs {
    pub fn new(service_template: impl Into<PathBuf>, template: impl Into<PathBuf>) -> Self {
        Self {
            service_template: service_template.into(),
            template: template.into(),
            automation: None,
            schema: None,
            schema_compiler: DEFAULT_SCHEMA_COMPILER.to_string(),
        }
    }

    pub fn with_automation(mut self, automation: Option<PathBuf>) -> Self {
        self.automation = automation;
        self
    }

    pub fn with_schema(mut self, schema: Option<PathBuf>) -> Self {
        self.schema = schema;
        self
    }

    pub fn with_schema_compiler(mut self, compiler: impl Into<String>) -> Self {
        self.schema_compiler = compiler.into();
        self
    }

    /// Reads and parses every input the configured run needs.
    pub fn load(&self, config: &ConvertConfig) -> Result<LoadedInputs> {
        info!("Reading service template {}", self.service_template.display());
        let service_template = ServiceTemplate::from_yaml_str(&read_input(
            &self.service_template,
            "service template",
        )?)?;

        info!("Reading vnf-info template {}", self.template.display());
        let document = XmlDocument::parse(&read_input(&self.template, "vnf-info template")?)?;

        let automation = match &self.automation {
            Some(path) => {
                info!("Reading automation parameters {}", path.display());
                AutomationParameters::from_json_str(&read_input(path, "automation parameters")?)?
            }
            None => AutomationParameters::default(),
        };

        let schema = match (&self.schema, config.parameter_source.uses_schema()) {
            (Some(path), true) => {
                require_exists(path, "schema")?;
                Some(SchemaGroupings::from_schema_file(path, &self.schema_compiler)?)
            }
            (None, true) => {
                return Err(ConvertError::MissingInput(format!(
                    "schema file (required by the {:?} parameter source)",
                    config.parameter_source
                )));
            }
            (Some(path), false) => {
                warn!(
                    "Schema {} ignored by the {:?} parameter source",
                    path.display(),
                    config.parameter_source
                );
                None
            }
            (None, false) => None,
        };

        Ok(LoadedInputs {
            service_template,
            document,
            automation,
            schema,
        })
    }
}

impl LoadedInputs {
    /// Projects the loaded service template onto the loaded document.
    pub fn project(self, config: &ConvertConfig) -> Result<XmlDocument> {
        let mut builder = Projector::builder(&self.service_template, config.clone())
            .with_automation(self.automation);
        if let Some(schema) = self.schema {
            builder = builder.with_schema_groupings(schema);
        }
        builder.build().project(self.document)
    }
}

/// Loads all inputs and runs the projection.
pub fn convert(inputs: &ConversionInputs, config: &ConvertConfig) -> Result<XmlDocument> {
    inputs.load(config)?.project(config)
}

fn require_exists(path: &Path, role: &str) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(ConvertError::MissingInput(format!(
            "{} file '{}' does not exist",
            role,
            path.display()
        )))
    }
}

fn read_input(path: &Path, role: &str) -> Result<String> {
    require_exists(path, role)?;
    fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))
}
