//! # vnfinfo - Service Template to VNF Info Converter
//!
//! **vnfinfo** turns a TOSCA-like VNF service template into a SOL6 `vnf-info`
//! deployment document. It reads the template's node graph (compute nodes,
//! connection points, virtual links, substitution mappings), works out which
//! connection points belong to which compute node, and appends the matching
//! XML blocks to a `vnf-info` skeleton.
//!
//! ## Core Workflow
//!
//! 1.  **Load the service template**: Parse YAML into a [`model::ServiceTemplate`], or
//!     implement [`model::IntoServiceTemplate`] for your own format.
//! 2.  **Load the skeleton**: Parse the `vnf-info` template into an [`xml::XmlDocument`].
//! 3.  **Project**: Use [`projector::Projector::builder`] to attach automation values and
//!     schema groupings, then call `project` to append every block.
//! 4.  **Write**: Pretty-print the document to a file or standard output.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vnfinfo::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let yaml = std::fs::read_to_string("service_template.yaml")?;
//!     let template = ServiceTemplate::from_yaml_str(&yaml)?;
//!     let skeleton = XmlDocument::from_file("vnf_info_template.xml")?;
//!     let automation = AutomationParameters::from_file("automation.json")?;
//!
//!     let config = ConvertConfig::default().with_vim("lab_vim");
//!     let projector = Projector::builder(&template, config)
//!         .with_automation(automation)
//!         .build();
//!
//!     let document = projector.project(skeleton)?;
//!     println!("{}", ProjectionSummary::of(&document));
//!     print!("{}", document.to_pretty_string(false)?);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod params;
pub mod prelude;
pub mod projector;
pub mod resolver;
pub mod xml;
