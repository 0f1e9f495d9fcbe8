//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the vnfinfo crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use vnfinfo::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let inputs = ConversionInputs::new("service_template.yaml", "vnf_info_template.xml")
//!     .with_automation(Some("automation.json".into()));
//! let document = convert(&inputs, &ConvertConfig::default())?;
//! document.write_to("out/vnf_info.xml", false)?;
//! # Ok(())
//! # }
//! ```

// Conversion pipeline
pub use crate::config::{ConvertConfig, ParameterSource};
pub use crate::loader::{ConversionInputs, LoadedInputs, convert};
pub use crate::projector::blocks::{
    AdditionalParameterBlock, IpVersion, ToElement, VduBlock, VduConnectionPoint,
    VirtualLinkBlock, VnfdConnectionPointBlock,
};
pub use crate::projector::{ProjectionSummary, Projector};
pub use crate::resolver::{ConnectionPoints, RelationshipResolver, resolve_connection_points};

// Input model
pub use crate::model::{
    IntoServiceTemplate, NodeClassifier, NodeKind, NodeTemplate, ServiceTemplate,
    SubstitutionRequirement,
};
pub use crate::params::{AutomationParameters, SchemaGroupings};

// Document model
pub use crate::xml::{Element, ElementExt, XMLNode, XmlDocument};

// Error types
pub use crate::error::ConvertError;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
