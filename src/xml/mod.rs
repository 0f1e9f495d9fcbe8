//! The `vnf-info` document: an [`xmltree`] element tree plus the helpers the
//! projector needs to grow it and write it out.

mod tree;

pub use tree::ElementExt;
pub use xmltree::{Element, XMLNode};

use crate::error::{ConvertError, Result};
use std::fs;
use std::path::Path;
use xmltree::EmitterConfig;

/// A whole XML document, owned by a single conversion run.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlDocument {
    root: Element,
}

impl XmlDocument {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// Parses a document. Text is kept exactly as written; whitespace-only
    /// runs between elements are dropped.
    pub fn parse(xml: &str) -> Result<Self> {
        Element::parse(xml.as_bytes())
            .map(Self::new)
            .map_err(ConvertError::xml)
    }

    /// Loads and parses an XML file. The file handle is closed before parsing.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))?;
        Self::parse(&content)
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn into_root(self) -> Element {
        self.root
    }

    /// Serializes the document with a UTF-8 declaration and tab indentation.
    /// With `prune`, blank elements are dropped first.
    pub fn to_pretty_string(&self, prune: bool) -> Result<String> {
        if prune {
            let mut pruned = self.root.clone();
            pruned.prune_empty();
            write_pretty(&pruned)
        } else {
            write_pretty(&self.root)
        }
    }

    /// Writes the document to `path`, creating missing parent directories.
    pub fn write_to(&self, path: impl AsRef<Path>, prune: bool) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ConvertError::io(parent, e))?;
        }
        let content = self.to_pretty_string(prune)?;
        fs::write(path, content).map_err(|e| ConvertError::io(path, e))
    }
}

fn write_pretty(root: &Element) -> Result<String> {
    let config = EmitterConfig::new()
        .perform_indent(true)
        .indent_string("\t");
    let mut buffer = Vec::new();
    root.write_with_config(&mut buffer, config)
        .map_err(ConvertError::xml)?;
    buffer.push(b'\n');
    String::from_utf8(buffer).map_err(ConvertError::xml)
}
