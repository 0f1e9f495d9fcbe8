use crate::error::{ConvertError, Result};
use crate::xml::{Element, ElementExt, XmlDocument};
use itertools::Itertools;
use std::fs;
use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

/// Compiler used for schema files that are not already in YIN form.
pub const DEFAULT_SCHEMA_COMPILER: &str = "pyang";

/// A `grouping` statement and the `leaf` names declared under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaGrouping {
    pub name: String,
    pub leaves: Vec<String>,
}

/// Groupings discovered in a compiled (YIN) schema, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaGroupings {
    groupings: Vec<SchemaGrouping>,
}

impl SchemaGroupings {
    pub fn new(groupings: Vec<SchemaGrouping>) -> Self {
        Self { groupings }
    }

    /// Scans a YIN document for groupings.
    ///
    /// Leaves inside containers or lists of a grouping belong to it; a nested
    /// grouping is reported as its own entry.
    pub fn from_yin_str(yin: &str) -> Result<Self> {
        let root = XmlDocument::parse(yin)?.into_root();
        let mut groupings = Vec::new();
        collect_groupings(&root, &mut groupings);
        debug!("Found {} schema groupings", groupings.len());
        Ok(Self { groupings })
    }

    /// Loads groupings from a schema file, compiling it to YIN first unless the
    /// file already has a `.yin` extension.
    pub fn from_schema_file(path: impl AsRef<Path>, compiler: &str) -> Result<Self> {
        let path = path.as_ref();
        let is_yin = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yin"));
        let yin = if is_yin {
            fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))?
        } else {
            compile_to_yin(path, compiler)?
        };
        Self::from_yin_str(&yin)
    }

    pub fn groupings(&self) -> &[SchemaGrouping] {
        &self.groupings
    }

    /// Unique leaf names in document order, limited to `selected` groupings
    /// unless `selected` is empty.
    pub fn leaf_names(&self, selected: &[String]) -> Vec<String> {
        self.groupings
            .iter()
            .filter(|g| selected.is_empty() || selected.contains(&g.name))
            .flat_map(|g| g.leaves.iter().cloned())
            .unique()
            .collect()
    }
}

/// Runs `<compiler> -f yin <path>` and returns its standard output.
pub fn compile_to_yin(path: &Path, compiler: &str) -> Result<String> {
    info!("Compiling schema {} with {}", path.display(), compiler);
    let output = Command::new(compiler)
        .arg("-f")
        .arg("yin")
        .arg(path)
        .output()
        .map_err(|e| ConvertError::SchemaCompiler(format!("could not run '{}': {}", compiler, e)))?;

    if !output.status.success() {
        return Err(ConvertError::SchemaCompiler(format!(
            "'{}' exited with {}: {}",
            compiler,
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }
    String::from_utf8(output.stdout)
        .map_err(|e| ConvertError::SchemaCompiler(format!("output is not UTF-8: {}", e)))
}

fn collect_groupings(element: &Element, out: &mut Vec<SchemaGrouping>) {
    for child in element.elements() {
        if child.name == "grouping" {
            let mut leaves = Vec::new();
            collect_leaves(child, &mut leaves);
            out.push(SchemaGrouping {
                name: child.attributes.get("name").cloned().unwrap_or_default(),
                leaves,
            });
        }
        collect_groupings(child, out);
    }
}

fn collect_leaves(element: &Element, out: &mut Vec<String>) {
    for child in element.elements() {
        match child.name.as_str() {
            "grouping" => {}
            "leaf" => {
                if let Some(name) = child.attributes.get("name") {
                    out.push(name.clone());
                }
            }
            _ => collect_leaves(child, out),
        }
    }
}
