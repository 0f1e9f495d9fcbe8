use ahash::AHashMap;

/// The role a node template plays in the projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Compute,
    ConnectionPoint,
    VirtualLink,
    Other,
}

impl NodeKind {
    /// Classifies a type tag by suffix, so both `tosca.` and vendor prefixes match.
    pub fn from_type_name(type_name: &str) -> Self {
        if type_name.ends_with("Vdu.Compute") {
            NodeKind::Compute
        } else if type_name.ends_with("VduCp") {
            NodeKind::ConnectionPoint
        } else if type_name.ends_with("VnfVirtualLink") {
            NodeKind::VirtualLink
        } else {
            NodeKind::Other
        }
    }
}

/// Resolves node type tags to a [`NodeKind`], with exact-name overrides taking
/// precedence over the suffix rules.
#[derive(Debug, Clone, Default)]
pub struct NodeClassifier {
    overrides: AHashMap<String, NodeKind>,
}

impl NodeClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mapping(mut self, type_name: &str, kind: NodeKind) -> Self {
        self.insert(type_name, kind);
        self
    }

    pub fn insert(&mut self, type_name: &str, kind: NodeKind) {
        self.overrides.insert(type_name.to_string(), kind);
    }

    pub fn classify(&self, type_name: &str) -> NodeKind {
        self.overrides
            .get(type_name)
            .copied()
            .unwrap_or_else(|| NodeKind::from_type_name(type_name))
    }
}
