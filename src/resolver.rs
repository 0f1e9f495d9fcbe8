use crate::model::{NodeClassifier, NodeKind, NodeTemplate, ServiceTemplate};

/// Connection points bound to one compute node, split by requirement count.
///
/// Both lists keep the declaration order of the service template.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionPoints<'a> {
    /// Bound connection points with more than one requirement entry.
    pub internal: Vec<&'a NodeTemplate>,
    /// Bound connection points with exactly one requirement entry.
    pub external: Vec<&'a NodeTemplate>,
}

impl<'a> ConnectionPoints<'a> {
    pub fn internal_names(&self) -> Vec<&'a str> {
        self.internal.iter().map(|n| n.name.as_str()).collect()
    }

    pub fn external_names(&self) -> Vec<&'a str> {
        self.external.iter().map(|n| n.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.internal.len() + self.external.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Works out which connection-point nodes bind to which compute node.
pub struct RelationshipResolver<'a, 'c> {
    template: &'a ServiceTemplate,
    classifier: &'c NodeClassifier,
}

impl<'a, 'c> RelationshipResolver<'a, 'c> {
    pub fn new(template: &'a ServiceTemplate, classifier: &'c NodeClassifier) -> Self {
        Self {
            template,
            classifier,
        }
    }

    /// All connection-point nodes, in declaration order.
    pub fn connection_point_nodes(
        &self,
    ) -> impl Iterator<Item = &'a NodeTemplate> + use<'a, 'c> {
        let template = self.template;
        let classifier = self.classifier;
        template
            .node_templates
            .iter()
            .filter(move |n| classifier.classify(&n.type_name) == NodeKind::ConnectionPoint)
    }

    /// Connection points whose first requirement's `virtual_binding` names `compute`.
    ///
    /// A connection point without a usable binding is never attributed to any
    /// compute node. No match is not an error; both lists are then empty.
    pub fn resolve(&self, compute: &str) -> ConnectionPoints<'a> {
        let (internal, external): (Vec<_>, Vec<_>) = self
            .connection_point_nodes()
            .filter(|cp| cp.virtual_binding() == Some(compute))
            .partition(|cp| cp.requirements.len() > 1);
        ConnectionPoints { internal, external }
    }

    /// Connection points that no compute node can claim.
    pub fn unbound_connection_points(
        &self,
    ) -> impl Iterator<Item = &'a NodeTemplate> + use<'a, 'c> {
        self.connection_point_nodes()
            .filter(|cp| cp.virtual_binding().is_none())
    }
}

/// Resolves connection points for `compute` using the default suffix classification.
pub fn resolve_connection_points<'a>(
    template: &'a ServiceTemplate,
    compute: &str,
) -> ConnectionPoints<'a> {
    let classifier = NodeClassifier::default();
    RelationshipResolver::new(template, &classifier).resolve(compute)
}
