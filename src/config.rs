pub const DEFAULT_VIM: &str = "dmz_openstack_vim";
pub const DEFAULT_ZONE_ID: &str = "nova";

/// Where the ids of `additional-parameters` blocks come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParameterSource {
    /// Keys of `topology_template.inputs`.
    #[default]
    Model,
    /// `leaf` names declared inside schema groupings.
    Schema,
    /// Model inputs followed by schema leaves not already listed.
    Combined,
}

impl ParameterSource {
    pub fn uses_model(self) -> bool {
        matches!(self, ParameterSource::Model | ParameterSource::Combined)
    }

    pub fn uses_schema(self) -> bool {
        matches!(self, ParameterSource::Schema | ParameterSource::Combined)
    }
}

/// Options for a single conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    /// VIM connection written into every `resource-allocation` block.
    pub vim: String,
    pub zone_id: String,
    /// Drop elements left without text or children before writing.
    pub prune: bool,
    pub parameter_source: ParameterSource,
    /// Restricts schema leaves to these groupings; empty means all groupings.
    pub groupings: Vec<String>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            vim: DEFAULT_VIM.to_string(),
            zone_id: DEFAULT_ZONE_ID.to_string(),
            prune: false,
            parameter_source: ParameterSource::default(),
            groupings: Vec::new(),
        }
    }
}

impl ConvertConfig {
    pub fn with_vim(mut self, vim: impl Into<String>) -> Self {
        self.vim = vim.into();
        self
    }

    pub fn with_zone_id(mut self, zone_id: impl Into<String>) -> Self {
        self.zone_id = zone_id.into();
        self
    }

    pub fn with_prune(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }

    pub fn with_parameter_source(mut self, source: ParameterSource) -> Self {
        self.parameter_source = source;
        self
    }

    pub fn with_groupings<I, S>(mut self, groupings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groupings = groupings.into_iter().map(Into::into).collect();
        self
    }
}
