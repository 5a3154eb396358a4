//! Deployment units.

use std::fmt;

use serde::Serialize;

use crate::config::DeploymentConfig;
use crate::deployment::metadata::{ManifestMetadataReader, MetadataReader};
use crate::deployment::resource::ResourceRoot;
use crate::profiles::{ConfigurationHandle, ContextId, LogContext};

/// Identity of a deployment unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct UnitId(String);

impl UnitId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UnitId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A node in a deployment tree.
///
/// Children are owned; the parent is only referenced by id. The two logging
/// slots are written at most once per walk.
#[derive(Debug, Clone)]
pub struct DeploymentUnit {
    id: UnitId,
    parent: Option<UnitId>,
    children: Vec<DeploymentUnit>,
    root: Option<ResourceRoot>,
    bound_context: Option<LogContext>,
    config_handle: Option<ConfigurationHandle>,
}

impl DeploymentUnit {
    /// Create a top-level unit.
    pub fn new(id: impl Into<UnitId>) -> Self {
        Self {
            id: id.into(),
            parent: None,
            children: Vec::new(),
            root: None,
            bound_context: None,
            config_handle: None,
        }
    }

    pub fn with_root(mut self, root: ResourceRoot) -> Self {
        self.root = Some(root);
        self
    }

    /// Add a sub-deployment, recording this unit as its parent.
    pub fn with_child(mut self, child: DeploymentUnit) -> Self {
        self.add_child(child);
        self
    }

    pub fn add_child(&mut self, mut child: DeploymentUnit) {
        child.parent = Some(self.id.clone());
        self.children.push(child);
    }

    /// Build a unit tree from configuration.
    pub fn from_config(config: &DeploymentConfig) -> Self {
        let mut unit = Self::new(config.name.as_str());
        unit.root = config.resource.as_ref().map(ResourceRoot::from);
        for child in &config.children {
            unit.add_child(Self::from_config(child));
        }
        unit
    }

    pub fn id(&self) -> &UnitId {
        &self.id
    }

    pub fn parent(&self) -> Option<&UnitId> {
        self.parent.as_ref()
    }

    pub fn is_sub_deployment(&self) -> bool {
        self.parent.is_some()
    }

    pub fn children(&self) -> &[DeploymentUnit] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [DeploymentUnit] {
        &mut self.children
    }

    pub fn root(&self) -> Option<&ResourceRoot> {
        self.root.as_ref()
    }

    pub fn has_root(&self) -> bool {
        self.root.is_some()
    }

    pub fn bound_context(&self) -> Option<&LogContext> {
        self.bound_context.as_ref()
    }

    pub fn has_bound_context(&self) -> bool {
        self.bound_context.is_some()
    }

    /// Fill the context slot if empty. Returns whether it was filled.
    pub(crate) fn set_context_if_absent(&mut self, context: &LogContext) -> bool {
        if self.bound_context.is_some() {
            return false;
        }
        self.bound_context = Some(context.clone());
        true
    }

    pub fn config_handle(&self) -> Option<&ConfigurationHandle> {
        self.config_handle.as_ref()
    }

    pub fn has_config_handle(&self) -> bool {
        self.config_handle.is_some()
    }

    /// Attach a handle unless one is already present. Returns whether it
    /// was attached.
    pub fn attach_handle(&mut self, handle: &ConfigurationHandle) -> bool {
        if self.config_handle.is_some() {
            return false;
        }
        self.config_handle = Some(handle.clone());
        true
    }

    /// Clear both logging slots on this unit and its subtree. Returns how
    /// many units had a bound context.
    pub(crate) fn clear_logging(&mut self) -> usize {
        let mut released = usize::from(self.bound_context.take().is_some());
        self.config_handle = None;
        for child in &mut self.children {
            released += child.clear_logging();
        }
        released
    }

    /// Depth-first search for a unit in this subtree.
    pub fn find(&self, id: &str) -> Option<&DeploymentUnit> {
        if self.id.as_str() == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Snapshot of the subtree for reporting, reading declared profiles from
    /// the `Logging-Profile` manifest attribute.
    pub fn summary(&self) -> UnitSummary {
        self.summary_with(&ManifestMetadataReader)
    }

    /// Snapshot of the subtree, reading declared profiles with `metadata`.
    pub fn summary_with(&self, metadata: &dyn MetadataReader) -> UnitSummary {
        UnitSummary {
            name: self.id.clone(),
            resource: self.root.as_ref().map(|r| r.name().to_string()),
            declared_profile: self
                .root
                .as_ref()
                .and_then(|root| metadata.declared_profile(root)),
            bound_context: self.bound_context.as_ref().map(|ctx| BoundContextSummary {
                id: ctx.id(),
                profile: ctx.profile().to_string(),
            }),
            handle: self.config_handle.as_ref().map(|h| h.label().to_string()),
            children: self
                .children
                .iter()
                .map(|child| child.summary_with(metadata))
                .collect(),
        }
    }
}

/// Serializable view of a unit and its logging attachments.
#[derive(Debug, Clone, Serialize)]
pub struct UnitSummary {
    pub name: UnitId,
    pub resource: Option<String>,
    pub declared_profile: Option<String>,
    pub bound_context: Option<BoundContextSummary>,
    pub handle: Option<String>,
    pub children: Vec<UnitSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoundContextSummary {
    pub id: ContextId,
    pub profile: String,
}
