//! Per-unit logging configuration handles.

use std::fmt;
use std::sync::Arc;

use crate::profiles::context::{ConfigurationPersistence, LogContext};

/// Prefix of every handle label.
pub const LABEL_PREFIX: &str = "profile-";

/// Context plus label, consumed by the management model builder.
///
/// One handle is created per profile resolution and shared by clone across
/// the subtree it applies to.
#[derive(Clone)]
pub struct ConfigurationHandle {
    inner: Arc<HandleInner>,
}

struct HandleInner {
    context: LogContext,
    configuration: ConfigurationPersistence,
    label: String,
}

impl ConfigurationHandle {
    pub fn new(context: &LogContext, profile: &str) -> Self {
        Self {
            inner: Arc::new(HandleInner {
                context: context.clone(),
                configuration: context.configuration().clone(),
                label: format!("{LABEL_PREFIX}{profile}"),
            }),
        }
    }

    pub fn context(&self) -> &LogContext {
        &self.inner.context
    }

    pub fn configuration(&self) -> &ConfigurationPersistence {
        &self.inner.configuration
    }

    /// Human-readable label, `profile-<name>`.
    pub fn label(&self) -> &str {
        &self.inner.label
    }

    /// Whether both handles come from the same resolution.
    pub fn same_instance(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for ConfigurationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigurationHandle")
            .field("label", &self.inner.label)
            .field("context", &self.inner.context.id())
            .finish()
    }
}
