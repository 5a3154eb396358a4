//! Log contexts and their configuration views.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;

use crate::config::ProfileConfig;

static NEXT_CONTEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a log context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ContextId(u64);

impl ContextId {
    fn next() -> Self {
        Self(NEXT_CONTEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ctx-{}", self.0)
    }
}

/// Read-only view over the configuration backing a log context.
///
/// Owned by the registry; units only ever hold clones of the `Arc`.
#[derive(Debug, Clone)]
pub struct ConfigurationPersistence {
    inner: Arc<ProfileConfig>,
}

impl ConfigurationPersistence {
    pub fn level(&self) -> Option<&str> {
        self.inner.level.as_deref()
    }

    pub fn handlers(&self) -> &[String] {
        &self.inner.handlers
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.inner.properties.get(key).map(String::as_str)
    }

    /// Whether both views refer to the same underlying configuration.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

/// A bound logging configuration.
///
/// Cheap to clone; equality is identity, so two contexts created for the
/// same profile name are still distinct.
#[derive(Clone)]
pub struct LogContext {
    inner: Arc<LogContextInner>,
}

struct LogContextInner {
    id: ContextId,
    profile: String,
    configuration: ConfigurationPersistence,
}

impl LogContext {
    /// Create a new context for a profile.
    pub fn new(profile: impl Into<String>, config: ProfileConfig) -> Self {
        Self {
            inner: Arc::new(LogContextInner {
                id: ContextId::next(),
                profile: profile.into(),
                configuration: ConfigurationPersistence {
                    inner: Arc::new(config),
                },
            }),
        }
    }

    pub fn id(&self) -> ContextId {
        self.inner.id
    }

    /// Name of the profile this context was created for.
    pub fn profile(&self) -> &str {
        &self.inner.profile
    }

    pub fn configuration(&self) -> &ConfigurationPersistence {
        &self.inner.configuration
    }
}

impl PartialEq for LogContext {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for LogContext {}

impl fmt::Debug for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogContext")
            .field("id", &self.inner.id)
            .field("profile", &self.inner.profile)
            .finish()
    }
}

impl fmt::Display for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.inner.id, self.inner.profile)
    }
}
