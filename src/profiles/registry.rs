//! Profile registry: profile name → log context.
//!
//! # Responsibilities
//! - Answer existence checks and lookups by profile name
//! - Own the lifecycle of profile contexts (add/remove)
//!
//! # Design Decisions
//! - Injected into the processor as a trait, never a process global
//! - Lookups are read-only; the in-memory registry is shared via `Arc<DashMap>`
//!   so the embedding process can add or remove profiles concurrently

use std::sync::Arc;

use dashmap::DashMap;

use crate::config::AppConfig;
use crate::config::ProfileConfig;
use crate::profiles::LogContext;

/// Lookup interface used by resolution.
pub trait ProfileRegistry {
    /// Look up the context of a profile.
    fn get(&self, name: &str) -> Option<LogContext>;

    /// Whether a profile with this name is registered.
    fn exists(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

impl<R: ProfileRegistry + ?Sized> ProfileRegistry for Arc<R> {
    fn get(&self, name: &str) -> Option<LogContext> {
        (**self).get(name)
    }

    fn exists(&self, name: &str) -> bool {
        (**self).exists(name)
    }
}

/// A thread-safe, clonable registry backed by a concurrent map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileRegistry {
    inner: Arc<DashMap<String, LogContext>>,
}

impl InMemoryProfileRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry holding one context per configured profile.
    pub fn from_config(config: &AppConfig) -> Self {
        let registry = Self::new();
        for (name, profile) in &config.profiles {
            registry.add_profile(name, profile.clone());
        }
        tracing::debug!(profiles = registry.len(), "Profile registry initialized");
        registry
    }

    /// Register a profile, replacing any context previously registered
    /// under the same name. Returns the new context.
    pub fn add_profile(&self, name: &str, config: ProfileConfig) -> LogContext {
        let context = LogContext::new(name, config);
        if self.inner.insert(name.to_string(), context.clone()).is_some() {
            tracing::info!(profile = %name, "Replaced logging profile");
        }
        context
    }

    /// Remove a profile. Units already bound keep their context.
    pub fn remove_profile(&self, name: &str) -> Option<LogContext> {
        self.inner.remove(name).map(|(_, context)| context)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Registered profile names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.inner.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }
}

impl ProfileRegistry for InMemoryProfileRegistry {
    fn get(&self, name: &str) -> Option<LogContext> {
        self.inner.get(name).map(|entry| entry.value().clone())
    }

    fn exists(&self, name: &str) -> bool {
        self.inner.contains_key(name)
    }
}
