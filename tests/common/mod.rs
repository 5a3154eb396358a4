//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::collections::HashMap;

use logging_profiles::config::ProfileConfig;
use logging_profiles::deployment::{Manifest, ResourceRoot, LOGGING_PROFILE};
use logging_profiles::{DeploymentUnit, LogContext, ProfileRegistry};

/// A unit with a resource root whose manifest optionally declares a profile.
pub fn unit(name: &str, profile: Option<&str>) -> DeploymentUnit {
    let mut manifest = Manifest::new();
    if let Some(profile) = profile {
        manifest = manifest.with_attribute(LOGGING_PROFILE, profile);
    }
    DeploymentUnit::new(name).with_root(ResourceRoot::new(name).with_manifest(manifest))
}

/// Registry fake that counts lookups.
#[derive(Default)]
pub struct FakeRegistry {
    contexts: HashMap<String, LogContext>,
    lookups: Cell<usize>,
}

impl FakeRegistry {
    pub fn with_profiles(names: &[&str]) -> Self {
        let mut registry = Self::default();
        for name in names {
            registry
                .contexts
                .insert(name.to_string(), LogContext::new(*name, ProfileConfig::default()));
        }
        registry
    }

    pub fn context(&self, name: &str) -> LogContext {
        self.contexts[name].clone()
    }

    pub fn lookups(&self) -> usize {
        self.lookups.get()
    }
}

impl ProfileRegistry for FakeRegistry {
    fn get(&self, name: &str) -> Option<LogContext> {
        self.lookups.set(self.lookups.get() + 1);
        self.contexts.get(name).cloned()
    }
}

/// Collect every unit of a tree, parent first.
pub fn all_units(root: &DeploymentUnit) -> Vec<&DeploymentUnit> {
    let mut units = vec![root];
    for child in root.children() {
        units.extend(all_units(child));
    }
    units
}
