//! Resource roots and their manifest metadata.

use std::collections::BTreeMap;
use std::fmt;

use crate::config::ResourceConfig;

/// Main attributes of a packaging manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    main_attributes: BTreeMap<String, String>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a main attribute, replacing any attribute whose name differs only
    /// in case.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.main_attributes
            .retain(|key, _| !key.eq_ignore_ascii_case(&name));
        self.main_attributes.insert(name, value.into());
        self
    }

    /// Look up a main attribute. Attribute names are case-insensitive.
    pub fn main_attribute(&self, name: &str) -> Option<&str> {
        self.main_attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl From<BTreeMap<String, String>> for Manifest {
    fn from(attributes: BTreeMap<String, String>) -> Self {
        attributes
            .into_iter()
            .fold(Self::new(), |manifest, (name, value)| {
                manifest.with_attribute(name, value)
            })
    }
}

/// The root resource of a deployment unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRoot {
    name: String,
    manifest: Option<Manifest>,
}

impl ResourceRoot {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            manifest: None,
        }
    }

    pub fn with_manifest(mut self, manifest: Manifest) -> Self {
        self.manifest = Some(manifest);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn manifest(&self) -> Option<&Manifest> {
        self.manifest.as_ref()
    }
}

impl From<&ResourceConfig> for ResourceRoot {
    fn from(config: &ResourceConfig) -> Self {
        Self {
            name: config.name.clone(),
            manifest: config.manifest.clone().map(Manifest::from),
        }
    }
}

impl fmt::Display for ResourceRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_lookup_ignores_case() {
        let manifest = Manifest::new().with_attribute("Logging-Profile", "alpha");

        assert_eq!(manifest.main_attribute("Logging-Profile"), Some("alpha"));
        assert_eq!(manifest.main_attribute("logging-profile"), Some("alpha"));
        assert_eq!(manifest.main_attribute("Class-Path"), None);
    }

    #[test]
    fn attribute_names_differing_in_case_replace_each_other() {
        let manifest = Manifest::new()
            .with_attribute("Logging-Profile", "alpha")
            .with_attribute("logging-profile", "beta");

        assert_eq!(manifest.main_attribute("Logging-Profile"), Some("beta"));
        assert_eq!(manifest, Manifest::new().with_attribute("logging-profile", "beta"));

        let mut attributes = BTreeMap::new();
        attributes.insert("LOGGING-PROFILE".to_string(), "gamma".to_string());
        attributes.insert("Class-Path".to_string(), "lib/".to_string());
        let manifest = Manifest::from(attributes);
        assert_eq!(manifest.main_attribute("logging-profile"), Some("gamma"));
        assert_eq!(manifest.main_attribute("class-path"), Some("lib/"));
    }

    #[test]
    fn builds_from_config() {
        let mut attributes = BTreeMap::new();
        attributes.insert("Logging-Profile".to_string(), "beta".to_string());
        let root = ResourceRoot::from(&ResourceConfig {
            name: "web.war".into(),
            manifest: Some(attributes),
        });

        assert_eq!(root.name(), "web.war");
        assert_eq!(root.to_string(), "\"web.war\"");
        assert_eq!(
            root.manifest().and_then(|m| m.main_attribute("Logging-Profile")),
            Some("beta")
        );
    }
}
