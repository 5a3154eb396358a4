//! Declared-profile metadata extraction.

use crate::deployment::resource::ResourceRoot;

/// Manifest main attribute naming the logging profile of a unit.
pub const LOGGING_PROFILE: &str = "Logging-Profile";

/// Reads the logging profile a resource root declares, if any.
pub trait MetadataReader {
    fn declared_profile(&self, root: &ResourceRoot) -> Option<String>;
}

/// Reads the `Logging-Profile` main attribute of the root's manifest.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestMetadataReader;

impl MetadataReader for ManifestMetadataReader {
    fn declared_profile(&self, root: &ResourceRoot) -> Option<String> {
        root.manifest()?
            .main_attribute(LOGGING_PROFILE)
            .map(str::to_string)
    }
}

impl<F> MetadataReader for F
where
    F: Fn(&ResourceRoot) -> Option<String>,
{
    fn declared_profile(&self, root: &ResourceRoot) -> Option<String> {
        self(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deployment::resource::Manifest;

    #[test]
    fn reads_logging_profile_attribute() {
        let root = ResourceRoot::new("app.ear")
            .with_manifest(Manifest::new().with_attribute(LOGGING_PROFILE, "alpha"));
        assert_eq!(
            ManifestMetadataReader.declared_profile(&root),
            Some("alpha".to_string())
        );
    }

    #[test]
    fn absent_manifest_or_attribute_is_no_declaration() {
        let bare = ResourceRoot::new("a.jar");
        let other = ResourceRoot::new("b.jar")
            .with_manifest(Manifest::new().with_attribute("Class-Path", "lib/"));

        assert_eq!(ManifestMetadataReader.declared_profile(&bare), None);
        assert_eq!(ManifestMetadataReader.declared_profile(&other), None);
    }

    #[test]
    fn closures_are_readers() {
        let reader = |root: &ResourceRoot| Some(format!("{}-profile", root.name()));
        assert_eq!(
            reader.declared_profile(&ResourceRoot::new("x")),
            Some("x-profile".to_string())
        );
    }
}
