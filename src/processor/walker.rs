//! Logging profile resolution over a unit tree.

use crate::deployment::{DeploymentUnit, ManifestMetadataReader, MetadataReader};
use crate::observability::metrics;
use crate::processor::binder::bind_context;
use crate::processor::report::{ResolveReport, UnresolvedProfile};
use crate::profiles::{ConfigurationHandle, LogContext, ProfileRegistry};

/// Binds logging profile contexts and configuration handles to deployment
/// units.
#[derive(Debug, Clone)]
pub struct LoggingProfileProcessor<R, M = ManifestMetadataReader> {
    registry: R,
    metadata: M,
}

impl<R: ProfileRegistry> LoggingProfileProcessor<R> {
    /// Create a processor reading the `Logging-Profile` manifest attribute.
    pub fn new(registry: R) -> Self {
        Self {
            registry,
            metadata: ManifestMetadataReader,
        }
    }
}

impl<R: ProfileRegistry, M: MetadataReader> LoggingProfileProcessor<R, M> {
    pub fn with_metadata_reader(registry: R, metadata: M) -> Self {
        Self { registry, metadata }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Resolve `unit` and, transitively, its subtree.
    ///
    /// A unit's own resolved profile always beats an inherited one: children
    /// are resolved before their parent offers its context to them. Units
    /// declaring nothing pass the nearest resolved profile on to their own
    /// children. A declared profile that does not resolve stops the walk at
    /// that unit.
    pub fn resolve(&self, unit: &mut DeploymentUnit) -> ResolveReport {
        let mut report = ResolveReport::default();
        self.process(unit, None, &mut report);
        report
    }

    fn process(
        &self,
        unit: &mut DeploymentUnit,
        inherited: Option<Inheritance<'_>>,
        report: &mut ResolveReport,
    ) {
        report.visited.push(unit.id().clone());
        metrics::record_unit_visited();

        match self.declared_profile(unit) {
            Some(profile) => match self.registry.get(&profile) {
                Some(context) => {
                    if bind_context(unit, &context, &profile) {
                        report.contexts_bound += 1;
                    }
                    let handle = ConfigurationHandle::new(&context, &profile);
                    let own = Inheritance {
                        context: &context,
                        handle: &handle,
                        profile: &profile,
                    };
                    self.process_children(unit, Some(own), report);
                    attach_handle(unit, &handle, report);
                }
                None => {
                    let resource = unit
                        .root()
                        .map(ToString::to_string)
                        .unwrap_or_default();
                    tracing::warn!(
                        unit = %unit.id(),
                        "Logging profile '{}' was specified for deployment {} but was not found. Using system logging configuration.",
                        profile,
                        resource
                    );
                    metrics::record_profile_not_found(&profile);
                    report.unresolved.push(UnresolvedProfile {
                        unit: unit.id().clone(),
                        profile,
                        resource,
                    });
                }
            },
            None => self.process_children(unit, inherited, report),
        }
    }

    /// Walk the children that have a resource root, then offer `inherited`
    /// to every child. Children resolved first keep their own profile.
    /// Children without a resource root are not walked; their whole subtree
    /// takes the inherited profile.
    fn process_children(
        &self,
        unit: &mut DeploymentUnit,
        inherited: Option<Inheritance<'_>>,
        report: &mut ResolveReport,
    ) {
        for child in unit.children_mut() {
            if child.has_root() {
                self.process(child, inherited, report);
                if let Some(inherited) = inherited {
                    inherited.apply(child, report);
                }
            } else if let Some(inherited) = inherited {
                inherited.apply_to_subtree(child, report);
            }
        }
    }

    fn declared_profile(&self, unit: &DeploymentUnit) -> Option<String> {
        let root = unit.root()?;
        let profile = self.metadata.declared_profile(root)?;
        tracing::debug!("Logging profile '{}' found in {}.", profile, root);
        Some(profile)
    }
}

/// The nearest resolved profile above the unit being walked.
#[derive(Clone, Copy)]
struct Inheritance<'a> {
    context: &'a LogContext,
    handle: &'a ConfigurationHandle,
    profile: &'a str,
}

impl Inheritance<'_> {
    fn apply(&self, unit: &mut DeploymentUnit, report: &mut ResolveReport) {
        if bind_context(unit, self.context, self.profile) {
            report.contexts_bound += 1;
        }
        attach_handle(unit, self.handle, report);
    }

    fn apply_to_subtree(&self, unit: &mut DeploymentUnit, report: &mut ResolveReport) {
        self.apply(unit, report);
        for child in unit.children_mut() {
            self.apply_to_subtree(child, report);
        }
    }
}

fn attach_handle(unit: &mut DeploymentUnit, handle: &ConfigurationHandle, report: &mut ResolveReport) {
    if unit.attach_handle(handle) {
        report.handles_attached += 1;
        metrics::record_handle_attached();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProfileConfig;
    use crate::deployment::{Manifest, ResourceRoot, LOGGING_PROFILE};
    use crate::profiles::InMemoryProfileRegistry;
    use tracing_test::traced_test;

    fn unit(name: &str, profile: Option<&str>) -> DeploymentUnit {
        let mut manifest = Manifest::new();
        if let Some(profile) = profile {
            manifest = manifest.with_attribute(LOGGING_PROFILE, profile);
        }
        DeploymentUnit::new(name).with_root(ResourceRoot::new(name).with_manifest(manifest))
    }

    fn registry(names: &[&str]) -> InMemoryProfileRegistry {
        let registry = InMemoryProfileRegistry::new();
        for name in names {
            registry.add_profile(name, ProfileConfig::default());
        }
        registry
    }

    #[test]
    fn undeclared_root_lets_child_profile_reach_grandchild() {
        let registry = registry(&["alpha"]);
        let x = registry.get("alpha").unwrap();
        let processor = LoggingProfileProcessor::new(registry);

        let mut root = unit("app.ear", None)
            .with_child(unit("c1.war", Some("alpha")).with_child(unit("g1.jar", None)));

        let report = processor.resolve(&mut root);

        assert!(root.bound_context().is_none());
        assert!(root.config_handle().is_none());
        let c1 = root.find("c1.war").unwrap();
        let g1 = root.find("g1.jar").unwrap();
        assert_eq!(c1.bound_context(), Some(&x));
        assert_eq!(g1.bound_context(), Some(&x));
        assert!(c1
            .config_handle()
            .unwrap()
            .same_instance(g1.config_handle().unwrap()));
        assert_eq!(report.contexts_bound, 2);
        assert_eq!(report.handles_attached, 2);
    }

    #[test]
    fn child_profile_overrides_parent_profile() {
        let registry = registry(&["beta", "gamma"]);
        let y = registry.get("beta").unwrap();
        let z = registry.get("gamma").unwrap();
        let processor = LoggingProfileProcessor::new(registry);

        let mut root = unit("app.ear", Some("beta"))
            .with_child(unit("c1.war", None))
            .with_child(unit("c2.war", Some("gamma")).with_child(unit("g2.jar", None)));

        processor.resolve(&mut root);

        assert_eq!(root.bound_context(), Some(&y));
        assert_eq!(root.find("c1.war").unwrap().bound_context(), Some(&y));
        assert_eq!(root.find("c2.war").unwrap().bound_context(), Some(&z));
        assert_eq!(root.find("g2.jar").unwrap().bound_context(), Some(&z));
        assert_eq!(
            root.find("c2.war").unwrap().config_handle().map(|h| h.label()),
            Some("profile-gamma")
        );
        assert_eq!(
            root.find("c1.war").unwrap().config_handle().map(|h| h.label()),
            Some("profile-beta")
        );
    }

    #[traced_test]
    #[test]
    fn unresolved_profile_stops_the_walk() {
        let processor = LoggingProfileProcessor::new(registry(&["alpha"]));

        let mut root = unit("app.ear", Some("missing")).with_child(unit("c3.war", Some("alpha")));

        let report = processor.resolve(&mut root);

        assert!(root.bound_context().is_none());
        assert!(root.config_handle().is_none());
        let c3 = root.find("c3.war").unwrap();
        assert!(c3.bound_context().is_none());
        assert!(c3.config_handle().is_none());
        assert!(!report.was_visited("c3.war"));
        assert_eq!(
            report.unresolved,
            vec![UnresolvedProfile {
                unit: "app.ear".into(),
                profile: "missing".into(),
                resource: "\"app.ear\"".into(),
            }]
        );
        assert!(logs_contain("Logging profile 'missing' was specified for deployment"));
    }

    #[traced_test]
    #[test]
    fn declared_profile_is_logged_at_debug() {
        let processor = LoggingProfileProcessor::new(registry(&["alpha"]));
        let mut root = unit("app.ear", Some("alpha"));

        processor.resolve(&mut root);

        assert!(logs_contain("Logging profile 'alpha' found in \"app.ear\"."));
    }

    #[test]
    fn children_without_root_inherit_but_are_not_walked() {
        let registry = registry(&["alpha"]);
        let x = registry.get("alpha").unwrap();
        let processor = LoggingProfileProcessor::new(registry);

        let mut root = unit("app.ear", Some("alpha"))
            .with_child(DeploymentUnit::new("bare").with_child(unit("deep.jar", Some("alpha"))));

        let report = processor.resolve(&mut root);

        let bare = root.find("bare").unwrap();
        assert_eq!(bare.bound_context(), Some(&x));
        assert!(bare.has_config_handle());
        assert!(!report.was_visited("bare"));
        assert!(!report.was_visited("deep.jar"));
        let deep = root.find("deep.jar").unwrap();
        assert_eq!(deep.bound_context(), Some(&x));
        assert!(deep
            .config_handle()
            .unwrap()
            .same_instance(root.config_handle().unwrap()));
    }

    #[test]
    fn undeclared_parent_skips_children_without_root() {
        let processor = LoggingProfileProcessor::new(registry(&["alpha"]));

        let mut root = unit("app.ear", None)
            .with_child(DeploymentUnit::new("bare").with_child(unit("deep.jar", Some("alpha"))));

        let report = processor.resolve(&mut root);

        assert_eq!(report.visited, vec!["app.ear".into()]);
        assert!(report.is_noop());
    }

    #[test]
    fn second_pass_changes_nothing() {
        let processor = LoggingProfileProcessor::new(registry(&["beta", "gamma"]));
        let mut root = unit("app.ear", Some("beta"))
            .with_child(unit("c1.war", None))
            .with_child(unit("c2.war", Some("gamma")));

        let first = processor.resolve(&mut root);
        assert!(!first.is_noop());
        let before = root.clone();

        let second = processor.resolve(&mut root);
        assert!(second.is_noop());
        for name in ["app.ear", "c1.war", "c2.war"] {
            let (a, b) = (before.find(name).unwrap(), root.find(name).unwrap());
            assert_eq!(a.bound_context(), b.bound_context());
            assert!(a.config_handle().unwrap().same_instance(b.config_handle().unwrap()));
        }
    }

    #[test]
    fn custom_metadata_reader_is_used() {
        let registry = registry(&["web"]);
        let web = registry.get("web").unwrap();
        let reader = |root: &ResourceRoot| {
            root.name().strip_suffix(".war").map(|_| "web".to_string())
        };
        let processor = LoggingProfileProcessor::with_metadata_reader(registry, reader);

        let mut root = DeploymentUnit::new("app.ear")
            .with_root(ResourceRoot::new("app.ear"))
            .with_child(DeploymentUnit::new("shop.war").with_root(ResourceRoot::new("shop.war")));

        processor.resolve(&mut root);

        assert!(root.bound_context().is_none());
        assert_eq!(root.find("shop.war").unwrap().bound_context(), Some(&web));
    }
}
