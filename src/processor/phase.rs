//! Deployment phase hooks.
//!
//! The pipeline calls `deploy` for every unit it processes, sub-deployments
//! included; only top-level units with a resource root start a walk.

use serde::Serialize;

use crate::deployment::{DeploymentUnit, MetadataReader};
use crate::processor::report::ResolveReport;
use crate::processor::walker::LoggingProfileProcessor;
use crate::profiles::ProfileRegistry;

/// Why `deploy` did not walk a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// A context is already bound to the unit.
    AlreadyBound,
    /// The unit has no resource root to read metadata from.
    NoResourceRoot,
    /// The unit is walked as part of its top-level unit.
    SubDeployment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployOutcome {
    Processed(ResolveReport),
    Skipped(SkipReason),
}

impl<R: ProfileRegistry, M: MetadataReader> LoggingProfileProcessor<R, M> {
    /// Deployment phase entry point.
    pub fn deploy(&self, unit: &mut DeploymentUnit) -> DeployOutcome {
        let skip = if unit.has_bound_context() {
            Some(SkipReason::AlreadyBound)
        } else if !unit.has_root() {
            Some(SkipReason::NoResourceRoot)
        } else if unit.is_sub_deployment() {
            Some(SkipReason::SubDeployment)
        } else {
            None
        };

        if let Some(reason) = skip {
            tracing::trace!(unit = %unit.id(), reason = ?reason, "Skipping logging profile processing");
            return DeployOutcome::Skipped(reason);
        }

        DeployOutcome::Processed(self.resolve(unit))
    }

    /// Release the logging attachments of `unit` and its subtree.
    ///
    /// Returns how many units had a bound context.
    pub fn undeploy(&self, unit: &mut DeploymentUnit) -> usize {
        let released = unit.clear_logging();
        if released > 0 {
            tracing::debug!(unit = %unit.id(), released, "Released logging profile contexts");
        }
        released
    }
}
