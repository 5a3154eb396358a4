//! Idempotent context binding.

use crate::deployment::DeploymentUnit;
use crate::observability::metrics;
use crate::profiles::LogContext;

/// Bind `context` to `unit` unless the unit already has a context.
///
/// Returns `true` if the binding was made. An existing binding, explicit or
/// inherited, is never replaced.
pub fn bind_context(unit: &mut DeploymentUnit, context: &LogContext, profile: &str) -> bool {
    if !unit.set_context_if_absent(context) {
        return false;
    }

    match unit.root() {
        Some(root) => tracing::trace!(
            unit = %unit.id(),
            "Registering log context '{}' on {} for profile '{}'",
            context,
            root,
            profile
        ),
        None => tracing::trace!(
            unit = %unit.id(),
            "Registering log context '{}' on unit without resource root for profile '{}'",
            context,
            profile
        ),
    }
    metrics::record_context_bound();
    true
}
