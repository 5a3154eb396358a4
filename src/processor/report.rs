//! Outcome of a resolution pass.

use serde::Serialize;

use crate::deployment::UnitId;

/// A declared profile the registry did not know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedProfile {
    pub unit: UnitId,
    pub profile: String,
    pub resource: String,
}

/// Summary of one `resolve` call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolveReport {
    /// Units visited, in walk order (parent first).
    pub visited: Vec<UnitId>,
    /// Contexts newly bound during the pass.
    pub contexts_bound: usize,
    /// Handles newly attached during the pass.
    pub handles_attached: usize,
    pub unresolved: Vec<UnresolvedProfile>,
}

impl ResolveReport {
    /// True if the pass changed no attachment.
    pub fn is_noop(&self) -> bool {
        self.contexts_bound == 0 && self.handles_attached == 0
    }

    pub fn was_visited(&self, id: &str) -> bool {
        self.visited.iter().any(|v| v.as_str() == id)
    }

    /// Fold another report into this one.
    pub fn merge(&mut self, other: ResolveReport) {
        self.visited.extend(other.visited);
        self.contexts_bound += other.contexts_bound;
        self.handles_attached += other.handles_attached;
        self.unresolved.extend(other.unresolved);
    }
}
