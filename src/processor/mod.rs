//! Logging profile processor.
//!
//! # Data Flow
//! ```text
//! deploy(unit)                       (phase.rs: skip sub-deployments, bound units)
//!     → resolve(unit)                (walker.rs: parent-first tree walk)
//!         → MetadataReader           (declared "Logging-Profile")
//!         → ProfileRegistry          (name → LogContext)
//!         → bind_context             (binder.rs: first binding wins)
//!         → ConfigurationHandle      (one per resolved profile, shared downward)
//!     → ResolveReport                (report.rs)
//! ```
//!
//! # Design Decisions
//! - Children are resolved before the parent offers them its context, so the
//!   nearest resolved profile wins
//! - A declared but unknown profile halts the walk for that branch only
//! - No errors are returned; problems are logged and reported

pub mod binder;
pub mod phase;
pub mod report;
pub mod walker;

pub use binder::bind_context;
pub use phase::{DeployOutcome, SkipReason};
pub use report::{ResolveReport, UnresolvedProfile};
pub use walker::LoggingProfileProcessor;
