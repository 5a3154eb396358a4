//! Logging profiles subsystem.
//!
//! # Data Flow
//! ```text
//! [profiles.<name>] config
//!     → registry.rs (name → LogContext)
//!     → context.rs (LogContext + ConfigurationPersistence view)
//!     → handle.rs (ConfigurationHandle, "profile-<name>")
//!     → attached to deployment units by the processor
//! ```

pub mod context;
pub mod handle;
pub mod registry;

pub use context::{ConfigurationPersistence, ContextId, LogContext};
pub use handle::ConfigurationHandle;
pub use registry::{InMemoryProfileRegistry, ProfileRegistry};
