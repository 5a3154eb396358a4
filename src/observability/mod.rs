//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! processor (walker, binder) produces:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters)
//!
//! Consumers:
//!     → stdout via the fmt layer
//!     → whatever metrics recorder the embedding process installs
//! ```

pub mod logging;
pub mod metrics;
