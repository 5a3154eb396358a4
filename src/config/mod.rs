//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → InMemoryProfileRegistry::from_config (profiles)
//!     → DeploymentUnit::from_config (deployment forest)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All sections have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::AppConfig;
pub use schema::DeploymentConfig;
pub use schema::ObservabilityConfig;
pub use schema::ProfileConfig;
pub use schema::ResourceConfig;
