//! Logging profile resolution for deployment unit trees.

pub mod config;
pub mod deployment;
pub mod observability;
pub mod processor;
pub mod profiles;

pub use config::schema::AppConfig;
pub use deployment::DeploymentUnit;
pub use processor::LoggingProfileProcessor;
pub use profiles::{ConfigurationHandle, InMemoryProfileRegistry, LogContext, ProfileRegistry};
