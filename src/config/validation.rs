//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (known log levels)
//! - Check unit identity (names unique across the whole forest)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - A manifest naming an unknown profile is not an error here; resolution
//!   reports it as a warning at deploy time

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::{AppConfig, DeploymentConfig};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// A single semantic configuration problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unknown log level '{0}'")]
    InvalidLogLevel(String),

    #[error("profile name must not be empty")]
    EmptyProfileName,

    #[error("deployment unit name must not be empty")]
    EmptyUnitName,

    #[error("duplicate deployment unit name '{0}'")]
    DuplicateUnitName(String),

    #[error("resource root of '{0}' has an empty name")]
    EmptyResourceName(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if config.profiles.keys().any(|name| name.trim().is_empty()) {
        errors.push(ValidationError::EmptyProfileName);
    }

    let mut seen = HashSet::new();
    for deployment in &config.deployments {
        validate_unit(deployment, &mut seen, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_unit<'a>(
    unit: &'a DeploymentConfig,
    seen: &mut HashSet<&'a str>,
    errors: &mut Vec<ValidationError>,
) {
    if unit.name.trim().is_empty() {
        errors.push(ValidationError::EmptyUnitName);
    } else if !seen.insert(unit.name.as_str()) {
        errors.push(ValidationError::DuplicateUnitName(unit.name.clone()));
    }

    if let Some(resource) = &unit.resource {
        if resource.name.trim().is_empty() {
            errors.push(ValidationError::EmptyResourceName(unit.name.clone()));
        }
    }

    for child in &unit.children {
        validate_unit(child, seen, errors);
    }
}
