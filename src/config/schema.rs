//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure: observability
//! settings, the logging profiles known to the registry, and the deployment
//! forest to resolve. All types derive Serde traits for deserialization from
//! config files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Logging profiles keyed by profile name.
    pub profiles: BTreeMap<String, ProfileConfig>,

    /// Top-level deployment units, each the root of its own tree.
    pub deployments: Vec<DeploymentConfig>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default log level when `RUST_LOG` is not set.
    pub log_level: String,

    /// Output format of the fmt layer.
    pub log_format: LogFormat,

    /// Emit ANSI colors.
    pub ansi: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Full,
            ansi: true,
        }
    }
}

/// Supported fmt layer formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
}

/// A logging profile as registered with the profile registry.
///
/// The content is opaque to resolution; it only travels inside the
/// context's configuration view.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProfileConfig {
    /// Root logger level (e.g., "DEBUG").
    pub level: Option<String>,

    /// Handler names attached to the root logger.
    pub handlers: Vec<String>,

    /// Free-form properties.
    pub properties: BTreeMap<String, String>,
}

/// A deployment unit and its sub-deployments.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeploymentConfig {
    /// Unique unit name.
    pub name: String,

    /// Resource root; units without one are never walked into.
    #[serde(default)]
    pub resource: Option<ResourceConfig>,

    /// Sub-deployments.
    #[serde(default)]
    pub children: Vec<DeploymentConfig>,
}

/// Resource root of a deployment unit.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResourceConfig {
    /// Resource name used in diagnostics (e.g., "web.war").
    pub name: String,

    /// Main manifest attributes.
    #[serde(default)]
    pub manifest: Option<BTreeMap<String, String>>,
}
