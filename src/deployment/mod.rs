//! Deployment unit model.
//!
//! # Responsibilities
//! - Represent the tree of deployment units being processed together
//! - Carry each unit's resource root and its manifest metadata
//! - Hold the two logging slots written by the profile processor
//!
//! # Design Decisions
//! - Children are owned, parents are referenced by id (no back-edges)
//! - Logging attachments are explicit optional fields, not a keyed map
//! - Metadata extraction sits behind the `MetadataReader` trait

pub mod metadata;
pub mod resource;
pub mod unit;

pub use metadata::{ManifestMetadataReader, MetadataReader, LOGGING_PROFILE};
pub use resource::{Manifest, ResourceRoot};
pub use unit::{DeploymentUnit, UnitId, UnitSummary};
