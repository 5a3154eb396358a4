//! Metrics collection.
//!
//! # Metrics
//! - `logging_profile_units_visited_total` (counter): units walked
//! - `logging_profile_contexts_bound_total` (counter): context bindings
//! - `logging_profile_handles_attached_total` (counter): handle attachments
//! - `logging_profile_not_found_total` (counter): unresolved profiles, by profile
//!
//! # Design Decisions
//! - No exporter is installed here; the embedding process owns the recorder
//! - Without a recorder every update is a no-op

use metrics::counter;

pub fn record_unit_visited() {
    counter!("logging_profile_units_visited_total").increment(1);
}

pub fn record_context_bound() {
    counter!("logging_profile_contexts_bound_total").increment(1);
}

pub fn record_handle_attached() {
    counter!("logging_profile_handles_attached_total").increment(1);
}

pub fn record_profile_not_found(profile: &str) {
    counter!("logging_profile_not_found_total", "profile" => profile.to_string()).increment(1);
}
