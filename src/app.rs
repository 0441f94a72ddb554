//! Assembly of a [`Tracker`] from [`Config`].

use std::sync::Arc;

use dtrack_carrier::DtdcClient;
use dtrack_core::config::Config;
use dtrack_core::{AuditLog, Tracker, Validation};

/// Build the production tracker: DTDC transport plus the configured log.
pub fn build_tracker(config: &Config) -> anyhow::Result<Tracker> {
    let client = DtdcClient::new(&config.carrier)?;
    tracing::debug!(
        url = client.url(),
        audit_log = %config.audit.path.display(),
        strict = config.lookup.strict,
        "tracker configured"
    );
    Ok(Tracker::new(Arc::new(client), AuditLog::new(config.audit.path.clone()))
        .with_validation(validation(config)))
}

pub fn validation(config: &Config) -> Validation {
    if config.lookup.strict {
        Validation::Strict
    } else {
        Validation::NonEmpty
    }
}
