//! Tracking pipeline: validate → transport → audit log → normalize.
//!
//! [`Tracker`] owns no network code. The carrier call goes through the
//! [`Transport`] trait so the HTTP client lives in `dtrack-carrier` and tests
//! can substitute a scripted one.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{TrackError, TrackFailure, TransportError};
use crate::normalizer;
use crate::store::AuditLog;
use crate::types::{TrackRequest, TrackingInfo};

/// Raw reply from the carrier endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarrierReply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl CarrierReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one serialized [`TrackRequest`] to the carrier.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, payload: &[u8]) -> Result<CarrierReply, TransportError>;
}

/// How tracking identifiers are checked before any I/O.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Validation {
    /// Only reject empty identifiers.
    #[default]
    NonEmpty,
    /// Additionally require 8–20 ASCII alphanumerics.
    Strict,
}

impl Validation {
    fn check(self, raw: &str) -> Result<String, TrackError> {
        let id = raw.trim();
        if id.is_empty() {
            return Err(TrackError::EmptyTrackingId);
        }
        if self == Validation::Strict {
            let reason = if !(8..=20).contains(&id.len()) {
                Some("must be between 8 and 20 characters")
            } else if !id.bytes().all(|b| b.is_ascii_alphanumeric()) {
                Some("can only contain letters and numbers")
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(TrackError::InvalidTrackingId {
                    id: id.to_string(),
                    reason,
                });
            }
        }
        Ok(id.to_string())
    }
}

pub struct Tracker {
    transport: Arc<dyn Transport>,
    log: Arc<AuditLog>,
    validation: Validation,
}

impl Tracker {
    pub fn new(transport: Arc<dyn Transport>, log: AuditLog) -> Self {
        Self {
            transport,
            log: Arc::new(log),
            validation: Validation::default(),
        }
    }

    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    pub fn audit_log(&self) -> &AuditLog {
        &self.log
    }

    /// Look up one shipment.
    ///
    /// Every failure still carries a [`TrackingInfo`] with `error` set. The
    /// audit log is written for every attempt that reaches the transport.
    /// Appends run on tokio's blocking pool and finish before this returns.
    /// A failed append is logged and otherwise ignored.
    pub async fn track_shipment(&self, tracking_id: &str) -> Result<TrackingInfo, TrackFailure> {
        let id = self.validation.check(tracking_id)?;

        let payload = TrackRequest::consignment(&id)
            .encode()
            .map_err(TrackError::Encode)?;

        tracing::info!(tracking_id = %id, "querying carrier");
        let reply = match self.transport.send(&payload).await {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!(tracking_id = %id, error = %err, "carrier request failed");
                self.record(&id, &payload, None, err.status_code(), Some(err.to_string()))
                    .await;
                return Err(TrackError::from(err).into());
            }
        };

        if !reply.is_success() {
            let error = format!(
                "status {}: {}",
                reply.status,
                String::from_utf8_lossy(&reply.body)
            );
            self.record(&id, &payload, Some(&reply.body), reply.status, Some(error))
                .await;
            tracing::warn!(tracking_id = %id, status = reply.status, "carrier returned failure status");
            return Err(TrackError::Status(reply.status).into());
        }

        self.record(&id, &payload, Some(&reply.body), reply.status, None)
            .await;

        let info = normalizer::normalize(&reply.body, &id).map_err(|err| {
            tracing::warn!(tracking_id = %id, error = %err, "carrier response did not decode");
            TrackFailure::from(TrackError::from(err))
        })?;

        tracing::debug!(
            tracking_id = %id,
            milestones = info.milestones.len(),
            events = info.timeline.len(),
            delivered = info.is_delivered,
            "shipment normalized"
        );
        Ok(info)
    }

    /// Recent distinct identifiers, newest first. Read failures yield an
    /// empty list.
    pub fn recent_searches(&self, limit: i64) -> Vec<String> {
        self.log
            .recent_unique_tracking_numbers(limit)
            .unwrap_or_else(|err| {
                tracing::warn!(error = %err, "could not read audit log");
                Vec::new()
            })
    }

    async fn record(
        &self,
        id: &str,
        request: &[u8],
        response: Option<&[u8]>,
        status_code: u16,
        error: Option<String>,
    ) {
        let log = Arc::clone(&self.log);
        let id = id.to_string();
        let request = request.to_vec();
        let response = response.map(<[u8]>::to_vec);

        let appended = tokio::task::spawn_blocking(move || {
            log.append(&id, &request, response.as_deref(), status_code, error.as_deref())
                .map_err(|err| (id, err))
        })
        .await;

        match appended {
            Ok(Ok(_)) => {}
            Ok(Err((id, err))) => tracing::warn!(
                tracking_id = %id,
                path = %self.log.path().display(),
                error = %err,
                "audit log append failed"
            ),
            Err(err) => tracing::warn!(error = %err, "audit log append task failed"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
