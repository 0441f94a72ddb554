//! Error taxonomy for dtrack-core.
//!
//! Each layer owns its error type. [`TrackFailure`] is what callers of the
//! tracking pipeline see: the underlying [`TrackError`] paired with a
//! renderable [`TrackingInfo`] whose `error` field is set.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::TrackingInfo;

/// The carrier body did not decode as the expected JSON shape.
#[derive(Debug, Error)]
#[error("unmarshal response: {0}")]
pub struct ParseError(#[from] pub serde_json::Error);

/// Audit log append or read could not complete.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("open log file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("marshal log entry: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("write log file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read log file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The transport collaborator could not produce a usable reply.
#[derive(Debug, Error)]
pub enum TransportError {
    /// No response was received at all.
    #[error("request failed: {0}")]
    Request(String),

    /// A status line arrived but the body could not be read.
    #[error("reading response: {message}")]
    Body { status: u16, message: String },
}

impl TransportError {
    /// Status code to record in the audit log; 0 when nothing was received.
    pub fn status_code(&self) -> u16 {
        match self {
            TransportError::Request(_) => 0,
            TransportError::Body { status, .. } => *status,
        }
    }
}

/// Why a tracking lookup failed.
#[derive(Debug, Error)]
pub enum TrackError {
    #[error("tracking ID cannot be empty")]
    EmptyTrackingId,

    #[error("invalid tracking ID {id:?}: {reason}")]
    InvalidTrackingId { id: String, reason: &'static str },

    #[error("encode request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("HTTP {0}")]
    Status(u16),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl TrackError {
    /// True for failures rejected before any transport or log I/O.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TrackError::EmptyTrackingId | TrackError::InvalidTrackingId { .. }
        )
    }

    /// Human-readable message for the failure record.
    pub fn display_message(&self) -> String {
        match self {
            TrackError::EmptyTrackingId | TrackError::InvalidTrackingId { .. } => self.to_string(),
            TrackError::Encode(e) => format!("Failed to build request: {e}"),
            TrackError::Transport(e) => format!("Failed to query DTDC: {e}"),
            TrackError::Status(code) => format!("HTTP {code}: Request failed"),
            TrackError::Parse(e) => format!("Failed to parse response: {e}"),
        }
    }
}

/// A failed lookup: the cause plus a record the caller can still render.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct TrackFailure {
    pub info: TrackingInfo,
    pub source: TrackError,
}

impl From<TrackError> for TrackFailure {
    fn from(source: TrackError) -> Self {
        Self {
            info: TrackingInfo::failed(source.display_message()),
            source,
        }
    }
}

impl TrackFailure {
    pub fn into_info(self) -> TrackingInfo {
        self.info
    }
}
