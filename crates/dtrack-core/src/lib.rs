//! dtrack-core — shipment tracking core library.
//!
//! This crate holds everything with real invariants: the carrier response
//! normalizer, the append-only audit log, and the pipeline tying them to a
//! pluggable transport.
//!
//! # Architecture
//!
//! ```text
//! Transport ──► Tracker ──► Normalizer ──► TrackingInfo
//!                  │
//!                  └──► AuditLog (JSONL) ──► recent searches
//! ```
//!
//! The normalizer is pure. The audit log is appended for every attempt that
//! reaches the transport, whether or not it succeeded.

pub mod config;
pub mod error;
pub mod normalizer;
pub mod store;
pub mod tracker;
pub mod types;

pub use error::{ParseError, StoreError, TrackError, TrackFailure, TransportError};
pub use store::{AuditEntry, AuditLog};
pub use tracker::{CarrierReply, Tracker, Transport, Validation};
pub use types::{Milestone, TimelineEvent, TrackingInfo};
