//! dtrack — DTDC shipment tracking.
//!
//! The binary is a thin shell over [`dtrack_core`]. This library half wires
//! configuration to a ready [`Tracker`](dtrack_core::Tracker) and exposes the
//! optional HTTP facade so integration tests can drive both directly.
//!
//! # Architecture
//!
//! ```text
//! CLI / HTTP ──► Tracker ──► DtdcClient (carrier)
//!                   │
//!                   ├──► Normalizer
//!                   └──► AuditLog ──► recent searches
//! ```

pub mod app;
pub mod server;
