//! dtrack-carrier — carrier endpoint adapters for dtrack.
//!
//! Each adapter implements [`dtrack_core::Transport`]: it posts the
//! serialized lookup payload and hands back the raw status and body for the
//! core pipeline to log and normalize.

pub mod dtdc;

pub use dtdc::DtdcClient;
