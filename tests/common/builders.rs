//! Test builders — ergonomic constructors for carrier payloads and logs.
//!
//! These builders favour readability in assertions over flexibility. They
//! panic on invalid input rather than returning `Result`.

use dtrack_core::AuditLog;
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// CarrierBodyBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for carrier response bodies.
///
/// ```rust
/// let body = CarrierBodyBuilder::new()
///     .header("currentStatusDescription", "In Transit")
///     .milestone("Picked Up", "A")
///     .status("ANDHERI", "MUMBAI", "Picked Up", "<b>ok</b>")
///     .build();
/// ```
#[derive(Default)]
pub struct CarrierBodyBuilder {
    header: serde_json::Map<String, Value>,
    milestones: Vec<Value>,
    statuses: Vec<Value>,
}

impl CarrierBodyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.header.insert(key.to_string(), value.into());
        self
    }

    pub fn milestone(mut self, name: &str, status: &str) -> Self {
        self.milestones.push(json!({
            "mileName": name,
            "mileLocationName": format!("{name} HUB"),
            "mileStatusDateTime": "2024-01-15 10:00:00.0",
            "mileStatus": status,
        }));
        self
    }

    pub fn status(mut self, branch: &str, city: &str, description: &str, remarks: &str) -> Self {
        self.statuses.push(json!({
            "actBranchName": branch,
            "actCityName": city,
            "statusDescription": description,
            "remarks": remarks,
            "statusTimestamp": "2024-01-15 10:00:00",
        }));
        self
    }

    pub fn build_value(self) -> Value {
        json!({
            "statusCode": 200,
            "header": self.header,
            "milestones": self.milestones,
            "statuses": self.statuses,
        })
    }

    pub fn build(self) -> Vec<u8> {
        serde_json::to_vec(&self.build_value()).unwrap()
    }
}

// ---------------------------------------------------------------------------
// Audit log helpers
// ---------------------------------------------------------------------------

/// A fresh audit log inside its own temp directory. Keep the `TempDir`
/// alive for as long as the log is used.
pub fn temp_log() -> (tempfile::TempDir, AuditLog) {
    let dir = tempfile::tempdir().unwrap();
    let log = AuditLog::new(dir.path().join("dtdc_log.jsonl"));
    (dir, log)
}

/// Append one successful interaction per identifier, in order.
pub fn append_lookups(log: &AuditLog, ids: &[&str]) {
    for id in ids {
        let request = json!({"trackType": "cnno", "trackNumber": id}).to_string();
        log.append(id, request.as_bytes(), Some(b"{}"), 200, None)
            .unwrap();
    }
}
