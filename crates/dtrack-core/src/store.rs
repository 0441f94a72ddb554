//! Store — append-only JSONL audit log of every carrier interaction.
//!
//! One [`AuditEntry`] per line. Entries are never rewritten; the file grows
//! until something outside dtrack rotates it. Reads rescan the whole file so
//! there is no index to keep consistent with it.

use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StoreError;

/// Limit used by [`AuditLog::recent_unique_tracking_numbers`] for `limit <= 0`.
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// One carrier interaction as persisted on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// UTC, `YYYY-MM-DDTHH:MM:SSZ`.
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub track_number: String,
    #[serde(default)]
    pub request: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
    /// 0 when no response was received.
    #[serde(default)]
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuditEntry {
    /// Build an entry stamped with the current UTC time.
    pub fn record(
        track_number: &str,
        request: &[u8],
        response: Option<&[u8]>,
        status_code: u16,
        error: Option<&str>,
    ) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            track_number: track_number.to_string(),
            request: embed_payload(request),
            response: response.map(embed_payload),
            status_code,
            error: error.map(str::to_string),
        }
    }
}

/// Keep JSON payloads as JSON; anything else becomes a JSON string.
fn embed_payload(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

/// Handle to the audit log file at a fixed path.
///
/// The file is opened and closed on every call. Appends from the same
/// process are serialized so each line lands as one contiguous write.
#[derive(Debug)]
pub struct AuditLog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record one interaction. See [`AuditEntry::record`].
    pub fn append(
        &self,
        track_number: &str,
        request: &[u8],
        response: Option<&[u8]>,
        status_code: u16,
        error: Option<&str>,
    ) -> Result<AuditEntry, StoreError> {
        let entry = AuditEntry::record(track_number, request, response, status_code, error);
        self.append_entry(&entry)?;
        Ok(entry)
    }

    /// Serialize `entry` as a single line and append it.
    pub fn append_entry(&self, entry: &AuditEntry) -> Result<(), StoreError> {
        let mut line = serde_json::to_vec(entry)?;
        line.push(b'\n');

        // A poisoned lock only means another append panicked; the file
        // itself is still append-only and safe to write.
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| StoreError::Open {
                path: self.path.clone(),
                source,
            })?;
        file.write_all(&line).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(
            path = %self.path.display(),
            track_number = %entry.track_number,
            status_code = entry.status_code,
            "audit entry appended"
        );
        Ok(())
    }

    /// Most recent distinct tracking numbers, newest first.
    ///
    /// `limit <= 0` means [`DEFAULT_RECENT_LIMIT`]. A missing file is an empty
    /// history. Lines that do not parse and entries with an empty tracking
    /// number are skipped.
    pub fn recent_unique_tracking_numbers(&self, limit: i64) -> Result<Vec<String>, StoreError> {
        let limit = usize::try_from(limit)
            .ok()
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_RECENT_LIMIT);

        let Some(contents) = self.read_all()? else {
            return Ok(Vec::new());
        };

        let mut seen = HashSet::new();
        let mut recent = Vec::new();
        for entry in contents.rsplit(|&b| b == b'\n').filter_map(parse_line) {
            if recent.len() >= limit {
                break;
            }
            if !entry.track_number.is_empty() && seen.insert(entry.track_number.clone()) {
                recent.push(entry.track_number);
            }
        }
        Ok(recent)
    }

    /// Every well-formed entry, oldest first.
    pub fn entries(&self) -> Result<Vec<AuditEntry>, StoreError> {
        Ok(self
            .read_all()?
            .map(|contents| contents.split(|&b| b == b'\n').filter_map(parse_line).collect())
            .unwrap_or_default())
    }

    fn read_all(&self) -> Result<Option<Vec<u8>>, StoreError> {
        match fs::read(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

fn parse_line(line: &[u8]) -> Option<AuditEntry> {
    if line.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    match serde_json::from_slice(line) {
        Ok(entry) => Some(entry),
        Err(e) => {
            tracing::debug!(error = %e, "skipping malformed audit line");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
