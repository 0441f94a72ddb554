//! Core types for dtrack-core.
//!
//! Two families live here: the loosely-shaped carrier payload
//! ([`CarrierResponse`] and its parts), decoded as-is from the DTDC endpoint,
//! and the stable presentation model ([`TrackingInfo`], [`Milestone`],
//! [`TimelineEvent`]) the normalizer produces from it.

use serde::{Deserialize, Deserializer, Serialize};

/// Milestone status flag the carrier uses for "reached".
pub const MILESTONE_COMPLETE: &str = "A";

/// Milestone name that marks the shipment as handed over to the receiver.
pub const DELIVERED_MILESTONE: &str = "Delivered";

/// Placeholder rendered for dates the carrier left blank.
pub const NOT_AVAILABLE: &str = "N/A";

// ---------------------------------------------------------------------------
// Carrier payload (input)
// ---------------------------------------------------------------------------

/// Decode `null` the same way as a missing key.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Top-level body returned by the carrier's domestic tracking endpoint.
///
/// Every field is defaulted: the carrier omits or nulls fields freely and the
/// normalizer, not the decoder, is responsible for coping with that.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierResponse {
    #[serde(default, deserialize_with = "nullable")]
    pub status_code: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub status_description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub error_message: String,
    #[serde(default, deserialize_with = "nullable")]
    pub shipment_no: String,
    #[serde(default, deserialize_with = "nullable")]
    pub header: CarrierHeader,
    #[serde(default, deserialize_with = "nullable")]
    pub milestones: Vec<CarrierMilestone>,
    #[serde(default, deserialize_with = "nullable")]
    pub statuses: Vec<CarrierStatus>,
}

/// Shipment summary block.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierHeader {
    #[serde(default, deserialize_with = "nullable")]
    pub reference_no: String,
    #[serde(default, deserialize_with = "nullable")]
    pub origin_city: String,
    #[serde(default, deserialize_with = "nullable")]
    pub origin_pincode: String,
    #[serde(default, deserialize_with = "nullable")]
    pub destination_city: String,
    #[serde(default, deserialize_with = "nullable")]
    pub destination_pincode: String,
    #[serde(default, deserialize_with = "nullable")]
    pub booking_date: String,
    #[serde(default, deserialize_with = "nullable")]
    pub booking_time: String,
    #[serde(default, deserialize_with = "nullable")]
    pub current_status_code: String,
    #[serde(default, deserialize_with = "nullable")]
    pub current_status_description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub current_status_date: String,
    #[serde(default, deserialize_with = "nullable")]
    pub current_status_time: String,
    #[serde(default, deserialize_with = "nullable")]
    pub shipment_type: String,
    #[serde(default, deserialize_with = "nullable")]
    pub receiver_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub delivered_by: String,
    /// Estimated delivery date.
    #[serde(default, deserialize_with = "nullable")]
    pub ops_edd: String,
    /// Revised estimated delivery date.
    #[serde(default, deserialize_with = "nullable")]
    pub ops_redd: String,
    #[serde(default, deserialize_with = "nullable")]
    pub no_of_pieces: i64,
    #[serde(default, deserialize_with = "nullable")]
    pub current_location_city_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub next_location_city_name: String,
}

/// One entry of the carrier's fixed milestone ladder.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierMilestone {
    #[serde(default, deserialize_with = "nullable")]
    pub mile_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub mile_location_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub mile_status_date_time: String,
    #[serde(default, deserialize_with = "nullable")]
    pub mile_status: String,
    #[serde(default, deserialize_with = "nullable")]
    pub branch_name: String,
}

/// One scan event in the carrier's status history.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierStatus {
    #[serde(default, deserialize_with = "nullable")]
    pub act_branch_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub act_city_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub status_description: String,
    /// Free text; may contain anchor, bold and span markup.
    #[serde(default, deserialize_with = "nullable")]
    pub remarks: String,
    #[serde(default, deserialize_with = "nullable")]
    pub status_timestamp: String,
}

/// Outbound request body for the tracking endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackRequest {
    pub track_type: String,
    pub track_number: String,
}

impl TrackRequest {
    /// Consignment-number lookup, the only kind dtrack issues.
    pub fn consignment(track_number: impl Into<String>) -> Self {
        Self {
            track_type: "cnno".to_string(),
            track_number: track_number.into(),
        }
    }

    /// Wire body for the tracking endpoint.
    pub fn encode(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

// ---------------------------------------------------------------------------
// Normalized record (output)
// ---------------------------------------------------------------------------

/// Display-ready view of one shipment.
///
/// `error` is set if and only if the record describes a failed lookup. A
/// failed record keeps every display field at its zero value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingInfo {
    /// Always the identifier the caller asked about, never the payload's.
    pub tracking_number: String,
    pub reference_no: String,
    pub status: String,
    pub status_date: String,
    pub origin: String,
    pub destination: String,
    pub booking_date: String,
    pub estimated_delivery: String,
    pub current_location: String,
    pub next_location: String,
    pub milestones: Vec<Milestone>,
    pub timeline: Vec<TimelineEvent>,
    pub is_delivered: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TrackingInfo {
    /// A zero-valued record carrying only a human-readable failure.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub name: String,
    pub location: String,
    pub date_time: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub date_time: String,
    /// Always `"<branch>, <city>"`, even when either half is empty.
    pub location: String,
    pub status: String,
    /// Remarks with carrier markup stripped.
    pub details: String,
}
