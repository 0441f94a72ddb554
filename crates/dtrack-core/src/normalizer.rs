//! Normalizer — turns raw carrier bytes into a [`TrackingInfo`].
//!
//! The only hard failure is a body that does not decode as the carrier's
//! JSON shape. Everything content-level (odd date formats, stray markup,
//! blank fields) degrades to literal fallback text instead of failing.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::ParseError;
use crate::types::{
    CarrierResponse, Milestone, TimelineEvent, TrackingInfo, DELIVERED_MILESTONE,
    MILESTONE_COMPLETE, NOT_AVAILABLE,
};

/// Rendering used for every successfully parsed date.
const DISPLAY_FORMAT: &str = "%d %b %Y, %I:%M %p";

/// Layouts tried in order, ahead of the RFC 3339 fallback.
const FRACTIONAL_LAYOUT: &str = "%Y-%m-%d %H:%M:%S%.f";
const SECONDS_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

const DATE_LAYOUT: &str = "%Y-%m-%d";

/// Decode `body` and build the presentation record for `tracking_number`.
pub fn normalize(body: &[u8], tracking_number: &str) -> Result<TrackingInfo, ParseError> {
    let resp: CarrierResponse = serde_json::from_slice::<Option<CarrierResponse>>(body)?
        .unwrap_or_default();
    Ok(build(&resp, tracking_number))
}

/// Build the record from an already decoded response.
pub fn build(resp: &CarrierResponse, tracking_number: &str) -> TrackingInfo {
    let header = &resp.header;
    let mut info = TrackingInfo {
        tracking_number: tracking_number.to_string(),
        reference_no: header.reference_no.clone(),
        status: header.current_status_description.clone(),
        status_date: format_date_time(&header.current_status_date, &header.current_status_time),
        origin: format!("{} ({})", header.origin_city, header.origin_pincode),
        destination: format!("{} ({})", header.destination_city, header.destination_pincode),
        booking_date: format_date_time(&header.booking_date, &header.booking_time),
        estimated_delivery: format_date(&header.ops_edd),
        current_location: header.current_location_city_name.clone(),
        next_location: header.next_location_city_name.clone(),
        ..TrackingInfo::default()
    };

    for m in resp.milestones.iter().filter(|m| !m.mile_name.is_empty()) {
        let completed = m.mile_status == MILESTONE_COMPLETE;
        if completed && m.mile_name == DELIVERED_MILESTONE {
            info.is_delivered = true;
        }
        info.milestones.push(Milestone {
            name: m.mile_name.clone(),
            location: m.mile_location_name.clone(),
            date_time: format_date(&m.mile_status_date_time),
            completed,
        });
    }

    info.timeline = resp
        .statuses
        .iter()
        .map(|s| TimelineEvent {
            date_time: format_date(&s.status_timestamp),
            location: format!("{}, {}", s.act_branch_name, s.act_city_name),
            status: s.status_description.clone(),
            details: clean_html(&s.remarks),
        })
        .collect();

    info
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

/// Render a carrier date plus an optional separate clock string.
///
/// A blank or literal `null` date yields `"N/A"`; an unparseable combination
/// is returned trimmed but otherwise untouched.
pub fn format_date_time(date: &str, time: &str) -> String {
    let date = date.trim();
    if is_blank_date(date) {
        return NOT_AVAILABLE.to_string();
    }
    let combined = format!("{date} {time}");
    render(combined.trim())
}

/// Render a single carrier date or timestamp string.
pub fn format_date(date_time: &str) -> String {
    let date_time = date_time.trim();
    if is_blank_date(date_time) {
        return NOT_AVAILABLE.to_string();
    }
    render(date_time)
}

fn is_blank_date(s: &str) -> bool {
    s.is_empty() || s == "null"
}

fn render(s: &str) -> String {
    match parse_flexible(s) {
        Some(t) => t.format(DISPLAY_FORMAT).to_string(),
        None => s.to_string(),
    }
}

/// First layout that parses the whole string wins. Offsets are kept as the
/// wall-clock time they describe.
///
/// chrono accepts single-digit fields and any run of whitespace for a space,
/// so each layout is gated on the exact shape of the input first.
fn parse_flexible(s: &str) -> Option<NaiveDateTime> {
    let b = s.as_bytes();
    let fractional = b.len() > 20
        && matches_shape(&b[..19], DATE_TIME_SHAPE)
        && b[19] == b'.'
        && b[20..].iter().all(u8::is_ascii_digit);

    if fractional {
        return NaiveDateTime::parse_from_str(s, FRACTIONAL_LAYOUT).ok();
    }
    if matches_shape(b, DATE_TIME_SHAPE) {
        return NaiveDateTime::parse_from_str(s, SECONDS_LAYOUT).ok();
    }
    if matches_shape(b, DATE_SHAPE) {
        return NaiveDate::parse_from_str(s, DATE_LAYOUT)
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0));
    }
    if b.len() >= 20 && matches_shape(&b[..19], RFC3339_SHAPE) {
        return DateTime::parse_from_rfc3339(s).ok().map(|t| t.naive_local());
    }
    None
}

/// `9` stands for any ASCII digit; every other byte must match literally.
const DATE_TIME_SHAPE: &[u8] = b"9999-99-99 99:99:99";
const DATE_SHAPE: &[u8] = b"9999-99-99";
const RFC3339_SHAPE: &[u8] = b"9999-99-99T99:99:99";

fn matches_shape(input: &[u8], shape: &[u8]) -> bool {
    input.len() == shape.len()
        && input.iter().zip(shape).all(|(&c, &p)| match p {
            b'9' => c.is_ascii_digit(),
            _ => c == p,
        })
}

// ---------------------------------------------------------------------------
// Markup
// ---------------------------------------------------------------------------

/// Opening span the carrier wraps highlighted consignment numbers in.
const HIGHLIGHT_SPAN: &str = "<span id='sc' style='color:blue;'>";

/// Strip the fixed set of tags carrier remarks contain.
///
/// Rules, applied once each and in this order: drop `</a>`; drop every
/// `<a ` up to and including the next `>`; drop `<b>` and `</b>`; drop the
/// highlight span opener and `</span>`; trim. Anything else, including
/// nested or unterminated tags, passes through as text.
pub fn clean_html(s: &str) -> String {
    let mut out = s.replace("</a>", "");
    while let Some(start) = out.find("<a ") {
        let Some(len) = out[start..].find('>') else {
            break;
        };
        out.replace_range(start..start + len + 1, "");
    }
    for tag in ["<b>", "</b>", HIGHLIGHT_SPAN, "</span>"] {
        out = out.replace(tag, "");
    }
    out.trim().to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
