// --- File: crates/bookify_scheduling/src/logic.rs ---
use bookify_common::services::{
    AvailabilityStore, AvailabilityWindow, BookedInterval, BoxedError,
};
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

// --- Error Handling ---
use thiserror::Error;
#[derive(Error, Debug)]
pub enum SchedulingError {
    #[error("Failed to parse time: {0}")]
    TimeParseError(String),
    #[error("Calculation error: {0}")]
    CalculationError(String),
    #[error("Store error: {0}")]
    StoreError(#[from] BoxedError),
}

// --- Data Structures ---
#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    /// Identifier of the team member being booked
    #[cfg_attr(feature = "openapi", schema(example = "member-1"))]
    pub member_id: String,

    /// Target date in YYYY-MM-DD format
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2025-01-20"))]
    pub date: String,
}

/// A candidate bookable unit for one specific date. Derived, never persisted.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    #[cfg_attr(feature = "openapi", schema(example = "2025-01-20T09:00:00+00:00"))]
    pub start_time: String, // ISO 8601 format
    #[cfg_attr(feature = "openapi", schema(example = "2025-01-20T09:30:00+00:00"))]
    pub end_time: String, // ISO 8601 format
    #[cfg_attr(feature = "openapi", schema(example = true))]
    pub is_available: bool,
    #[cfg_attr(feature = "openapi", schema(example = "member-1"))]
    pub team_member_id: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SaveWindowsRequest {
    pub member_id: String,
    pub windows: Vec<AvailabilityWindow>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SaveWindowsResponse {
    pub success: bool,
    pub saved: usize,
    pub message: String,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BookSlotRequest {
    pub team_member_id: String,
    pub start_time: String, // ISO 8601 format string
    pub end_time: String,   // ISO 8601 format string
    pub client_name: String,
    pub client_email: String,
    pub notes: Option<String>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub success: bool,
    pub booking_id: Option<String>,
    pub message: String,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
#[serde(rename_all = "camelCase")]
pub struct BookingsQuery {
    pub member_id: String,
    /// Target date in YYYY-MM-DD format
    pub date: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BookingsResponse {
    pub bookings: Vec<bookify_common::services::Booking>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveWindowResponse {
    pub window: Option<AvailabilityWindow>,
}

// --- Availability Resolution ---

/// Determines the single effective availability window for a member on a date.
///
/// Resolution order is a strict precedence, not a fallback chain: a one-time
/// window for the exact date wins over the recurring window for that date's
/// weekday. Absence of both is a valid outcome, not an error.
pub async fn resolve_window(
    store: &dyn AvailabilityStore<Error = BoxedError>,
    member_id: &str,
    date: NaiveDate,
) -> Result<Option<AvailabilityWindow>, SchedulingError> {
    if let Some(one_time) = store.get_one_time(member_id, date).await? {
        debug!("Resolved one-time window for {} on {}", member_id, date);
        return Ok(Some(one_time));
    }

    let day_of_week = day_of_week(date);
    Ok(store.get_recurring(member_id, day_of_week).await?)
}

/// Weekday number used by availability rules: 0-6 with 0 = Sunday.
pub fn day_of_week(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

// --- Slot Generation ---

/// Discretizes an availability window into fixed-size time slots for one date
/// and marks each slot against the supplied bookings.
///
/// The walk runs hour by hour from the window's opening hour through its
/// closing hour, minutes stepping from 0 by `slot_duration_minutes` within
/// each hour, and stops entirely once a slot would start at or past the
/// window's closing time. No slot starts exactly at the close, and no
/// shortened slot is emitted to fill a sub-duration remainder at the
/// boundary. Booked slots stay in the output with `is_available = false`;
/// nothing is ever filtered out.
///
/// Pure and deterministic: no I/O, no clock reads, identical inputs give
/// identical output.
pub fn generate_time_slots(
    window: Option<&AvailabilityWindow>,
    date: NaiveDate,
    slot_duration_minutes: u32,
    bookings: &[BookedInterval],
) -> Result<Vec<TimeSlot>, SchedulingError> {
    let Some(window) = window else {
        return Ok(Vec::new());
    };

    if slot_duration_minutes == 0 {
        return Err(SchedulingError::CalculationError(
            "slot duration must be positive".to_string(),
        ));
    }

    let start = parse_clock(&window.start_time)?;
    let end = parse_clock(&window.end_time)?;

    let start_hour = start.hour();
    let end_hour = end.hour();
    let end_minute = end.minute();

    debug!(
        "Generating {}-minute slots for {} on {} within {}-{}",
        slot_duration_minutes, window.team_member_id, date, window.start_time, window.end_time
    );

    let mut slots = Vec::new();
    'window: for hour in start_hour..=end_hour {
        let mut minute = 0u32;
        while minute < 60 {
            // A slot never starts at or after the window close; the walk
            // stops here rather than clamping a final partial slot.
            if hour == end_hour && minute >= end_minute {
                break 'window;
            }

            let slot_start = slot_timestamp(date, hour, minute)?;
            let slot_end = slot_start + Duration::minutes(i64::from(slot_duration_minutes));

            // Half-open interval overlap test against every booking.
            let is_available = !bookings
                .iter()
                .any(|booking| slot_start < booking.end_time && slot_end > booking.start_time);

            slots.push(TimeSlot {
                start_time: slot_start.to_rfc3339(),
                end_time: slot_end.to_rfc3339(),
                is_available,
                team_member_id: window.team_member_id.clone(),
            });

            minute += slot_duration_minutes;
        }
    }

    Ok(slots)
}

/// Parses a wall-clock "HH:MM" string. Malformed stored times are a hard
/// error surfaced to the caller, never coerced into a best guess.
fn parse_clock(time: &str) -> Result<NaiveTime, SchedulingError> {
    NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| SchedulingError::TimeParseError(time.to_string()))
}

fn slot_timestamp(date: NaiveDate, hour: u32, minute: u32) -> Result<DateTime<Utc>, SchedulingError> {
    let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
        SchedulingError::CalculationError(format!("invalid slot time {:02}:{:02}", hour, minute))
    })?;
    Ok(Utc.from_utc_datetime(&date.and_time(time)))
}
