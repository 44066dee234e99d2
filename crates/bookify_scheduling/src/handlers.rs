// File: crates/bookify_scheduling/src/handlers.rs
use crate::logic::{
    generate_time_slots, resolve_window, AvailabilityQuery, BookSlotRequest, BookingResponse,
    BookingsQuery, BookingsResponse, EffectiveWindowResponse, SaveWindowsRequest,
    SaveWindowsResponse, SchedulingError, TimeSlot,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use bookify_common::services::{
    AvailabilityScope, AvailabilityStore, BookedInterval, Booking, BookingStore, BoxedError,
};
use bookify_config::AppConfig;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

// Define shared state needed by scheduling handlers
#[derive(Clone)]
pub struct SchedulingState {
    pub config: Arc<AppConfig>,
    pub availability_store: Arc<dyn AvailabilityStore<Error = BoxedError>>,
    pub booking_store: Arc<dyn BookingStore<Error = BoxedError>>,
}

fn parse_date(date: &str) -> Result<NaiveDate, (StatusCode, String)> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            "Invalid date format (YYYY-MM-DD)".to_string(),
        )
    })
}

fn require_member_id(member_id: &str) -> Result<(), (StatusCode, String)> {
    if member_id.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "memberId must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Maps a scheduling error to the status the caller sees. Malformed stored
/// data and store failures are both server-side 500s per the error taxonomy.
fn scheduling_error_response(err: SchedulingError) -> (StatusCode, String) {
    info!("Scheduling error: {}", err);
    match err {
        SchedulingError::TimeParseError(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Stored availability data is malformed".to_string(),
        ),
        SchedulingError::CalculationError(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to generate time slots".to_string(),
        ),
        SchedulingError::StoreError(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to query availability store".to_string(),
        ),
    }
}

/// Handler to get bookable time slots for a member on a date.
///
/// Returns every candidate slot for the resolved availability window in
/// chronological order, booked ones included with `isAvailable: false`.
/// A member with no availability configured gets an empty array, not an
/// error.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/availability", // Path relative to /api
    params(AvailabilityQuery),
    responses(
        (status = 200, description = "Candidate time slots, chronologically ascending, possibly empty", body = Vec<TimeSlot>),
        (status = 400, description = "Missing or invalid memberId/date"),
        (status = 500, description = "Internal error")
    ),
    tag = "Scheduling"
))]
pub async fn get_availability_handler(
    State(state): State<Arc<SchedulingState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<Vec<TimeSlot>>, (StatusCode, String)> {
    require_member_id(&query.member_id)?;
    let date = parse_date(&query.date)?;

    let window = resolve_window(state.availability_store.as_ref(), &query.member_id, date)
        .await
        .map_err(scheduling_error_response)?;

    let bookings = state
        .booking_store
        .bookings_for_date(&query.member_id, date)
        .await
        .map_err(|e| {
            info!("Error fetching bookings: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to query bookings".to_string(),
            )
        })?;
    let intervals: Vec<BookedInterval> = bookings.iter().map(BookedInterval::from).collect();

    let slot_duration = state.config.scheduling.slot_duration_minutes;
    let slots = generate_time_slots(window.as_ref(), date, slot_duration, &intervals)
        .map_err(scheduling_error_response)?;

    Ok(Json(slots))
}

/// Handler to read the effective availability window for a member on a date.
/// Used by the availability-management flow to show what a date resolves to.
#[axum::debug_handler]
pub async fn get_effective_window_handler(
    State(state): State<Arc<SchedulingState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<EffectiveWindowResponse>, (StatusCode, String)> {
    require_member_id(&query.member_id)?;
    let date = parse_date(&query.date)?;

    let window = resolve_window(state.availability_store.as_ref(), &query.member_id, date)
        .await
        .map_err(scheduling_error_response)?;

    Ok(Json(EffectiveWindowResponse { window }))
}

fn validate_windows(
    payload: &SaveWindowsRequest,
    expect_recurring: bool,
) -> Result<(), (StatusCode, String)> {
    require_member_id(&payload.member_id)?;
    for window in &payload.windows {
        window
            .validate()
            .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
        if window.team_member_id != payload.member_id {
            return Err((
                StatusCode::BAD_REQUEST,
                "window teamMemberId does not match memberId".to_string(),
            ));
        }
        let is_recurring = matches!(window.scope, AvailabilityScope::Recurring { .. });
        if is_recurring != expect_recurring {
            let expected = if expect_recurring { "recurring" } else { "oneTime" };
            return Err((
                StatusCode::BAD_REQUEST,
                format!("all windows must have {} scope", expected),
            ));
        }
    }
    Ok(())
}

/// Handler to replace a member's recurring availability wholesale.
#[axum::debug_handler]
pub async fn save_recurring_availability_handler(
    State(state): State<Arc<SchedulingState>>,
    Json(payload): Json<SaveWindowsRequest>,
) -> Result<Json<SaveWindowsResponse>, (StatusCode, String)> {
    validate_windows(&payload, true)?;

    let saved = payload.windows.len();
    state
        .availability_store
        .save_recurring(&payload.member_id, payload.windows)
        .await
        .map_err(|e| {
            info!("Error saving recurring availability: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to save availability".to_string(),
            )
        })?;

    Ok(Json(SaveWindowsResponse {
        success: true,
        saved,
        message: "Recurring availability saved.".to_string(),
    }))
}

/// Handler to replace a member's one-time availability wholesale.
#[axum::debug_handler]
pub async fn save_one_time_availability_handler(
    State(state): State<Arc<SchedulingState>>,
    Json(payload): Json<SaveWindowsRequest>,
) -> Result<Json<SaveWindowsResponse>, (StatusCode, String)> {
    validate_windows(&payload, false)?;

    let saved = payload.windows.len();
    state
        .availability_store
        .save_one_time(&payload.member_id, payload.windows)
        .await
        .map_err(|e| {
            info!("Error saving one-time availability: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to save availability".to_string(),
            )
        })?;

    Ok(Json(SaveWindowsResponse {
        success: true,
        saved,
        message: "One-time availability saved.".to_string(),
    }))
}

/// Handler to book a time slot.
///
/// The conflict check here reads the bookings visible right now and the
/// insert is a separate step; there is no atomicity between them, so two
/// concurrent requests for the same slot can both pass the check. Closing
/// that race requires an insert-unless-overlapping operation in the store.
#[axum::debug_handler]
pub async fn book_slot_handler(
    State(state): State<Arc<SchedulingState>>,
    Json(payload): Json<BookSlotRequest>,
) -> Result<Json<BookingResponse>, (StatusCode, String)> {
    require_member_id(&payload.team_member_id)?;

    let slot_start = chrono::DateTime::parse_from_rfc3339(&payload.start_time)
        .map_err(|_| {
            (
                StatusCode::BAD_REQUEST,
                "Invalid start_time format".to_string(),
            )
        })?
        .with_timezone(&Utc);
    let slot_end = chrono::DateTime::parse_from_rfc3339(&payload.end_time)
        .map_err(|_| {
            (
                StatusCode::BAD_REQUEST,
                "Invalid end_time format".to_string(),
            )
        })?
        .with_timezone(&Utc);

    if slot_end <= slot_start {
        return Err((
            StatusCode::BAD_REQUEST,
            "end_time must be after start_time".to_string(),
        ));
    }

    // Check current availability
    let existing = state
        .booking_store
        .bookings_for_date(&payload.team_member_id, slot_start.date_naive())
        .await
        .map_err(|e| {
            info!("Error checking availability: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to check slot availability".to_string(),
            )
        })?;

    for booking in &existing {
        if slot_start < booking.end_time && slot_end > booking.start_time {
            return Err((
                StatusCode::CONFLICT,
                "Requested time slot is no longer available".to_string(),
            ));
        }
    }

    let booking = Booking {
        id: Uuid::new_v4(),
        team_member_id: payload.team_member_id.clone(),
        client_name: payload.client_name.clone(),
        client_email: payload.client_email.clone(),
        notes: payload.notes.clone(),
        start_time: slot_start,
        end_time: slot_end,
        created_at: Utc::now(),
    };

    match state.booking_store.create_booking(booking).await {
        Ok(created) => {
            info!("Successfully created booking: {}", created.id);
            Ok(Json(BookingResponse {
                success: true,
                booking_id: Some(created.id.to_string()),
                message: "Meeting booked successfully.".to_string(),
            }))
        }
        Err(e) => {
            info!("Error booking slot: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to book meeting.".to_string(),
            ))
        }
    }
}

/// Handler to list a member's bookings for a date.
#[axum::debug_handler]
pub async fn get_bookings_handler(
    State(state): State<Arc<SchedulingState>>,
    Query(query): Query<BookingsQuery>,
) -> Result<Json<BookingsResponse>, (StatusCode, String)> {
    require_member_id(&query.member_id)?;
    let date = parse_date(&query.date)?;

    match state
        .booking_store
        .bookings_for_date(&query.member_id, date)
        .await
    {
        Ok(bookings) => Ok(Json(BookingsResponse { bookings })),
        Err(e) => {
            info!("Error fetching bookings: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch bookings".to_string(),
            ))
        }
    }
}
