// File: crates/bookify_scheduling/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::logic::{
    AvailabilityQuery, BookSlotRequest, BookingResponse, BookingsQuery, SaveWindowsResponse,
    TimeSlot,
};

#[utoipa::path(
    get,
    path = "/availability",
    params(
        ("memberId" = String, Query, description = "Identifier of the team member", example = "member-1"),
        ("date" = String, Query, description = "Target date in YYYY-MM-DD format", example = "2025-01-20", format = "date")
    ),
    responses(
        (status = 200, description = "Candidate time slots, chronologically ascending", body = Vec<TimeSlot>,
         example = json!([
             {
                 "startTime": "2025-01-20T09:00:00+00:00",
                 "endTime": "2025-01-20T09:30:00+00:00",
                 "isAvailable": true,
                 "teamMemberId": "member-1"
             },
             {
                 "startTime": "2025-01-20T09:30:00+00:00",
                 "endTime": "2025-01-20T10:00:00+00:00",
                 "isAvailable": false,
                 "teamMemberId": "member-1"
             }
         ])
        ),
        (status = 400, description = "Missing or invalid memberId/date",
         example = json!("Invalid date format (YYYY-MM-DD)")
        ),
        (status = 500, description = "Internal error", body = String)
    )
)]
fn doc_get_availability_handler() {}

#[utoipa::path(
    get,
    path = "/availability/windows",
    params(
        ("memberId" = String, Query, description = "Identifier of the team member", example = "member-1"),
        ("date" = String, Query, description = "Target date in YYYY-MM-DD format", example = "2025-01-20", format = "date")
    ),
    responses(
        (status = 200, description = "The effective availability window for the date, if any",
         example = json!({
             "window": {
                 "teamMemberId": "member-1",
                 "startTime": "10:00",
                 "endTime": "12:00",
                 "scope": { "type": "oneTime", "date": "2025-01-20" }
             }
         })
        ),
        (status = 400, description = "Missing or invalid memberId/date")
    )
)]
fn doc_get_effective_window_handler() {}

#[utoipa::path(
    post,
    path = "/availability/recurring",
    request_body(example = json!({
        "memberId": "member-1",
        "windows": [
            {
                "teamMemberId": "member-1",
                "startTime": "09:00",
                "endTime": "17:00",
                "scope": { "type": "recurring", "dayOfWeek": 1 }
            }
        ]
    })),
    responses(
        (status = 200, description = "Save result", body = SaveWindowsResponse,
         example = json!({
             "success": true,
             "saved": 1,
             "message": "Recurring availability saved."
         })
        ),
        (status = 400, description = "Invalid window (malformed time, inverted range, bad weekday)")
    )
)]
fn doc_save_recurring_availability_handler() {}

#[utoipa::path(
    post,
    path = "/availability/one-time",
    request_body(example = json!({
        "memberId": "member-1",
        "windows": [
            {
                "teamMemberId": "member-1",
                "startTime": "10:00",
                "endTime": "12:00",
                "scope": { "type": "oneTime", "date": "2025-01-20" }
            }
        ]
    })),
    responses(
        (status = 200, description = "Save result", body = SaveWindowsResponse),
        (status = 400, description = "Invalid window")
    )
)]
fn doc_save_one_time_availability_handler() {}

#[utoipa::path(
    post,
    path = "/book",
    request_body(content = BookSlotRequest, example = json!({
        "teamMemberId": "member-1",
        "startTime": "2025-01-20T14:00:00+00:00",
        "endTime": "2025-01-20T14:30:00+00:00",
        "clientName": "Ada Client",
        "clientEmail": "ada@example.com",
        "notes": "Intro call"
    })),
    responses(
        (status = 200, description = "Booking result", body = BookingResponse,
         example = json!({
             "success": true,
             "bookingId": "7f8de1c2-1b5a-4a9e-9a71-2f2f4f1c0d3e",
             "message": "Meeting booked successfully."
         })
        ),
        (status = 409, description = "Slot already booked",
         example = json!("Requested time slot is no longer available")
        ),
        (status = 500, description = "Booking failed")
    )
)]
fn doc_book_slot_handler() {}

#[utoipa::path(
    get,
    path = "/bookings",
    params(BookingsQuery),
    responses(
        (status = 200, description = "Bookings for the member and date",
         example = json!({
             "bookings": [
                 {
                     "id": "7f8de1c2-1b5a-4a9e-9a71-2f2f4f1c0d3e",
                     "teamMemberId": "member-1",
                     "clientName": "Ada Client",
                     "clientEmail": "ada@example.com",
                     "notes": null,
                     "startTime": "2025-01-20T14:00:00Z",
                     "endTime": "2025-01-20T14:30:00Z",
                     "createdAt": "2025-01-15T09:00:00Z"
                 }
             ]
         })
        ),
        (status = 400, description = "Missing or invalid memberId/date")
    )
)]
fn doc_get_bookings_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_get_availability_handler,
        doc_get_effective_window_handler,
        doc_save_recurring_availability_handler,
        doc_save_one_time_availability_handler,
        doc_book_slot_handler,
        doc_get_bookings_handler
    ),
    components(
        schemas(
            AvailabilityQuery,
            TimeSlot,
            BookSlotRequest,
            BookingResponse,
            BookingsQuery,
            SaveWindowsResponse
        )
    ),
    tags(
        (name = "scheduling", description = "Availability and Booking API")
    ),
    servers(
        (url = "/api", description = "Scheduling API server")
    )
)]
pub struct SchedulingApiDoc;
