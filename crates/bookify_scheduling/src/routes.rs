// --- File: crates/bookify_scheduling/src/routes.rs ---

use crate::handlers::{
    book_slot_handler, get_availability_handler, get_bookings_handler,
    get_effective_window_handler, save_one_time_availability_handler,
    save_recurring_availability_handler, SchedulingState,
};
use crate::store::{InMemoryAvailabilityStore, InMemoryBookingStore};
use axum::{
    routing::{get, post},
    Router,
};
use bookify_config::AppConfig;
use std::sync::Arc;

/// Creates a router for the scheduling feature backed by the in-memory
/// development stores. Production deployments build their own
/// [`SchedulingState`] with database-backed stores and call
/// [`routes_with_state`].
pub fn routes(config: Arc<AppConfig>) -> Router {
    let state = Arc::new(SchedulingState {
        config,
        availability_store: Arc::new(InMemoryAvailabilityStore::new()),
        booking_store: Arc::new(InMemoryBookingStore::new()),
    });
    routes_with_state(state)
}

/// Creates a router containing all routes for the scheduling feature.
pub fn routes_with_state(state: Arc<SchedulingState>) -> Router {
    Router::new()
        .route("/availability", get(get_availability_handler))
        .route("/availability/windows", get(get_effective_window_handler))
        .route(
            "/availability/recurring",
            post(save_recurring_availability_handler),
        )
        .route(
            "/availability/one-time",
            post(save_one_time_availability_handler),
        )
        .route("/book", post(book_slot_handler))
        .route("/bookings", get(get_bookings_handler))
        .with_state(state)
}
