// --- File: crates/bookify_common/src/lib.rs ---

// Declare modules within this crate
pub mod error;    // Error handling
pub mod logging;  // Logging utilities
pub mod services; // Store abstractions

// Re-export error types and utilities for easier access
pub use error::{
    conflict, config_error, internal_error, not_found, store_error, validation_error,
    BookifyError, HttpStatusCode,
};

// Re-export store abstractions for easier access
pub use services::{
    AvailabilityScope, AvailabilityStore, AvailabilityWindow, BookedInterval, Booking,
    BookingStore, BoxFuture, BoxedError,
};
