// --- File: crates/bookify_common/src/services.rs ---
//! Store abstractions for external persistence.
//!
//! This module provides trait definitions for the stores the scheduling core
//! depends on. These traits allow for dependency injection and easier testing
//! by decoupling the application logic from specific store implementations
//! (in-memory for development, a managed database in production).

use crate::error::{validation_error, BookifyError};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use uuid::Uuid;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

impl From<BookifyError> for BoxedError {
    fn from(err: BookifyError) -> Self {
        BoxedError(Box::new(err))
    }
}

/// When an availability window applies: every week on a given weekday, or on
/// one specific calendar date. A one-time window always overrides the
/// recurring window for that date's weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum AvailabilityScope {
    /// Weekly-repeating window. `day_of_week` is 0-6 with 0 = Sunday.
    Recurring { day_of_week: u8 },
    /// Override for one specific date.
    OneTime { date: NaiveDate },
}

/// One contiguous period during which a team member can be booked.
///
/// Times are wall-clock "HH:MM" 24-hour strings with no date component; the
/// scope says which date(s) the window applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityWindow {
    pub team_member_id: String,
    pub start_time: String,
    pub end_time: String,
    pub scope: AvailabilityScope,
}

impl AvailabilityWindow {
    /// Checks the window invariants: both times parse as "HH:MM" and the
    /// window is non-empty. Lexicographic comparison is sufficient for
    /// same-day "HH:MM" strings.
    pub fn validate(&self) -> Result<(), BookifyError> {
        for time in [&self.start_time, &self.end_time] {
            if NaiveTime::parse_from_str(time, "%H:%M").is_err() {
                return Err(validation_error(format!(
                    "invalid time '{}', expected HH:MM",
                    time
                )));
            }
        }
        if self.start_time >= self.end_time {
            return Err(validation_error(format!(
                "startTime {} must be before endTime {}",
                self.start_time, self.end_time
            )));
        }
        if let AvailabilityScope::Recurring { day_of_week } = self.scope {
            if day_of_week > 6 {
                return Err(validation_error(format!(
                    "dayOfWeek {} out of range 0-6",
                    day_of_week
                )));
            }
        }
        if self.team_member_id.is_empty() {
            return Err(validation_error("teamMemberId must not be empty"));
        }
        Ok(())
    }
}

/// A confirmed meeting as persisted by the booking store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub team_member_id: String,
    pub client_name: String,
    pub client_email: String,
    pub notes: Option<String>,
    /// Full timestamps, immutable once created.
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// The time range a booking occupies; the only part of a booking the slot
/// generator looks at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedInterval {
    pub team_member_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl From<&Booking> for BookedInterval {
    fn from(booking: &Booking) -> Self {
        BookedInterval {
            team_member_id: booking.team_member_id.clone(),
            start_time: booking.start_time,
            end_time: booking.end_time,
        }
    }
}

/// A trait for availability store operations.
///
/// A save for a given scope type replaces all prior windows of that type for
/// the member wholesale; there is no incremental diffing.
pub trait AvailabilityStore: Send + Sync {
    /// Error type returned by availability store operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Get the recurring window for a member on a weekday (0-6, 0 = Sunday).
    fn get_recurring(
        &self,
        member_id: &str,
        day_of_week: u8,
    ) -> BoxFuture<'_, Option<AvailabilityWindow>, Self::Error>;

    /// Get the one-time window for a member on a specific date.
    fn get_one_time(
        &self,
        member_id: &str,
        date: NaiveDate,
    ) -> BoxFuture<'_, Option<AvailabilityWindow>, Self::Error>;

    /// Replace all recurring windows for a member.
    fn save_recurring(
        &self,
        member_id: &str,
        windows: Vec<AvailabilityWindow>,
    ) -> BoxFuture<'_, (), Self::Error>;

    /// Replace all one-time windows for a member.
    fn save_one_time(
        &self,
        member_id: &str,
        windows: Vec<AvailabilityWindow>,
    ) -> BoxFuture<'_, (), Self::Error>;
}

/// A trait for booking store operations.
///
/// `create_booking` is a plain insert: it is not atomic against any prior
/// availability read, so two concurrent requests for the same slot can both
/// succeed. An atomic insert-unless-overlapping belongs in a store
/// implementation that can provide it, behind this same trait.
pub trait BookingStore: Send + Sync {
    /// Error type returned by booking store operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// All bookings for a member whose start falls on the given date.
    fn bookings_for_date(
        &self,
        member_id: &str,
        date: NaiveDate,
    ) -> BoxFuture<'_, Vec<Booking>, Self::Error>;

    /// Persist a confirmed booking.
    fn create_booking(&self, booking: Booking) -> BoxFuture<'_, Booking, Self::Error>;
}
