// --- File: crates/bookify_scheduling/src/store.rs ---
//! In-memory store implementations.
//!
//! These are the development-mode stores: explicit injected implementations
//! of the store traits with process lifetime, used when no managed storage is
//! configured. A production deployment supplies database-backed
//! implementations behind the same traits.

use bookify_common::error::store_error;
use bookify_common::services::{
    AvailabilityScope, AvailabilityStore, AvailabilityWindow, Booking, BookingStore, BoxFuture,
    BoxedError,
};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::RwLock;

/// Availability windows held in process memory, keyed by team member.
#[derive(Debug, Default)]
pub struct InMemoryAvailabilityStore {
    recurring: RwLock<HashMap<String, Vec<AvailabilityWindow>>>,
    one_time: RwLock<HashMap<String, Vec<AvailabilityWindow>>>,
}

impl InMemoryAvailabilityStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AvailabilityStore for InMemoryAvailabilityStore {
    type Error = BoxedError;

    fn get_recurring(
        &self,
        member_id: &str,
        day_of_week: u8,
    ) -> BoxFuture<'_, Option<AvailabilityWindow>, Self::Error> {
        let member_id = member_id.to_string();
        Box::pin(async move {
            let recurring = self
                .recurring
                .read()
                .map_err(|_| BoxedError::from(store_error("availability store lock poisoned")))?;
            let window = recurring.get(&member_id).and_then(|windows| {
                windows
                    .iter()
                    .find(|w| w.scope == AvailabilityScope::Recurring { day_of_week })
                    .cloned()
            });
            Ok(window)
        })
    }

    fn get_one_time(
        &self,
        member_id: &str,
        date: NaiveDate,
    ) -> BoxFuture<'_, Option<AvailabilityWindow>, Self::Error> {
        let member_id = member_id.to_string();
        Box::pin(async move {
            let one_time = self
                .one_time
                .read()
                .map_err(|_| BoxedError::from(store_error("availability store lock poisoned")))?;
            let window = one_time.get(&member_id).and_then(|windows| {
                windows
                    .iter()
                    .find(|w| w.scope == AvailabilityScope::OneTime { date })
                    .cloned()
            });
            Ok(window)
        })
    }

    fn save_recurring(
        &self,
        member_id: &str,
        windows: Vec<AvailabilityWindow>,
    ) -> BoxFuture<'_, (), Self::Error> {
        let member_id = member_id.to_string();
        Box::pin(async move {
            let mut recurring = self
                .recurring
                .write()
                .map_err(|_| BoxedError::from(store_error("availability store lock poisoned")))?;
            // Wholesale replacement of all recurring windows for this member.
            recurring.insert(member_id, windows);
            Ok(())
        })
    }

    fn save_one_time(
        &self,
        member_id: &str,
        windows: Vec<AvailabilityWindow>,
    ) -> BoxFuture<'_, (), Self::Error> {
        let member_id = member_id.to_string();
        Box::pin(async move {
            let mut one_time = self
                .one_time
                .write()
                .map_err(|_| BoxedError::from(store_error("availability store lock poisoned")))?;
            one_time.insert(member_id, windows);
            Ok(())
        })
    }
}

/// Bookings held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryBookingStore {
    bookings: RwLock<Vec<Booking>>,
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookingStore for InMemoryBookingStore {
    type Error = BoxedError;

    fn bookings_for_date(
        &self,
        member_id: &str,
        date: NaiveDate,
    ) -> BoxFuture<'_, Vec<Booking>, Self::Error> {
        let member_id = member_id.to_string();
        Box::pin(async move {
            let bookings = self
                .bookings
                .read()
                .map_err(|_| BoxedError::from(store_error("booking store lock poisoned")))?;
            let mut matching: Vec<Booking> = bookings
                .iter()
                .filter(|b| {
                    b.team_member_id == member_id && b.start_time.date_naive() == date
                })
                .cloned()
                .collect();
            matching.sort_by_key(|b| b.start_time);
            Ok(matching)
        })
    }

    /// Plain insert. Deliberately not atomic against any earlier availability
    /// read; see the BookingStore trait contract.
    fn create_booking(&self, booking: Booking) -> BoxFuture<'_, Booking, Self::Error> {
        Box::pin(async move {
            let mut bookings = self
                .bookings
                .write()
                .map_err(|_| BoxedError::from(store_error("booking store lock poisoned")))?;
            bookings.push(booking.clone());
            Ok(booking)
        })
    }
}
