#[cfg(test)]
mod tests {
    use crate::store::{InMemoryAvailabilityStore, InMemoryBookingStore};
    use bookify_common::services::{
        AvailabilityScope, AvailabilityStore, AvailabilityWindow, Booking, BookingStore,
    };
    use chrono::{Duration, NaiveDate, TimeZone, Utc};
    use uuid::Uuid;

    fn recurring(weekday: u8, start: &str, end: &str) -> AvailabilityWindow {
        AvailabilityWindow {
            team_member_id: "member-1".to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            scope: AvailabilityScope::Recurring {
                day_of_week: weekday,
            },
        }
    }

    fn booking(member: &str, day: u32, hour: u32) -> Booking {
        let start = Utc.with_ymd_and_hms(2025, 1, day, hour, 0, 0).unwrap();
        Booking {
            id: Uuid::new_v4(),
            team_member_id: member.to_string(),
            client_name: "Ada Client".to_string(),
            client_email: "ada@example.com".to_string(),
            notes: None,
            start_time: start,
            end_time: start + Duration::minutes(30),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn save_recurring_replaces_wholesale() {
        let store = InMemoryAvailabilityStore::new();
        store
            .save_recurring(
                "member-1",
                vec![recurring(1, "09:00", "17:00"), recurring(2, "09:00", "17:00")],
            )
            .await
            .unwrap();

        // A second save drops everything from the first one.
        store
            .save_recurring("member-1", vec![recurring(3, "10:00", "16:00")])
            .await
            .unwrap();

        assert!(store.get_recurring("member-1", 1).await.unwrap().is_none());
        assert!(store.get_recurring("member-1", 2).await.unwrap().is_none());
        let wednesday = store.get_recurring("member-1", 3).await.unwrap();
        assert_eq!(wednesday.unwrap().start_time, "10:00");
    }

    #[tokio::test]
    async fn one_time_lookup_matches_exact_date_only() {
        let store = InMemoryAvailabilityStore::new();
        let date = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
        store
            .save_one_time(
                "member-1",
                vec![AvailabilityWindow {
                    team_member_id: "member-1".to_string(),
                    start_time: "10:00".to_string(),
                    end_time: "12:00".to_string(),
                    scope: AvailabilityScope::OneTime { date },
                }],
            )
            .await
            .unwrap();

        assert!(store.get_one_time("member-1", date).await.unwrap().is_some());
        let other = NaiveDate::from_ymd_opt(2025, 1, 27).unwrap();
        assert!(store.get_one_time("member-1", other).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn stores_are_isolated_per_member() {
        let store = InMemoryAvailabilityStore::new();
        store
            .save_recurring("member-1", vec![recurring(1, "09:00", "17:00")])
            .await
            .unwrap();

        assert!(store.get_recurring("member-2", 1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn bookings_for_date_filters_and_sorts() {
        let store = InMemoryBookingStore::new();
        store.create_booking(booking("member-1", 20, 15)).await.unwrap();
        store.create_booking(booking("member-1", 20, 9)).await.unwrap();
        store.create_booking(booking("member-1", 21, 10)).await.unwrap();
        store.create_booking(booking("member-2", 20, 11)).await.unwrap();

        let date = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
        let bookings = store.bookings_for_date("member-1", date).await.unwrap();

        assert_eq!(bookings.len(), 2);
        assert!(bookings[0].start_time < bookings[1].start_time);
        assert!(bookings.iter().all(|b| b.team_member_id == "member-1"));
    }

    #[tokio::test]
    async fn create_booking_echoes_the_persisted_record() {
        let store = InMemoryBookingStore::new();
        let original = booking("member-1", 20, 14);
        let created = store.create_booking(original.clone()).await.unwrap();
        assert_eq!(created.id, original.id);
        assert_eq!(created.start_time, original.start_time);
    }
}
