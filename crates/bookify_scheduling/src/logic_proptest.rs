#[cfg(test)]
mod tests {
    use crate::logic::generate_time_slots;
    use bookify_common::services::{AvailabilityScope, AvailabilityWindow, BookedInterval};
    use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
    use proptest::prelude::*;

    // Slot durations that tile an hour evenly, as the discretization assumes.
    const DURATIONS: [u32; 5] = [10, 15, 20, 30, 60];

    fn window(start_hour: u32, end_hour: u32, end_minute: u32) -> AvailabilityWindow {
        AvailabilityWindow {
            team_member_id: "member-1".to_string(),
            start_time: format!("{:02}:00", start_hour),
            end_time: format!("{:02}:{:02}", end_hour, end_minute),
            scope: AvailabilityScope::Recurring { day_of_week: 1 },
        }
    }

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 20).unwrap()
    }

    fn bookings_from(specs: &[(u32, u32, i64)]) -> Vec<BookedInterval> {
        specs
            .iter()
            .map(|&(hour, minute, duration_minutes)| {
                let start = Utc
                    .with_ymd_and_hms(2025, 1, 20, hour, minute, 0)
                    .unwrap();
                BookedInterval {
                    team_member_id: "member-1".to_string(),
                    start_time: start,
                    end_time: start + Duration::minutes(duration_minutes),
                }
            })
            .collect()
    }

    fn parse_datetime(datetime_str: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(datetime_str)
            .expect("Failed to parse RFC3339 datetime")
            .with_timezone(&Utc)
    }

    proptest! {
        // Every emitted slot is exactly the configured duration long.
        #[test]
        fn test_slots_have_exact_duration(
            start_hour in 0..12u32,
            end_hour in 13..23u32,
            end_minute in 0..60u32,
            duration_index in 0..DURATIONS.len(),
        ) {
            let duration = DURATIONS[duration_index];
            let window = window(start_hour, end_hour, end_minute);

            let slots = generate_time_slots(Some(&window), test_date(), duration, &[]).unwrap();

            for slot in &slots {
                let len = parse_datetime(&slot.end_time) - parse_datetime(&slot.start_time);
                prop_assert_eq!(len.num_minutes(), i64::from(duration));
            }
        }

        // Slots come out strictly increasing and contiguous.
        #[test]
        fn test_slots_strictly_increasing_and_contiguous(
            start_hour in 0..12u32,
            end_hour in 13..23u32,
            end_minute in 0..60u32,
            duration_index in 0..DURATIONS.len(),
        ) {
            let duration = DURATIONS[duration_index];
            let window = window(start_hour, end_hour, end_minute);

            let slots = generate_time_slots(Some(&window), test_date(), duration, &[]).unwrap();

            for pair in slots.windows(2) {
                let prev_start = parse_datetime(&pair[0].start_time);
                let prev_end = parse_datetime(&pair[0].end_time);
                let curr_start = parse_datetime(&pair[1].start_time);
                prop_assert!(curr_start > prev_start,
                    "slots should be strictly increasing: {:?} then {:?}",
                    pair[0].start_time, pair[1].start_time);
                prop_assert_eq!(prev_end, curr_start,
                    "each slot should start where the previous one ended");
            }
        }

        // No slot ever starts at or past the window close.
        #[test]
        fn test_no_slot_starts_at_or_after_window_close(
            start_hour in 0..12u32,
            end_hour in 13..23u32,
            end_minute in 0..60u32,
            duration_index in 0..DURATIONS.len(),
        ) {
            let duration = DURATIONS[duration_index];
            let window = window(start_hour, end_hour, end_minute);
            let close = Utc
                .with_ymd_and_hms(2025, 1, 20, end_hour, end_minute, 0)
                .unwrap();

            let slots = generate_time_slots(Some(&window), test_date(), duration, &[]).unwrap();

            for slot in &slots {
                prop_assert!(parse_datetime(&slot.start_time) < close,
                    "slot {:?} should start before the window close {:?}",
                    slot.start_time, close);
            }
        }

        // A slot is unavailable exactly when it overlaps some booking.
        #[test]
        fn test_availability_flag_matches_overlap(
            booking_specs in proptest::collection::vec(
                (9..17u32, prop_oneof![Just(0u32), Just(15), Just(30), Just(45)], 15..120i64),
                0..5,
            ),
            duration_index in 0..DURATIONS.len(),
        ) {
            let duration = DURATIONS[duration_index];
            let window = window(9, 17, 0);
            let bookings = bookings_from(&booking_specs);

            let slots = generate_time_slots(Some(&window), test_date(), duration, &bookings).unwrap();

            for slot in &slots {
                let slot_start = parse_datetime(&slot.start_time);
                let slot_end = parse_datetime(&slot.end_time);
                let overlaps = bookings.iter().any(|booking| {
                    slot_start < booking.end_time && slot_end > booking.start_time
                });
                prop_assert_eq!(slot.is_available, !overlaps,
                    "slot {:?}-{:?} availability should reflect the overlap test",
                    slot_start, slot_end);
            }
        }

        // Identical inputs give identical, order-stable output.
        #[test]
        fn test_generation_is_deterministic(
            start_hour in 0..12u32,
            end_hour in 13..23u32,
            end_minute in 0..60u32,
            duration_index in 0..DURATIONS.len(),
            booking_specs in proptest::collection::vec(
                (9..17u32, prop_oneof![Just(0u32), Just(30)], 15..120i64),
                0..4,
            ),
        ) {
            let duration = DURATIONS[duration_index];
            let window = window(start_hour, end_hour, end_minute);
            let bookings = bookings_from(&booking_specs);

            let first = generate_time_slots(Some(&window), test_date(), duration, &bookings).unwrap();
            let second = generate_time_slots(Some(&window), test_date(), duration, &bookings).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
