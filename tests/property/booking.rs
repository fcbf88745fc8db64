//! Properties of booking on top of the conflict check.
//!
//! - A booked list built only through `create_appointment` never holds two
//!   overlapping slot holders on the same date
//! - Statistics always add up to the list length

use clinic_scheduler::{compute_statistics_on, create_appointment, NewAppointment};
use proptest::prelude::*;

use crate::common::{clock, day, slot};

proptest! {
    #[test]
    fn prop_created_book_has_no_overlaps(requests in prop::collection::vec((slot(), 0u32..3), 1..20)) {
        let mut book = Vec::new();
        for (i, ((start, duration), offset)) in requests.iter().enumerate() {
            let date = day(*offset).format("%Y-%m-%d").to_string();
            let time = clock(*start).format("%H:%M").to_string();
            let candidate = NewAppointment::new(&format!("Patient {}", i), &date, &time, *duration);
            if let Ok(appointment) = create_appointment(&book, &candidate) {
                book.push(appointment);
            }
        }

        prop_assert!(!book.is_empty());
        for (i, a) in book.iter().enumerate() {
            for b in book.iter().skip(i + 1) {
                if a.date == b.date {
                    prop_assert!(!a.window().overlaps_with(&b.window()));
                }
            }
        }

        let stats = compute_statistics_on(&book, day(0));
        prop_assert_eq!(stats.total, book.len());
        prop_assert_eq!(stats.by_status.values().sum::<usize>(), book.len());
        prop_assert_eq!(stats.pending(), book.len());
        prop_assert!(stats.today <= stats.week);
    }
}
