//! Properties of the half-open overlap test.
//!
//! - Disjoint windows on one date never conflict, in either direction
//! - Overlapping windows on one date always conflict, in either direction
//! - Different dates never conflict
//! - Checking twice gives the same answer and leaves the input alone
//! - Touching endpoints never conflict

use clinic_scheduler::{find_conflicts, has_conflict, AppointmentStatus};
use proptest::prelude::*;

use crate::common::{any_status, clock, day, existing, existing_with, slot};

fn overlaps(a: (u32, u32), b: (u32, u32)) -> bool {
    a.0 < b.0 + b.1 && b.0 < a.0 + a.1
}

/// Two slots sharing at least one minute: `b` is built around a minute
/// picked inside `a`.
fn overlapping_pair() -> impl Strategy<Value = ((u32, u32), (u32, u32))> {
    slot()
        .prop_flat_map(|a| (Just(a), a.0..a.0 + a.1))
        .prop_flat_map(|(a, shared)| (Just(a), Just(shared), shared.saturating_sub(100)..=shared))
        .prop_flat_map(|(a, shared, b_start)| {
            let longest = (shared - b_start + 100).min(1440 - b_start);
            (Just(a), Just(b_start), (shared - b_start + 1)..=longest)
        })
        .prop_map(|(a, b_start, b_len)| (a, (b_start, b_len)))
}

proptest! {
    #[test]
    fn prop_disjoint_windows_never_conflict(a in slot(), b in slot()) {
        prop_assume!(!overlaps(a, b));
        let with_a = vec![existing("a", day(0), a.0, a.1)];
        let with_b = vec![existing("b", day(0), b.0, b.1)];
        prop_assert!(!has_conflict(&with_a, day(0), clock(b.0), b.1));
        prop_assert!(!has_conflict(&with_b, day(0), clock(a.0), a.1));
    }

    #[test]
    fn prop_overlapping_windows_always_conflict((a, b) in overlapping_pair()) {
        prop_assert!(overlaps(a, b));
        let with_a = vec![existing("a", day(0), a.0, a.1)];
        let with_b = vec![existing("b", day(0), b.0, b.1)];
        prop_assert!(has_conflict(&with_a, day(0), clock(b.0), b.1));
        prop_assert!(has_conflict(&with_b, day(0), clock(a.0), a.1));
    }

    #[test]
    fn prop_different_dates_never_conflict(a in slot(), b in slot(), offset in 1u32..400) {
        let booked = vec![existing("a", day(0), a.0, a.1)];
        prop_assert!(!has_conflict(&booked, day(offset), clock(b.0), b.1));
    }

    #[test]
    fn prop_check_is_idempotent(
        slots in prop::collection::vec(slot(), 0..8),
        candidate in slot(),
    ) {
        let booked: Vec<_> = slots
            .iter()
            .enumerate()
            .map(|(i, s)| existing(&i.to_string(), day(0), s.0, s.1))
            .collect();
        let before = booked.clone();
        let first = has_conflict(&booked, day(0), clock(candidate.0), candidate.1);
        let second = has_conflict(&booked, day(0), clock(candidate.0), candidate.1);
        prop_assert_eq!(first, second);
        prop_assert_eq!(booked, before);
    }

    #[test]
    fn prop_touching_endpoints_never_conflict(start in 60u32..1200, first in 1u32..=60, second in 1u32..=60) {
        // [start, start+first) followed by [start+first, start+first+second)
        let earlier = vec![existing("e", day(0), start, first)];
        prop_assert!(!has_conflict(&earlier, day(0), clock(start + first), second));

        // [start-second, start) ends exactly where the booked one begins
        prop_assert!(!has_conflict(&earlier, day(0), clock(start - second), second));
    }

    #[test]
    fn prop_conflicts_are_a_subset_of_same_day_holders(
        slots in prop::collection::vec((slot(), any_status(), 0u32..2), 0..10),
        candidate in slot(),
    ) {
        let booked: Vec<_> = slots
            .iter()
            .enumerate()
            .map(|(i, (s, status, offset))| existing_with(&i.to_string(), day(*offset), s.0, s.1, *status))
            .collect();
        for hit in find_conflicts(&booked, day(0), clock(candidate.0), candidate.1) {
            prop_assert_eq!(hit.date, day(0));
            prop_assert_ne!(hit.status, AppointmentStatus::Cancelled);
        }
    }
}
