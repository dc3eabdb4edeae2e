// Longest fully-available contiguous sub-window ("partial match") search.
// Walks the window's nights in chronological order, tracking the current run
// of nights that have both free stock and price coverage. The first streak
// reaching the maximum length wins ties, so equal-length candidates resolve
// to the earliest start.

use chrono::Days;

use crate::model::{PartialMatch, Room, SearchWindow};
use crate::occupancy::{self, NightMap};

// Find the longest contiguous run of eligible nights inside the window.
//
// `pricing_per_night` is the per-night coverage map from the pricing check;
// None means the room has no pricing periods and the base price covers
// everything, so only stock gates eligibility.
//
// Returns None when nothing is available, and also when the best streak
// spans the whole window: that is full availability, not a partial match.
// "Partial" is strictly 0 < streak < total nights.
pub fn find_longest_available_streak(
    room: &Room,
    window: &SearchWindow,
    pricing_per_night: Option<&NightMap<bool>>,
) -> Option<PartialMatch> {
    let booked = occupancy::count_per_night(&room.bookings, window.check_in, window.check_out);

    let mut best_len: i64 = 0;
    let mut best_start = None;
    let mut current_len: i64 = 0;
    let mut current_start = None;

    for (&night, &count) in &booked {
        let stock_free = room.total_stock - i64::from(count) > 0;
        let priced = pricing_per_night.map_or(true, |cov| cov.get(&night).copied().unwrap_or(false));

        if stock_free && priced {
            if current_len == 0 {
                current_start = Some(night);
            }
            current_len += 1;
        } else {
            // Strict > keeps the first streak on ties.
            if current_len > best_len {
                best_len = current_len;
                best_start = current_start;
            }
            current_len = 0;
            current_start = None;
        }
    }

    // A streak running through the last night has not been compared yet.
    if current_len > best_len {
        best_len = current_len;
        best_start = current_start;
    }

    if best_len == 0 || best_len >= window.night_count() {
        return None;
    }

    let available_from = best_start?;
    let available_to = available_from.checked_add_days(Days::new(best_len as u64))?;

    Some(PartialMatch {
        available_from,
        available_to,
        nights_count: best_len as u32,
        // Approximate pricing from the room's base price; per-period pricing
        // is not re-derived here.
        approx_total_price: room.price * best_len as f64,
        avg_nightly_price: room.price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BookingOverlap, PricingPeriod};
    use crate::pricing;
    use chrono::NaiveDate;
    use test_case::test_case;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn window(check_in: &str, check_out: &str) -> SearchWindow {
        SearchWindow {
            check_in: d(check_in),
            check_out: d(check_out),
            guests: 1,
        }
    }

    fn room(total_stock: i64, bookings: Vec<BookingOverlap>) -> Room {
        Room {
            id: "room-1".to_string(),
            name: "Standard Double".to_string(),
            capacity: 2,
            total_stock,
            price: 100.0,
            bookings,
            pricing_periods: Vec::new(),
        }
    }

    fn booking(check_in: &str, check_out: &str) -> BookingOverlap {
        BookingOverlap {
            check_in: d(check_in),
            check_out: d(check_out),
            room_count: 1,
        }
    }

    #[test]
    fn test_fully_free_window_is_not_a_partial_match() {
        // Zero bookings and full coverage is full availability, so the
        // finder must report nothing.
        let room = room(5, Vec::new());
        let result =
            find_longest_available_streak(&room, &window("2025-02-01", "2025-02-10"), None);
        assert!(result.is_none());
    }

    #[test]
    fn test_no_eligible_nights_is_not_a_partial_match() {
        let room = room(1, vec![booking("2025-02-01", "2025-02-10")]);
        let result =
            find_longest_available_streak(&room, &window("2025-02-01", "2025-02-10"), None);
        assert!(result.is_none());
    }

    #[test]
    fn test_equal_length_streaks_resolve_to_the_earliest() {
        // 9-night window with one blocked night in the middle splits it into
        // Feb 1-5 (4 nights) and Feb 6-10 (4 nights); the earlier one wins.
        let room = room(1, vec![booking("2025-02-05", "2025-02-06")]);
        let result =
            find_longest_available_streak(&room, &window("2025-02-01", "2025-02-10"), None)
                .unwrap();
        assert_eq!(result.available_from, d("2025-02-01"));
        assert_eq!(result.available_to, d("2025-02-05"));
        assert_eq!(result.nights_count, 4);
        assert_eq!(result.approx_total_price, 400.0);
        assert_eq!(result.avg_nightly_price, 100.0);
    }

    #[test]
    fn test_streak_ending_on_last_night_is_counted() {
        // Blocked at the start; the only streak runs to the window's end and
        // must survive the final post-loop comparison.
        let room = room(1, vec![booking("2025-02-01", "2025-02-04")]);
        let result =
            find_longest_available_streak(&room, &window("2025-02-01", "2025-02-10"), None)
                .unwrap();
        assert_eq!(result.available_from, d("2025-02-04"));
        assert_eq!(result.nights_count, 6);
    }

    #[test_case(vec![("2025-02-03", "2025-02-04")], "2025-02-04", 6; "early block leaves long tail")]
    #[test_case(vec![("2025-02-08", "2025-02-09")], "2025-02-01", 7; "late block leaves long head")]
    #[test_case(vec![("2025-02-02", "2025-02-03"), ("2025-02-07", "2025-02-08")], "2025-02-03", 4; "two blocks leave middle run")]
    fn test_streak_selection(blocks: Vec<(&str, &str)>, expected_from: &str, expected_len: u32) {
        let bookings = blocks.iter().map(|(s, e)| booking(s, e)).collect();
        let room = room(1, bookings);
        let result =
            find_longest_available_streak(&room, &window("2025-02-01", "2025-02-10"), None)
                .unwrap();
        assert_eq!(result.available_from, d(expected_from));
        assert_eq!(result.nights_count, expected_len);
    }

    #[test]
    fn test_pricing_gap_breaks_a_streak() {
        // No bookings at all, but a hole in price coverage on Feb 5 splits
        // the window the same way a blocking booking would.
        let periods = vec![
            PricingPeriod {
                start_date: d("2025-02-01"),
                end_date: d("2025-02-04"),
                price: 100.0,
            },
            PricingPeriod {
                start_date: d("2025-02-06"),
                end_date: d("2025-02-10"),
                price: 100.0,
            },
        ];
        let mut room = room(3, Vec::new());
        room.pricing_periods = periods.clone();

        let w = window("2025-02-01", "2025-02-10");
        let cov = pricing::coverage(&periods, w.check_in, w.check_out);
        let result = find_longest_available_streak(&room, &w, cov.per_night.as_ref()).unwrap();
        // Feb 1-5 covers 4 nights; Feb 6-10 covers 4 nights; earliest wins.
        assert_eq!(result.available_from, d("2025-02-01"));
        assert_eq!(result.nights_count, 4);
    }

    #[test]
    fn test_stock_and_pricing_must_both_hold() {
        // Pricing covers Feb 1-10 except Feb 2; booking blocks Feb 4.
        // Longest run with both constraints is Feb 5-10 (5 nights).
        let periods = vec![
            PricingPeriod {
                start_date: d("2025-02-01"),
                end_date: d("2025-02-01"),
                price: 100.0,
            },
            PricingPeriod {
                start_date: d("2025-02-03"),
                end_date: d("2025-02-10"),
                price: 100.0,
            },
        ];
        let mut room = room(1, vec![booking("2025-02-04", "2025-02-05")]);
        room.pricing_periods = periods.clone();

        let w = window("2025-02-01", "2025-02-10");
        let cov = pricing::coverage(&periods, w.check_in, w.check_out);
        let result = find_longest_available_streak(&room, &w, cov.per_night.as_ref()).unwrap();
        assert_eq!(result.available_from, d("2025-02-05"));
        assert_eq!(result.nights_count, 5);
    }

    #[test]
    fn test_nights_count_is_strictly_inside_window_bounds() {
        let room = room(1, vec![booking("2025-02-05", "2025-02-06")]);
        let w = window("2025-02-01", "2025-02-10");
        let result = find_longest_available_streak(&room, &w, None).unwrap();
        assert!(result.nights_count > 0);
        assert!(i64::from(result.nights_count) < w.night_count());
    }

    #[test]
    fn test_inputs_are_not_mutated_between_calls() {
        let room = room(1, vec![booking("2025-02-05", "2025-02-06")]);
        let w = window("2025-02-01", "2025-02-10");
        let first = find_longest_available_streak(&room, &w, None);
        let second = find_longest_available_streak(&room, &w, None);
        assert_eq!(first, second);
    }
}
