// Per-night occupancy counting against concurrent bookings.
// Bookings are clipped to the window before counting; counts on the same
// night sum additively so over-booking stays visible rather than being
// clamped away.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::calendar;
use crate::model::BookingOverlap;

// Chronologically ordered map from night-key to a per-night value.
// BTreeMap keeps iteration in calendar order, which streak-finding relies on.
pub type NightMap<V> = BTreeMap<NaiveDate, V>;

// Total rooms booked per night across all bookings, for every night in
// [start, end). Nights with no overlapping booking are present with count 0.
pub fn count_per_night(
    bookings: &[BookingOverlap],
    start: NaiveDate,
    end: NaiveDate,
) -> NightMap<u32> {
    let mut counts: NightMap<u32> = calendar::nights(start, end).map(|n| (n, 0)).collect();

    for booking in bookings {
        // Clip [check_in, check_out) to the window; a booking entirely
        // outside contributes an empty range and nothing else.
        let clipped_start = booking.check_in.max(start);
        let clipped_end = booking.check_out.min(end);

        for night in calendar::nights(clipped_start, clipped_end) {
            if let Some(count) = counts.get_mut(&night) {
                *count += booking.room_count;
            }
        }
    }

    counts
}

// Highest booked count across any single night of the window.
pub fn max_occupancy(bookings: &[BookingOverlap], start: NaiveDate, end: NaiveDate) -> u32 {
    count_per_night(bookings, start, end)
        .values()
        .copied()
        .max()
        .unwrap_or(0)
}
