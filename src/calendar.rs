// Calendar-interval arithmetic at night granularity.
// A night-key is a plain calendar date (no time-of-day); search windows are
// half-open [start, end) so the check-out day is never a stay night.

use chrono::NaiveDate;

// Iterator over the night-keys in [start, end), one calendar day per step.
// Each yielded date is a fresh value; nothing downstream can alias the cursor.
#[derive(Debug, Clone)]
pub struct Nights {
    cursor: NaiveDate,
    end: NaiveDate,
}

impl Iterator for Nights {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        if self.cursor >= self.end {
            return None;
        }
        let night = self.cursor;
        self.cursor = self.cursor.succ_opt()?;
        Some(night)
    }
}

// Produce the ordered sequence of nights in [start, end).
// Empty whenever end <= start.
pub fn nights(start: NaiveDate, end: NaiveDate) -> Nights {
    Nights { cursor: start, end }
}

// Number of nights in [start, end), clamped at zero.
// Used for total-length comparisons only; iteration always goes through
// `nights` so every step is an exact calendar-day advance.
pub fn night_count(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days().max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_nights_sequence_is_ordered_and_exclusive_of_end() {
        let result: Vec<NaiveDate> = nights(d("2025-02-01"), d("2025-02-04")).collect();
        assert_eq!(
            result,
            vec![d("2025-02-01"), d("2025-02-02"), d("2025-02-03")]
        );
    }

    #[test]
    fn test_nights_empty_when_end_not_after_start() {
        assert_eq!(nights(d("2025-02-01"), d("2025-02-01")).count(), 0);
        assert_eq!(nights(d("2025-02-05"), d("2025-02-01")).count(), 0);
    }

    #[test]
    fn test_nights_crosses_month_boundary_without_drift() {
        let result: Vec<NaiveDate> = nights(d("2025-01-30"), d("2025-02-02")).collect();
        assert_eq!(
            result,
            vec![d("2025-01-30"), d("2025-01-31"), d("2025-02-01")]
        );
    }

    #[test]
    fn test_nights_is_restartable() {
        let first: Vec<NaiveDate> = nights(d("2025-02-01"), d("2025-02-10")).collect();
        let second: Vec<NaiveDate> = nights(d("2025-02-01"), d("2025-02-10")).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_night_count_matches_iteration_length() {
        assert_eq!(night_count(d("2025-02-01"), d("2025-02-10")), 9);
        assert_eq!(
            night_count(d("2025-02-01"), d("2025-02-10")) as usize,
            nights(d("2025-02-01"), d("2025-02-10")).count()
        );
    }

    #[test]
    fn test_night_count_clamps_inverted_window() {
        assert_eq!(night_count(d("2025-02-10"), d("2025-02-01")), 0);
        assert_eq!(night_count(d("2025-02-01"), d("2025-02-01")), 0);
    }
}
