// Pricing-period coverage checks.
// Periods are inclusive of both endpoints at calendar-date granularity: a
// night is covered iff start_date <= night <= end_date. Earlier iterations
// of the platform disagreed by one night at period boundaries; the inclusive
// end-date reading is the contract here and the tests pin it down.

use chrono::NaiveDate;

use crate::calendar;
use crate::model::PricingPeriod;
use crate::occupancy::NightMap;

// Coverage result for one room over one window.
// `per_night` is None when the room has no pricing periods at all: the base
// price applies uniformly, so there is nothing to check per night.
#[derive(Debug, Clone)]
pub struct Coverage {
    pub fully_covered: bool,
    pub per_night: Option<NightMap<bool>>,
}

// Compute per-night coverage for [start, end).
pub fn coverage(periods: &[PricingPeriod], start: NaiveDate, end: NaiveDate) -> Coverage {
    if periods.is_empty() {
        // No periods means the base price covers every night. This is the
        // normal state for simple rooms, not an error.
        return Coverage {
            fully_covered: true,
            per_night: None,
        };
    }

    let mut all_covered = true;
    let mut per_night = NightMap::new();

    for night in calendar::nights(start, end) {
        let covered = periods
            .iter()
            .any(|p| night >= p.start_date && night <= p.end_date);
        if !covered {
            all_covered = false;
        }
        per_night.insert(night, covered);
    }

    Coverage {
        fully_covered: all_covered,
        per_night: Some(per_night),
    }
}

// Whether any period still reaches today or later. Browse mode (no dates)
// uses this as its looser "bookable at all" pricing check.
pub fn has_unexpired_period(periods: &[PricingPeriod], today: NaiveDate) -> bool {
    periods.iter().any(|p| p.end_date >= today)
}
