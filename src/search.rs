// Hotel search orchestration: text/visibility filtering, per-room evaluation
// and hotel-level aggregation. The storage side sits behind a narrow
// read-only repository trait so the algorithm never touches a concrete
// database client.
//
// This core is advisory: it reads a snapshot and computes availability, it
// never reserves stock. Atomicity between "looked available" and "booked"
// belongs to the booking-creation path, not here.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use thiserror::Error;
use tracing::debug;

use crate::evaluator::{self, EvaluationError};
use crate::model::{Hotel, HotelAvailability, RoomAvailability, SearchQuery, SearchWindow};
use crate::pricing;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),

    #[error("repository error: {0}")]
    Repository(String),
}

// Read-only supplier of candidate hotels for a search. Implementations are
// expected to pre-filter room bookings to active statuses overlapping the
// requested window; everything date-precise happens in this core.
#[async_trait]
pub trait HotelRepository: Send + Sync {
    async fn fetch_candidate_hotels(&self, query: &SearchQuery) -> Result<Vec<Hotel>, SearchError>;
}

pub struct HotelSearchOrchestrator<R: HotelRepository> {
    repository: R,
}

impl<R: HotelRepository> HotelSearchOrchestrator<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    // Top-level entry: fetch candidates, then run the pure filtering and
    // availability pipeline over the snapshot.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<HotelAvailability>, SearchError> {
        let hotels = self.repository.fetch_candidate_hotels(query).await?;
        debug!(candidates = hotels.len(), "fetched candidate hotels");
        search_candidates(hotels, query, Utc::now().date_naive())
    }
}

// Pure search pipeline over already-materialized candidates. `today` feeds
// the browse-mode pricing-expiry check and is injected so tests stay
// deterministic.
pub fn search_candidates(
    hotels: Vec<Hotel>,
    query: &SearchQuery,
    today: NaiveDate,
) -> Result<Vec<HotelAvailability>, SearchError> {
    let mut candidates: Vec<Hotel> = hotels
        .into_iter()
        .filter(|h| query.admin_view || h.is_visible)
        .filter(|h| matches_text_filter(h, query.city.as_deref()))
        .collect();

    // Featured hotels surface first; the stable sort keeps the repository's
    // order within each group.
    candidates.sort_by_key(|h| !h.is_featured);

    match query.window() {
        Some(window) => {
            if window.night_count() <= 0 {
                // check_out <= check_in means zero nights: nothing can be
                // available, and that is an empty result, not an error.
                debug!("window has no nights, returning no hotels");
                return Ok(Vec::new());
            }

            let mut results = Vec::new();
            for hotel in &candidates {
                if let Some(availability) = evaluate_hotel(hotel, &window)? {
                    results.push(availability);
                }
            }
            Ok(results)
        }
        None => Ok(candidates
            .iter()
            .filter(|h| has_bookable_rooms(h, today))
            .map(browse_availability)
            .collect()),
    }
}

// Case-insensitive substring match over the hotel's textual fields.
// "all" or an empty term disables the filter.
fn matches_text_filter(hotel: &Hotel, term: Option<&str>) -> bool {
    let term = match term {
        Some(t) => t.trim().to_lowercase(),
        None => return true,
    };
    if term.is_empty() || term == "all" {
        return true;
    }

    [
        &hotel.name,
        &hotel.name_en,
        &hotel.city,
        &hotel.location,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&term))
}

// Dated mode: a hotel qualifies when at least one room covers the window or
// offers a partial match. Display price is the cheapest qualifying room.
fn evaluate_hotel(
    hotel: &Hotel,
    window: &SearchWindow,
) -> Result<Option<HotelAvailability>, SearchError> {
    let mut offerable: Vec<(&crate::model::Room, RoomAvailability)> = Vec::new();

    for room in &hotel.rooms {
        let availability = evaluator::evaluate(room, window)?;
        if availability.is_offerable() {
            offerable.push((room, availability));
        }
    }

    if offerable.is_empty() {
        return Ok(None);
    }

    let display_price = offerable
        .iter()
        .map(|(room, _)| room.price)
        .fold(f64::INFINITY, f64::min);
    let is_partial = offerable.iter().any(|(_, a)| a.partial.is_some());

    Ok(Some(HotelAvailability {
        hotel_id: hotel.id.clone(),
        available_room_ids: offerable.iter().map(|(r, _)| r.id.clone()).collect(),
        rooms: offerable.into_iter().map(|(_, a)| a).collect(),
        display_price,
        is_partial,
    }))
}

// Browse mode (no dates): a looser "bookable at all" check. A room counts
// when it has stock and either no pricing periods (base price applies) or at
// least one period that has not yet expired.
fn has_bookable_rooms(hotel: &Hotel, today: NaiveDate) -> bool {
    hotel.rooms.iter().any(|room| {
        if room.total_stock <= 0 {
            return false;
        }
        room.pricing_periods.is_empty()
            || pricing::has_unexpired_period(&room.pricing_periods, today)
    })
}

fn browse_availability(hotel: &Hotel) -> HotelAvailability {
    let bookable: Vec<&crate::model::Room> = hotel
        .rooms
        .iter()
        .filter(|r| r.total_stock > 0)
        .collect();

    let display_price = bookable
        .iter()
        .map(|r| r.price)
        .filter(|p| *p > 0.0)
        .fold(f64::INFINITY, f64::min);
    let display_price = if display_price.is_finite() {
        display_price
    } else {
        hotel.base_price
    };

    HotelAvailability {
        hotel_id: hotel.id.clone(),
        available_room_ids: bookable.iter().map(|r| r.id.clone()).collect(),
        rooms: bookable
            .iter()
            .map(|r| RoomAvailability {
                room_id: r.id.clone(),
                // Without dates there is nothing to subtract: report the raw
                // stock.
                remaining_stock: r.total_stock.max(0) as u32,
                is_fully_available: true,
                partial: None,
            })
            .collect(),
        display_price,
        is_partial: false,
    }
}
