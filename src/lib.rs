// Availability and search-filtering core for the hotel booking platform.
//
// Given a stay window and guest count, decides per room and per hotel
// whether stock and price coverage exist for the entire window, and when
// they do not, computes the longest fully-available contiguous sub-window
// so the room can still be offered. Pure computation over read-only
// snapshots; storage sits behind the repository trait in `search`.

pub mod adapter;
pub mod calendar;
pub mod evaluator;
pub mod model;
pub mod occupancy;
pub mod partial;
pub mod pricing;
pub mod search;

// Re-export key types for convenience
pub use evaluator::{evaluate, EvaluationError};
pub use model::{
    BookingOverlap, Hotel, HotelAvailability, PartialMatch, PricingPeriod, Room, RoomAvailability,
    SearchQuery, SearchWindow,
};
pub use partial::find_longest_available_streak;
pub use pricing::Coverage;
pub use search::{search_candidates, HotelRepository, HotelSearchOrchestrator, SearchError};
