// Data model for the availability core.
// Hotels, rooms, bookings and pricing periods are read-only snapshots handed
// in by the repository; everything else is created fresh per search request.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar;

// Search parameters as parsed from the HTTP layer.
// Absent dates mean browse mode (no availability window to check).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchQuery {
    pub city: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    #[serde(default = "default_guests")]
    pub guests: u32,
    pub admin_view: bool,
}

fn default_guests() -> u32 {
    1
}

impl SearchQuery {
    // A dated window exists only when both endpoints were supplied.
    pub fn window(&self) -> Option<SearchWindow> {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => Some(SearchWindow {
                check_in,
                check_out,
                guests: self.guests,
            }),
            _ => None,
        }
    }
}

// The requested [check_in, check_out) stay window for one search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchWindow {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
}

impl SearchWindow {
    pub fn nights(&self) -> calendar::Nights {
        calendar::nights(self.check_in, self.check_out)
    }

    pub fn night_count(&self) -> i64 {
        calendar::night_count(self.check_in, self.check_out)
    }
}

// One reservation's occupied-room count over its own interval.
// Several bookings may overlap the same night and must be summed.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingOverlap {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(default = "default_room_count")]
    pub room_count: u32,
}

fn default_room_count() -> u32 {
    1
}

// A priced date range, inclusive of both endpoints at night granularity.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPeriod {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub price: f64,
}

// Read view of a room for the current search window. Bookings are expected
// to be pre-filtered by the repository to active statuses overlapping the
// window; clipping to the window itself happens here in the core.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    // Signed on purpose: a negative value is upstream corruption and must
    // surface as a hard error instead of being clamped away.
    pub total_stock: i64,
    pub price: f64,
    #[serde(default)]
    pub bookings: Vec<BookingOverlap>,
    #[serde(default)]
    pub pricing_periods: Vec<PricingPeriod>,
}

// Read view of a candidate hotel.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub name_en: String,
    pub city: String,
    #[serde(default)]
    pub location: String,
    pub base_price: f64,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default = "default_visible")]
    pub is_visible: bool,
    #[serde(default)]
    pub rooms: Vec<Room>,
}

fn default_visible() -> bool {
    true
}

// Longest fully-available contiguous sub-window when the full window is not
// available. Prices are approximate: derived from the room's base price, not
// re-priced per period.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialMatch {
    pub available_from: NaiveDate,
    pub available_to: NaiveDate,
    pub nights_count: u32,
    pub approx_total_price: f64,
    pub avg_nightly_price: f64,
}

// Per-room availability annotation for one search. Not persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomAvailability {
    pub room_id: String,
    pub remaining_stock: u32,
    pub is_fully_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial: Option<PartialMatch>,
}

impl RoomAvailability {
    // A room is worth offering when it covers the whole window or at least
    // a contiguous part of it.
    pub fn is_offerable(&self) -> bool {
        self.is_fully_available || self.partial.is_some()
    }
}

// Hotel-level aggregation for one search. Not persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelAvailability {
    pub hotel_id: String,
    pub available_room_ids: Vec<String>,
    pub rooms: Vec<RoomAvailability>,
    pub display_price: f64,
    pub is_partial: bool,
}
