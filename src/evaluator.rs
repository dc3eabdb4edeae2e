// Per-room availability evaluation: full-window availability first, partial
// match as the fallback. This is the single place where stock, pricing
// coverage and streak-finding come together for one room.

use thiserror::Error;
use tracing::debug;

use crate::model::{Room, RoomAvailability, SearchWindow};
use crate::occupancy;
use crate::partial;
use crate::pricing;

#[derive(Error, Debug)]
pub enum EvaluationError {
    // Negative stock cannot be defaulted around; it means the upstream
    // inventory data is corrupt and the whole evaluation must fail loudly.
    #[error("room {room_id} reports negative stock ({stock}); upstream inventory data is corrupt")]
    NegativeStock { room_id: String, stock: i64 },
}

// Evaluate one room against one search window.
//
// Capacity mismatches and fully-booked windows are normal exclusions, not
// errors: the room comes back unavailable and the caller decides whether to
// drop it. The room snapshot is never mutated, so repeated calls with the
// same inputs give the same answer.
pub fn evaluate(room: &Room, window: &SearchWindow) -> Result<RoomAvailability, EvaluationError> {
    if room.total_stock < 0 {
        return Err(EvaluationError::NegativeStock {
            room_id: room.id.clone(),
            stock: room.total_stock,
        });
    }

    // Too small for the party: excluded outright, no partial offered.
    if room.capacity < window.guests {
        return Ok(RoomAvailability {
            room_id: room.id.clone(),
            remaining_stock: 0,
            is_fully_available: false,
            partial: None,
        });
    }

    let max_booked = occupancy::max_occupancy(&room.bookings, window.check_in, window.check_out);
    let remaining_stock = (room.total_stock - i64::from(max_booked)).max(0) as u32;

    let coverage = pricing::coverage(&room.pricing_periods, window.check_in, window.check_out);

    if remaining_stock > 0 && coverage.fully_covered {
        return Ok(RoomAvailability {
            room_id: room.id.clone(),
            remaining_stock,
            is_fully_available: true,
            partial: None,
        });
    }

    let partial =
        partial::find_longest_available_streak(room, window, coverage.per_night.as_ref());
    debug!(
        room_id = %room.id,
        remaining_stock,
        fully_covered = coverage.fully_covered,
        has_partial = partial.is_some(),
        "room not fully available"
    );

    Ok(RoomAvailability {
        room_id: room.id.clone(),
        remaining_stock,
        is_fully_available: false,
        partial,
    })
}
