//! Per-session room registry for the thirteen-card scoring engine.
//!
//! Rooms are keyed contexts holding each seat's submitted arrangement; the
//! registry creates and looks them up by identifier. All scoring goes through
//! [`sanshui_engine`]; this crate only owns the session bookkeeping.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use sanshui_engine::cards::Card;
use sanshui_engine::errors::ScoreError;
use sanshui_engine::hand::{classify_body_or_tail, classify_head};
use sanshui_engine::score::MatchResult;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub type RoomId = String;

#[derive(Debug, Error)]
pub enum RoomError {
    #[error("Room not found: {0}")]
    NotFound(RoomId),
    #[error("Seat {0} has not submitted an arrangement")]
    SeatNotReady(String),
    #[error("Room storage poisoned")]
    StoragePoisoned,
    #[error("Scoring failed: {0}")]
    Engine(#[from] ScoreError),
}

/// Outcome of settling one round between two seats, from the first seat's
/// perspective: per-region margins in head, body, tail order plus their sum.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub margins: [i32; 3],
    pub total: i32,
}

/// One game-session context: the seats that have submitted a completed
/// arrangement, keyed by seat name. Arrangements are classified on submission
/// so a malformed region is rejected before it can reach settlement.
#[derive(Debug)]
pub struct Room {
    id: RoomId,
    seats: Mutex<HashMap<String, MatchResult>>,
}

impl Room {
    fn new(id: RoomId) -> Self {
        Self {
            id,
            seats: Mutex::new(HashMap::new()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Classifies and stores a seat's three regions. Resubmission replaces
    /// the previous arrangement.
    pub fn submit_arrangement(
        &self,
        seat: &str,
        head: &[Card],
        middle: &[Card],
        tail: &[Card],
    ) -> Result<(), RoomError> {
        let result = MatchResult::new(
            classify_head(head)?,
            classify_body_or_tail(middle)?,
            classify_body_or_tail(tail)?,
        );
        tracing::debug!(room_id = %self.id, seat, "arrangement submitted");
        let mut seats = self.seats.lock().map_err(|_| RoomError::StoragePoisoned)?;
        seats.insert(seat.to_string(), result);
        Ok(())
    }

    pub fn has_arrangement(&self, seat: &str) -> bool {
        match self.seats.lock() {
            Ok(seats) => seats.contains_key(seat),
            Err(_) => false,
        }
    }

    /// Scores `seat_a`'s arrangement against `seat_b`'s.
    pub fn settle(&self, seat_a: &str, seat_b: &str) -> Result<Settlement, RoomError> {
        let seats = self.seats.lock().map_err(|_| RoomError::StoragePoisoned)?;
        let a = seats
            .get(seat_a)
            .ok_or_else(|| RoomError::SeatNotReady(seat_a.to_string()))?;
        let b = seats
            .get(seat_b)
            .ok_or_else(|| RoomError::SeatNotReady(seat_b.to_string()))?;
        let margins = a.region_margins(b)?;
        let total = margins.iter().sum();
        tracing::info!(room_id = %self.id, seat_a, seat_b, total, "round settled");
        Ok(Settlement { margins, total })
    }
}

/// Keyed collection of live rooms: create, look up by identifier, list all.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    rooms: RwLock<HashMap<RoomId, Arc<Room>>>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self {
            rooms: RwLock::new(HashMap::new()),
        }
    }

    pub fn create_room(&self) -> Result<Arc<Room>, RoomError> {
        let id = Uuid::new_v4().to_string();
        tracing::info!(room_id = %id, "creating room");
        let room = Arc::new(Room::new(id.clone()));
        let mut guard = self.rooms.write().map_err(|_| RoomError::StoragePoisoned)?;
        guard.insert(id, Arc::clone(&room));
        Ok(room)
    }

    pub fn get_room(&self, id: &str) -> Result<Arc<Room>, RoomError> {
        let guard = self.rooms.read().map_err(|_| RoomError::StoragePoisoned)?;
        guard
            .get(id)
            .cloned()
            .ok_or_else(|| RoomError::NotFound(id.to_string()))
    }

    pub fn room_ids(&self) -> Vec<RoomId> {
        match self.rooms.read() {
            Ok(guard) => guard.keys().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn remove_room(&self, id: &str) -> Result<(), RoomError> {
        let removed = match self.rooms.write() {
            Ok(mut guard) => guard.remove(id),
            Err(_) => return Err(RoomError::StoragePoisoned),
        };
        match removed {
            Some(room) => {
                tracing::info!(room_id = %room.id, "room removed");
                Ok(())
            }
            None => Err(RoomError::NotFound(id.to_string())),
        }
    }
}
