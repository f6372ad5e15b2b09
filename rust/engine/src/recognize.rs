use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit};
use crate::errors::RecognizeError;

/// Pixel-space bounding box of a recognized card on the captured table image.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// One card observation as reported by the external recognizer. Recognition
/// itself (image filtering, template matching) happens outside this crate;
/// only its output shape is consumed here.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RecognizedCard {
    pub rank: Rank,
    pub suit: Suit,
    pub bounds: Bounds,
}

/// Collapses recognizer output into the card list the classifier consumes.
///
/// Observations arrive with no ordering guarantee; they are sorted into
/// reading order (left to right, ties top to bottom) and any card reported
/// twice is rejected, since the classifier itself assumes a well-formed set
/// and performs no duplicate detection.
pub fn cards_from_recognition(observed: &[RecognizedCard]) -> Result<Vec<Card>, RecognizeError> {
    let mut sorted = observed.to_vec();
    sorted.sort_unstable_by_key(|o| (o.bounds.x, o.bounds.y));

    let mut seen = HashSet::new();
    let mut cards = Vec::with_capacity(sorted.len());
    for obs in sorted {
        let card = Card {
            suit: obs.suit,
            rank: obs.rank,
        };
        if !seen.insert(card) {
            return Err(RecognizeError::DuplicateCard { card });
        }
        cards.push(card);
    }
    Ok(cards)
}
