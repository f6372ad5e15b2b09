use thiserror::Error;

use crate::cards::Card;
use crate::hand::Category;
use crate::score::Region;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreError {
    #[error("hand must contain exactly {expected} cards, got {actual}")]
    MalformedHand { expected: usize, actual: usize },
    #[error("cannot compare {left:?} against {right:?} with the same-category rule")]
    CategoryMismatch { left: Category, right: Category },
    #[error("{category:?} cannot be scored in the {region:?} region")]
    IllegalRegion { category: Category, region: Region },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecognizeError {
    #[error("card {card:?} was recognized more than once")]
    DuplicateCard { card: Card },
}
