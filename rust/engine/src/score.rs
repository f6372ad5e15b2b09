use std::cmp::Ordering;

use crate::errors::ScoreError;
use crate::hand::{Category, RankedHand};

/// The three regions of a thirteen-card arrangement: 3-card head, 5-card
/// middle ("body"), 5-card tail.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Region {
    Head,
    Body,
    Tail,
}

/// Scoring weight applied when `category` wins a comparison in `region`.
///
/// Head forms carry no body/tail weight and the 5-card forms carry no head
/// weight; asking for one is a configuration error, never a silent zero.
pub fn region_points(category: Category, region: Region) -> Result<i32, ScoreError> {
    use Category::*;

    let points = match (category, region) {
        (StraightFlush, Region::Body) => Some(10),
        (StraightFlush, Region::Tail) => Some(5),
        (FourOfAKind, Region::Body) => Some(8),
        (FourOfAKind, Region::Tail) => Some(4),
        (FullHouse, Region::Body | Region::Tail) => Some(2),
        (
            Flush | Straight | ThreeOfAKind | TwoPair | OnePair | HighCard,
            Region::Body | Region::Tail,
        ) => Some(1),
        (ThreeOfAKindHead, Region::Head) => Some(3),
        (PairHead | HighCardHead, Region::Head) => Some(1),
        _ => None,
    };
    points.ok_or(ScoreError::IllegalRegion { category, region })
}

/// Compares two same-region hands and returns the signed, weighted margin
/// from `a`'s perspective.
///
/// Category order decides first; equal categories fall through to the
/// per-category tie-break. A tie stays 0. Otherwise the sign is multiplied
/// by the winner's point value for `region`, so a win with a premium
/// category in its premium region is worth more than the bare comparison.
pub fn score_region(a: &RankedHand, b: &RankedHand, region: Region) -> Result<i32, ScoreError> {
    let outcome = match a.category().cmp(&b.category()) {
        Ordering::Equal => a.compare_same_category(b)?,
        ord => ord,
    };
    match outcome {
        Ordering::Equal => Ok(0),
        Ordering::Greater => region_points(a.category(), region),
        Ordering::Less => region_points(b.category(), region).map(|p| -p),
    }
}

/// One side's completed arrangement: a classified hand per region.
/// Built once per comparison and never mutated.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MatchResult {
    head: RankedHand,
    middle: RankedHand,
    tail: RankedHand,
}

impl MatchResult {
    pub fn new(head: RankedHand, middle: RankedHand, tail: RankedHand) -> Self {
        Self { head, middle, tail }
    }

    pub fn head(&self) -> &RankedHand {
        &self.head
    }

    pub fn middle(&self) -> &RankedHand {
        &self.middle
    }

    pub fn tail(&self) -> &RankedHand {
        &self.tail
    }

    /// The three per-region margins against `other`, in head, body, tail
    /// order. Exposed for diagnostics; match settlement sums them.
    pub fn region_margins(&self, other: &MatchResult) -> Result<[i32; 3], ScoreError> {
        Ok([
            score_region(&self.head, &other.head, Region::Head)?,
            score_region(&self.middle, &other.middle, Region::Body)?,
            score_region(&self.tail, &other.tail, Region::Tail)?,
        ])
    }
}

/// Total score margin of `x` over `y` across all three regions. Positive
/// means `x`'s arrangement outscores `y`'s; zero is an exact three-region tie.
pub fn total_margin(x: &MatchResult, y: &MatchResult) -> Result<i32, ScoreError> {
    Ok(x.region_margins(y)?.iter().sum())
}
