use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::errors::ScoreError;

/// The closed set of hand forms, ordered by comparison priority within each
/// family. The three head forms apply to 3-card sets and the nine others to
/// 5-card sets; the two families are never legitimately compared against
/// each other, so the head forms simply sit below the 5-card forms.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCardHead,
    PairHead,
    ThreeOfAKindHead,
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

impl Category {
    /// True for the 3-card forms that only the head region accepts.
    pub fn is_head(self) -> bool {
        matches!(
            self,
            Category::HighCardHead | Category::PairHead | Category::ThreeOfAKindHead
        )
    }
}

/// A classified card set: the category tag plus the exact cards it was built
/// from, reordered at classification time so the anchor card (quad / triple /
/// pair rank, top run card, or highest card) comes first. Immutable once
/// built; the category and card order never change afterwards.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RankedHand {
    category: Category,
    cards: Vec<Card>,
}

impl RankedHand {
    pub fn category(&self) -> Category {
        self.category
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn anchor(&self) -> Card {
        self.cards[0]
    }

    /// Tie-break between two hands of the same category. Dispatching across
    /// categories is a caller bug and fails fast with `CategoryMismatch`.
    pub fn compare_same_category(&self, other: &RankedHand) -> Result<Ordering, ScoreError> {
        if self.category != other.category {
            return Err(ScoreError::CategoryMismatch {
                left: self.category,
                right: other.category,
            });
        }
        let a = self.anchor();
        let b = other.anchor();
        Ok(match self.category {
            // the one place suit decides between equal categories
            Category::StraightFlush => a.rank.cmp(&b.rank).then(a.suit.cmp(&b.suit)),
            Category::Flush => a.suit.cmp(&b.suit),
            // higher pair, then the unpaired kicker; the low pair is never consulted
            Category::TwoPair => a
                .rank
                .cmp(&b.rank)
                .then_with(|| self.cards[4].rank.cmp(&other.cards[4].rank)),
            Category::FourOfAKind
            | Category::FullHouse
            | Category::Straight
            | Category::ThreeOfAKind
            | Category::OnePair
            | Category::HighCard
            | Category::ThreeOfAKindHead
            | Category::PairHead
            | Category::HighCardHead => a.rank.cmp(&b.rank),
        })
    }
}

/// Classifies a 3-card head set into one of the three head forms.
pub fn classify_head(cards: &[Card]) -> Result<RankedHand, ScoreError> {
    if cards.len() != 3 {
        return Err(ScoreError::MalformedHand {
            expected: 3,
            actual: cards.len(),
        });
    }
    let mut sorted = cards.to_vec();
    sorted.sort_unstable_by(|a, b| b.rank.cmp(&a.rank));

    let category = if sorted[0].rank == sorted[2].rank {
        Category::ThreeOfAKindHead
    } else if sorted[0].rank == sorted[1].rank || sorted[1].rank == sorted[2].rank {
        if sorted[1].rank == sorted[2].rank {
            // kicker outranks the pair; move it behind
            sorted.rotate_left(1);
        }
        Category::PairHead
    } else {
        Category::HighCardHead
    };
    Ok(RankedHand {
        category,
        cards: sorted,
    })
}

/// Classifies a 5-card set into one of the nine middle/tail forms.
///
/// Checks run in strict priority order (straight flush, four of a kind, full
/// house, flush, straight, three of a kind, two pair, one pair, high card);
/// the first match wins, since a straight flush also satisfies the weaker
/// flush and straight patterns.
pub fn classify_body_or_tail(cards: &[Card]) -> Result<RankedHand, ScoreError> {
    if cards.len() != 5 {
        return Err(ScoreError::MalformedHand {
            expected: 5,
            actual: cards.len(),
        });
    }
    let mut sorted = cards.to_vec();
    sorted.sort_unstable_by(|a, b| b.rank.cmp(&a.rank));

    let flush = sorted.iter().all(|c| c.suit == sorted[0].suit);

    if let Some(run_cards) = run_order(&sorted) {
        // a run carries five distinct ranks, so nothing between straight
        // flush and straight in the priority order can also match
        let category = if flush {
            Category::StraightFlush
        } else {
            Category::Straight
        };
        return Ok(RankedHand {
            category,
            cards: run_cards,
        });
    }

    let groups = rank_groups(&sorted);
    let counts: Vec<usize> = groups.iter().map(|&(n, _)| n).collect();

    let category = match counts.as_slice() {
        [4, 1] => Category::FourOfAKind,
        [3, 2] => Category::FullHouse,
        _ if flush => Category::Flush,
        [3, 1, 1] => Category::ThreeOfAKind,
        [2, 2, 1] => Category::TwoPair,
        [2, 1, 1, 1] => Category::OnePair,
        _ => Category::HighCard,
    };
    Ok(RankedHand {
        category,
        cards: ordered_by_groups(&sorted, &groups),
    })
}

fn rank_val(r: Rank) -> u8 {
    r as u8
}

/// Returns the cards in descending run order when the five ranks form a
/// consecutive run, else `None`. The A-2-3-4-5 wheel counts as a run with the
/// Ace demoted below the Two, so the stored order becomes 5-4-3-2-A and the
/// anchor (first) card is the Five.
fn run_order(sorted_desc: &[Card]) -> Option<Vec<Card>> {
    if sorted_desc
        .windows(2)
        .any(|w| w[0].rank == w[1].rank)
    {
        return None;
    }
    if sorted_desc
        .windows(2)
        .all(|w| rank_val(w[0].rank) == rank_val(w[1].rank) + 1)
    {
        return Some(sorted_desc.to_vec());
    }
    let ranks: Vec<Rank> = sorted_desc.iter().map(|c| c.rank).collect();
    if ranks == [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two] {
        let mut cards = sorted_desc.to_vec();
        cards.rotate_left(1);
        return Some(cards);
    }
    None
}

/// Groups the (descending-sorted) cards by rank, ordered by multiplicity and
/// then rank, both descending.
fn rank_groups(sorted_desc: &[Card]) -> Vec<(usize, Rank)> {
    let mut groups: Vec<(usize, Rank)> = Vec::new();
    for card in sorted_desc {
        match groups.iter_mut().find(|(_, r)| *r == card.rank) {
            Some((n, _)) => *n += 1,
            None => groups.push((1, card.rank)),
        }
    }
    groups.sort_unstable_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)));
    groups
}

fn ordered_by_groups(sorted_desc: &[Card], groups: &[(usize, Rank)]) -> Vec<Card> {
    let mut out = Vec::with_capacity(sorted_desc.len());
    for &(_, rank) in groups {
        out.extend(sorted_desc.iter().copied().filter(|c| c.rank == rank));
    }
    out
}
