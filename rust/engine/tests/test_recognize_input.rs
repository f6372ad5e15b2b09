use sanshui_engine::cards::{Card, Rank as R, Suit as S};
use sanshui_engine::errors::RecognizeError;
use sanshui_engine::recognize::{cards_from_recognition, Bounds, RecognizedCard};

fn obs(s: S, r: R, x: i32, y: i32) -> RecognizedCard {
    RecognizedCard {
        rank: r,
        suit: s,
        bounds: Bounds {
            x,
            y,
            width: 14,
            height: 16,
        },
    }
}

#[test]
fn orders_observations_into_reading_order() {
    let observed = [
        obs(S::Spades, R::Seven, 90, 10),
        obs(S::Clubs, R::Three, 10, 10),
        obs(S::Diamonds, R::Three, 50, 10),
    ];
    let cards = cards_from_recognition(&observed).expect("collect cards");
    assert_eq!(
        cards,
        vec![
            Card { suit: S::Clubs, rank: R::Three },
            Card { suit: S::Diamonds, rank: R::Three },
            Card { suit: S::Spades, rank: R::Seven },
        ]
    );
}

#[test]
fn ties_on_x_break_top_to_bottom() {
    let observed = [
        obs(S::Hearts, R::King, 10, 40),
        obs(S::Hearts, R::Queen, 10, 5),
    ];
    let cards = cards_from_recognition(&observed).expect("collect cards");
    assert_eq!(cards[0].rank, R::Queen);
    assert_eq!(cards[1].rank, R::King);
}

#[test]
fn rejects_a_card_recognized_twice() {
    // same rank and suit at two positions is one physical card seen twice
    let observed = [
        obs(S::Hearts, R::Ace, 10, 10),
        obs(S::Clubs, R::Five, 50, 10),
        obs(S::Hearts, R::Ace, 90, 10),
    ];
    let err = cards_from_recognition(&observed).unwrap_err();
    assert_eq!(
        err,
        RecognizeError::DuplicateCard {
            card: Card {
                suit: S::Hearts,
                rank: R::Ace
            }
        }
    );
}

#[test]
fn recognized_cards_feed_straight_into_classification() {
    use sanshui_engine::hand::{classify_body_or_tail, Category};

    let observed = [
        obs(S::Hearts, R::Eight, 130, 10),
        obs(S::Hearts, R::Four, 10, 10),
        obs(S::Hearts, R::Six, 70, 10),
        obs(S::Hearts, R::Five, 40, 10),
        obs(S::Hearts, R::Seven, 100, 10),
    ];
    let cards = cards_from_recognition(&observed).expect("collect cards");
    let hand = classify_body_or_tail(&cards).expect("classify");
    assert_eq!(hand.category(), Category::StraightFlush);
}
