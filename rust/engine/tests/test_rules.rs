use talon_engine::cards::{Card, JokerColor, Rank as R, Suit as S};
use talon_engine::rules::can_cover;

#[test]
fn trump_beats_non_trump_regardless_of_rank() {
    let seven_spades = Card::new(S::Spades, R::Seven);
    let king_hearts = Card::new(S::Hearts, R::King);
    assert!(can_cover(seven_spades, king_hearts, Some(S::Spades)));
}

#[test]
fn same_suit_is_decided_by_rank() {
    let king_hearts = Card::new(S::Hearts, R::King);
    let nine_hearts = Card::new(S::Hearts, R::Nine);
    assert!(!can_cover(nine_hearts, king_hearts, Some(S::Spades)));
    assert!(can_cover(king_hearts, nine_hearts, Some(S::Spades)));
    // Equal cards never cover each other.
    assert!(!can_cover(king_hearts, king_hearts, Some(S::Spades)));
}

#[test]
fn different_non_trump_suits_never_cover() {
    let ace_clubs = Card::new(S::Clubs, R::Ace);
    let king_hearts = Card::new(S::Hearts, R::King);
    assert!(!can_cover(ace_clubs, king_hearts, Some(S::Spades)));
    assert!(!can_cover(ace_clubs, king_hearts, None));
}

#[test]
fn trump_on_trump_is_decided_by_rank() {
    let six_spades = Card::new(S::Spades, R::Six);
    let ten_spades = Card::new(S::Spades, R::Ten);
    assert!(can_cover(ten_spades, six_spades, Some(S::Spades)));
    assert!(!can_cover(six_spades, ten_spades, Some(S::Spades)));
}

#[test]
fn non_trump_never_covers_a_trump_attacker() {
    let ace_hearts = Card::new(S::Hearts, R::Ace);
    let six_spades = Card::new(S::Spades, R::Six);
    assert!(!can_cover(ace_hearts, six_spades, Some(S::Spades)));
}

#[test]
fn jokers_are_delegated_and_never_cover() {
    let six_clubs = Card::new(S::Clubs, R::Six);
    for color in [JokerColor::Red, JokerColor::Black] {
        assert!(!can_cover(Card::joker(color), six_clubs, Some(S::Spades)));
        assert!(!can_cover(six_clubs, Card::joker(color), Some(S::Spades)));
    }
}

#[test]
fn covering_is_not_symmetric() {
    let seven_spades = Card::new(S::Spades, R::Seven);
    let king_hearts = Card::new(S::Hearts, R::King);
    assert!(can_cover(seven_spades, king_hearts, Some(S::Spades)));
    assert!(!can_cover(king_hearts, seven_spades, Some(S::Spades)));
}

#[test]
fn result_is_a_pure_function_of_the_inputs() {
    use talon_engine::cards::{all_ranks, all_suits};

    for &ds in &all_suits() {
        for &dr in &all_ranks() {
            for &asu in &all_suits() {
                for &ar in &all_ranks() {
                    for trump in [None, Some(S::Spades), Some(S::Hearts)] {
                        let d = Card::new(ds, dr);
                        let a = Card::new(asu, ar);
                        assert_eq!(
                            can_cover(d, a, trump),
                            can_cover(d, a, trump),
                            "identical inputs must give identical output"
                        );
                    }
                }
            }
        }
    }
}
