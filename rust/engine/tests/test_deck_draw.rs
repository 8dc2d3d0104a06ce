use std::cell::RefCell;
use std::rc::Rc;

use talon_engine::cards::{build_deck, Card, DeckProfile, Rank, Suit};
use talon_engine::container::CardContainer;
use talon_engine::deck::Deck;

#[test]
fn draw_takes_the_top_card() {
    let mut deck = Deck::new_with_seed(3);
    deck.initialize(DeckProfile::Small36, false);
    let top = deck.peek().expect("populated deck");
    assert_eq!(deck.draw(), Some(top));
    assert_eq!(deck.remaining(), 35);
}

#[test]
fn draw_then_return_to_top_restores_the_prior_state() {
    let mut deck = Deck::new_with_seed(11);
    deck.initialize(DeckProfile::Small36, true);
    let before = deck.peek().expect("populated deck");
    let card = deck.draw().expect("populated deck");
    assert_eq!(card, before);
    deck.return_to_top(card);
    assert_eq!(deck.peek(), Some(before));
    assert_eq!(deck.remaining(), 36);
}

#[test]
fn return_to_bottom_places_the_card_under_the_deck() {
    let mut deck = Deck::new_with_seed(11);
    deck.initialize(DeckProfile::Small36, false);
    let card = deck.draw().expect("populated deck");
    deck.return_to_bottom(card);
    assert_eq!(deck.peek_bottom(), Some(card));
    assert_ne!(deck.peek(), Some(card));
}

#[test]
fn draw_many_stops_when_the_deck_empties() {
    let mut deck = Deck::new_with_seed(21);
    deck.initialize(DeckProfile::Small36, false);
    let drawn = deck.draw_many(50);
    assert_eq!(drawn.len(), 36, "only the available cards are returned");
    assert!(deck.is_empty());
    assert!(deck.draw().is_none());
}

#[test]
fn peek_does_not_mutate() {
    let mut deck = Deck::new_with_seed(4);
    deck.initialize(DeckProfile::Small36, true);
    let top = deck.peek();
    let bottom = deck.peek_bottom();
    assert_eq!(deck.peek(), top);
    assert_eq!(deck.peek_bottom(), bottom);
    assert_eq!(deck.remaining(), 36);
}

#[test]
fn empty_deck_operations_return_none() {
    let mut deck = Deck::new_with_seed(0);
    assert!(deck.draw().is_none());
    assert!(deck.burn().is_none());
    assert!(deck.peek().is_none());
    assert!(deck.peek_bottom().is_none());
    assert_eq!(deck.draw_many(5), Vec::new());
}

#[test]
fn deck_empty_fires_exactly_once_after_changed() {
    let mut deck = Deck::new_with_seed(8);
    let log = Rc::new(RefCell::new(Vec::new()));
    let changed_log = Rc::clone(&log);
    let empty_log = Rc::clone(&log);
    deck.changed()
        .connect(move || changed_log.borrow_mut().push("changed"));
    deck.deck_empty()
        .connect(move || empty_log.borrow_mut().push("empty"));

    deck.initialize_with(
        vec![
            Card::new(Suit::Hearts, Rank::Six),
            Card::new(Suit::Hearts, Rank::Seven),
        ],
        false,
    );
    log.borrow_mut().clear();

    assert!(deck.draw().is_some());
    assert_eq!(*log.borrow(), vec!["changed"]);

    assert!(deck.draw().is_some());
    assert_eq!(
        *log.borrow(),
        vec!["changed", "changed", "empty"],
        "the emptying draw fires changed first, then empty"
    );

    assert!(deck.draw().is_none());
    assert_eq!(
        log.borrow().len(),
        3,
        "draws on an already-empty deck fire nothing"
    );
}

#[test]
fn burn_moves_the_top_card_to_the_discard_pile() {
    let mut deck = Deck::new_with_seed(31);
    deck.initialize(DeckProfile::Standard52, true);
    let top = deck.peek().expect("populated deck");
    assert_eq!(deck.burn(), Some(top));
    assert_eq!(deck.remaining(), 51);
    assert_eq!(deck.discard_count(), 1);
    assert_eq!(deck.discard_pile(), [top]);
}

#[test]
fn reshuffle_discard_pile_returns_every_card_to_play() {
    let mut deck = Deck::new_with_seed(17);
    deck.initialize(DeckProfile::Small36, true);
    let drawn = deck.draw_many(10);
    deck.discard_all(drawn);
    assert_eq!(deck.remaining(), 26);
    assert_eq!(deck.discard_count(), 10);

    deck.reshuffle_discard_pile();
    assert_eq!(deck.remaining(), 36);
    assert_eq!(deck.discard_count(), 0);

    let expected: std::collections::HashSet<Card> =
        build_deck(DeckProfile::Small36).into_iter().collect();
    let actual: std::collections::HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(actual, expected, "no card is lost or duplicated");
}

#[test]
fn reset_restores_the_recorded_profile() {
    let mut deck = Deck::new_with_seed(13);
    deck.initialize(DeckProfile::Jokers54, true);
    deck.draw_many(20);
    deck.discard(Card::new(Suit::Clubs, Rank::Ace));

    deck.reset(false);
    assert_eq!(deck.profile(), Some(DeckProfile::Jokers54));
    assert_eq!(deck.remaining(), 54);
    assert_eq!(deck.discard_count(), 0);
    assert_eq!(deck.cards(), build_deck(DeckProfile::Jokers54).as_slice());
}

#[test]
fn reset_replays_an_explicit_card_list() {
    let cards = vec![
        Card::new(Suit::Spades, Rank::Ace),
        Card::new(Suit::Hearts, Rank::Ace),
        Card::new(Suit::Diamonds, Rank::Ace),
    ];
    let mut deck = Deck::new_with_seed(2);
    deck.initialize_with(cards.clone(), false);
    deck.draw_many(3);
    assert!(deck.is_empty());

    deck.reset(false);
    assert_eq!(deck.profile(), None);
    assert_eq!(deck.cards(), cards.as_slice());
}

#[test]
fn discard_leaves_the_draw_pile_untouched() {
    let mut deck = Deck::new_with_seed(23);
    deck.initialize(DeckProfile::Small36, false);
    deck.discard(Card::new(Suit::Hearts, Rank::Six));
    assert_eq!(deck.remaining(), 36);
    assert_eq!(deck.discard_count(), 1);
}
