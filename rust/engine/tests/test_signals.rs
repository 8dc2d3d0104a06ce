use std::cell::{Cell, RefCell};
use std::rc::Rc;

use talon_engine::board::Board;
use talon_engine::cards::{Card, DeckProfile, Rank as R, Suit as S};
use talon_engine::container::CardContainer;
use talon_engine::deck::Deck;
use talon_engine::hand::Hand;

fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
    let count = Rc::new(Cell::new(0));
    let inner = Rc::clone(&count);
    (count, move || inner.set(inner.get() + 1))
}

#[test]
fn deck_changed_fires_on_every_structural_mutation() {
    let mut deck = Deck::new_with_seed(9);
    let (count, bump) = counter();
    deck.changed().connect(bump);

    deck.initialize(DeckProfile::Small36, true);
    assert_eq!(count.get(), 1, "initialize fires once even when shuffling");

    deck.shuffle();
    assert_eq!(count.get(), 2);

    let card = deck.draw().expect("populated deck");
    assert_eq!(count.get(), 3);

    deck.return_to_top(card);
    assert_eq!(count.get(), 4);

    deck.reshuffle_discard_pile();
    assert_eq!(count.get(), 5, "reshuffle fires once via its shuffle");

    deck.reset(false);
    assert_eq!(count.get(), 6);
}

#[test]
fn deck_discard_is_not_a_draw_pile_mutation() {
    let mut deck = Deck::new_with_seed(9);
    deck.initialize(DeckProfile::Small36, false);
    let (count, bump) = counter();
    deck.changed().connect(bump);

    deck.discard(Card::new(S::Hearts, R::Six));
    deck.discard_all([Card::new(S::Hearts, R::Seven)]);
    assert_eq!(count.get(), 0);
}

#[test]
fn failed_removal_fires_nothing() {
    let mut hand = Hand::new();
    let (count, bump) = counter();
    hand.changed().connect(bump);

    assert!(!hand.remove(&Card::new(S::Clubs, R::Six)));
    assert_eq!(count.get(), 0);

    hand.clear();
    assert_eq!(count.get(), 0, "clearing an empty container is a no-op");
}

#[test]
fn rejected_board_add_fires_nothing() {
    let mut board = Board::with_capacity(1);
    board.add(Card::new(S::Clubs, R::Six)).unwrap();

    let (count, bump) = counter();
    board.changed().connect(bump);
    assert!(board.add(Card::new(S::Clubs, R::Seven)).is_err());
    assert_eq!(count.get(), 0);
}

#[test]
fn hand_per_card_signals_carry_the_affected_card() {
    let mut hand = Hand::new();
    let added = Rc::new(RefCell::new(Vec::new()));
    let removed = Rc::new(RefCell::new(Vec::new()));

    let added_log = Rc::clone(&added);
    hand.card_added()
        .connect(move |card| added_log.borrow_mut().push(card));
    let removed_log = Rc::clone(&removed);
    hand.card_removed()
        .connect(move |card| removed_log.borrow_mut().push(card));

    let six = Card::new(S::Clubs, R::Six);
    let king = Card::new(S::Hearts, R::King);
    hand.add_range([six, king]);
    assert_eq!(*added.borrow(), vec![six, king]);

    hand.remove(&six);
    assert_eq!(*removed.borrow(), vec![six]);

    hand.remove_all();
    assert_eq!(*removed.borrow(), vec![six, king]);
}

#[test]
fn sorting_fires_changed_once_per_sort_call() {
    let mut hand = Hand::new();
    hand.add_range([
        Card::new(S::Hearts, R::King),
        Card::new(S::Clubs, R::Six),
        Card::new(S::Spades, R::Nine),
    ]);

    let (count, bump) = counter();
    hand.changed().connect(bump);
    hand.sort_by_rank(true);
    assert_eq!(count.get(), 1);
    hand.sort_by_suit(false);
    assert_eq!(count.get(), 2);
}

#[test]
fn multiple_subscribers_all_hear_a_change() {
    let mut hand = Hand::new();
    let (a, bump_a) = counter();
    let (b, bump_b) = counter();
    hand.changed().connect(bump_a);
    hand.changed().connect(bump_b);
    assert_eq!(hand.changed().subscriber_count(), 2);

    hand.add(Card::new(S::Diamonds, R::Ten)).unwrap();
    assert_eq!((a.get(), b.get()), (1, 1));
}
