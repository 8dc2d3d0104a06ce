use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{build_deck, Card, DeckProfile};
use crate::container::{CardContainer, Signal};
use crate::errors::ContainerError;

/// A drawable stock of cards plus a discard pile, with deterministic,
/// replayable shuffling.
///
/// The RNG is owned per instance and seeded at construction, so two decks
/// never interfere with each other's shuffles and a given seed always
/// reproduces the same sequence of permutations.
///
/// # Examples
///
/// ```
/// use talon_engine::cards::DeckProfile;
/// use talon_engine::container::CardContainer;
/// use talon_engine::deck::Deck;
///
/// let mut deck = Deck::new_with_seed(42);
/// deck.initialize(DeckProfile::Small36, true);
/// assert_eq!(deck.len(), 36);
///
/// let card = deck.draw().expect("freshly initialized deck has cards");
/// deck.discard(card);
/// assert_eq!(deck.remaining() + deck.discard_count(), 36);
/// ```
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    discard: Vec<Card>,
    // Canonical card list recorded by the last initialize, replayed by reset.
    initial: Vec<Card>,
    profile: Option<DeckProfile>,
    rng: ChaCha20Rng,
    changed: Signal,
    deck_empty: Signal,
}

impl Deck {
    /// Creates an empty deck whose RNG is seeded with `seed`. Call
    /// [`Deck::initialize`] or [`Deck::initialize_with`] to populate it.
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            cards: Vec::new(),
            discard: Vec::new(),
            initial: Vec::new(),
            profile: None,
            rng: ChaCha20Rng::seed_from_u64(seed),
            changed: Signal::new(),
            deck_empty: Signal::new(),
        }
    }

    /// Populates the draw pile with one card per (suit, rank) pair of the
    /// profile, in canonical order, clears the discard pile, and optionally
    /// shuffles. Fires `changed` once.
    pub fn initialize(&mut self, profile: DeckProfile, shuffle: bool) {
        self.profile = Some(profile);
        self.initial = build_deck(profile);
        self.reset(shuffle);
    }

    /// Same as [`Deck::initialize`] but from a caller-supplied card list,
    /// supporting non-standard decks. The list is recorded as the deck's
    /// canonical order for [`Deck::reset`].
    pub fn initialize_with(&mut self, cards: Vec<Card>, shuffle: bool) {
        self.profile = None;
        self.initial = cards;
        self.reset(shuffle);
    }

    /// Re-runs the last initialize: restores the recorded canonical order,
    /// clears the discard pile, optionally shuffles. Fires `changed` once.
    pub fn reset(&mut self, shuffle: bool) {
        self.cards = self.initial.clone();
        self.discard.clear();
        if shuffle {
            self.cards.shuffle(&mut self.rng);
        }
        self.changed.emit();
    }

    /// In-place unbiased Fisher-Yates shuffle of the draw pile using the
    /// deck's own RNG. Fires `changed`.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        self.changed.emit();
    }

    /// Removes and returns the top card (the end of the pile).
    ///
    /// Returns `None` on an empty deck. Fires `changed`, then fires the
    /// `deck_empty` signal when this draw emptied the deck; the signal
    /// fires exactly once per non-empty to empty transition because further
    /// draws return `None` without mutating anything.
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.cards.pop()?;
        self.changed.emit();
        if self.cards.is_empty() {
            self.deck_empty.emit();
        }
        Some(card)
    }

    /// Draws up to `n` cards one at a time, stopping early if the deck
    /// empties. Returns however many were actually drawn, never padding.
    pub fn draw_many(&mut self, n: usize) -> Vec<Card> {
        (0..n).filter_map(|_| self.draw()).collect()
    }

    /// Reads the top card without mutation.
    pub fn peek(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Reads the bottom card without mutation.
    pub fn peek_bottom(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Appends a card to the discard pile. The draw pile is untouched and
    /// no signal fires.
    pub fn discard(&mut self, card: Card) {
        self.discard.push(card);
    }

    /// Appends several cards to the discard pile in order.
    pub fn discard_all(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.discard.extend(cards);
    }

    /// Draws the top card straight into the discard pile.
    pub fn burn(&mut self) -> Option<Card> {
        let card = self.draw()?;
        self.discard.push(card);
        Some(card)
    }

    /// Re-inserts a card on top of the draw pile. Fires `changed`.
    pub fn return_to_top(&mut self, card: Card) {
        self.cards.push(card);
        self.changed.emit();
    }

    /// Re-inserts a card at the bottom of the draw pile. Fires `changed`.
    pub fn return_to_bottom(&mut self, card: Card) {
        self.cards.insert(0, card);
        self.changed.emit();
    }

    /// Moves every discarded card back into the draw pile (appended), then
    /// shuffles.
    pub fn reshuffle_discard_pile(&mut self) {
        let mut discarded = std::mem::take(&mut self.discard);
        self.cards.append(&mut discarded);
        self.shuffle();
    }

    /// Number of cards left in the draw pile.
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn discard_count(&self) -> usize {
        self.discard.len()
    }

    /// Read-only view of the discard pile, oldest first.
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard
    }

    /// The profile recorded by the last [`Deck::initialize`], if the deck
    /// was not initialized from an explicit card list.
    pub fn profile(&self) -> Option<DeckProfile> {
        self.profile
    }

    /// Fires after `changed` when a draw empties the deck.
    pub fn deck_empty(&mut self) -> &mut Signal {
        &mut self.deck_empty
    }
}

impl CardContainer for Deck {
    fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn changed(&mut self) -> &mut Signal {
        &mut self.changed
    }

    fn add(&mut self, card: Card) -> Result<(), ContainerError> {
        self.cards.push(card);
        self.changed.emit();
        Ok(())
    }

    fn remove(&mut self, card: &Card) -> bool {
        match self.cards.iter().position(|c| c == card) {
            Some(pos) => {
                self.cards.remove(pos);
                self.changed.emit();
                true
            }
            None => false,
        }
    }

    fn remove_all(&mut self) -> Vec<Card> {
        if self.cards.is_empty() {
            return Vec::new();
        }
        let removed = std::mem::take(&mut self.cards);
        self.changed.emit();
        removed
    }

    fn clear(&mut self) {
        if !self.cards.is_empty() {
            self.cards.clear();
            self.changed.emit();
        }
    }
}
