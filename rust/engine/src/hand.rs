use std::cmp::Ordering;

use crate::cards::{Card, Rank, Suit};
use crate::container::{CardContainer, CardSignal, Signal};
use crate::errors::ContainerError;
use crate::rules::can_cover;

/// A player's held cards, with search, sort, and trick-taking comparison
/// support.
///
/// Joker cards have no suit or rank, so they are excluded from every
/// rank/suit predicate and from the extremum queries; only
/// [`Hand::cards_that_can_beat`] sees them (and reports they beat
/// nothing, per [`can_cover`]).
///
/// # Examples
///
/// ```
/// use talon_engine::cards::{Card, Rank, Suit};
/// use talon_engine::hand::Hand;
///
/// let mut hand = Hand::new();
/// hand.add_range([
///     Card::new(Suit::Hearts, Rank::King),
///     Card::new(Suit::Spades, Rank::Seven),
/// ]);
///
/// // With spades as trump the seven covers the king.
/// let beats = hand.cards_that_can_beat(Card::new(Suit::Hearts, Rank::King), Some(Suit::Spades));
/// assert_eq!(beats, vec![Card::new(Suit::Spades, Rank::Seven)]);
/// ```
#[derive(Debug, Default)]
pub struct Hand {
    cards: Vec<Card>,
    changed: Signal,
    card_added: CardSignal,
    card_removed: CardSignal,
}

impl Hand {
    pub fn new() -> Hand {
        Hand::default()
    }

    fn push_card(&mut self, card: Card) {
        self.cards.push(card);
        self.card_added.emit(card);
        self.changed.emit();
    }

    /// Adds each card in order, firing the per-card and `changed` signals
    /// for every one.
    pub fn add_range(&mut self, cards: impl IntoIterator<Item = Card>) {
        for card in cards {
            self.push_card(card);
        }
    }

    /// Removes the card at `index`, returning it.
    ///
    /// # Errors
    ///
    /// An out-of-range index is a caller bug and fails loudly with
    /// [`ContainerError::IndexOutOfRange`].
    pub fn remove_at(&mut self, index: usize) -> Result<Card, ContainerError> {
        if index >= self.cards.len() {
            return Err(ContainerError::IndexOutOfRange {
                index,
                len: self.cards.len(),
            });
        }
        let card = self.cards.remove(index);
        self.card_removed.emit(card);
        self.changed.emit();
        Ok(card)
    }

    /// Whether any non-joker card has the given rank.
    pub fn contains_rank(&self, rank: Rank) -> bool {
        self.cards.iter().any(|c| c.rank() == Some(rank))
    }

    /// Whether any non-joker card has the given suit.
    pub fn contains_suit(&self, suit: Suit) -> bool {
        self.cards.iter().any(|c| c.suit() == Some(suit))
    }

    /// Stable in-place reorder by rank. Jokers order after all suited
    /// cards in either direction; equal keys keep their relative order, so
    /// repeating a sort is a no-op reorder. Fires `changed` once.
    pub fn sort_by_rank(&mut self, ascending: bool) {
        self.cards.sort_by(|a, b| match (a.rank(), b.rank()) {
            (Some(ra), Some(rb)) => {
                if ascending {
                    ra.cmp(&rb)
                } else {
                    rb.cmp(&ra)
                }
            }
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        self.changed.emit();
    }

    /// Stable in-place reorder by suit, ties broken by rank. Jokers order
    /// after all suited cards in either direction. Fires `changed` once.
    pub fn sort_by_suit(&mut self, ascending: bool) {
        self.cards.sort_by(|a, b| {
            let ka = a.suit().zip(a.rank());
            let kb = b.suit().zip(b.rank());
            match (ka, kb) {
                (Some(ka), Some(kb)) => {
                    if ascending {
                        ka.cmp(&kb)
                    } else {
                        kb.cmp(&ka)
                    }
                }
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        });
        self.changed.emit();
    }

    /// Snapshot of the non-joker cards of `suit`, in hand order.
    pub fn cards_by_suit(&self, suit: Suit) -> Vec<Card> {
        self.cards
            .iter()
            .copied()
            .filter(|c| c.suit() == Some(suit))
            .collect()
    }

    /// Snapshot of the non-joker cards of `rank`, in hand order.
    pub fn cards_by_rank(&self, rank: Rank) -> Vec<Card> {
        self.cards
            .iter()
            .copied()
            .filter(|c| c.rank() == Some(rank))
            .collect()
    }

    /// Snapshot of the non-joker cards whose rank is in `ranks`. Used for
    /// throw-in mechanics, where matching any rank already on the table is
    /// what qualifies a card.
    pub fn cards_matching_ranks(&self, ranks: &[Rank]) -> Vec<Card> {
        self.cards
            .iter()
            .copied()
            .filter(|c| c.rank().is_some_and(|r| ranks.contains(&r)))
            .collect()
    }

    /// Every held card that legally covers `attacker` under the comparison
    /// rule, in hand order.
    pub fn cards_that_can_beat(&self, attacker: Card, trump: Option<Suit>) -> Vec<Card> {
        self.cards
            .iter()
            .copied()
            .filter(|c| can_cover(*c, attacker, trump))
            .collect()
    }

    /// The weakest non-joker card: non-trump before trump, then by rank.
    /// `None` when the hand holds no suited cards.
    pub fn lowest_card(&self, trump: Option<Suit>) -> Option<Card> {
        self.cards
            .iter()
            .copied()
            .filter_map(|c| trump_order_key(c, trump).map(|k| (k, c)))
            .min_by_key(|(k, _)| *k)
            .map(|(_, c)| c)
    }

    /// The strongest non-joker card: trump above non-trump, then by rank.
    /// `None` when the hand holds no suited cards.
    pub fn highest_card(&self, trump: Option<Suit>) -> Option<Card> {
        self.cards
            .iter()
            .copied()
            .filter_map(|c| trump_order_key(c, trump).map(|k| (k, c)))
            .max_by_key(|(k, _)| *k)
            .map(|(_, c)| c)
    }

    /// Fires with the card just added, before `changed`.
    pub fn card_added(&mut self) -> &mut CardSignal {
        &mut self.card_added
    }

    /// Fires with the card just removed, before `changed`.
    pub fn card_removed(&mut self) -> &mut CardSignal {
        &mut self.card_removed
    }
}

/// Ordering key for extremum queries: non-trump sorts below trump, rank
/// breaks ties. Jokers have no key.
fn trump_order_key(card: Card, trump: Option<Suit>) -> Option<(bool, Rank)> {
    let rank = card.rank()?;
    let is_trump = trump.is_some() && card.suit() == trump;
    Some((is_trump, rank))
}

impl CardContainer for Hand {
    fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn changed(&mut self) -> &mut Signal {
        &mut self.changed
    }

    fn add(&mut self, card: Card) -> Result<(), ContainerError> {
        self.push_card(card);
        Ok(())
    }

    fn remove(&mut self, card: &Card) -> bool {
        match self.cards.iter().position(|c| c == card) {
            Some(pos) => {
                let removed = self.cards.remove(pos);
                self.card_removed.emit(removed);
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
        for card in &removed {
            self.card_removed.emit(*card);
        }
        self.changed.emit();
        removed
    }

    fn clear(&mut self) {
        if !self.cards.is_empty() {
            let removed = std::mem::take(&mut self.cards);
            for card in removed {
                self.card_removed.emit(card);
            }
            self.changed.emit();
        }
    }
}
