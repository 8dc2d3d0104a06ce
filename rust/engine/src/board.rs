use crate::cards::Card;
use crate::container::{CardContainer, Signal};
use crate::errors::ContainerError;

/// A capacity-bounded shared container for community cards on the table.
/// No trump logic lives here; the board is plain [`CardContainer`] state.
///
/// # Examples
///
/// ```
/// use talon_engine::board::Board;
/// use talon_engine::cards::{Card, Rank, Suit};
/// use talon_engine::container::CardContainer;
/// use talon_engine::errors::ContainerError;
///
/// let mut board = Board::with_capacity(1);
/// board.add(Card::new(Suit::Clubs, Rank::Ace)).unwrap();
/// let err = board.add(Card::new(Suit::Clubs, Rank::King)).unwrap_err();
/// assert_eq!(err, ContainerError::AtCapacity { capacity: 1 });
/// ```
#[derive(Debug, Default)]
pub struct Board {
    cards: Vec<Card>,
    max_cards: Option<usize>,
    changed: Signal,
}

impl Board {
    /// Creates an unbounded board.
    pub fn new() -> Board {
        Board::default()
    }

    /// Creates a board that holds at most `max_cards` cards. The bound is
    /// enforced by [`CardContainer::add`], not just advisory.
    pub fn with_capacity(max_cards: usize) -> Board {
        Board {
            cards: Vec::with_capacity(max_cards),
            max_cards: Some(max_cards),
            changed: Signal::new(),
        }
    }

    /// The configured maximum, or `None` when unbounded.
    pub fn capacity(&self) -> Option<usize> {
        self.max_cards
    }
}

impl CardContainer for Board {
    fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn changed(&mut self) -> &mut Signal {
        &mut self.changed
    }

    fn can_add(&self, _card: &Card) -> bool {
        self.max_cards.is_none_or(|max| self.cards.len() < max)
    }

    fn add(&mut self, card: Card) -> Result<(), ContainerError> {
        if !self.can_add(&card) {
            return Err(ContainerError::AtCapacity {
                // can_add only rejects when a bound is configured
                capacity: self.max_cards.unwrap_or(0),
            });
        }
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
