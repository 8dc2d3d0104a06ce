use std::fmt;

use crate::cards::Card;
use crate::errors::ContainerError;

/// An observable notification with no payload.
///
/// Containers own one of these per notification kind and fire it after
/// every successful structural mutation. Subscribers are plain closures
/// owned by the signal; there is no global event bus, and delivery is
/// synchronous on the mutating call.
#[derive(Default)]
pub struct Signal {
    slots: Vec<Box<dyn FnMut()>>,
}

impl Signal {
    pub fn new() -> Signal {
        Signal::default()
    }

    /// Registers a subscriber. Subscribers stay registered for the life of
    /// the container.
    pub fn connect(&mut self, f: impl FnMut() + 'static) {
        self.slots.push(Box::new(f));
    }

    /// Invokes every subscriber in registration order.
    pub fn emit(&mut self) {
        for slot in &mut self.slots {
            slot();
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.slots.len()
    }
}

impl fmt::Debug for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("subscribers", &self.slots.len())
            .finish()
    }
}

/// An observable notification carrying the affected card.
/// Used for the hand's per-card added/removed signals.
#[derive(Default)]
pub struct CardSignal {
    slots: Vec<Box<dyn FnMut(Card)>>,
}

impl CardSignal {
    pub fn new() -> CardSignal {
        CardSignal::default()
    }

    pub fn connect(&mut self, f: impl FnMut(Card) + 'static) {
        self.slots.push(Box::new(f));
    }

    pub fn emit(&mut self, card: Card) {
        for slot in &mut self.slots {
            slot(card);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.slots.len()
    }
}

impl fmt::Debug for CardSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardSignal")
            .field("subscribers", &self.slots.len())
            .finish()
    }
}

/// The shared capability set of the deck, hand, and board containers.
///
/// Each implementor composes its own private `Vec<Card>`; mutation goes
/// through these methods only, so the `changed` signal fires uniformly.
/// Containers never silently drop or duplicate cards in their own
/// operations: `add` either appends or rejects, and removing a card that
/// is not present is a no-op reporting failure.
pub trait CardContainer {
    /// Read-only view of the contained cards, bottom to top.
    fn cards(&self) -> &[Card];

    /// Fires after every successful structural mutation. This is the only
    /// integration point presentation code is expected to consume.
    fn changed(&mut self) -> &mut Signal;

    /// Capacity gate consulted by [`CardContainer::add`]. Unbounded
    /// containers always return `true`.
    fn can_add(&self, _card: &Card) -> bool {
        true
    }

    /// Appends a card at the end (the top). Rejects with
    /// [`ContainerError::AtCapacity`] when [`CardContainer::can_add`] is
    /// false; the container is never overfilled.
    fn add(&mut self, card: Card) -> Result<(), ContainerError>;

    /// Removes the first structurally-equal match. Returns whether a match
    /// was found; removal never consults the capacity gate.
    fn remove(&mut self, card: &Card) -> bool;

    /// Empties the container, returning the removed cards.
    fn remove_all(&mut self) -> Vec<Card>;

    /// Empties the container, discarding the contents.
    fn clear(&mut self);

    fn len(&self) -> usize {
        self.cards().len()
    }

    fn is_empty(&self) -> bool {
        self.cards().is_empty()
    }

    fn contains(&self, card: &Card) -> bool {
        self.cards().contains(card)
    }

    /// Index of the first structural match, if any.
    fn index_of(&self, card: &Card) -> Option<usize> {
        self.cards().iter().position(|c| c == card)
    }
}
