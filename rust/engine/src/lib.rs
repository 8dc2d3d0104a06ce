//! # talon-engine: Card-Game Domain Engine
//!
//! A deterministic card-table engine: playing-card identities, the deck /
//! hand / board containers that move them around, trump-aware trick-taking
//! comparison, and closed-form 2D layout geometry for presenting a
//! variable-size group of cards. Reproducible RNG per deck instance makes
//! every shuffle replayable.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card, jokers), deck
//!   profiles, and canonical deck construction
//! - [`container`] - The shared container capability set and change signals
//! - [`deck`] - Drawable stock + discard pile with deterministic ChaCha20
//!   shuffling
//! - [`hand`] - Held-cards queries, sorting, and trick comparison support
//! - [`board`] - Capacity-bounded shared community-card container
//! - [`rules`] - The pure "can cover" trick-taking comparison
//! - [`layout`] - Fan / line / stack / grid / scattered arrangement math
//! - [`logger`] - Session logging and SessionRecord serialization
//! - [`errors`] - Error types for container operations
//!
//! ## Quick Start
//!
//! ```rust
//! use talon_engine::cards::DeckProfile;
//! use talon_engine::container::CardContainer;
//! use talon_engine::deck::Deck;
//! use talon_engine::hand::Hand;
//!
//! // Seeded deck: same seed, same shuffle, every time.
//! let mut deck = Deck::new_with_seed(42);
//! deck.initialize(DeckProfile::Small36, true);
//!
//! // Deal six cards to a hand.
//! let mut hand = Hand::new();
//! hand.add_range(deck.draw_many(6));
//! assert_eq!(hand.len(), 6);
//! assert_eq!(deck.remaining(), 30);
//! ```
//!
//! ## Trick Comparison
//!
//! ```rust
//! use talon_engine::cards::{Card, Rank, Suit};
//! use talon_engine::rules::can_cover;
//!
//! // With spades as trump, a low spade covers a high heart.
//! let defender = Card::new(Suit::Spades, Rank::Seven);
//! let attacker = Card::new(Suit::Hearts, Rank::King);
//! assert!(can_cover(defender, attacker, Some(Suit::Spades)));
//! ```
//!
//! ## Layout Geometry
//!
//! ```rust
//! use talon_engine::layout::{arrange, LayoutMode, LayoutRequest};
//!
//! // A three-card fan is symmetric around the center card.
//! let request = LayoutRequest {
//!     item_count: 3,
//!     mode: LayoutMode::Fan,
//!     arc_angle: 10.0,
//!     ..LayoutRequest::default()
//! };
//! let placements = arrange(&request);
//! assert_eq!(placements[1].rotation, 0.0);
//! assert_eq!(placements[0].rotation, -placements[2].rotation);
//! ```

pub mod board;
pub mod cards;
pub mod container;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod layout;
pub mod logger;
pub mod rules;
