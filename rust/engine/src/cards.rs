use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ParseCardError;

/// Represents one of the four suits of a standard deck.
/// Used as a component of [`Card`] to fully define a playing card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// Numeric values are assigned so that ranks are totally ordered for
/// trick-taking comparisons.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

impl Rank {
    pub fn from_u8(v: u8) -> Rank {
        match v {
            2 => Rank::Two,
            3 => Rank::Three,
            4 => Rank::Four,
            5 => Rank::Five,
            6 => Rank::Six,
            7 => Rank::Seven,
            8 => Rank::Eight,
            9 => Rank::Nine,
            10 => Rank::Ten,
            11 => Rank::Jack,
            12 => Rank::Queen,
            13 => Rank::King,
            _ => Rank::Ace,
        }
    }
}

/// Distinguishes the two joker variants in a 54-card deck.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum JokerColor {
    /// Red joker
    Red,
    /// Black joker
    Black,
}

/// A single immutable playing card.
///
/// A card is either a suited card with a rank, or one of the two jokers.
/// A joker has no suit or rank at all, so [`Card::suit`] and [`Card::rank`]
/// return `Option` and joker cards fall out of suit/rank queries naturally.
/// Equality is structural: two cards are equal iff all fields match.
// Ord is the canonical sort order (suit-major, rank ascending, jokers last);
// trick comparisons with trump go through `rules::can_cover` instead.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Card {
    /// A suited card with a rank.
    Suited {
        /// The suit of the card (Clubs, Diamonds, Hearts, or Spades)
        suit: Suit,
        /// The rank of the card (Two through Ace)
        rank: Rank,
    },
    /// A red or black joker.
    Joker {
        /// Which of the two jokers this is
        color: JokerColor,
    },
}

impl Card {
    /// Creates a suited card.
    pub fn new(suit: Suit, rank: Rank) -> Card {
        Card::Suited { suit, rank }
    }

    /// Creates a joker of the given color.
    pub fn joker(color: JokerColor) -> Card {
        Card::Joker { color }
    }

    /// The card's suit, or `None` for a joker.
    pub fn suit(&self) -> Option<Suit> {
        match self {
            Card::Suited { suit, .. } => Some(*suit),
            Card::Joker { .. } => None,
        }
    }

    /// The card's rank, or `None` for a joker.
    pub fn rank(&self) -> Option<Rank> {
        match self {
            Card::Suited { rank, .. } => Some(*rank),
            Card::Joker { .. } => None,
        }
    }

    pub fn is_joker(&self) -> bool {
        matches!(self, Card::Joker { .. })
    }

    pub fn is_red_joker(&self) -> bool {
        matches!(
            self,
            Card::Joker {
                color: JokerColor::Red
            }
        )
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Suited { suit, rank } => {
                let r = match rank {
                    Rank::Two => '2',
                    Rank::Three => '3',
                    Rank::Four => '4',
                    Rank::Five => '5',
                    Rank::Six => '6',
                    Rank::Seven => '7',
                    Rank::Eight => '8',
                    Rank::Nine => '9',
                    Rank::Ten => 'T',
                    Rank::Jack => 'J',
                    Rank::Queen => 'Q',
                    Rank::King => 'K',
                    Rank::Ace => 'A',
                };
                let s = match suit {
                    Suit::Clubs => 'C',
                    Suit::Diamonds => 'D',
                    Suit::Hearts => 'H',
                    Suit::Spades => 'S',
                };
                write!(f, "{}{}", r, s)
            }
            Card::Joker {
                color: JokerColor::Red,
            } => write!(f, "JR"),
            Card::Joker {
                color: JokerColor::Black,
            } => write!(f, "JB"),
        }
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses two-character card codes: `"AS"`, `"6H"`, `"TC"`, and the
    /// joker codes `"JR"` / `"JB"`.
    fn from_str(s: &str) -> Result<Card, ParseCardError> {
        let err = || ParseCardError {
            input: s.to_string(),
        };
        match s {
            "JR" => return Ok(Card::joker(JokerColor::Red)),
            "JB" => return Ok(Card::joker(JokerColor::Black)),
            _ => {}
        }
        let mut chars = s.chars();
        let rank_ch = chars.next().ok_or_else(err)?;
        let suit_ch = chars.next().ok_or_else(err)?;
        if chars.next().is_some() {
            return Err(err());
        }
        let rank = match rank_ch {
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return Err(err()),
        };
        let suit = match suit_ch {
            'C' => Suit::Clubs,
            'D' => Suit::Diamonds,
            'H' => Suit::Hearts,
            'S' => Suit::Spades,
            _ => return Err(err()),
        };
        Ok(Card::new(suit, rank))
    }
}

/// Supported deck shapes.
///
/// Each profile maps to a minimum rank and whether the joker pair is
/// included. A "play" profile is compatible with a sprite/asset profile
/// when it does not require lower ranks than the assets model (see
/// [`DeckProfile::can_play_with`]); validating loaded configuration
/// against that predicate is the host application's job.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum DeckProfile {
    /// 36-card deck, Six through Ace, no jokers.
    Small36,
    /// 52-card deck, Two through Ace, no jokers.
    Standard52,
    /// 54-card deck: Standard52 plus the red and black jokers.
    Jokers54,
}

impl DeckProfile {
    /// The lowest rank dealt by this profile.
    pub fn min_rank(self) -> Rank {
        match self {
            DeckProfile::Small36 => Rank::Six,
            DeckProfile::Standard52 | DeckProfile::Jokers54 => Rank::Two,
        }
    }

    pub fn has_jokers(self) -> bool {
        matches!(self, DeckProfile::Jokers54)
    }

    /// Number of cards [`build_deck`] produces for this profile.
    pub fn card_count(self) -> usize {
        let suited = ranks_from(self.min_rank()).len() * all_suits().len();
        if self.has_jokers() {
            suited + 2
        } else {
            suited
        }
    }

    /// Whether a deck of this profile can be played with assets modeled
    /// for `asset_profile` (it must not require lower ranks than the
    /// assets provide).
    pub fn can_play_with(self, asset_profile: DeckProfile) -> bool {
        self.min_rank() >= asset_profile.min_rank()
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

/// All ranks from `min` up to Ace, ascending.
pub fn ranks_from(min: Rank) -> Vec<Rank> {
    all_ranks().iter().copied().filter(|r| *r >= min).collect()
}

/// Builds a deck in canonical order: suit-major in [`all_suits`] order,
/// ranks ascending from the profile's minimum, jokers (red then black)
/// appended last. This fixed order is the input to every shuffle, which is
/// what makes seeded shuffles reproducible.
pub fn build_deck(profile: DeckProfile) -> Vec<Card> {
    let ranks = ranks_from(profile.min_rank());
    let mut v = Vec::with_capacity(profile.card_count());
    for &s in &all_suits() {
        for &r in &ranks {
            v.push(Card::new(s, r));
        }
    }
    if profile.has_jokers() {
        v.push(Card::joker(JokerColor::Red));
        v.push(Card::joker(JokerColor::Black));
    }
    v
}
