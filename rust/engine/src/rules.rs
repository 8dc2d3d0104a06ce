use crate::cards::{Card, Suit};

/// Decides whether `defender` legally covers `attacker` under trick-taking
/// rules with an optional trump suit.
///
/// The rule, in order:
/// 1. A joker never covers here. Joker semantics vary by game and are
///    delegated to the surrounding rules, not this engine.
/// 2. Same suit: the defender covers iff its rank is strictly higher.
/// 3. A trump defender covers any non-trump attacker, regardless of rank.
/// 4. Otherwise the defender does not cover.
///
/// The function is pure and total, and it is order-sensitive in its two
/// card arguments: covering is not symmetric.
///
/// # Examples
///
/// ```
/// use talon_engine::cards::{Card, Rank, Suit};
/// use talon_engine::rules::can_cover;
///
/// let trump = Some(Suit::Spades);
///
/// // Any trump covers any non-trump attacker, regardless of rank.
/// let seven_spades = Card::new(Suit::Spades, Rank::Seven);
/// let king_hearts = Card::new(Suit::Hearts, Rank::King);
/// assert!(can_cover(seven_spades, king_hearts, trump));
///
/// // Same suit, lower rank: no cover.
/// let nine_hearts = Card::new(Suit::Hearts, Rank::Nine);
/// assert!(!can_cover(nine_hearts, king_hearts, trump));
///
/// // Different non-trump suits never cover.
/// let ace_clubs = Card::new(Suit::Clubs, Rank::Ace);
/// assert!(!can_cover(ace_clubs, king_hearts, trump));
/// ```
///
/// ```
/// use talon_engine::cards::{Card, JokerColor, Rank, Suit};
/// use talon_engine::rules::can_cover;
///
/// // Without a trump suit only same-suit, higher-rank cards cover.
/// let ten_clubs = Card::new(Suit::Clubs, Rank::Ten);
/// let six_clubs = Card::new(Suit::Clubs, Rank::Six);
/// assert!(can_cover(ten_clubs, six_clubs, None));
/// assert!(!can_cover(six_clubs, ten_clubs, None));
///
/// // Jokers are delegated to the host game's rules: never a cover here.
/// let red_joker = Card::joker(JokerColor::Red);
/// assert!(!can_cover(red_joker, six_clubs, Some(Suit::Spades)));
/// ```
pub fn can_cover(defender: Card, attacker: Card, trump: Option<Suit>) -> bool {
    let (Some(d_suit), Some(d_rank)) = (defender.suit(), defender.rank()) else {
        return false;
    };
    let (Some(a_suit), Some(a_rank)) = (attacker.suit(), attacker.rank()) else {
        return false;
    };
    if d_suit == a_suit {
        return d_rank > a_rank;
    }
    matches!(trump, Some(t) if d_suit == t && a_suit != t)
}
