//! Card, Suit, and Rank types for a standard 52-card deck.
//!
//! - `Suit` and `Rank` are closed value types with fixed display glyphs.
//! - `Card` carries its identity plus the two display flags the board
//!   needs (`face_up`, `partially_hidden`).

use core::fmt;

/// Number of suits in a standard deck.
pub const NUM_SUITS: usize = 4;
/// Number of ranks in a standard deck.
pub const NUM_RANKS: usize = 13;
/// Number of cards in a standard deck.
pub const CARDS_PER_DECK: usize = NUM_SUITS * NUM_RANKS;

/// Color class of a suit.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Color {
    Black,
    Red,
}

/// The four suits in a standard deck.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub enum Suit {
    Spades,
    Hearts,
    Clubs,
    Diamonds,
}

/// The thirteen ranks, Ace low.
///
/// The discriminant is the rank value 1..=13, so `rank as u8` is the
/// number used for all adjacency comparisons.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King, // 13
}

/// A playing card.
///
/// Identity is `(suit, rank)`; the two flags are display state only.
/// Equality compares the flags too, which is what board snapshots want.
/// Use [`Card::same_card`] to compare identities.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    /// Rank and suit are shown; otherwise a card back is drawn.
    pub face_up: bool,
    /// Waste-only display flag used in draw-three mode.
    pub partially_hidden: bool,
}

impl Suit {
    /// All suits in a fixed, reproducible order.
    pub const ALL: [Suit; NUM_SUITS] = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];

    #[inline]
    pub fn color(self) -> Color {
        match self {
            Suit::Spades | Suit::Clubs => Color::Black,
            Suit::Hearts | Suit::Diamonds => Color::Red,
        }
    }

    /// Display glyph: '♠', '♥', '♣', or '♦'.
    #[inline]
    pub fn glyph(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
        }
    }
}

impl Rank {
    /// All ranks in a fixed, reproducible order (Ace..King).
    pub const ALL: [Rank; NUM_RANKS] = [
        Rank::Ace,
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
    ];

    /// Construct a rank from its value 1..=13.
    #[inline]
    pub fn from_number(v: u8) -> Option<Self> {
        if (1..=NUM_RANKS as u8).contains(&v) {
            Some(Rank::ALL[(v - 1) as usize])
        } else {
            None
        }
    }

    /// Rank value in 1..=13 (Ace=1, King=13).
    #[inline]
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Display glyph: "A", "2".."10", "J", "Q", "K".
    ///
    /// Ten is the only two-character glyph; the layout engine narrows
    /// the surrounding padding for it.
    pub fn glyph(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl Card {
    /// Create a face-down card with no display flags set.
    #[inline]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Card {
            suit,
            rank,
            face_up: false,
            partially_hidden: false,
        }
    }

    /// The same card, turned face-up.
    #[inline]
    pub const fn revealed(mut self) -> Self {
        self.face_up = true;
        self
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.suit.color()
    }

    /// True if both cards are the same `(suit, rank)`, ignoring display flags.
    #[inline]
    pub fn same_card(&self, other: &Card) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }

    /// Dense index 0..52 of this card's identity.
    #[inline]
    pub fn index(&self) -> usize {
        self.suit as usize * NUM_RANKS + (self.rank.number() as usize - 1)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.glyph(), self.suit.glyph())
    }
}

/// True iff `a` ranks exactly one below `b`.
#[inline]
pub fn is_adjacent_descending(a: &Card, b: &Card) -> bool {
    a.rank.number() + 1 == b.rank.number()
}

/// True iff `a` ranks exactly one above `b`.
#[inline]
pub fn is_adjacent_ascending(a: &Card, b: &Card) -> bool {
    a.rank.number() == b.rank.number() + 1
}

/// Helper for tableau rules: can `upper` be placed on `lower`?
///
/// True if `upper` is exactly one rank lower than `lower` and of the
/// opposite color.
#[inline]
pub fn is_one_lower_opposite_color(upper: &Card, lower: &Card) -> bool {
    is_adjacent_descending(upper, lower) && upper.color() != lower.color()
}

/// Generate a standard 52-card deck in a fixed order, all face-down.
///
/// Suits follow `Suit::ALL` order, and ranks follow `Rank::ALL` order.
pub fn standard_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
        .collect()
}
