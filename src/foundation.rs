//! Foundation piles: one suit each, Ace up to King.

use crate::card::{is_adjacent_ascending, Card, Rank, Suit, NUM_RANKS};

/// One of the four ascending same-suit collector piles.
///
/// The suit is not pre-assigned; it is fixed by the Ace that starts the
/// pile and released again if the pile is emptied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Foundation {
    suit: Option<Suit>,
    cards: Vec<Card>,
}

impl Foundation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn suit(&self) -> Option<Suit> {
        self.suit
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Whether `card` would be accepted by [`try_add`](Self::try_add).
    pub fn accepts(&self, card: &Card) -> bool {
        match self.top() {
            None => card.rank == Rank::Ace,
            Some(top) => Some(card.suit) == self.suit && is_adjacent_ascending(card, top),
        }
    }

    /// Add `card` if it continues this pile. No mutation on failure.
    pub fn try_add(&mut self, mut card: Card) -> bool {
        if !self.accepts(&card) {
            return false;
        }
        if self.cards.is_empty() {
            self.suit = Some(card.suit);
        }
        card.face_up = true;
        card.partially_hidden = false;
        self.cards.push(card);
        true
    }

    /// Remove and return the top card.
    pub fn pull_top(&mut self) -> Option<Card> {
        let card = self.cards.pop();
        if self.cards.is_empty() {
            self.suit = None;
        }
        card
    }

    /// All thirteen cards of the suit are here.
    pub fn is_complete(&self) -> bool {
        self.cards.len() == NUM_RANKS
    }
}
