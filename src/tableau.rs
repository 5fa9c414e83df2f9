//! The seven tableau columns.
//!
//! Each column is stored bottom-to-top: index 0 is the card dealt first
//! (deepest), the last element is the top, the most accessible card.
//! Every card carries its own `face_up` flag.

use crate::card::{is_one_lower_opposite_color, Card, Rank};

/// Number of tableau columns.
pub const NUM_COLS: usize = 7;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Column {
    cards: Vec<Card>,
}

impl Column {
    pub fn new() -> Self {
        Self::default()
    }

    /// A column holding exactly `cards`, bottom to top, flags as given.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Column { cards }
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

    /// Index of the card `offset` positions below the top, if that card is
    /// face-up. Face-down cards cannot head a grab.
    pub fn head_index_for(&self, offset: usize) -> Option<usize> {
        let idx = self.cards.len().checked_sub(offset + 1)?;
        self.cards[idx].face_up.then_some(idx)
    }

    /// Remove the run from `index` to the top, keeping its order.
    ///
    /// If cards remain and the new top is face-down it is turned face-up;
    /// the returned flag reports whether that flip happened so a put-back
    /// can undo it.
    pub fn lift_from(&mut self, index: usize) -> Option<(Vec<Card>, bool)> {
        if index >= self.cards.len() {
            return None;
        }
        let run = self.cards.split_off(index);
        let mut flipped = false;
        if let Some(top) = self.cards.last_mut() {
            if !top.face_up {
                top.face_up = true;
                flipped = true;
            }
        }
        Some((run, flipped))
    }

    /// Whether `run` may be dropped here.
    ///
    /// Only the junction between the current top and the first card of
    /// the run is checked; a lifted run is already well-ordered.
    pub fn can_accept(&self, run: &[Card]) -> bool {
        let Some(head) = run.first() else {
            return false;
        };
        match self.top() {
            None => head.rank == Rank::King,
            Some(top) => top.face_up && is_one_lower_opposite_color(head, top),
        }
    }

    /// Append `run` face-up without checking legality.
    pub fn push_run(&mut self, run: Vec<Card>) {
        self.cards.extend(run.into_iter().map(|mut c| {
            c.face_up = true;
            c.partially_hidden = false;
            c
        }));
    }

    /// Undo a [`lift_from`](Self::lift_from): turn the exposed card back
    /// down if the lift flipped it, then re-append the run.
    pub fn restore(&mut self, run: Vec<Card>, flipped: bool) {
        if flipped {
            if let Some(top) = self.cards.last_mut() {
                top.face_up = false;
            }
        }
        self.push_run(run);
    }
}

/// All seven tableau columns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tableau {
    pub columns: [Column; NUM_COLS],
}

impl Tableau {
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Deal the standard Klondike triangle from the end of `deck`.
    ///
    /// Column `i` (0-based) receives `i + 1` cards; only the last card
    /// dealt to each column is face-up. Cards are dealt column by column,
    /// matching a physical deal from the top of the deck.
    pub fn deal_from(deck: &mut Vec<Card>) -> Self {
        let mut tab = Tableau::new_empty();
        for (col_idx, col) in tab.columns.iter_mut().enumerate() {
            for row in 0..=col_idx {
                let Some(mut card) = deck.pop() else {
                    return tab;
                };
                card.face_up = row == col_idx;
                card.partially_hidden = false;
                col.cards.push(card);
            }
        }
        tab
    }

    /// Number of cards needed to deal the full triangle.
    pub const fn deal_size() -> usize {
        NUM_COLS * (NUM_COLS + 1) / 2
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.columns.iter().flat_map(|c| c.cards.iter())
    }
}
