//! The board: stock/waste, four foundations, seven tableau columns.

use crate::card::{Card, CARDS_PER_DECK};
use crate::foundation::Foundation;
use crate::stock::{DrawMode, StockWaste};
use crate::tableau::Tableau;

/// Number of foundation piles.
pub const NUM_FOUNDATIONS: usize = 4;

/// Every pile of one game.
///
/// Between commands the piles together hold each of the 52 cards exactly
/// once. While a grab is pending the grabbed cards are held by the game,
/// outside the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub stock: StockWaste,
    pub foundations: [Foundation; NUM_FOUNDATIONS],
    pub tableau: Tableau,
}

impl Board {
    /// Deal a fresh game from `deck`, taking cards from its end.
    pub fn deal(mut deck: Vec<Card>, mode: DrawMode) -> Self {
        let tableau = Tableau::deal_from(&mut deck);
        // What is left becomes the stock. The end of `deck` is the next
        // card to be dealt, which is also the top of the stock.
        Board {
            stock: StockWaste::new(deck, mode),
            foundations: Default::default(),
            tableau,
        }
    }

    /// Every card on the board, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.stock
            .iter()
            .chain(self.foundations.iter().flat_map(|f| f.cards().iter()))
            .chain(self.tableau.iter())
    }

    /// True if the board plus `held` contain each of the 52 cards exactly once.
    pub fn is_complete_deck_with(&self, held: &[Card]) -> bool {
        let mut seen = [false; CARDS_PER_DECK];
        let mut count = 0usize;
        for card in self.iter().chain(held.iter()) {
            let idx = card.index();
            if seen[idx] {
                return false;
            }
            seen[idx] = true;
            count += 1;
        }
        count == CARDS_PER_DECK
    }

    /// True if the board alone holds each of the 52 cards exactly once.
    pub fn is_complete_deck(&self) -> bool {
        self.is_complete_deck_with(&[])
    }

    /// All four foundations hold a full suit.
    pub fn is_won(&self) -> bool {
        self.foundations.iter().all(Foundation::is_complete)
    }
}
