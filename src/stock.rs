//! Stock and waste.
//!
//! The stock is a face-down pile; drawing moves cards onto the waste.
//! Every card drawn since the last recycle lives in one ordered pool
//! (`drawn`, oldest first). The live waste view is always the tail of
//! that pool: the cards of the most recent draw that are still there.
//!
//! Keeping the view as a tail of the pool is what makes the two fragile
//! operations cheap and exact:
//!   - taking the top waste card removes it from the pool at its own
//!     position, and returning it puts it back at the same position;
//!   - recycling pushes the whole pool back onto the stock in reverse,
//!     so the next pass draws the cards in the same order again.

use core::fmt;

use crate::card::Card;

/// How many cards one draw moves from stock to waste.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DrawMode {
    #[default]
    One,
    Three,
}

impl DrawMode {
    pub fn count(self) -> usize {
        match self {
            DrawMode::One => 1,
            DrawMode::Three => 3,
        }
    }

    /// Status-line label: "Draw 1" or "Draw 3".
    pub fn label(self) -> &'static str {
        match self {
            DrawMode::One => "Draw 1",
            DrawMode::Three => "Draw 3",
        }
    }
}

impl fmt::Display for DrawMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The stock together with the waste it feeds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StockWaste {
    mode: DrawMode,
    /// Face-down cards; the end is the top.
    stock: Vec<Card>,
    /// Every card drawn since the last recycle, in draw order.
    drawn: Vec<Card>,
    /// How many cards at the end of `drawn` form the visible waste.
    view_len: usize,
}

impl StockWaste {
    /// A stock holding `cards` (end is the top) and an empty waste.
    pub fn new(cards: Vec<Card>, mode: DrawMode) -> Self {
        let stock = cards
            .into_iter()
            .map(|mut c| {
                c.face_up = false;
                c.partially_hidden = false;
                c
            })
            .collect();
        StockWaste {
            mode,
            stock,
            drawn: Vec::new(),
            view_len: 0,
        }
    }

    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    /// Face-down stock cards, bottom to top.
    pub fn stock(&self) -> &[Card] {
        &self.stock
    }

    pub fn stock_is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    /// All cards drawn since the last recycle, oldest first.
    pub fn recycle_pool(&self) -> &[Card] {
        &self.drawn
    }

    /// The visible waste cards in draw order; the last one is the top.
    pub fn view(&self) -> &[Card] {
        &self.drawn[self.drawn.len() - self.view_len..]
    }

    /// The playable waste card, if any is showing.
    pub fn top(&self) -> Option<&Card> {
        self.view().last()
    }

    /// Draw up to one batch of cards from the stock onto the waste.
    ///
    /// Returns how many cards moved; zero means the stock is exhausted and
    /// nothing changed. In draw-three mode every new waste card except the
    /// last is marked partially hidden.
    pub fn draw(&mut self) -> usize {
        let n = self.mode.count().min(self.stock.len());
        if n == 0 {
            return 0;
        }
        for i in 0..n {
            // n > 0 and n <= stock.len(), so the pop always succeeds.
            let Some(mut card) = self.stock.pop() else {
                break;
            };
            card.face_up = true;
            card.partially_hidden = self.mode == DrawMode::Three && i + 1 < n;
            self.drawn.push(card);
        }
        self.view_len = n;
        n
    }

    /// Move the whole recycle pool back onto the stock, face-down.
    ///
    /// The pool is pushed in reverse so the first card ever drawn ends up
    /// on top: re-drawing replays the original order exactly. Returns
    /// false if there was nothing to recycle.
    pub fn recycle(&mut self) -> bool {
        if self.drawn.is_empty() {
            return false;
        }
        for mut card in self.drawn.drain(..).rev() {
            card.face_up = false;
            card.partially_hidden = false;
            self.stock.push(card);
        }
        self.view_len = 0;
        true
    }

    /// Remove the top waste card from the view and from the recycle pool.
    ///
    /// The card below it, if still in view, becomes fully visible.
    pub fn take_top(&mut self) -> Option<Card> {
        if self.view_len == 0 {
            return None;
        }
        let card = self.drawn.pop()?;
        self.view_len -= 1;
        if self.view_len > 0 {
            if let Some(new_top) = self.drawn.last_mut() {
                new_top.partially_hidden = false;
            }
        }
        Some(card)
    }

    /// Put a card taken with [`take_top`](Self::take_top) back where it was.
    ///
    /// In draw-three mode the current top is hidden again, so a take
    /// followed by a return leaves the waste exactly as it was.
    pub fn return_to_view(&mut self, mut card: Card) {
        if self.mode == DrawMode::Three && self.view_len > 0 {
            if let Some(prev) = self.drawn.last_mut() {
                prev.partially_hidden = true;
            }
        }
        card.face_up = true;
        card.partially_hidden = false;
        self.drawn.push(card);
        self.view_len += 1;
    }

    /// Every card held here: stock first, then the recycle pool.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.stock.iter().chain(self.drawn.iter())
    }
}
