//! The move engine: grab/place commands, draws and win detection.
//!
//! Moves are two-phase. `grab` lifts cards from the pile under the cursor
//! into the game's hand; `place` drops them on the pile under the cursor
//! if the rules allow it. Illegal commands are not errors: they return
//! `false` and leave everything but the cursor untouched.
//!
//! Move counting:
//!   - a successful place counts one move; a grab counts nothing;
//!   - a put-back is move-neutral overall;
//!   - a draw counts one move, a recycle counts none.

use std::time::Instant;

use log::{debug, info, trace};

use crate::board::NUM_FOUNDATIONS;
use crate::card::Card;
use crate::cursor::{Pile, Slot};
use crate::game::{Game, GrabBuffer};

/// Glyphs of `cards` joined by spaces, for log lines.
fn describe(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

impl Game {
    /// Lift cards from the pile under the cursor into the hand.
    ///
    /// - Tableau: the run headed by the card at the cursor's depth.
    /// - Waste: the top waste card.
    /// - Foundation: the top card.
    ///
    /// Rejected if something is already in hand, the game is won, or the
    /// pile has nothing to lift there.
    pub fn grab(&mut self) -> bool {
        if !self.grab.is_empty() || self.won {
            trace!("grab rejected: hand full or game over");
            return false;
        }

        let slot = self.cursor.slot();
        let offset = self.cursor.offset();
        let lifted = match slot.pile() {
            Pile::Tableau(col) => {
                let column = &mut self.board.tableau.columns[col];
                column
                    .head_index_for(offset)
                    .and_then(|idx| column.lift_from(idx))
            }
            Pile::Waste => self.board.stock.take_top().map(|c| (vec![c], false)),
            Pile::Foundation(i) => self.board.foundations[i]
                .pull_top()
                .map(|c| (vec![c], false)),
        };

        let Some((cards, flipped)) = lifted else {
            trace!("grab rejected: nothing to lift at {slot}");
            return false;
        };

        debug!("grabbed {} from {slot}", describe(&cards));
        self.cursor.reset_offset();
        self.grab = GrabBuffer::hold(cards, slot, flipped);
        self.check_conservation();
        true
    }

    /// Drop the hand on the pile under the cursor.
    pub fn place(&mut self) -> bool {
        self.place_at(self.cursor.slot())
    }

    /// Return the hand to the pile it came from, without counting a move.
    ///
    /// The cursor is moved to the source pile first, unless it is already
    /// there.
    pub fn put_back(&mut self) -> bool {
        let Some(source) = self.grab.source() else {
            trace!("put back rejected: hand empty");
            return false;
        };
        if self.cursor.slot() == source {
            self.cursor.reset_offset();
        } else {
            self.cursor.jump_to(source);
        }
        if !self.place_at(source) {
            // Unreachable with a consistent board: the source always takes
            // back what it gave.
            return false;
        }
        self.move_count -= 1;
        debug!("put back onto {source}");
        true
    }

    /// Send a single card to the first foundation that accepts it.
    ///
    /// With an empty hand the top card under the cursor is grabbed first;
    /// if no foundation takes it, it is put back and nothing changes. A
    /// card already in hand stays in hand on failure. Foundations are
    /// tried in order 1..4, skipping the one the card came from.
    pub fn auto_move_to_foundation(&mut self) -> bool {
        let auto_grabbed = self.grab.is_empty();
        if auto_grabbed {
            self.cursor.reset_offset();
            if !self.grab() {
                return false;
            }
        }

        let source = self.grab.source();
        let target = match self.grab.cards() {
            [card] => (0..NUM_FOUNDATIONS)
                .map(Slot::foundation)
                .filter(|&slot| Some(slot) != source)
                .find(|slot| match slot.pile() {
                    Pile::Foundation(i) => self.board.foundations[i].accepts(card),
                    _ => false,
                }),
            _ => None,
        };

        match target {
            Some(slot) => self.place_at(slot),
            None => {
                trace!("auto-move rejected: no foundation accepts the hand");
                if auto_grabbed {
                    self.put_back();
                }
                false
            }
        }
    }

    /// Draw from the stock, or recycle the waste when the stock is empty.
    ///
    /// Only a real draw counts as a move.
    pub fn draw(&mut self) -> bool {
        if !self.grab.is_empty() || self.won {
            trace!("draw rejected: hand full or game over");
            return false;
        }
        if self.board.stock.stock_is_empty() {
            return self.recycle_waste();
        }
        let n = self.board.stock.draw();
        self.move_count += 1;
        debug!("drew {n}: {}", describe(self.board.stock.view()));
        self.check_conservation();
        true
    }

    /// Recycle the whole waste back onto the stock, whatever is left in it.
    pub fn reset_waste(&mut self) -> bool {
        if !self.grab.is_empty() || self.won {
            trace!("reset rejected: hand full or game over");
            return false;
        }
        self.recycle_waste()
    }

    fn recycle_waste(&mut self) -> bool {
        let recycled = self.board.stock.recycle();
        if recycled {
            debug!("recycled waste onto stock");
        } else {
            trace!("recycle rejected: nothing drawn");
        }
        self.check_conservation();
        recycled
    }

    /// Drop the hand on `slot` if the rules allow it.
    ///
    /// - Tableau: `Column::can_accept`, except that the column the run
    ///   came from always takes it back.
    /// - Waste: only a single card that came from the waste.
    /// - Foundation: only a single card, via `Foundation::try_add`.
    fn place_at(&mut self, slot: Slot) -> bool {
        if self.grab.is_empty() {
            trace!("place rejected: hand empty");
            return false;
        }

        let from_here = self.grab.source() == Some(slot);
        let placed = match slot.pile() {
            Pile::Tableau(col) => {
                if from_here {
                    let flipped = self.grab.flipped_source();
                    let cards = self.grab.take();
                    self.board.tableau.columns[col].restore(cards, flipped);
                    true
                } else if self.board.tableau.columns[col].can_accept(self.grab.cards()) {
                    let cards = self.grab.take();
                    self.board.tableau.columns[col].push_run(cards);
                    true
                } else {
                    false
                }
            }
            Pile::Waste => {
                if from_here && self.grab.cards().len() == 1 {
                    for card in self.grab.take() {
                        self.board.stock.return_to_view(card);
                    }
                    true
                } else {
                    false
                }
            }
            Pile::Foundation(i) => match self.grab.cards() {
                [card] if self.board.foundations[i].accepts(card) => {
                    let card = *card;
                    self.grab.take();
                    self.board.foundations[i].try_add(card)
                }
                _ => false,
            },
        };

        if placed {
            self.move_count += 1;
            debug!("placed onto {slot}, moves = {}", self.move_count);
            self.check_win();
        } else {
            trace!("place rejected at {slot}");
        }
        self.check_conservation();
        placed
    }

    /// Enter the won state the first time all four foundations are full.
    fn check_win(&mut self) {
        if self.won || !self.board.is_won() {
            return;
        }
        self.won = true;
        self.end_time = Some(Instant::now());
        self.new_game_prompt = false;
        info!(
            "game won in {} moves, {}s",
            self.move_count,
            self.elapsed().as_secs()
        );
    }
}
