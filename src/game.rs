//! Game-level state: one played round.
//!
//! A `Game` owns everything the engine mutates between two frames:
//!   - the board (all piles),
//!   - the grab buffer (cards in hand between a grab and its place),
//!   - the cursor,
//!   - the move counter, draw mode and timing,
//!   - the transient display requests (elapsed time, new-game prompt).
//!
//! The move commands themselves live in `moves.rs`; this module holds the
//! state, the cursor commands and the frame request.

use std::time::{Duration, Instant};

use log::{info, trace};

use crate::board::Board;
use crate::card::Card;
use crate::cursor::{Cursor, Slot};
use crate::deal::DealNumber;
use crate::display::{render_frame, Frame, RenderConfig};
use crate::stock::DrawMode;

/// How a new game is dealt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameConfig {
    pub draw_mode: DrawMode,
    /// Game number to deal; `None` picks a random one.
    pub deal: Option<DealNumber>,
}

/// Cards lifted by a grab and not yet placed.
///
/// Non-empty only between a grab and the place/put-back that resolves
/// it. The cards belong to no pile while they are here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GrabBuffer {
    cards: Vec<Card>,
    source: Option<Slot>,
    /// The grab turned the source column's new top face-up.
    flipped_source: bool,
}

impl GrabBuffer {
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn source(&self) -> Option<Slot> {
        self.source
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub(crate) fn hold(cards: Vec<Card>, source: Slot, flipped_source: bool) -> Self {
        GrabBuffer {
            cards,
            source: Some(source),
            flipped_source,
        }
    }

    pub(crate) fn flipped_source(&self) -> bool {
        self.flipped_source
    }

    /// Empty the buffer, handing back the cards.
    pub(crate) fn take(&mut self) -> Vec<Card> {
        std::mem::take(self).cards
    }
}

/// One round of Klondike.
#[derive(Clone, Debug)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) grab: GrabBuffer,
    pub(crate) cursor: Cursor,
    pub(crate) move_count: u32,
    pub(crate) deal: Option<DealNumber>,
    pub(crate) start_time: Instant,
    pub(crate) end_time: Option<Instant>,
    pub(crate) won: bool,
    pub(crate) show_elapsed: bool,
    pub(crate) new_game_prompt: bool,
}

impl Game {
    /// Deal a new game.
    pub fn new(config: &GameConfig) -> Self {
        let number = config.deal.clone().unwrap_or_else(DealNumber::random);
        info!("dealing game {number} ({})", config.draw_mode);
        let board = Board::deal(number.shuffled_deck(), config.draw_mode);
        let mut game = Game::from_board(board);
        game.deal = Some(number);
        game
    }

    /// Start a game from an arbitrary board position.
    ///
    /// The draw mode is the one the board's stock was built with.
    pub fn from_board(board: Board) -> Self {
        let game = Game {
            board,
            grab: GrabBuffer::default(),
            cursor: Cursor::default(),
            move_count: 0,
            deal: None,
            start_time: Instant::now(),
            end_time: None,
            won: false,
            show_elapsed: false,
            new_game_prompt: false,
        };
        game.check_conservation();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn grabbed(&self) -> &GrabBuffer {
        &self.grab
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn draw_mode(&self) -> DrawMode {
        self.board.stock.mode()
    }

    /// Game number this round was dealt from, if it was dealt by number.
    pub fn deal_number(&self) -> Option<&DealNumber> {
        self.deal.as_ref()
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn start_time(&self) -> Instant {
        self.start_time
    }

    /// When the last foundation was completed.
    pub fn end_time(&self) -> Option<Instant> {
        self.end_time
    }

    /// Time played so far, frozen once the game is won.
    pub fn elapsed(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// A move was made and the game is not won; leaving now counts as a loss.
    pub fn is_in_progress(&self) -> bool {
        !self.won && self.move_count > 0
    }

    // ----- Cursor commands -----
    //
    // The cursor moves freely regardless of what is in hand.

    pub fn cursor_left(&mut self) {
        self.cursor.left();
        trace!("cursor -> {}", self.cursor.slot());
    }

    pub fn cursor_right(&mut self) {
        self.cursor.right();
        trace!("cursor -> {}", self.cursor.slot());
    }

    pub fn cursor_up(&mut self) {
        self.cursor.up(&self.board.tableau);
        trace!("cursor -> {} (+{})", self.cursor.slot(), self.cursor.offset());
    }

    pub fn cursor_down(&mut self) {
        self.cursor.down();
        trace!("cursor -> {} (+{})", self.cursor.slot(), self.cursor.offset());
    }

    pub fn jump_cursor_to(&mut self, slot: Slot) {
        self.cursor.jump_to(slot);
        trace!("cursor jump -> {slot}");
    }

    // ----- Display requests -----

    /// Show the elapsed time in the status area of the next frame only.
    pub fn request_elapsed_time_on_next_frame(&mut self) {
        self.show_elapsed = true;
    }

    pub fn shows_elapsed_time(&self) -> bool {
        self.show_elapsed
    }

    /// Raise the yes/no new-game prompt.
    pub fn request_new_game(&mut self) {
        self.new_game_prompt = true;
    }

    pub fn dismiss_new_game_prompt(&mut self) {
        self.new_game_prompt = false;
    }

    pub fn is_new_game_prompt_open(&self) -> bool {
        self.new_game_prompt
    }

    /// Produce the current frame.
    ///
    /// This consumes a pending elapsed-time request; everything else is
    /// left untouched.
    pub fn render(&mut self, config: &RenderConfig) -> Frame {
        let frame = render_frame(self, config);
        self.show_elapsed = false;
        frame
    }

    /// The board plus the hand always hold the whole deck.
    pub(crate) fn check_conservation(&self) {
        debug_assert!(
            self.board.is_complete_deck_with(self.grab.cards()),
            "card conservation violated"
        );
    }
}
