//! The command surface a host loop drives.
//!
//! A `Session` owns the game in play, the render settings and the running
//! win/loss tally. The host maps its keys onto these methods and paints
//! whatever `render` returns; it never touches piles directly.

use log::info;

use crate::cursor::Slot;
use crate::deal::DealNumber;
use crate::display::{Frame, RenderConfig};
use crate::game::{Game, GameConfig};
use crate::stats::Stats;
use crate::stock::DrawMode;

/// Settings for a whole session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// The first game; later games get random numbers.
    pub game: GameConfig,
    pub render: RenderConfig,
}

#[derive(Debug)]
pub struct Session {
    game: Game,
    render: RenderConfig,
    stats: Stats,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Session {
            game: Game::new(&config.game),
            render: config.render,
            stats: Stats::default(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Abandon (or close out) the current game and deal a random new one.
    pub fn new_game(&mut self, draw_mode: DrawMode) {
        self.start(GameConfig {
            draw_mode,
            deal: None,
        });
    }

    /// Like `new_game`, but deal a chosen game number.
    pub fn new_numbered_game(&mut self, draw_mode: DrawMode, number: DealNumber) {
        self.start(GameConfig {
            draw_mode,
            deal: Some(number),
        });
    }

    fn start(&mut self, config: GameConfig) {
        if self.game.is_won() {
            self.stats.record_win();
        } else if self.game.is_in_progress() {
            self.stats.record_loss();
        }
        info!("session: {}", self.stats);
        self.game = Game::new(&config);
    }

    /// Ask the player whether to start over.
    pub fn request_new_game(&mut self) {
        self.game.request_new_game();
    }

    /// Resolve the new-game prompt. "Yes" deals a new game in the same
    /// draw mode, "no" just closes the prompt. Returns false if no prompt
    /// was open.
    pub fn answer_new_game(&mut self, yes: bool) -> bool {
        if !self.game.is_new_game_prompt_open() {
            return false;
        }
        if yes {
            self.new_game(self.game.draw_mode());
        } else {
            self.game.dismiss_new_game_prompt();
        }
        true
    }

    pub fn cursor_left(&mut self) {
        self.game.cursor_left();
    }

    pub fn cursor_right(&mut self) {
        self.game.cursor_right();
    }

    pub fn cursor_up(&mut self) {
        self.game.cursor_up();
    }

    pub fn cursor_down(&mut self) {
        self.game.cursor_down();
    }

    pub fn jump_cursor_to(&mut self, slot: Slot) {
        self.game.jump_cursor_to(slot);
    }

    pub fn grab(&mut self) -> bool {
        self.game.grab()
    }

    pub fn place(&mut self) -> bool {
        self.game.place()
    }

    pub fn put_back(&mut self) -> bool {
        self.game.put_back()
    }

    pub fn auto_move_to_foundation(&mut self) -> bool {
        self.game.auto_move_to_foundation()
    }

    pub fn draw(&mut self) -> bool {
        self.game.draw()
    }

    pub fn reset_waste(&mut self) -> bool {
        self.game.reset_waste()
    }

    pub fn request_elapsed_time_on_next_frame(&mut self) {
        self.game.request_elapsed_time_on_next_frame();
    }

    pub fn render(&mut self) -> Frame {
        self.game.render(&self.render)
    }
}
