//! Win/loss tally across the games of one session.

use core::fmt;

/// Finished games, counted when the player moves on to the next one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub games_won: u32,
    pub games_lost: u32,
}

impl Stats {
    pub fn record_win(&mut self) {
        self.games_won += 1;
    }

    /// A game abandoned after at least one move.
    pub fn record_loss(&mut self) {
        self.games_lost += 1;
    }

    pub fn games_played(&self) -> u32 {
        self.games_won + self.games_lost
    }

    /// Fraction of played games that were won; 0 before any game counts.
    pub fn win_rate(&self) -> f64 {
        match self.games_played() {
            0 => 0.0,
            played => f64::from(self.games_won) / f64::from(played),
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Won {} / Played {} ({:.0}%)",
            self.games_won,
            self.games_played(),
            self.win_rate() * 100.0
        )
    }
}
