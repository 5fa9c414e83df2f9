pub mod card;
pub mod deal;
pub mod stock;
pub mod foundation;
pub mod tableau;
pub mod board;
pub mod cursor;
pub mod game;
pub mod moves;
pub mod display;
pub mod stats;
pub mod session;

use std::env;

pub use crate::cursor::Slot;
pub use crate::deal::DealNumber;
pub use crate::display::{Frame, RenderConfig};
pub use crate::game::{Game, GameConfig};
pub use crate::session::{Session, SessionConfig};
pub use crate::stock::DrawMode;

/// Entry point for the `klondike_term` binary.
///
/// The interactive key loop belongs to the host terminal program; this
/// binary only deals one game and prints its first frame:
///   * `--seed=<game number>` → deal that game (e.g. `--seed=#1,234`)
///   * `--draw-three`         → draw three cards at a time
///
/// Example:
///   cargo run -- --seed=12345 --draw-three
pub fn run() {
    let mut config = SessionConfig::default();

    // Very small hand-rolled argument parser.
    for arg in env::args().skip(1) {
        if arg == "--draw-three" {
            config.game.draw_mode = DrawMode::Three;
        } else if let Some(rest) = arg.strip_prefix("--seed=") {
            match DealNumber::parse(rest) {
                Ok(n) => config.game.deal = Some(n),
                Err(e) => eprintln!("Warning: {e:#}; dealing a random game"),
            }
        } else {
            eprintln!(
                "Warning: unrecognized argument '{}'; supported: --seed=<game number>, --draw-three",
                arg
            );
        }
    }

    let mut session = Session::new(config);
    println!("{}", session.render());
}
