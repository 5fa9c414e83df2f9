use proptest::prelude::*;

use klondike_term::card::{standard_deck, Card, Rank, Suit};
use klondike_term::cursor::Cursor;
use klondike_term::foundation::Foundation;
use klondike_term::stock::StockWaste;
use klondike_term::tableau::{Column, Tableau, NUM_COLS};
use klondike_term::{DealNumber, DrawMode, Game, GameConfig, Slot};

#[derive(Clone, Copy, Debug)]
enum Command {
    Left,
    Right,
    Up,
    Down,
    Jump(u8),
    Grab,
    Place,
    PutBack,
    Auto,
    Draw,
    Reset,
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        Just(Command::Left),
        Just(Command::Right),
        Just(Command::Up),
        Just(Command::Down),
        (1u8..=12).prop_map(Command::Jump),
        Just(Command::Grab),
        Just(Command::Place),
        Just(Command::PutBack),
        Just(Command::Auto),
        Just(Command::Draw),
        Just(Command::Reset),
    ]
}

fn draw_mode() -> impl Strategy<Value = DrawMode> {
    prop_oneof![Just(DrawMode::One), Just(DrawMode::Three)]
}

fn apply(game: &mut Game, cmd: Command) {
    match cmd {
        Command::Left => game.cursor_left(),
        Command::Right => game.cursor_right(),
        Command::Up => game.cursor_up(),
        Command::Down => game.cursor_down(),
        Command::Jump(n) => {
            if let Some(slot) = Slot::new(n) {
                game.jump_cursor_to(slot);
            }
        }
        Command::Grab => {
            game.grab();
        }
        Command::Place => {
            game.place();
        }
        Command::PutBack => {
            game.put_back();
        }
        Command::Auto => {
            game.auto_move_to_foundation();
        }
        Command::Draw => {
            game.draw();
        }
        Command::Reset => {
            game.reset_waste();
        }
    }
}

fn deal(seed: u64, mode: DrawMode) -> Game {
    Game::new(&GameConfig {
        draw_mode: mode,
        deal: Some(DealNumber::from(seed)),
    })
}

/// A tableau whose columns hold `(face_down, face_up)` cards each.
fn stacked_tableau(shape: &[(usize, usize)]) -> Tableau {
    let mut deck = standard_deck().into_iter();
    let mut tab = Tableau::new_empty();
    for (col, &(down, up)) in tab.columns.iter_mut().zip(shape) {
        let cards = deck
            .by_ref()
            .take(down + up)
            .enumerate()
            .map(|(i, c)| if i < down { c } else { c.revealed() })
            .collect();
        *col = Column::from_cards(cards);
    }
    tab
}

fn deck_from(seed: u64) -> Vec<Card> {
    DealNumber::from(seed).shuffled_deck()
}

proptest! {
    #[test]
    fn every_card_is_somewhere_exactly_once(
        seed in any::<u64>(),
        mode in draw_mode(),
        cmds in prop::collection::vec(command(), 0..200),
    ) {
        let mut game = deal(seed, mode);
        for cmd in cmds {
            apply(&mut game, cmd);
            prop_assert!(
                game.board().is_complete_deck_with(game.grabbed().cards()),
                "after {:?}", cmd
            );
        }
    }

    #[test]
    fn grab_then_put_back_restores_the_board(
        seed in any::<u64>(),
        mode in draw_mode(),
        prefix in prop::collection::vec(command(), 0..80),
        slot in 1u8..=12,
    ) {
        let mut game = deal(seed, mode);
        for cmd in prefix {
            apply(&mut game, cmd);
        }
        game.put_back();
        game.jump_cursor_to(Slot::new(slot).unwrap());

        let board = game.board().clone();
        let moves = game.move_count();
        if game.grab() {
            prop_assert!(game.put_back());
            prop_assert_eq!(game.board(), &board);
            prop_assert_eq!(game.move_count(), moves);
            prop_assert!(game.grabbed().is_empty());
        } else {
            prop_assert_eq!(game.board(), &board);
        }
    }

    #[test]
    fn recycling_replays_the_same_draw_order(seed in any::<u64>(), mode in draw_mode()) {
        let mut stock = StockWaste::new(deck_from(seed), mode);
        while !stock.stock_is_empty() {
            stock.draw();
        }
        let first_pass = stock.recycle_pool().to_vec();

        prop_assert!(stock.recycle());
        prop_assert!(stock.view().is_empty());
        while !stock.stock_is_empty() {
            stock.draw();
        }
        prop_assert_eq!(stock.recycle_pool(), &first_pass[..]);
    }

    #[test]
    fn only_the_waste_top_is_fully_shown(seed in any::<u64>(), mode in draw_mode()) {
        let mut stock = StockWaste::new(deck_from(seed), mode);
        while !stock.stock_is_empty() {
            let before = stock.stock().len();
            let drawn = stock.draw();
            prop_assert_eq!(drawn, before.min(mode.count()));

            let view = stock.view();
            prop_assert_eq!(view.len(), drawn);
            let (top, under) = view.split_last().unwrap();
            prop_assert!(top.face_up && !top.partially_hidden);
            match mode {
                DrawMode::Three => prop_assert!(under.iter().all(|c| c.partially_hidden)),
                DrawMode::One => prop_assert!(
                    stock.recycle_pool().iter().all(|c| !c.partially_hidden)
                ),
            }
        }
    }

    #[test]
    fn vertical_moves_undo_each_other(
        seed in any::<u64>(),
        walk in prop::collection::vec(command(), 0..150),
        up_first in any::<bool>(),
    ) {
        let mut game = deal(seed, DrawMode::One);
        for cmd in walk {
            apply(&mut game, cmd);
        }
        let before = *game.cursor();
        if up_first {
            game.cursor_up();
            game.cursor_down();
        } else {
            game.cursor_down();
            game.cursor_up();
        }
        prop_assert_eq!(game.cursor().slot(), before.slot());
        prop_assert_eq!(game.cursor().offset(), before.offset());
    }

    #[test]
    fn foundations_build_up_by_suit(suit in 0usize..4, other in 0usize..4) {
        let suit = Suit::ALL[suit];
        let other = Suit::ALL[other];

        let mut early = Foundation::new();
        prop_assert!(!early.try_add(Card::new(suit, Rank::Two).revealed()));

        let mut f = Foundation::new();
        for (i, rank) in Rank::ALL.into_iter().enumerate() {
            if i == 1 && other != suit {
                prop_assert!(!f.try_add(Card::new(other, rank).revealed()));
            }
            prop_assert!(f.try_add(Card::new(suit, rank).revealed()));
        }
        prop_assert!(f.is_complete());
    }

    #[test]
    fn vertical_moves_undo_each_other_over_deep_runs(
        shape in prop::collection::vec((0usize..3, 0usize..5), NUM_COLS),
        walk in prop::collection::vec(0u8..17, 0..40),
        up_first in any::<bool>(),
    ) {
        let tab = stacked_tableau(&shape);
        let mut cursor = Cursor::default();
        for step in walk {
            match step {
                0 => cursor.left(),
                1 => cursor.right(),
                2 | 3 => cursor.up(&tab),
                4 => cursor.down(),
                n => cursor.jump_to(Slot::new(n - 4).unwrap()),
            }
        }
        let before = cursor;
        if up_first {
            cursor.up(&tab);
            cursor.down();
        } else {
            cursor.down();
            cursor.up(&tab);
        }
        prop_assert_eq!(cursor.slot(), before.slot());
        prop_assert_eq!(cursor.offset(), before.offset());
    }
}
