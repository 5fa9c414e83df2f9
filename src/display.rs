//! Text rendering of a game as a fixed-width frame.
//!
//! `render_frame` is a pure function from a `Game` to a rectangle of text
//! lines:
//!
//! ```text
//! top row      stock, waste (up to three overlapping cards), foundations
//! caret row    '^' under the selected top-row pile
//! (blank)
//! tableau      seven columns, caret row under the selected column
//! (blank)
//! status       moves + draw mode, hand, one message line
//! ```
//!
//! Every line is padded with spaces to the same display width, measured
//! with `unicode-width` because the card glyphs use non-ASCII symbols.
//! The host can paint the frame verbatim without leftover characters.

use core::fmt;
use std::time::Duration;

use unicode_width::UnicodeWidthStr;

use crate::card::{Card, Rank};
use crate::cursor::Pile;
use crate::foundation::Foundation;
use crate::game::Game;
use crate::tableau::{Column, NUM_COLS};

/// Width of a full card glyph.
const CARD_WIDTH: usize = 7;
/// Width of a partially hidden waste card glyph.
const PARTIAL_WIDTH: usize = 4;
/// Width of the stock glyph.
const STOCK_WIDTH: usize = 8;
/// Width reserved for the waste: two partial cards and one full card.
const WASTE_WIDTH: usize = 2 * PARTIAL_WIDTH + CARD_WIDTH;
/// Lines in the top row, not counting its caret row.
const TOP_ROWS: usize = 4;

const STOCK_FULL: [&str; TOP_ROWS] = ["|¯¯¯¯¯| ", "||¯¯¯¯¯|", "||     |", " |_____|"];
const STOCK_EMPTY: [&str; TOP_ROWS] = ["        ", " |¯¯¯¯¯|", " |     |", " |_____|"];
const FOUNDATION_EMPTY: [&str; 3] = ["|¯¯¯¯¯|", "|     |", "|_____|"];

const TOP_BORDER: &str = "|¯¯¯¯¯|";
const BOTTOM_BORDER: &str = "|_____|";
const CARD_BACK: &str = "|:::::|";

/// Layout knobs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    /// Spaces between neighboring piles.
    pub column_gap: usize,
    /// The tableau area never gets shorter than this.
    pub min_tableau_rows: usize,
    /// Default message line when nothing more urgent is shown.
    pub legend: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            column_gap: 2,
            min_tableau_rows: 12,
            legend: "arrows: move  space: grab/place  p: put back  f: to foundation  \
                     d: draw  r: reset waste  t: time  n: new game"
                .to_string(),
        }
    }
}

/// One rendered frame: equal-width lines, top to bottom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    lines: Vec<String>,
    width: usize,
}

impl Frame {
    /// Build a frame, padding every line to the widest one.
    fn from_lines(lines: Vec<String>) -> Self {
        let width = lines.iter().map(|l| l.width()).max().unwrap_or(0);
        let lines = lines.into_iter().map(|l| pad_to(l, width)).collect();
        Frame { lines, width }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Display width shared by every line.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

/// Right-pad `s` with spaces to display width `width`. Never truncates.
fn pad_to(mut s: String, width: usize) -> String {
    let w = s.width();
    if w < width {
        s.extend(std::iter::repeat(' ').take(width - w));
    }
    s
}

/// Middle line of a full card: `| 7 ♥ |`, or `|10 ♥ |` for a Ten.
pub fn middle_line(card: &Card) -> String {
    if card.rank == Rank::Ten {
        format!("|{} {} |", card.rank.glyph(), card.suit.glyph())
    } else {
        format!("| {} {} |", card.rank.glyph(), card.suit.glyph())
    }
}

/// The three lines of a fully visible card.
pub fn full_card_lines(card: &Card) -> [String; 3] {
    [
        TOP_BORDER.to_string(),
        middle_line(card),
        BOTTOM_BORDER.to_string(),
    ]
}

/// The three lines of a partially hidden waste card: only a sliver of
/// the middle line shows.
pub fn partial_card_lines(card: &Card) -> [String; 3] {
    let middle = if card.rank == Rank::Ten {
        format!("|{}{}", card.rank.glyph(), card.suit.glyph())
    } else {
        format!("| {}{}", card.rank.glyph(), card.suit.glyph())
    };
    ["|¯¯¯".to_string(), middle, "|___".to_string()]
}

fn waste_card_lines(card: &Card) -> [String; 3] {
    if card.partially_hidden {
        partial_card_lines(card)
    } else {
        full_card_lines(card)
    }
}

fn waste_card_width(card: &Card) -> usize {
    if card.partially_hidden {
        PARTIAL_WIDTH
    } else {
        CARD_WIDTH
    }
}

fn foundation_lines(f: &Foundation) -> [String; 3] {
    match f.top() {
        Some(card) => full_card_lines(card),
        None => FOUNDATION_EMPTY.map(str::to_string),
    }
}

/// Lines of one tableau column, top of the screen first.
///
/// The last card (the column's top) is drawn as a full box. Cards under
/// it show a one-line stub when face-down, or border plus middle line
/// when face-up, so the pile reads as a stack.
pub fn column_lines(col: &Column) -> Vec<String> {
    let cards = col.cards();
    let mut lines = Vec::with_capacity(cards.len() * 2 + 1);
    for (i, card) in cards.iter().enumerate() {
        let lead = i + 1 == cards.len();
        match (card.face_up, lead) {
            (false, false) => lines.push(TOP_BORDER.to_string()),
            (false, true) => {
                lines.push(TOP_BORDER.to_string());
                lines.push(CARD_BACK.to_string());
                lines.push(BOTTOM_BORDER.to_string());
            }
            (true, false) => {
                lines.push(TOP_BORDER.to_string());
                lines.push(middle_line(card));
            }
            (true, true) => lines.extend(full_card_lines(card)),
        }
    }
    lines
}

/// `mm:ss`, or `h:mm:ss` from one hour on.
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    let (h, m, s) = (secs / 3600, (secs / 60) % 60, secs % 60);
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m:02}:{s:02}")
    }
}

/// A line of `width` spaces with `^` at column `x`.
fn caret_line(width: usize, x: Option<usize>) -> String {
    (0..width)
        .map(|i| if Some(i) == x { '^' } else { ' ' })
        .collect()
}

/// The 7-wide caret cell under a tableau column. A depth into the column
/// is shown next to the caret.
fn caret_cell(offset: usize) -> String {
    let mark = if offset == 0 {
        "^".to_string()
    } else {
        format!("^+{offset}")
    };
    format!("{mark:^width$}", width = CARD_WIDTH)
}

fn render_top(game: &Game, gap: usize) -> Vec<String> {
    let board = game.board();
    let spacer = " ".repeat(gap);
    let stock = if board.stock.stock_is_empty() {
        STOCK_EMPTY
    } else {
        STOCK_FULL
    };
    let view = board.stock.view();
    let foundations: Vec<[String; 3]> = board.foundations.iter().map(foundation_lines).collect();

    let mut lines = Vec::with_capacity(TOP_ROWS + 1);
    for (row, stock_line) in stock.iter().enumerate() {
        let mut line = String::from(*stock_line);
        line.push_str(&spacer);

        // Waste and foundations line up with the front box of the stock.
        let card_row = row.checked_sub(1);
        let waste: String = match card_row {
            Some(r) => view.iter().map(|c| waste_card_lines(c)[r].clone()).collect(),
            None => String::new(),
        };
        line.push_str(&pad_to(waste, WASTE_WIDTH));

        for f in &foundations {
            line.push_str(&spacer);
            match card_row {
                Some(r) => line.push_str(&f[r]),
                None => line.push_str(&" ".repeat(CARD_WIDTH)),
            }
        }
        lines.push(line);
    }

    let waste_x = STOCK_WIDTH + gap;
    let foundation_x = |i: usize| waste_x + WASTE_WIDTH + gap + i * (CARD_WIDTH + gap);
    let caret_x = match game.cursor().slot().pile() {
        Pile::Tableau(_) => None,
        Pile::Waste => {
            let under: usize = view
                .iter()
                .take(view.len().saturating_sub(1))
                .map(waste_card_width)
                .sum();
            Some(waste_x + under + CARD_WIDTH / 2)
        }
        Pile::Foundation(i) => Some(foundation_x(i) + CARD_WIDTH / 2),
    };
    let width = foundation_x(foundations.len()) - gap;
    lines.push(caret_line(width, caret_x));
    lines
}

fn render_tableau(game: &Game, config: &RenderConfig) -> Vec<String> {
    let columns: Vec<Vec<String>> = game
        .board()
        .tableau
        .columns
        .iter()
        .map(column_lines)
        .collect();
    let tallest = columns.iter().map(Vec::len).max().unwrap_or(0);
    let rows = config.min_tableau_rows.max(tallest + 1);

    let cursor = game.cursor();
    let selected = match cursor.slot().pile() {
        Pile::Tableau(col) => Some(col),
        _ => None,
    };
    let blank = " ".repeat(CARD_WIDTH);
    let spacer = " ".repeat(config.column_gap);

    (0..rows)
        .map(|row| {
            let cells: Vec<String> = (0..NUM_COLS)
                .map(|c| match columns[c].get(row) {
                    Some(line) => line.clone(),
                    None if selected == Some(c) && row == columns[c].len() => {
                        caret_cell(cursor.offset())
                    }
                    None => blank.clone(),
                })
                .collect();
            cells.join(&spacer)
        })
        .collect()
}

/// The single message line, by precedence: new-game prompt, win banner,
/// one-shot elapsed time, then the legend.
pub fn status_message(game: &Game, config: &RenderConfig) -> String {
    if game.is_new_game_prompt_open() {
        "Start a new game? (y/n)".to_string()
    } else if game.is_won() {
        format!(
            "You won! Time: {}  Moves: {}",
            format_duration(game.elapsed()),
            game.move_count()
        )
    } else if game.shows_elapsed_time() {
        format!("Elapsed: {}", format_duration(game.elapsed()))
    } else {
        config.legend.clone()
    }
}

fn render_status(game: &Game, config: &RenderConfig) -> Vec<String> {
    let mut header = format!("Moves: {}    {}", game.move_count(), game.draw_mode());
    if let Some(number) = game.deal_number() {
        header.push_str(&format!("    Game {number}"));
    }

    let hand = game.grabbed().cards();
    let hand = if hand.is_empty() {
        "None".to_string()
    } else {
        hand.iter().map(middle_line).collect::<Vec<_>>().join(" ")
    };

    vec![
        header,
        format!("Grabbed: {hand}"),
        status_message(game, config),
    ]
}

/// Render `game` as a frame.
pub fn render_frame(game: &Game, config: &RenderConfig) -> Frame {
    let mut lines = render_top(game, config.column_gap);
    lines.push(String::new());
    lines.extend(render_tableau(game, config));
    lines.push(String::new());
    lines.extend(render_status(game, config));
    Frame::from_lines(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;
    use crate::cursor::Slot;
    use crate::deal::DealNumber;
    use crate::game::GameConfig;
    use crate::stock::DrawMode;

    fn numbered(n: u64, draw_mode: DrawMode) -> Game {
        Game::new(&GameConfig {
            draw_mode,
            deal: Some(DealNumber::from(n)),
        })
    }

    /// Index of the first line containing a caret, and the caret's column.
    fn find_caret(frame: &Frame) -> Vec<(usize, usize)> {
        frame
            .lines()
            .iter()
            .enumerate()
            .filter_map(|(row, line)| line.chars().position(|c| c == '^').map(|x| (row, x)))
            .collect()
    }

    #[test]
    fn card_glyphs_have_fixed_widths() {
        let seven = Card::new(Suit::Hearts, Rank::Seven).revealed();
        let ten = Card::new(Suit::Spades, Rank::Ten).revealed();

        assert_eq!(middle_line(&seven), "| 7 ♥ |");
        assert_eq!(middle_line(&ten), "|10 ♠ |");
        for line in full_card_lines(&seven).iter().chain(full_card_lines(&ten).iter()) {
            assert_eq!(line.width(), CARD_WIDTH);
        }

        assert_eq!(partial_card_lines(&seven)[1], "| 7♥");
        assert_eq!(partial_card_lines(&ten)[1], "|10♠");
        for line in partial_card_lines(&ten) {
            assert_eq!(line.width(), PARTIAL_WIDTH);
        }
    }

    #[test]
    fn column_lines_stack_cards() {
        let col = Column::from_cards(vec![
            Card::new(Suit::Clubs, Rank::Two),
            Card::new(Suit::Hearts, Rank::Nine).revealed(),
            Card::new(Suit::Spades, Rank::Eight).revealed(),
        ]);
        assert_eq!(
            column_lines(&col),
            [
                "|¯¯¯¯¯|", // face-down stub
                "|¯¯¯¯¯|", "| 9 ♥ |", // revealed, covered
                "|¯¯¯¯¯|", "| 8 ♠ |", "|_____|", // lead card
            ]
        );
        assert!(column_lines(&Column::new()).is_empty());
    }

    #[test]
    fn frame_is_rectangular() {
        let mut game = numbered(3, DrawMode::Three);
        let cfg = RenderConfig::default();
        for _ in 0..5 {
            game.draw();
            let frame = game.render(&cfg);
            assert!(frame.lines().iter().all(|l| l.width() == frame.width()));
        }
        // Top row + caret, blank, 12 tableau rows, blank, 3 status lines.
        assert_eq!(game.render(&cfg).height(), 5 + 1 + 12 + 1 + 3);
    }

    #[test]
    fn tall_columns_grow_the_tableau_area() {
        let mut game = numbered(3, DrawMode::One);
        let cfg = RenderConfig {
            min_tableau_rows: 1,
            ..RenderConfig::default()
        };
        // Column 7 has six stubs and a full lead card: 9 lines, plus caret row.
        assert_eq!(game.render(&cfg).height(), 5 + 1 + 10 + 1 + 3);
    }

    #[test]
    fn caret_sits_under_the_selected_column() {
        let mut game = numbered(3, DrawMode::One);
        let cfg = RenderConfig::default();

        // Column 1 holds one card: three lines, caret on the fourth.
        let frame = game.render(&cfg);
        assert_eq!(find_caret(&frame), [(6 + 3, 3)]);

        // Column 3 starts at 2 * (7 + 2); two stubs + lead card = 5 lines.
        game.jump_cursor_to(Slot::tableau(2));
        let frame = game.render(&cfg);
        assert_eq!(find_caret(&frame), [(6 + 5, 2 * 9 + 3)]);
    }

    #[test]
    fn caret_sits_under_the_selected_top_pile() {
        let mut game = numbered(3, DrawMode::Three);
        let cfg = RenderConfig::default();

        game.jump_cursor_to(Slot::foundation(2));
        let frame = game.render(&cfg);
        let x = STOCK_WIDTH + 2 + WASTE_WIDTH + 2 + 2 * (CARD_WIDTH + 2) + 3;
        assert_eq!(find_caret(&frame), [(4, x)]);

        game.jump_cursor_to(Slot::WASTE);
        game.draw();
        let frame = game.render(&cfg);
        assert_eq!(find_caret(&frame), [(4, STOCK_WIDTH + 2 + 2 * PARTIAL_WIDTH + 3)]);
    }

    #[test]
    fn draw_three_shows_two_slivers_and_one_full_card() {
        let mut game = numbered(12, DrawMode::Three);
        game.draw();
        let view: Vec<Card> = game.board().stock.view().to_vec();
        let frame = game.render(&RenderConfig::default());
        let expected = format!(
            "{}{}{}",
            partial_card_lines(&view[0])[1],
            partial_card_lines(&view[1])[1],
            middle_line(&view[2])
        );
        assert!(frame.lines()[2].contains(&expected));
    }

    #[test]
    fn stock_glyph_follows_emptiness() {
        let mut game = numbered(12, DrawMode::Three);
        let cfg = RenderConfig::default();
        assert!(game.render(&cfg).lines()[0].starts_with(STOCK_FULL[0]));
        for _ in 0..8 {
            game.draw();
        }
        assert!(game.board().stock.stock_is_empty());
        assert!(game.render(&cfg).lines()[0].starts_with(STOCK_EMPTY[0]));
    }

    #[test]
    fn status_shows_moves_mode_and_hand() {
        let mut game = numbered(12, DrawMode::One);
        let cfg = RenderConfig::default();
        let frame = game.render(&cfg);
        let status = &frame.lines()[frame.height() - 3..];
        assert!(status[0].starts_with("Moves: 0    Draw 1    Game #12"));
        assert!(status[1].starts_with("Grabbed: None"));
        assert!(status[2].starts_with("arrows: move"));

        assert!(game.grab());
        let card = game.grabbed().cards()[0];
        let frame = game.render(&cfg);
        let expected = format!("Grabbed: {}", middle_line(&card));
        assert!(frame.lines()[frame.height() - 2].starts_with(&expected));
    }

    #[test]
    fn prompt_outranks_elapsed_time() {
        let mut game = numbered(12, DrawMode::One);
        let cfg = RenderConfig::default();
        game.request_elapsed_time_on_next_frame();
        game.request_new_game();
        assert_eq!(status_message(&game, &cfg), "Start a new game? (y/n)");
        game.dismiss_new_game_prompt();
        assert!(status_message(&game, &cfg).starts_with("Elapsed: "));
    }

    #[test]
    fn win_banner_shows_after_the_last_card() {
        let cfg = RenderConfig::default();
        let mut game = crate::game::fixtures::nearly_won(1);
        assert!(!game.render(&cfg).to_string().contains("You won!"));

        assert!(game.auto_move_to_foundation());
        let frame = game.render(&cfg);
        let last = &frame.lines()[frame.height() - 1];
        assert!(last.starts_with("You won! Time: "), "{last}");
        assert!(last.contains("Moves: 1"));
    }

    #[test]
    fn win_banner_outranks_elapsed_time_but_not_the_prompt() {
        let cfg = RenderConfig::default();
        let mut game = crate::game::fixtures::won();

        game.request_elapsed_time_on_next_frame();
        let frame = game.render(&cfg).to_string();
        assert!(frame.contains("You won!"));
        assert!(!frame.contains("Elapsed"));
        assert!(!game.shows_elapsed_time());

        game.request_new_game();
        let frame = game.render(&cfg).to_string();
        assert!(frame.contains("Start a new game? (y/n)"));
        assert!(!frame.contains("You won!"));
    }

    #[test]
    fn durations_format_as_clock_time() {
        assert_eq!(format_duration(Duration::from_secs(0)), "00:00");
        assert_eq!(format_duration(Duration::from_secs(205)), "03:25");
        assert_eq!(format_duration(Duration::from_secs(3723)), "1:02:03");
    }
}
