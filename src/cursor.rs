//! Cursor over the twelve pile slots.
//!
//! Slots 1-7 are the tableau columns, 8 is the waste and 9-12 are the
//! foundations. Neighbors are looked up in fixed tables rather than
//! derived from screen geometry: the vertical mapping between the two
//! rows is deliberately irregular.
//!
//! Up and Down both cross between the rows (the top row wraps around
//! below the tableau). A crossing remembers the slot it left, and the
//! next crossing goes back there, so Up followed by Down always returns
//! to where it started even though several columns share one target.
//! Up right after a Down crossing also goes back instead of walking into
//! the column, which makes Down followed by Up a round trip too.

use core::fmt;

use anyhow::{bail, Error};

use crate::board::NUM_FOUNDATIONS;
use crate::tableau::{Tableau, NUM_COLS};

/// Number of addressable slots.
pub const NUM_SLOTS: u8 = 12;

/// Slot numbers of the left neighbor, indexed by `slot - 1`.
const LEFT: [u8; NUM_SLOTS as usize] = [7, 1, 2, 3, 4, 5, 6, 12, 8, 9, 10, 11];
/// Slot numbers of the right neighbor, indexed by `slot - 1`.
const RIGHT: [u8; NUM_SLOTS as usize] = [2, 3, 4, 5, 6, 7, 1, 9, 10, 11, 12, 8];
/// Slot reached by crossing rows, indexed by `slot - 1`.
const CROSS: [u8; NUM_SLOTS as usize] = [8, 8, 8, 8, 8, 9, 10, 4, 6, 7, 7, 7];

/// What a slot addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pile {
    /// Tableau column, 0-based.
    Tableau(usize),
    Waste,
    /// Foundation, 0-based.
    Foundation(usize),
}

/// One of the twelve cursor positions, numbered 1..=12.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot(u8);

impl Slot {
    pub const WASTE: Slot = Slot(8);

    /// All slots in numeric order.
    pub fn all() -> impl Iterator<Item = Slot> {
        (1..=NUM_SLOTS).map(Slot)
    }

    pub fn new(n: u8) -> Option<Slot> {
        (1..=NUM_SLOTS).contains(&n).then_some(Slot(n))
    }

    /// Slot of tableau column `col` (0-based).
    pub fn tableau(col: usize) -> Slot {
        debug_assert!(col < NUM_COLS);
        Slot(col as u8 + 1)
    }

    /// Slot of foundation `idx` (0-based).
    pub fn foundation(idx: usize) -> Slot {
        debug_assert!(idx < NUM_FOUNDATIONS);
        Slot(idx as u8 + 9)
    }

    pub fn number(self) -> u8 {
        self.0
    }

    pub fn pile(self) -> Pile {
        match self.0 {
            1..=7 => Pile::Tableau(self.0 as usize - 1),
            8 => Pile::Waste,
            n => Pile::Foundation(n as usize - 9),
        }
    }

    /// Waste and foundations form the top row.
    pub fn is_top_row(self) -> bool {
        self.0 > NUM_COLS as u8
    }

    fn lookup(self, table: &[u8; NUM_SLOTS as usize]) -> Slot {
        Slot(table[self.0 as usize - 1])
    }

    pub fn left(self) -> Slot {
        self.lookup(&LEFT)
    }

    pub fn right(self) -> Slot {
        self.lookup(&RIGHT)
    }

    /// The fixed cross-row neighbor.
    pub fn cross(self) -> Slot {
        self.lookup(&CROSS)
    }
}

impl TryFrom<u8> for Slot {
    type Error = Error;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match Slot::new(n) {
            Some(slot) => Ok(slot),
            None => bail!("slot {n} out of range 1..={NUM_SLOTS}"),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pile() {
            Pile::Tableau(c) => write!(f, "column {}", c + 1),
            Pile::Waste => f.write_str("waste"),
            Pile::Foundation(i) => write!(f, "foundation {}", i + 1),
        }
    }
}

/// Logical cursor: a slot plus a depth into a tableau column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    slot: Slot,
    /// Cards below the top of the column; only used on tableau slots.
    offset: usize,
    /// Slot left by the last row crossing.
    came_from: Option<Slot>,
    /// The last move was a Down crossing.
    crossed_down: bool,
}

impl Default for Cursor {
    fn default() -> Self {
        Cursor::at(Slot(1))
    }
}

impl Cursor {
    pub fn at(slot: Slot) -> Self {
        Cursor {
            slot,
            offset: 0,
            came_from: None,
            crossed_down: false,
        }
    }

    pub fn slot(&self) -> Slot {
        self.slot
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn reset_offset(&mut self) {
        self.offset = 0;
    }

    /// Jump directly to `slot`.
    pub fn jump_to(&mut self, slot: Slot) {
        *self = Cursor::at(slot);
    }

    pub fn left(&mut self) {
        self.jump_to(self.slot.left());
    }

    pub fn right(&mut self) {
        self.jump_to(self.slot.right());
    }

    /// Select one card deeper in the column if it is face-up, otherwise
    /// cross to the other row. Undoes a Down crossing directly.
    pub fn up(&mut self, tableau: &Tableau) {
        if let Pile::Tableau(col) = self.slot.pile() {
            let deeper = tableau.columns[col].head_index_for(self.offset + 1);
            if !self.crossed_down && deeper.is_some() {
                self.offset += 1;
                return;
            }
        }
        self.cross_row();
        self.crossed_down = false;
    }

    /// Select one card shallower in the column, otherwise cross rows.
    pub fn down(&mut self) {
        if matches!(self.slot.pile(), Pile::Tableau(_)) && self.offset > 0 {
            self.offset -= 1;
            self.crossed_down = false;
            return;
        }
        self.cross_row();
        self.crossed_down = true;
    }

    fn cross_row(&mut self) {
        let target = self
            .came_from
            .filter(|s| s.is_top_row() != self.slot.is_top_row())
            .unwrap_or_else(|| self.slot.cross());
        self.came_from = Some(self.slot);
        self.slot = target;
        self.offset = 0;
    }
}
