//! Game numbers and reproducible deals.
//!
//! A game number is an arbitrarily large non-negative integer. The same
//! number always produces the same shuffled deck, which is what makes a
//! deal replayable and what lets the tests pin exact layouts.
//!
//! Numbers that fit in 64 bits seed the shuffle directly; larger numbers
//! have their little-endian bytes folded into a 32-byte ChaCha seed.

use core::fmt;

use anyhow::{bail, Context, Result};
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{standard_deck, Card};

/// Width of a ChaCha seed in bytes.
const SEED_LEN: usize = 32;

/// A game number identifying one deal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DealNumber(BigUint);

impl DealNumber {
    /// Parse a game number typed by a human.
    ///
    /// Leading `#` and the separators whitespace, `-`, `_`, `.`, `,` are
    /// ignored, so "#1,234,567" and "1234567" name the same deal.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let body = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let cleaned: String = body
            .chars()
            .filter(|&ch| !(ch.is_whitespace() || matches!(ch, '-' | '_' | '.' | ',')))
            .collect();

        if cleaned.is_empty() {
            bail!("empty game number {text:?}");
        }
        if !cleaned.chars().all(|c| c.is_ascii_digit()) {
            bail!("game number {text:?} contains non-digits");
        }

        let n = BigUint::parse_bytes(cleaned.as_bytes(), 10)
            .with_context(|| format!("could not parse game number {text:?}"))?;
        Ok(DealNumber(n))
    }

    /// A fresh random game number.
    pub fn random() -> Self {
        let n: u64 = rand::thread_rng().r#gen();
        DealNumber::from(n)
    }

    /// The number as a `u64`, if it fits.
    pub fn as_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }

    fn rng(&self) -> ChaCha8Rng {
        if let Some(n) = self.as_u64() {
            return ChaCha8Rng::seed_from_u64(n);
        }
        let mut seed = [0u8; SEED_LEN];
        for (i, byte) in self.0.to_bytes_le().into_iter().enumerate() {
            seed[i % SEED_LEN] ^= byte;
        }
        ChaCha8Rng::from_seed(seed)
    }

    /// The standard deck shuffled by this game number, all cards face-down.
    ///
    /// The deal takes cards from the end of the returned vector.
    pub fn shuffled_deck(&self) -> Vec<Card> {
        let mut deck = standard_deck();
        deck.shuffle(&mut self.rng());
        deck
    }
}

impl From<u64> for DealNumber {
    fn from(n: u64) -> Self {
        DealNumber(BigUint::from(n))
    }
}

impl fmt::Display for DealNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
