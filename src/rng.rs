//! Linear congruential pseudo-random generator.
//!
//! This module provides [`Lcg`], a deterministic random source holding a
//! single 31-bit state word. The update rule is the classic
//! `state = (a * state + c) mod 2^31` recurrence with `a = 1103515245`
//! and `c = 12345`.
//!
//! # Invariants
//!
//! - The state is always in `[0, 2^31)`.
//! - The next state is a pure function of the previous state: a fixed seed
//!   yields a fixed, repeatable sequence.
//!
//! Each draw mutates the state through `&mut self`, so an instance has a
//! single logical owner; wrap it in a lock before sharing across threads.

use log::debug;

const MULTIPLIER: u64 = 1103515245;
const INCREMENT: u64 = 12345;
/// Modulus `2^31`; the state is always strictly below it.
const MODULUS: u64 = 1 << 31;

/// A linear congruential generator with 31 bits of state.
///
/// # Examples
///
/// ```rust
/// use funlib::rng::Lcg;
///
/// let mut rng = Lcg::new(42);
/// let x = rng.next_float();
/// assert!((0.0..1.0).contains(&x));
///
/// // The same seed replays the same sequence:
/// let mut replay = Lcg::new(42);
/// assert_eq!(replay.next_float(), x);
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    /// Creates a generator from an explicit seed.
    ///
    /// Any integer is a valid seed; it is masked to 31 bits.
    pub fn new(seed: u32) -> Self {
        let state = seed & (MODULUS as u32 - 1);
        debug!("Lcg::new(seed = {}) -> state = {}", seed, state);
        Self { state }
    }

    /// Creates a generator seeded from OS entropy.
    ///
    /// Only the initial seed comes from the OS; every subsequent draw is
    /// the deterministic recurrence.
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u32>())
    }

    /// Returns the current state word.
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advances the state and returns a float in `[0, 1)`.
    pub fn next_float(&mut self) -> f64 {
        let next = (MULTIPLIER * self.state as u64 + INCREMENT) % MODULUS;
        self.state = next as u32;
        next as f64 / MODULUS as f64
    }

    /// Advances the state and returns an integer in `[low, high]`,
    /// inclusive of both bounds.
    ///
    /// The bounds are normalized, so `next_int(7, 3)` draws from `[3, 7]`.
    pub fn next_int(&mut self, low: i64, high: i64) -> i64 {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        let span = (high - low + 1) as f64;
        low + (self.next_float() * span) as i64
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Lcg::from_entropy()
    }
}
