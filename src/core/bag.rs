//! Bag randomizer - 7-bag piece generation behind a materialized queue
//!
//! Whole shuffled bags (one of each kind) are appended until the queue
//! holds at least `QUEUE_MIN_LOOKAHEAD` entries, so observers always see
//! a full preview and every 7-draw window aligned to a bag boundary
//! contains each kind exactly once.
//!
//! Randomness comes from a small seeded LCG rather than an external RNG:
//! given a seed, the entire piece sequence is reproducible, which the
//! test suite leans on.

use std::collections::VecDeque;

use crate::types::{PieceKind, PREVIEW_LEN, QUEUE_MIN_LOOKAHEAD};

/// Linear congruential generator (Numerical Recipes constants).
#[derive(Debug, Clone)]
pub struct GameRng {
    state: u32,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // A zero state would stick near zero for the first draws.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Upcoming pieces: a lazily-extended queue fed by whole shuffled bags.
#[derive(Debug, Clone)]
pub struct PieceQueue {
    queue: VecDeque<PieceKind>,
    rng: GameRng,
}

impl PieceQueue {
    /// Create a queue seeded for a reproducible sequence, already filled
    /// to the lookahead minimum.
    pub fn new(seed: u32) -> Self {
        let mut queue = Self {
            queue: VecDeque::with_capacity(2 * 7),
            rng: GameRng::new(seed),
        };
        queue.refill();
        queue
    }

    /// Append one freshly shuffled bag.
    fn push_bag(&mut self) {
        let mut bag = PieceKind::ALL;
        self.rng.shuffle(&mut bag);
        self.queue.extend(bag);
    }

    /// Append whole bags until the lookahead minimum holds.
    fn refill(&mut self) {
        while self.queue.len() < QUEUE_MIN_LOOKAHEAD {
            self.push_bag();
        }
    }

    /// The kind a spawn would take next, without consuming it.
    pub fn next_kind(&self) -> PieceKind {
        self.queue[0]
    }

    /// Take the next piece, keeping the lookahead minimum intact.
    pub fn draw(&mut self) -> PieceKind {
        self.refill();
        let kind = self.queue[0];
        self.queue.pop_front();
        self.refill();
        kind
    }

    /// The stable five-entry preview shown to observers.
    pub fn preview(&self) -> [PieceKind; PREVIEW_LEN] {
        let mut out = [PieceKind::I; PREVIEW_LEN];
        for (slot, kind) in out.iter_mut().zip(self.queue.iter()) {
            *slot = *kind;
        }
        out
    }

    /// Number of materialized entries.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Drop all materialized entries and refill from the ongoing RNG
    /// stream. Used by game reset; the sequence stays deterministic for
    /// a given construction seed.
    pub fn restart(&mut self) {
        self.queue.clear();
        self.refill();
    }
}
