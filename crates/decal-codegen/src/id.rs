//! Generated resource-ID suffixes.
//!
//! Generated view IDs carry a numeric suffix so repeated snippets pasted
//! into one layout do not collide. The suffix source is injectable: real
//! generation uses a random source, tests use a sequential stub so output
//! can be compared without masking.

use rand::Rng;

/// Supplies suffixes for generated view IDs, in the range `0..10000`.
pub trait IdSource {
    fn next_suffix(&mut self) -> u32;
}

/// The production source: independently random per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_suffix(&mut self) -> u32 {
        rand::rng().random_range(0..10_000)
    }
}

/// Deterministic source for tests: 0, 1, 2, ...
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialIds {
    next: u32,
}

impl SequentialIds {
    pub fn new() -> SequentialIds {
        SequentialIds::default()
    }
}

impl IdSource for SequentialIds {
    fn next_suffix(&mut self) -> u32 {
        let suffix = self.next;
        self.next = (self.next + 1) % 10_000;
        suffix
    }
}
