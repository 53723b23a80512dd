//! Deterministic random number generation.
//!
//! RULE: No scene logic may call a platform RNG directly.
//! All randomness flows through a RandomSource, normally a SceneRng
//! derived from a single master seed.
//!
//! Each scene gets its own stream, seeded from (master_seed XOR slot).
//! Adding a new scene never changes the streams of existing ones.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// The randomness a scene is allowed to ask for.
pub trait RandomSource {
    /// A float in [0.0, 1.0).
    fn next_f64(&mut self) -> f64;

    /// A u64 in [0, n). `n` must be > 0.
    fn next_u64_below(&mut self, n: u64) -> u64;

    /// `min + U[0,1) * span`, the shape of every jittered duration.
    fn range(&mut self, min: f64, span: f64) -> f64 {
        min + self.next_f64() * span
    }

    /// Label for log lines.
    fn name(&self) -> &'static str {
        "unnamed"
    }
}

/// A named, deterministic RNG for a single scene.
pub struct SceneRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl SceneRng {
    /// Create a scene RNG from the master seed and a stable slot index.
    /// The index must never change once assigned.
    pub fn new(master_seed: u64, slot_index: u64) -> Self {
        let derived_seed = master_seed ^ (slot_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }
}

impl RandomSource for SceneRng {
    fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    fn next_u64_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

/// Hands out one SceneRng per slot for a single run.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    pub fn for_scene(&self, slot: SceneSlot) -> SceneRng {
        SceneRng::new(self.master_seed, slot as u64).with_name(slot.name())
    }
}

/// Stable slot assignments.
/// NEVER reorder or remove entries, only append.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum SceneSlot {
    FloatingHearts = 0,
    PopGame = 1,
    Memories = 2,
    Formation = 3,
}

impl SceneSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FloatingHearts => "floating_hearts",
            Self::PopGame => "pop_game",
            Self::Memories => "memories",
            Self::Formation => "formation",
        }
    }
}
