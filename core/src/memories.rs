//! The memories gallery: a fixed set of photos shown in shuffled order.

use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memory {
    pub id:      u32,
    /// Asset path; decoding is the host's job.
    pub image:   String,
    pub caption: String,
}

impl Memory {
    pub fn new(id: u32, image: impl Into<String>, caption: impl Into<String>) -> Self {
        Self { id, image: image.into(), caption: caption.into() }
    }
}

pub fn default_memories() -> Vec<Memory> {
    vec![
        Memory::new(1, "assets/memory1.jpeg", "That amazing! Best day ever."),
        Memory::new(2, "assets/memory4.gif", "Couldn't stop laughing at this moment!"),
        Memory::new(3, "assets/memory5.gif", "coke moment."),
        Memory::new(4, "assets/memory6.gif", "This moment was just pure fun!"),
    ]
}

/// In-place Fisher-Yates, walking down from the last element.
pub fn shuffle_memories<T>(items: &mut [T], rng: &mut impl RandomSource) {
    for i in (1..items.len()).rev() {
        let j = rng.next_u64_below(i as u64 + 1) as usize;
        items.swap(i, j);
    }
}

#[derive(Debug, Clone)]
pub struct MemoryGallery {
    memories: Vec<Memory>,
}

impl MemoryGallery {
    /// Shuffle once at construction; the order is fixed afterwards.
    pub fn new(mut memories: Vec<Memory>, rng: &mut impl RandomSource) -> Self {
        shuffle_memories(&mut memories, rng);
        log::debug!(
            "Memory order ({}): {:?}",
            rng.name(),
            memories.iter().map(|m| m.id).collect::<Vec<_>>()
        );
        Self { memories }
    }

    pub fn memories(&self) -> &[Memory] {
        &self.memories
    }

    pub fn len(&self) -> usize {
        self.memories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memories.is_empty()
    }
}
