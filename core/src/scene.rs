//! Builds every randomized scene of a run from a single seed.
//!
//! ORDER (fixed, one RNG stream per slot, so order never changes output):
//!   1. Home screen   (floating hearts, firecrackers)
//!   2. Pop game      (rise durations, lanes)
//!   3. Memories      (shuffled order)
//!   4. Formation     (particle flights)
//!
//! Same config + same viewport = byte-identical ScenePlan.

use crate::{
    config::EventConfig,
    error::SurpriseResult,
    formation::{default_radius, plan_formation, FormationPlan, HEART_RADIUS_FRACTION},
    home_scene::{plan_firecrackers, plan_floating_hearts, Firecracker, FloatingHeart, FIRECRACKERS, FLOATING_HEARTS},
    memories::{default_memories, Memory, MemoryGallery},
    pop_game::{bubble_lane_x, rise_duration_ms, PopGame, BUBBLE_SIZE, POP_ANIMATION_MS},
    rng::{RngBank, SceneSlot},
    types::{Millis, Viewport},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BubbleLane {
    pub id:      usize,
    pub x:       f64,
    /// Rises from the bottom edge to `-size`, fully off the top.
    pub size:    f64,
    pub rise_ms: Millis,
    pub pop_ms:  Millis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenePlan {
    pub seed:            u64,
    pub floating_hearts: Vec<FloatingHeart>,
    pub firecrackers:    Vec<Firecracker>,
    pub bubbles:         Vec<BubbleLane>,
    pub memories:        Vec<Memory>,
    pub formation:       FormationPlan,
}

impl ScenePlan {
    pub fn build(config: &EventConfig, viewport: &Viewport) -> SurpriseResult<Self> {
        Self::build_with_memories(config, viewport, default_memories())
    }

    pub fn build_with_memories(
        config: &EventConfig,
        viewport: &Viewport,
        memories: Vec<Memory>,
    ) -> SurpriseResult<Self> {
        config.validate()?;
        let bank = RngBank::new(config.seed);

        let mut home_rng = bank.for_scene(SceneSlot::FloatingHearts);
        let floating_hearts = plan_floating_hearts(FLOATING_HEARTS, viewport, &mut home_rng);
        let firecrackers = plan_firecrackers(FIRECRACKERS, viewport, &mut home_rng);

        let mut game_rng = bank.for_scene(SceneSlot::PopGame);
        let bubbles = (0..config.pop_bubbles)
            .map(|id| BubbleLane {
                id,
                x: bubble_lane_x(id, config.pop_bubbles, viewport.width),
                size: BUBBLE_SIZE,
                rise_ms: rise_duration_ms(&mut game_rng),
                pop_ms: POP_ANIMATION_MS,
            })
            .collect();

        let mut memory_rng = bank.for_scene(SceneSlot::Memories);
        let gallery = MemoryGallery::new(memories, &mut memory_rng);

        let mut formation_rng = bank.for_scene(SceneSlot::Formation);
        let formation = plan_formation(
            config.formation_particles,
            viewport,
            default_radius(viewport, HEART_RADIUS_FRACTION),
            &mut formation_rng,
        )?;

        log::debug!(
            "Scene plan built for seed {} ({}, {}, {}, {})",
            bank.master_seed(),
            home_rng.name,
            game_rng.name,
            memory_rng.name,
            formation_rng.name
        );
        Ok(Self {
            seed: config.seed,
            floating_hearts,
            firecrackers,
            bubbles,
            memories: gallery.memories().to_vec(),
            formation,
        })
    }

    /// A fresh game matching this plan's bubbles.
    pub fn new_game(&self, config: &EventConfig) -> SurpriseResult<PopGame> {
        PopGame::new(self.bubbles.len(), config.pop_win_score)
    }
}
