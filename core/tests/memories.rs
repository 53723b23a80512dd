use surprise_core::{
    memories::{default_memories, shuffle_memories, MemoryGallery},
    rng::{RandomSource, RngBank, SceneSlot},
};

/// Always picks index 0.
struct ZeroSource;

impl RandomSource for ZeroSource {
    fn next_f64(&mut self) -> f64 { 0.0 }
    fn next_u64_below(&mut self, _n: u64) -> u64 { 0 }
}

fn ids(gallery: &MemoryGallery) -> Vec<u32> {
    gallery.memories().iter().map(|m| m.id).collect()
}

#[test]
fn shuffle_follows_fisher_yates_from_the_end() {
    let mut items = vec![1, 2, 3, 4];
    shuffle_memories(&mut items, &mut ZeroSource);
    // swap(3,0) -> [4,2,3,1], swap(2,0) -> [3,2,4,1], swap(1,0) -> [2,3,4,1]
    assert_eq!(items, vec![2, 3, 4, 1]);
}

#[test]
fn gallery_is_a_permutation_of_the_catalogue() {
    for seed in 0..50 {
        let mut rng = RngBank::new(seed).for_scene(SceneSlot::Memories);
        let gallery = MemoryGallery::new(default_memories(), &mut rng);
        let mut got = ids(&gallery);
        got.sort_unstable();
        assert_eq!(got, vec![1, 2, 3, 4]);
    }
}

#[test]
fn same_seed_same_order() {
    let a = MemoryGallery::new(default_memories(), &mut RngBank::new(5).for_scene(SceneSlot::Memories));
    let b = MemoryGallery::new(default_memories(), &mut RngBank::new(5).for_scene(SceneSlot::Memories));
    assert_eq!(ids(&a), ids(&b));
}

#[test]
fn seeds_produce_more_than_one_order() {
    let orders: std::collections::HashSet<Vec<u32>> = (0..40)
        .map(|seed| {
            let mut rng = RngBank::new(seed).for_scene(SceneSlot::Memories);
            ids(&MemoryGallery::new(default_memories(), &mut rng))
        })
        .collect();
    assert!(orders.len() > 1, "shuffle never changed the order");
}

#[test]
fn empty_and_single_galleries_are_fine() {
    let empty = MemoryGallery::new(Vec::new(), &mut ZeroSource);
    assert!(empty.is_empty());

    let one = MemoryGallery::new(default_memories().into_iter().take(1).collect(), &mut ZeroSource);
    assert_eq!(one.len(), 1);
    assert_eq!(one.memories()[0].caption, "That amazing! Best day ever.");
}
