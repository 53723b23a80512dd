use surprise_core::{
    formation::{
        default_radius, plan_formation, FLIGHT_DELAY_MS, FLIGHT_DURATION_MS, FORMATION_PARTICLES,
        HEART_RADIUS_FRACTION,
    },
    heart::heart_layout,
    rng::{RngBank, SceneSlot},
    types::Viewport,
};

fn viewport() -> Viewport {
    Viewport::new(390.0, 844.0)
}

#[test]
fn flights_start_on_screen_and_end_on_the_heart() {
    let vp = viewport();
    let radius = default_radius(&vp, HEART_RADIUS_FRACTION);
    let mut rng = RngBank::new(8).for_scene(SceneSlot::Formation);
    let plan = plan_formation(FORMATION_PARTICLES, &vp, radius, &mut rng).unwrap();

    let expected = heart_layout(FORMATION_PARTICLES, radius, vp.heart_center()).unwrap();
    assert_eq!(plan.targets().collect::<Vec<_>>(), expected);

    for flight in &plan.flights {
        assert!(vp.contains(&flight.start), "start off screen: {:?}", flight.start);
        assert_eq!(flight.delay_ms, FLIGHT_DELAY_MS);
        assert_eq!(flight.duration_ms, FLIGHT_DURATION_MS);
    }
}

#[test]
fn default_radius_keeps_the_heart_inside_the_width() {
    let vp = viewport();
    let radius = default_radius(&vp, HEART_RADIUS_FRACTION);
    let points = heart_layout(200, radius, vp.heart_center()).unwrap();
    assert!(points.iter().all(|p| p.x >= 0.0 && p.x <= vp.width));
}

#[test]
fn reveal_follows_the_flights() {
    let vp = viewport();
    let mut rng = RngBank::new(1).for_scene(SceneSlot::Formation);
    let plan = plan_formation(10, &vp, 5.0, &mut rng).unwrap();
    let timeline = plan.reveal_timeline();
    assert_eq!(timeline.heart_formed, 3000);
    assert_eq!(timeline.name_shown, 4500);
    assert_eq!(timeline.button_shown, 5500);
    assert_eq!(timeline.confetti_at, 3000);
}

#[test]
fn zero_particles_is_rejected() {
    let mut rng = RngBank::new(1).for_scene(SceneSlot::Formation);
    assert!(plan_formation(0, &viewport(), 5.0, &mut rng).is_err());
}
