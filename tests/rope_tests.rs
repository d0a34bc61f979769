use drape::{
    DragTarget, FixedTimestep, NoOpStepObserver, PhysicsError, Rope, RopeConfig, Simulation, SolverConfig,
    Vec2,
};

#[test]
fn rope_rejects_empty_interior() {
    let result = Rope::new(Vec2::new(0.0f32, 0.0), Vec2::new(0.0, -1.0), 0, &RopeConfig::default());
    assert_eq!(result.err(), Some(PhysicsError::InvalidSegmentCount { count: 0 }));
}

#[test]
fn short_rope_hangs_below_pin() {
    let mut rope = Rope::new(Vec2::new(0.0f32, 0.0), Vec2::new(0.0, -1.0), 1, &RopeConfig::default()).unwrap();
    assert_eq!(rope.len(), 3);
    assert!((rope.natural_length() - 1.0).abs() < 1e-6);

    let config = SolverConfig::new();
    for _ in 0..600 {
        rope.step(1.0 / 60.0, &config, &mut NoOpStepObserver);
    }

    let anchor = rope.particle(0).unwrap();
    assert!(anchor.fixed);
    assert_eq!(anchor.position, Vec2::new(0.0, 0.0));

    let end = rope.end();
    assert!(end.y < 0.0, "end should hang below the pin, got {:?}", end);
    assert!(end.distance(anchor.position) <= 1.0 + 1e-3);
    assert!(rope.span_length() <= 1.0 + 1e-3, "span {} exceeds rope length", rope.span_length());
}

#[test]
fn horizontal_rope_swings_down_without_stretching() {
    let mut rope = Rope::new(Vec2::new(0.0f32, 0.0), Vec2::new(2.0, 0.0), 8, &RopeConfig::default()).unwrap();
    let natural = rope.natural_length();

    let config = SolverConfig::new();
    for _ in 0..300 {
        rope.step(1.0 / 60.0, &config, &mut NoOpStepObserver);
    }

    assert_eq!(rope.particle(0).unwrap().position, Vec2::new(0.0, 0.0));
    let positions = rope.positions();
    let mean_y = positions.iter().map(|p| p.y).sum::<f32>() / positions.len() as f32;
    assert!(mean_y < 0.0, "rope should have dropped, mean y = {}", mean_y);

    let end = rope.end();
    // The anchor-to-end link is relaxed last in every pass.
    assert!(end.length() <= natural + 1e-3, "end {} away from anchor, rope is {}", end.length(), natural);
    assert!(rope.span_length() <= natural * 1.05);
    assert!(positions.iter().all(|p| p.is_finite()));
}

#[test]
fn dragging_the_anchor_eases_toward_target() {
    let mut rope = Rope::new(Vec2::new(0.0f32, 0.0), Vec2::new(0.0, -1.0), 3, &RopeConfig::default()).unwrap();
    let config = SolverConfig::new();
    let mut clock = FixedTimestep::new(&config);
    let drag = DragTarget::new(0, Vec2::new(1.0, 0.0));

    clock.advance_with_drag(&mut rope, 1.0 / 60.0, Some(&drag), &config, &mut NoOpStepObserver);
    assert_eq!(rope.particle(0).unwrap().position, Vec2::new(0.25, 0.0));

    for _ in 0..120 {
        clock.advance_with_drag(&mut rope, 1.0 / 60.0, Some(&drag), &config, &mut NoOpStepObserver);
    }
    let anchor = rope.particle(0).unwrap().position;
    assert!((anchor.x - 1.0).abs() < 1e-4 && anchor.y == 0.0, "anchor at {:?}", anchor);
}

#[test]
fn only_fixed_particles_can_be_placed() {
    let mut rope = Rope::new(Vec2::new(0.0f32, 0.0), Vec2::new(0.0, -1.0), 2, &RopeConfig::default()).unwrap();
    assert_eq!(rope.fixed_indices(), [0]);
    assert_eq!(
        rope.set_fixed_position(1, Vec2::new(3.0, 3.0)),
        Err(PhysicsError::ParticleNotFixed { index: 1 })
    );

    rope.pin(3).unwrap();
    rope.set_fixed_position(3, Vec2::new(0.0, -0.5)).unwrap();
    assert_eq!(rope.end(), Vec2::new(0.0, -0.5));
    assert_eq!(rope.fixed_indices(), [0, 3]);
}

#[test]
fn bending_links_reduce_stretch() {
    // Long-range links give the relaxation a shortcut to the anchor, so the same
    // number of passes leaves less stretch than a plain chain.
    let run = |reach: usize| {
        let config = RopeConfig::default().with_bend_reach(reach);
        let mut rope: Rope<f32> = Rope::new(Vec2::new(0.0, 0.0), Vec2::new(0.0, -2.0), 30, &config).unwrap();
        let solver = SolverConfig::new();
        for _ in 0..120 {
            rope.step(1.0 / 60.0, &solver, &mut NoOpStepObserver);
        }
        rope.end().length()
    };
    let plain = run(1);
    let linked = run(10);
    assert!(linked <= plain + 1e-4, "linked {} vs plain {}", linked, plain);
}
