use course_core::{
    CourseConfig, CourseError, CourseGenerator, CourseParams, GOAL_COUNT, Quantizer, VariantKind,
    generate,
};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

#[test]
fn staircase_scenario() {
    let course = generate(12.0, 4.0, 0.1, 0.5, VariantKind::Stairs, 2025).unwrap();
    assert_eq!(course.shape(), (120, 40));

    // spawn zone untouched
    for x in 0..20 {
        for y in 0..40 {
            assert_eq!(course.height(x, y), Some(0.0), "spawn cell ({}, {})", x, y);
        }
    }

    let goals = course.goals();
    assert_eq!(goals[0].x, 15);
    assert_eq!(goals[0].y, 20);

    // staircase rows climb from the spawn zone end to the last step
    let mut prev = 0.0;
    let mut x = 20;
    while course.height(x, 20).unwrap() > 0.0 {
        let h = course.height(x, 20).unwrap();
        assert!(h >= prev);
        prev = h;
        x += 1;
    }
    assert!(x > goals[6].x, "staircase ended before its last goal");
    assert!(prev > 0.0);
}

#[test]
fn shape_ignores_difficulty() {
    for kind in VariantKind::ALL {
        for (i, &d) in [0.0, 0.25, 0.5, 0.75, 1.0].iter().enumerate() {
            let course = generate(15.0, 3.2, 0.05, d, kind, i as u64).unwrap();
            assert_eq!(course.shape(), (300, 64), "{} at {}", kind, d);
        }
    }
}

#[test]
fn eight_goals_with_forward_progress() {
    for kind in VariantKind::ALL {
        for seed in 0..20 {
            let d = (seed % 11) as f64 / 10.0;
            let course = generate(14.0, 4.0, 0.1, d, kind, seed).unwrap();
            let goals = course.goals();
            assert_eq!(goals.len(), GOAL_COUNT);
            assert!(goals[0].x < goals[7].x, "{} seed {}", kind, seed);
            assert!(goals.windows(2).all(|w| w[0].x <= w[1].x), "{} seed {}", kind, seed);
            for g in goals {
                assert!(g.x < 140 && g.y < 40);
            }
        }
    }
}

#[test]
fn spawn_and_terminal_zones_stay_flat() {
    for kind in VariantKind::ALL {
        let course = generate(16.0, 4.0, 0.1, 1.0, kind, 77).unwrap();
        let heights = course.heights();
        assert!(heights[..20].iter().flatten().all(|&h| h == 0.0), "{}", kind);
        assert!(heights[140..].iter().flatten().all(|&h| h == 0.0), "{}", kind);
        let last = course.goals()[7];
        assert_eq!(course.height(last.x, last.y), Some(0.0));
    }
}

#[test]
fn every_variant_fills_all_goal_slots() {
    // strict config rejects both clipping and backfill
    let generator = CourseGenerator::new(CourseConfig::preset_strict()).unwrap();
    let params = CourseParams::new(30.0, 4.0, 0.05, 1.0).unwrap();
    for kind in VariantKind::ALL {
        for seed in 0..5 {
            let result = generator.generate_seeded(kind, &params, seed);
            assert!(result.is_ok(), "{} seed {}: {:?}", kind, seed, result.err());
        }
    }
}

#[test]
fn same_seed_same_course() {
    let params = CourseParams::new(12.0, 4.0, 0.1, 0.6).unwrap();
    let generator = CourseGenerator::default();
    for kind in VariantKind::ALL {
        let a = generator.generate_seeded(kind, &params, 42).unwrap();
        let b = generator.generate_seeded(kind, &params, 42).unwrap();
        assert_eq!(a.heights(), b.heights());
        assert_eq!(a.goals(), b.goals());
    }

    let mut r1 = Xoshiro256StarStar::seed_from_u64(1);
    let mut r2 = Xoshiro256StarStar::seed_from_u64(2);
    let a = generator.generate_kind(VariantKind::Gaps, &params, &mut r1).unwrap();
    let b = generator.generate_kind(VariantKind::Gaps, &params, &mut r2).unwrap();
    assert_ne!(a.heights(), b.heights());
}

#[test]
fn extreme_inputs_clip_or_reject() {
    // too short for the reserved zones
    assert!(matches!(
        generate(1.0, 4.0, 0.05, 1.0, VariantKind::Stairs, 0),
        Err(CourseError::OutOfBounds { .. })
    ));

    // obstacles longer than the room left: clipped, never a panic
    for kind in VariantKind::ALL {
        let course = generate(4.2, 0.3, 0.05, 1.0, kind, 3).unwrap();
        assert_eq!(course.shape(), (84, 6));
        assert!(course.goals()[0].x < course.goals()[7].x);
        for g in course.goals() {
            assert!(course.height(g.x, g.y).unwrap() >= 0.0, "{} goal {:?} sunk", kind, g);
        }
    }

    // sideways jitter on a narrow course never pushes footing off the grid
    for kind in [VariantKind::SteppingStones, VariantKind::BalanceBeams] {
        for seed in 0..20 {
            let course = generate(12.0, 0.3, 0.05, 1.0, kind, seed).unwrap();
            for g in course.goals() {
                assert!(course.height(g.x, g.y).unwrap() >= 0.0, "{} seed {}", kind, seed);
            }
        }
    }

    // grids coarser than the reserved zones
    assert!(matches!(
        generate(5.0, 5.0, 5.0, 0.5, VariantKind::Stairs, 1),
        Err(CourseError::InvalidParameter { name: "resolution", .. })
    ));
    let course = generate(12.0, 4.0, 1.1, 0.5, VariantKind::Stairs, 1).unwrap();
    let spawn = course.goals()[0];
    assert!(spawn.x < 2);
    assert_eq!(course.height(spawn.x, spawn.y), Some(0.0));
    assert!(spawn.x < course.goals()[7].x);

    // coarse grid where a single cell is wider than most features
    for kind in VariantKind::ALL {
        let course = generate(8.0, 1.0, 0.5, 0.9, kind, 5).unwrap();
        assert_eq!(course.shape(), (16, 2));
    }

    // same extremes under the strict config surface as OutOfBounds
    let strict = CourseGenerator::new(CourseConfig::preset_strict()).unwrap();
    let params = CourseParams::new(4.2, 0.3, 0.05, 1.0).unwrap();
    assert!(matches!(
        strict.generate_seeded(VariantKind::Gaps, &params, 3),
        Err(CourseError::OutOfBounds { .. })
    ));
}

#[test]
fn invalid_parameters_rejected() {
    assert!(matches!(
        generate(-1.0, 4.0, 0.1, 0.5, VariantKind::Ramps, 0),
        Err(CourseError::InvalidParameter { name: "length", .. })
    ));
    assert!(matches!(
        generate(12.0, 4.0, 0.1, -0.1, VariantKind::Ramps, 0),
        Err(CourseError::InvalidParameter { name: "difficulty", .. })
    ));
    assert!(matches!(
        generate(12.0, 4.0, 0.0, 0.5, VariantKind::Ramps, 0),
        Err(CourseError::InvalidParameter { name: "resolution", .. })
    ));
}

#[test]
fn goals_convert_back_to_metres() {
    let course = generate(12.0, 4.0, 0.1, 0.5, VariantKind::PillarSlalom, 9).unwrap();
    let q = Quantizer::new(0.1).unwrap();
    for (g, (mx, my)) in course.goals().iter().zip(course.goal_positions()) {
        assert_eq!(q.quantize(mx) as usize, g.x);
        assert_eq!(q.quantize(my) as usize, g.y);
    }
}

#[test]
fn config_presets_load_from_ron() {
    let text = CourseConfig::preset_gentle().to_ron_string().unwrap();
    let config = CourseConfig::from_ron_str(&text).unwrap();
    let generator = CourseGenerator::new(config).unwrap();
    let params = CourseParams::new(12.0, 4.0, 0.1, 1.0).unwrap();
    let course = generator.generate_seeded(VariantKind::Hurdles, &params, 1).unwrap();
    assert_eq!(course.variant(), "hurdles");
}
