// Particle field generation: counts, phase range, determinism and layouts.

use backdrop_core::config::{BoxExtent, ColorScheme, FieldConfig, TargetLayout};
use backdrop_core::constants::{BRAND_AMBER, BRAND_CYAN, NEURAL_NODE_COLOR};
use backdrop_core::field::{base_positions, generate};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::TAU;

fn config(count: usize) -> FieldConfig {
    FieldConfig {
        count,
        ..FieldConfig::neural()
    }
}

#[test]
fn produces_exactly_the_requested_count() {
    let mut rng = StdRng::seed_from_u64(1);
    for n in [0usize, 1, 2, 60, 500, 2000] {
        let particles = generate(&config(n), &mut rng);
        assert_eq!(particles.len(), n);
    }
}

#[test]
fn phases_are_in_zero_to_tau() {
    let mut rng = StdRng::seed_from_u64(7);
    let particles = generate(&FieldConfig::galaxy(), &mut rng);
    for p in &particles {
        assert!(p.phase >= 0.0 && p.phase < TAU, "phase out of range: {}", p.phase);
    }
}

#[test]
fn same_seed_gives_same_field() {
    let a = generate(&FieldConfig::galaxy(), &mut StdRng::seed_from_u64(42));
    let b = generate(&FieldConfig::galaxy(), &mut StdRng::seed_from_u64(42));
    assert_eq!(a, b);
    let c = generate(&FieldConfig::galaxy(), &mut StdRng::seed_from_u64(43));
    assert_ne!(a, c);
}

#[test]
fn positions_stay_inside_the_scatter_box() {
    let cfg = FieldConfig::neural();
    let half = cfg.scatter.0 * 0.5;
    let particles = generate(&cfg, &mut StdRng::seed_from_u64(3));
    for p in &particles {
        let b = p.base_position;
        assert!(b.x.abs() <= half.x && b.y.abs() <= half.y && b.z.abs() <= half.z, "{b:?}");
        assert!(p.target_position.is_none());
    }
}

#[test]
fn flat_extent_collapses_axis() {
    let cfg = FieldConfig {
        count: 50,
        scatter: BoxExtent(Vec3::new(4.0, 4.0, 0.0)),
        ..FieldConfig::neural()
    };
    for p in generate(&cfg, &mut StdRng::seed_from_u64(5)) {
        assert_eq!(p.base_position.z, 0.0);
    }
}

#[test]
fn spiral_targets_lie_in_the_disc() {
    let cfg = FieldConfig::galaxy();
    let Some(TargetLayout::SpiralDisc {
        radius, thickness, ..
    }) = cfg.target
    else {
        panic!("galaxy preset should morph into a disc");
    };
    for p in generate(&cfg, &mut StdRng::seed_from_u64(9)) {
        let t = p.target_position.expect("target");
        let planar = (t.x * t.x + t.z * t.z).sqrt();
        assert!(planar <= radius + 1e-4, "radius {planar}");
        assert!(t.y.abs() <= thickness * 0.5 + 1e-6, "height {}", t.y);
    }
}

#[test]
fn fixed_tint_is_applied_to_every_particle() {
    for p in generate(&FieldConfig::neural(), &mut StdRng::seed_from_u64(11)) {
        assert_eq!(p.color, NEURAL_NODE_COLOR);
    }
}

#[test]
fn blended_colors_stay_between_brand_colors() {
    let cfg = FieldConfig::galaxy();
    assert_eq!(cfg.colors, ColorScheme::Blend(BRAND_CYAN, BRAND_AMBER));
    for p in generate(&cfg, &mut StdRng::seed_from_u64(13)) {
        for c in 0..3 {
            let lo = BRAND_CYAN[c].min(BRAND_AMBER[c]) - 1e-6;
            let hi = BRAND_CYAN[c].max(BRAND_AMBER[c]) + 1e-6;
            assert!(p.color[c] >= lo && p.color[c] <= hi);
        }
    }
}

#[test]
fn base_positions_preserve_order() {
    let particles = generate(&config(10), &mut StdRng::seed_from_u64(17));
    let positions = base_positions(&particles);
    assert_eq!(positions.len(), 10);
    for (p, pos) in particles.iter().zip(&positions) {
        assert_eq!(p.base_position, *pos);
    }
}
