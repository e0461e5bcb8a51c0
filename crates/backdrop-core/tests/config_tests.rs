// Variant presets, validation and host input normalisation.

use backdrop_core::config::{BoxExtent, EdgeStyle, FieldConfig, MotionParams, Variant};
use backdrop_core::{ConfigError, PointerState, Scene, ScrollProgress};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn presets_validate() {
    for v in [Variant::Neural, Variant::Galaxy] {
        v.field().validate().unwrap();
        v.motion().validate().unwrap();
        if let Some(e) = v.edges() {
            e.validate().unwrap();
        }
    }
}

#[test]
fn variant_names_round_trip() {
    for v in [Variant::Neural, Variant::Galaxy] {
        assert_eq!(v.name().parse::<Variant>().unwrap(), v);
    }
    assert_eq!(" Galaxy ".parse::<Variant>().unwrap(), Variant::Galaxy);
    assert_eq!(
        "aurora".parse::<Variant>(),
        Err(ConfigError::UnknownVariant("aurora".into()))
    );
    assert_eq!(Variant::default(), Variant::Neural);
}

#[test]
fn negative_extent_is_rejected() {
    let cfg = FieldConfig {
        scatter: BoxExtent(Vec3::new(1.0, -2.0, 1.0)),
        ..FieldConfig::neural()
    };
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::NegativeOrNonFinite { field: "extent.y", .. })
    ));
    let err = Scene::new(&cfg, MotionParams::neural(), None, &mut StdRng::seed_from_u64(0))
        .unwrap_err();
    assert!(err.to_string().contains("extent.y"));
}

#[test]
fn zero_threshold_is_valid_and_edgeless() {
    let style = EdgeStyle {
        threshold: 0.0,
        ..EdgeStyle::neural()
    };
    style.validate().unwrap();
    let scene = Scene::new(
        &FieldConfig::neural(),
        MotionParams::neural(),
        Some(style),
        &mut StdRng::seed_from_u64(0),
    )
    .unwrap();
    assert!(scene.edges().is_empty());
    assert_eq!(scene.particles().len(), 60);
}

#[test]
fn nan_threshold_is_rejected() {
    let style = EdgeStyle {
        threshold: f32::NAN,
        ..EdgeStyle::neural()
    };
    assert!(style.validate().is_err());
}

#[test]
fn neural_scene_builds_edges_from_base_positions() {
    let scene = Scene::from_variant(Variant::Neural, &mut StdRng::seed_from_u64(42)).unwrap();
    for e in scene.edges() {
        let (a, b) = e.indices();
        let d = scene.particles()[a]
            .base_position
            .distance(scene.particles()[b].base_position);
        assert!(d < 3.2);
    }
}

#[test]
fn pointer_normalisation_flips_y_and_centres() {
    let p = PointerState::from_client(0.0, 0.0, 800.0, 600.0);
    assert_eq!((p.x, p.y), (-1.0, 1.0));
    let p = PointerState::from_client(800.0, 600.0, 800.0, 600.0);
    assert_eq!((p.x, p.y), (1.0, -1.0));
    let p = PointerState::from_client(400.0, 300.0, 800.0, 600.0);
    assert_eq!((p.x, p.y), (0.0, 0.0));
}

#[test]
fn pointer_outside_viewport_is_clamped() {
    let p = PointerState::from_client(-500.0, 5000.0, 800.0, 600.0);
    assert_eq!((p.x, p.y), (-1.0, -1.0));
    let mut q = PointerState::default();
    q.update_from_client(f32::NAN, 300.0, 800.0, 600.0);
    assert_eq!((q.x, q.y), (0.0, 0.0));
}

#[test]
fn zero_sized_viewport_yields_centre() {
    assert_eq!(PointerState::from_client(10.0, 10.0, 0.0, 600.0), PointerState::CENTER);
    assert_eq!(PointerState::from_client(10.0, 10.0, 800.0, 0.0), PointerState::CENTER);
}

#[test]
fn scroll_progress_from_offsets() {
    assert_eq!(ScrollProgress::from_offset(0.0, 3000.0, 1000.0).get(), 0.0);
    assert_eq!(ScrollProgress::from_offset(1000.0, 3000.0, 1000.0).get(), 0.5);
    assert_eq!(ScrollProgress::from_offset(2500.0, 3000.0, 1000.0).get(), 1.0);
    assert_eq!(ScrollProgress::from_offset(50.0, 800.0, 1000.0), ScrollProgress::TOP);
    assert_eq!(ScrollProgress::new(-3.0), ScrollProgress::TOP);
    assert_eq!(ScrollProgress::new(f32::INFINITY), ScrollProgress::TOP);
}
