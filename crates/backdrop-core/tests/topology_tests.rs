// Edge derivation: threshold semantics, uniqueness, grid/exhaustive agreement.

use backdrop_core::topology::{build_edges, build_edges_exhaustive, build_edges_grid, Edge};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

fn random_points(n: usize, seed: u64, spread: f32) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Vec3::new(
                (rng.gen::<f32>() - 0.5) * spread,
                (rng.gen::<f32>() - 0.5) * spread,
                (rng.gen::<f32>() - 0.5) * spread * 0.3,
            )
        })
        .collect()
}

#[test]
fn every_edge_is_shorter_than_threshold() {
    let pts = random_points(120, 1, 14.0);
    for threshold in [0.5_f32, 1.0, 3.2, 8.0] {
        for e in build_edges(&pts, threshold) {
            let (a, b) = e.indices();
            assert!(pts[a].distance(pts[b]) < threshold);
        }
    }
}

#[test]
fn all_close_pairs_are_found() {
    let pts = random_points(80, 2, 10.0);
    let edges: HashSet<Edge> = build_edges(&pts, 3.2).into_iter().collect();
    for i in 0..pts.len() {
        for j in (i + 1)..pts.len() {
            let close = pts[i].distance(pts[j]) < 3.2;
            let e = Edge {
                from: i as u32,
                to: j as u32,
            };
            assert_eq!(close, edges.contains(&e), "pair ({i}, {j})");
        }
    }
}

#[test]
fn no_duplicate_or_reversed_pairs() {
    let pts = random_points(200, 3, 8.0);
    let edges = build_edges(&pts, 2.0);
    let mut seen = HashSet::new();
    for e in &edges {
        assert!(e.from < e.to, "edge not normalized: {e:?}");
        assert!(seen.insert((e.from, e.to)), "duplicate edge {e:?}");
        assert!((e.to as usize) < pts.len());
    }
}

#[test]
fn non_positive_threshold_yields_no_edges() {
    let pts = vec![Vec3::ZERO, Vec3::ZERO, Vec3::X];
    assert!(build_edges(&pts, 0.0).is_empty());
    assert!(build_edges(&pts, -1.0).is_empty());
    assert!(build_edges(&pts, f32::NAN).is_empty());
    assert!(build_edges_grid(&pts, 0.0).is_empty());
}

#[test]
fn coincident_points_are_connected() {
    let pts = vec![Vec3::ONE, Vec3::ONE];
    assert_eq!(build_edges(&pts, 0.1), vec![Edge { from: 0, to: 1 }]);
}

#[test]
fn distance_equal_to_threshold_is_excluded() {
    let pts = vec![Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0)];
    assert!(build_edges(&pts, 2.0).is_empty());
    assert_eq!(build_edges(&pts, 2.0001).len(), 1);
}

#[test]
fn empty_and_single_inputs() {
    assert!(build_edges(&[], 5.0).is_empty());
    assert!(build_edges(&[Vec3::ZERO], 5.0).is_empty());
}

#[test]
fn grid_matches_exhaustive() {
    for (n, seed, threshold) in [(300usize, 4u64, 1.5f32), (700, 5, 2.0), (50, 6, 100.0)] {
        let pts = random_points(n, seed, 20.0);
        assert_eq!(
            build_edges_grid(&pts, threshold),
            build_edges_exhaustive(&pts, threshold),
            "n={n} threshold={threshold}"
        );
    }
}

#[test]
fn large_inputs_take_the_grid_path_with_same_result() {
    let pts = random_points(1200, 8, 30.0);
    assert_eq!(build_edges(&pts, 1.2), build_edges_exhaustive(&pts, 1.2));
}

#[test]
fn infinite_threshold_connects_everything() {
    let pts = random_points(6, 9, 4.0);
    assert_eq!(build_edges_grid(&pts, f32::INFINITY).len(), 15);
}

#[test]
fn edges_cast_to_index_bytes() {
    let edges = vec![Edge { from: 1, to: 2 }];
    let bytes: &[u8] = bytemuck::cast_slice(&edges);
    assert_eq!(bytes.len(), 8);
}
