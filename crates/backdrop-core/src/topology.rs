//! Static node-link topology.
//!
//! Edges join every unordered pair of particles whose base positions are
//! closer than a threshold. They are computed once after generation and never
//! re-derived while animating.

use crate::constants::GRID_EDGE_CUTOFF;
use fnv::FnvHashMap;
use glam::Vec3;
use smallvec::SmallVec;

/// Connection between two particle indices, always stored with `from < to`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Edge {
    pub from: u32,
    pub to: u32,
}

impl Edge {
    #[inline]
    pub fn indices(&self) -> (usize, usize) {
        (self.from as usize, self.to as usize)
    }
}

/// All pairs closer than `threshold`, ordered by `(from, to)`.
///
/// Small inputs use the exhaustive check; larger ones bucket points into a
/// grid first. Both produce identical output.
pub fn build_edges(positions: &[Vec3], threshold: f32) -> Vec<Edge> {
    let edges = if positions.len() > GRID_EDGE_CUTOFF {
        build_edges_grid(positions, threshold)
    } else {
        build_edges_exhaustive(positions, threshold)
    };
    log::debug!(
        "[topology] {} nodes, threshold {:.2} -> {} edges",
        positions.len(),
        threshold,
        edges.len()
    );
    edges
}

/// O(n²) pairwise distance check.
pub fn build_edges_exhaustive(positions: &[Vec3], threshold: f32) -> Vec<Edge> {
    let mut edges = Vec::new();
    if !(threshold > 0.0) {
        return edges;
    }
    for (i, a) in positions.iter().enumerate() {
        for (j, b) in positions.iter().enumerate().skip(i + 1) {
            if a.distance(*b) < threshold {
                edges.push(Edge {
                    from: i as u32,
                    to: j as u32,
                });
            }
        }
    }
    edges
}

type CellKey = (i32, i32, i32);

#[inline]
fn cell_of(p: Vec3, cell: f32) -> CellKey {
    let c = (p / cell).floor();
    (c.x as i32, c.y as i32, c.z as i32)
}

/// Uniform grid with cell size equal to `threshold`; only the 27 cells around
/// a point can hold neighbours closer than the threshold.
pub fn build_edges_grid(positions: &[Vec3], threshold: f32) -> Vec<Edge> {
    if !(threshold > 0.0) {
        return Vec::new();
    }
    if threshold.is_infinite() {
        return build_edges_exhaustive(positions, threshold);
    }

    let mut edges = Vec::new();
    let mut grid: FnvHashMap<CellKey, SmallVec<[u32; 8]>> = FnvHashMap::default();
    for (i, p) in positions.iter().enumerate() {
        grid.entry(cell_of(*p, threshold)).or_default().push(i as u32);
    }

    for (i, p) in positions.iter().enumerate() {
        let (cx, cy, cz) = cell_of(*p, threshold);
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let Some(bucket) = grid.get(&(
                        cx.saturating_add(dx),
                        cy.saturating_add(dy),
                        cz.saturating_add(dz),
                    )) else {
                        continue;
                    };
                    for &j in bucket {
                        if (j as usize) > i && p.distance(positions[j as usize]) < threshold {
                            edges.push(Edge {
                                from: i as u32,
                                to: j,
                            });
                        }
                    }
                }
            }
        }
    }
    edges.sort_unstable();
    // saturated cell keys at the i32 limits can alias a neighbour cell
    edges.dedup();
    edges
}
