//! Per-frame motion model.
//!
//! Every displayed attribute is a closed-form function of the immutable base
//! data and the current [`SimulationContext`]. Nothing is accumulated between
//! frames, so the same inputs always produce bit-identical buffers.

use crate::config::{EdgeStyle, MotionParams};
use crate::easing::{lerp_rgb, lerp_vec3};
use crate::field::Particle;
use crate::pointer::{PointerState, ScrollProgress};
use crate::topology::Edge;
use glam::{Mat4, Vec2, Vec3};

/// Inputs sampled once per frame and passed by reference into the update.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimulationContext {
    /// Seconds since the animation started.
    pub time: f32,
    pub scroll: ScrollProgress,
    pub pointer: PointerState,
}

impl SimulationContext {
    pub fn new(time: f32, scroll: f32, pointer: PointerState) -> Self {
        Self {
            time,
            scroll: ScrollProgress::new(scroll),
            pointer,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct NodeInstance {
    pub pos: [f32; 3],
    pub scale: f32,
    pub color: [f32; 4],
}

/// One end of a line segment; edges occupy two consecutive vertices.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct EdgeVertex {
    pub pos: [f32; 3],
    pub color: [f32; 4],
}

/// Buffers a renderer consumes each frame. Reused across frames; every call
/// to [`MotionInterpolator::update`] overwrites them completely.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderFrame {
    pub nodes: Vec<NodeInstance>,
    pub edges: Vec<EdgeVertex>,
    /// Whole-field transform to apply on top of the node/edge positions.
    pub model: Mat4,
}

impl Default for RenderFrame {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            model: Mat4::IDENTITY,
        }
    }
}

impl RenderFrame {
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(edges * 2),
            model: Mat4::IDENTITY,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn node_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.nodes)
    }

    pub fn edge_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.edges)
    }
}

/// Displayed state of a single particle for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleFrame {
    pub position: Vec3,
    pub scale: f32,
    pub color: [f32; 3],
    pub influence: f32,
}

/// Linear falloff: 1 at the pointer, 0 at `radius` and beyond. A non-positive
/// radius disables pointer interaction.
#[inline]
pub fn influence_factor(distance: f32, radius: f32) -> f32 {
    if !(radius > 0.0) {
        return 0.0;
    }
    (1.0 - distance / radius).max(0.0)
}

#[derive(Clone, Debug, PartialEq)]
pub struct MotionInterpolator {
    pub params: MotionParams,
    pub edge_style: Option<EdgeStyle>,
}

impl MotionInterpolator {
    pub fn new(params: MotionParams, edge_style: Option<EdgeStyle>) -> Self {
        Self { params, edge_style }
    }

    /// Pointer position mapped into the field's world space (z = 0 plane).
    #[inline]
    pub fn pointer_world(&self, pointer: PointerState) -> Vec2 {
        pointer.as_vec2() * self.params.pointer.world_extent
    }

    /// Influence of the pointer on a world-space point, measured in the XY plane.
    #[inline]
    pub fn influence_at(&self, position: Vec3, pointer_world: Vec2) -> f32 {
        let distance = pointer_world.distance(position.truncate());
        influence_factor(distance, self.params.pointer.radius)
    }

    /// Scroll morph plus oscillation, before the pointer push.
    pub fn resting_position(&self, particle: &Particle, ctx: &SimulationContext) -> Vec3 {
        let s = ctx.scroll.get();
        let morphed = match particle.target_position {
            Some(target) => lerp_vec3(particle.base_position, target, s),
            None => particle.base_position,
        };
        let damping = if self.params.damp_with_scroll {
            1.0 - s
        } else {
            1.0
        };
        let [ox, oy, oz] = self.params.oscillation;
        let wobble = Vec3::new(
            ox.sample(ctx.time, particle.phase),
            oy.sample(ctx.time, particle.phase),
            oz.sample(ctx.time, particle.phase),
        );
        morphed + wobble * damping
    }

    /// The pointer push has magnitude `d·(1 − d/R)·strength`: zero on the
    /// pointer, largest at half the radius, zero again at the radius.
    pub fn particle_frame(&self, particle: &Particle, ctx: &SimulationContext) -> ParticleFrame {
        let resting = self.resting_position(particle, ctx);
        let pointer_world = self.pointer_world(ctx.pointer);
        let influence = self.influence_at(resting, pointer_world);

        let mut position = resting;
        if influence > 0.0 {
            let toward = pointer_world - resting.truncate();
            let push = -toward * influence * self.params.pointer.push_strength;
            position.x += push.x;
            position.y += push.y;
        }

        let scale = match &self.params.pulse {
            Some(p) => {
                let pulse = 1.0 + (ctx.time * p.frequency + particle.phase).sin() * p.amplitude;
                pulse * (1.0 + influence * p.proximity_boost)
            }
            None => 1.0,
        };

        let color = if influence > 0.0 {
            lerp_rgb(particle.color, self.params.accent, influence)
        } else {
            particle.color
        };

        ParticleFrame {
            position,
            scale,
            color,
            influence,
        }
    }

    /// Whole-field rotation for this frame.
    pub fn model_matrix(&self, ctx: &SimulationContext) -> Mat4 {
        match &self.params.rotation {
            Some(r) => {
                let s = ctx.scroll.get();
                Mat4::from_rotation_x(s * r.x_scroll)
                    * Mat4::from_rotation_y(ctx.time * r.y_rate + s * r.y_scroll)
            }
            None => Mat4::IDENTITY,
        }
    }

    /// Recompute every node and edge vertex into `out`.
    ///
    /// Edges reuse the transformed endpoint positions, then take their colour
    /// from the pointer influence at the segment midpoint. Edges whose indices
    /// fall outside `particles` are skipped.
    pub fn update(
        &self,
        particles: &[Particle],
        edges: &[Edge],
        ctx: &SimulationContext,
        out: &mut RenderFrame,
    ) {
        out.nodes.clear();
        out.edges.clear();
        out.model = self.model_matrix(ctx);

        let opacity = self.params.opacity;
        out.nodes.extend(particles.iter().map(|p| {
            let f = self.particle_frame(p, ctx);
            NodeInstance {
                pos: f.position.to_array(),
                scale: f.scale,
                color: [f.color[0], f.color[1], f.color[2], opacity],
            }
        }));

        let Some(style) = &self.edge_style else {
            return;
        };
        let pointer_world = self.pointer_world(ctx.pointer);
        for edge in edges {
            let (a, b) = edge.indices();
            let (Some(na), Some(nb)) = (out.nodes.get(a), out.nodes.get(b)) else {
                continue;
            };
            let pa = Vec3::from_array(na.pos);
            let pb = Vec3::from_array(nb.pos);
            let glow = self.influence_at((pa + pb) * 0.5, pointer_world);
            let rgb = lerp_rgb(style.color, style.accent, glow);
            let color = [rgb[0], rgb[1], rgb[2], style.opacity];
            out.edges.push(EdgeVertex {
                pos: pa.to_array(),
                color,
            });
            out.edges.push(EdgeVertex {
                pos: pb.to_array(),
                color,
            });
        }
    }

    /// Allocating convenience wrapper around [`update`](Self::update).
    pub fn compute(&self, particles: &[Particle], edges: &[Edge], ctx: &SimulationContext) -> RenderFrame {
        let mut out = RenderFrame::with_capacity(particles.len(), edges.len());
        self.update(particles, edges, ctx, &mut out);
        out
    }
}
