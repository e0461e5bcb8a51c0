use crate::config::{ColorScheme, FieldConfig, TargetLayout};
use crate::easing::lerp_rgb;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// One point of the animated field. Immutable once generated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub base_position: Vec3,
    /// Layout the particle morphs toward as scroll progress goes to 1.
    pub target_position: Option<Vec3>,
    pub color: [f32; 3],
    /// Desynchronizes oscillation; always in `[0, 2π)`.
    pub phase: f32,
}

/// Sample `config.count` particles from `rng`.
///
/// The random source is a parameter so callers can seed it; the same seed and
/// config always give the same field.
pub fn generate<R: Rng + ?Sized>(config: &FieldConfig, rng: &mut R) -> Vec<Particle> {
    let half = config.scatter.0 * 0.5;
    let particles = (0..config.count)
        .map(|_| {
            let base_position = Vec3::new(
                symmetric(rng, half.x),
                symmetric(rng, half.y),
                symmetric(rng, half.z),
            );
            let target_position = config.target.map(|t| sample_target(&t, rng));
            let color = match config.colors {
                ColorScheme::Fixed(c) => c,
                ColorScheme::Blend(a, b) => lerp_rgb(a, b, rng.gen::<f32>()),
            };
            Particle {
                base_position,
                target_position,
                color,
                phase: rng.gen_range(0.0..TAU),
            }
        })
        .collect::<Vec<_>>();
    log::debug!(
        "[field] generated {} particles (morph target: {})",
        particles.len(),
        config.target.is_some()
    );
    particles
}

/// Uniform in `[-half, half)`; a zero half-extent collapses the axis.
#[inline]
fn symmetric<R: Rng + ?Sized>(rng: &mut R, half: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * 2.0 * half
}

fn sample_target<R: Rng + ?Sized>(layout: &TargetLayout, rng: &mut R) -> Vec3 {
    match *layout {
        TargetLayout::SpiralDisc {
            radius,
            thickness,
            twist,
        } => {
            let r = rng.gen::<f32>() * radius;
            let theta = rng.gen::<f32>() * TAU;
            let angle = theta + r * twist;
            Vec3::new(
                angle.cos() * r,
                symmetric(rng, thickness * 0.5),
                angle.sin() * r,
            )
        }
    }
}

/// Base positions in particle order, the input the topology builder expects.
pub fn base_positions(particles: &[Particle]) -> Vec<Vec3> {
    particles.iter().map(|p| p.base_position).collect()
}
