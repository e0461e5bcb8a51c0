use crate::config::{EdgeStyle, FieldConfig, MotionParams, Variant};
use crate::error::Result;
use crate::field::{self, Particle};
use crate::motion::{MotionInterpolator, RenderFrame, SimulationContext};
use crate::topology::{self, Edge};
use rand::Rng;

/// Base data plus the interpolator for one animated background.
///
/// Built once: particles first, then edges from their base positions. After
/// construction both are read-only; [`Scene::frame`] only writes the
/// caller-owned [`RenderFrame`].
#[derive(Clone, Debug)]
pub struct Scene {
    particles: Vec<Particle>,
    edges: Vec<Edge>,
    motion: MotionInterpolator,
}

impl Scene {
    pub fn new<R: Rng + ?Sized>(
        field_config: &FieldConfig,
        motion: MotionParams,
        edge_style: Option<EdgeStyle>,
        rng: &mut R,
    ) -> Result<Self> {
        field_config.validate().map_err(|e| {
            log::warn!("[scene] rejected field config: {e}");
            e
        })?;
        motion.validate().map_err(|e| {
            log::warn!("[scene] rejected motion params: {e}");
            e
        })?;
        if let Some(style) = &edge_style {
            style.validate()?;
        }

        let particles = field::generate(field_config, rng);
        let edges = match &edge_style {
            Some(style) => topology::build_edges(&field::base_positions(&particles), style.threshold),
            None => Vec::new(),
        };
        if !motion.pointer.is_enabled() {
            log::debug!("[scene] pointer interaction disabled");
        }
        log::info!(
            "[scene] ready: {} particles, {} edges",
            particles.len(),
            edges.len()
        );
        Ok(Self {
            particles,
            edges,
            motion: MotionInterpolator::new(motion, edge_style),
        })
    }

    pub fn from_variant<R: Rng + ?Sized>(variant: Variant, rng: &mut R) -> Result<Self> {
        log::debug!("[scene] building variant {}", variant.name());
        Self::new(&variant.field(), variant.motion(), variant.edges(), rng)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn motion(&self) -> &MotionInterpolator {
        &self.motion
    }

    pub fn frame(&self, ctx: &SimulationContext, out: &mut RenderFrame) {
        self.motion.update(&self.particles, &self.edges, ctx, out);
    }

    pub fn new_frame_buffers(&self) -> RenderFrame {
        RenderFrame::with_capacity(self.particles.len(), self.edges.len())
    }
}
