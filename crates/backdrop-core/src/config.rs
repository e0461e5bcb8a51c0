//! Typed configuration for the backdrop variants.
//!
//! Each variant is a matched triple of [`FieldConfig`] (how particles are laid
//! out), [`MotionParams`] (how they move every frame) and an optional
//! [`EdgeStyle`] (whether and how the node graph is drawn). Front ends pick a
//! [`Variant`] by name and never touch the individual numbers.

use crate::constants::*;
use crate::error::{ConfigError, Result};
use glam::{Vec2, Vec3};
use std::str::FromStr;

/// Axis-aligned box centred on the origin, given by its full side lengths.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxExtent(pub Vec3);

impl BoxExtent {
    pub fn validate(&self) -> Result<()> {
        ConfigError::check("extent.x", self.0.x)?;
        ConfigError::check("extent.y", self.0.y)?;
        ConfigError::check("extent.z", self.0.z)
    }
}

/// Second layout a particle morphs into as the page scrolls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TargetLayout {
    /// Flat spiral disc in the XZ plane.
    SpiralDisc {
        radius: f32,
        thickness: f32,
        twist: f32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorScheme {
    /// Every particle gets the same tint.
    Fixed([f32; 3]),
    /// Per-particle random blend between two colours.
    Blend([f32; 3], [f32; 3]),
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub count: usize,
    pub scatter: BoxExtent,
    pub target: Option<TargetLayout>,
    pub colors: ColorScheme,
}

impl FieldConfig {
    pub fn neural() -> Self {
        Self {
            count: NEURAL_NODE_COUNT,
            scatter: BoxExtent(Vec3::from_array(NEURAL_EXTENT)),
            target: None,
            colors: ColorScheme::Fixed(NEURAL_NODE_COLOR),
        }
    }

    pub fn galaxy() -> Self {
        Self {
            count: GALAXY_PARTICLE_COUNT,
            scatter: BoxExtent(Vec3::from_array(GALAXY_EXTENT)),
            target: Some(TargetLayout::SpiralDisc {
                radius: GALAXY_DISC_RADIUS,
                thickness: GALAXY_DISC_THICKNESS,
                twist: GALAXY_SPIRAL_TWIST,
            }),
            colors: ColorScheme::Blend(BRAND_CYAN, BRAND_AMBER),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.scatter.validate()?;
        if let Some(TargetLayout::SpiralDisc {
            radius,
            thickness,
            twist,
        }) = self.target
        {
            ConfigError::check("target.radius", radius)?;
            ConfigError::check("target.thickness", thickness)?;
            if !twist.is_finite() {
                return Err(ConfigError::NegativeOrNonFinite {
                    field: "target.twist",
                    value: twist,
                });
            }
        }
        Ok(())
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::neural()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Wave {
    Sin,
    Cos,
}

/// `amplitude * wave(time * frequency + phase * phase_scale)` on one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oscillator {
    pub wave: Wave,
    pub amplitude: f32,
    pub frequency: f32,
    pub phase_scale: f32,
}

impl Oscillator {
    pub const OFF: Self = Self {
        wave: Wave::Sin,
        amplitude: 0.0,
        frequency: 0.0,
        phase_scale: 0.0,
    };

    pub const fn sin(amplitude: f32, frequency: f32, phase_scale: f32) -> Self {
        Self {
            wave: Wave::Sin,
            amplitude,
            frequency,
            phase_scale,
        }
    }

    pub const fn cos(amplitude: f32, frequency: f32, phase_scale: f32) -> Self {
        Self {
            wave: Wave::Cos,
            amplitude,
            frequency,
            phase_scale,
        }
    }

    #[inline]
    pub fn sample(&self, time: f32, phase: f32) -> f32 {
        if self.amplitude == 0.0 {
            return 0.0;
        }
        let arg = time * self.frequency + phase * self.phase_scale;
        let w = match self.wave {
            Wave::Sin => arg.sin(),
            Wave::Cos => arg.cos(),
        };
        w * self.amplitude
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerParams {
    /// Scales normalized pointer coordinates into world space.
    pub world_extent: Vec2,
    /// Influence falls linearly to zero at this XY distance. `<= 0` disables it.
    pub radius: f32,
    pub push_strength: f32,
}

impl PointerParams {
    pub const DISABLED: Self = Self {
        world_extent: Vec2::ZERO,
        radius: 0.0,
        push_strength: 0.0,
    };

    pub fn is_enabled(&self) -> bool {
        self.radius > 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseParams {
    pub frequency: f32,
    pub amplitude: f32,
    pub proximity_boost: f32,
}

/// Whole-field rotation, emitted as a model matrix rather than baked into
/// particle positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationParams {
    pub y_rate: f32,
    pub y_scroll: f32,
    pub x_scroll: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionParams {
    pub oscillation: [Oscillator; 3],
    /// Fade the oscillation out as scroll progress approaches 1.
    pub damp_with_scroll: bool,
    pub pointer: PointerParams,
    pub pulse: Option<PulseParams>,
    pub rotation: Option<RotationParams>,
    /// Colour particles blend toward at full pointer influence.
    pub accent: [f32; 3],
    pub opacity: f32,
}

impl MotionParams {
    pub fn neural() -> Self {
        let (ax, fx, sx) = NEURAL_FLOAT_X;
        let (ay, fy, sy) = NEURAL_FLOAT_Y;
        Self {
            oscillation: [
                Oscillator::cos(ax, fx, sx),
                Oscillator::sin(ay, fy, sy),
                Oscillator::OFF,
            ],
            damp_with_scroll: false,
            pointer: PointerParams {
                world_extent: NEURAL_POINTER_EXTENT,
                radius: NEURAL_POINTER_RADIUS,
                push_strength: NEURAL_PUSH_STRENGTH,
            },
            pulse: Some(PulseParams {
                frequency: NEURAL_PULSE_FREQUENCY,
                amplitude: NEURAL_PULSE_AMPLITUDE,
                proximity_boost: NEURAL_PROXIMITY_BOOST,
            }),
            rotation: None,
            accent: NEURAL_NODE_ACCENT,
            opacity: NEURAL_NODE_OPACITY,
        }
    }

    pub fn galaxy() -> Self {
        let (amp, freq) = GALAXY_WOBBLE;
        let wobble = Oscillator::sin(amp, freq, 1.0);
        Self {
            oscillation: [wobble; 3],
            damp_with_scroll: true,
            pointer: PointerParams::DISABLED,
            pulse: None,
            rotation: Some(RotationParams {
                y_rate: GALAXY_SPIN_RATE,
                y_scroll: GALAXY_SCROLL_SPIN,
                x_scroll: GALAXY_SCROLL_TILT,
            }),
            accent: BRAND_AMBER,
            opacity: GALAXY_OPACITY,
        }
    }

    pub fn validate(&self) -> Result<()> {
        ConfigError::check("pointer.world_extent.x", self.pointer.world_extent.x)?;
        ConfigError::check("pointer.world_extent.y", self.pointer.world_extent.y)?;
        ConfigError::check("pointer.push_strength", self.pointer.push_strength)?;
        if !self.pointer.radius.is_finite() {
            return Err(ConfigError::NegativeOrNonFinite {
                field: "pointer.radius",
                value: self.pointer.radius,
            });
        }
        for osc in &self.oscillation {
            ConfigError::check("oscillation.amplitude", osc.amplitude)?;
        }
        if let Some(p) = &self.pulse {
            ConfigError::check("pulse.amplitude", p.amplitude)?;
            ConfigError::check("pulse.proximity_boost", p.proximity_boost)?;
        }
        ConfigError::check("opacity", self.opacity)
    }
}

impl Default for MotionParams {
    fn default() -> Self {
        Self::neural()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeStyle {
    pub threshold: f32,
    pub color: [f32; 3],
    pub accent: [f32; 3],
    pub opacity: f32,
}

impl EdgeStyle {
    pub fn neural() -> Self {
        Self {
            threshold: NEURAL_EDGE_THRESHOLD,
            color: NEURAL_EDGE_COLOR,
            accent: NEURAL_EDGE_ACCENT,
            opacity: NEURAL_EDGE_OPACITY,
        }
    }

    pub fn validate(&self) -> Result<()> {
        // A zero or negative threshold is valid and simply yields no edges.
        if self.threshold.is_nan() {
            return Err(ConfigError::NegativeOrNonFinite {
                field: "edges.threshold",
                value: self.threshold,
            });
        }
        ConfigError::check("edges.opacity", self.opacity)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    /// Sparse node-link graph that reacts to the pointer.
    #[default]
    Neural,
    /// Dense point cloud that morphs into a spiral disc on scroll.
    Galaxy,
}

impl Variant {
    pub fn field(self) -> FieldConfig {
        match self {
            Variant::Neural => FieldConfig::neural(),
            Variant::Galaxy => FieldConfig::galaxy(),
        }
    }

    pub fn motion(self) -> MotionParams {
        match self {
            Variant::Neural => MotionParams::neural(),
            Variant::Galaxy => MotionParams::galaxy(),
        }
    }

    pub fn edges(self) -> Option<EdgeStyle> {
        match self {
            Variant::Neural => Some(EdgeStyle::neural()),
            Variant::Galaxy => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Neural => "neural",
            Variant::Galaxy => "galaxy",
        }
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "neural" | "network" | "graph" => Ok(Variant::Neural),
            "galaxy" | "morph" => Ok(Variant::Galaxy),
            other => Err(ConfigError::UnknownVariant(other.to_string())),
        }
    }
}
