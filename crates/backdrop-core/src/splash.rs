//! Canvas splash: a small layered network assembles itself, a progress
//! counter runs to 100, then the whole screen dissolves.
//!
//! Drawing state is a pure function of elapsed time ([`NetworkSplash::frame`]);
//! only the completion hook and the cancelled flag are stateful.

use crate::constants::*;
use crate::easing::{ease_out_cubic, lerp, progress};
use crate::error::{ConfigError, Result};
use crate::timer::CompletionHook;
use crate::topology::Edge;
use glam::Vec2;
use rand::Rng;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct NetworkSplashConfig {
    /// Node count per layer, left to right.
    pub layers: Vec<usize>,
    pub build: Duration,
    pub dissolve: Duration,
    pub scatter_px: f32,
    pub edge_probability: f64,
    pub signal_period: Duration,
    pub signal_every: usize,
}

impl Default for NetworkSplashConfig {
    fn default() -> Self {
        Self {
            layers: SPLASH_LAYERS.to_vec(),
            build: Duration::from_millis(SPLASH_BUILD_MS),
            dissolve: Duration::from_millis(SPLASH_DISSOLVE_MS),
            scatter_px: SPLASH_SCATTER_PX,
            edge_probability: SPLASH_EDGE_PROBABILITY,
            signal_period: Duration::from_millis(SPLASH_SIGNAL_PERIOD_MS),
            signal_every: SPLASH_SIGNAL_EVERY,
        }
    }
}

impl NetworkSplashConfig {
    pub fn validate(&self) -> Result<()> {
        if self.layers.is_empty() {
            return Err(ConfigError::Empty { field: "layers" });
        }
        ConfigError::check_interval("build", self.build)?;
        ConfigError::check_interval("signal_period", self.signal_period)?;
        ConfigError::check("scatter_px", self.scatter_px)?;
        ConfigError::check_probability("edge_probability", self.edge_probability)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplashNode {
    pub start: Vec2,
    pub target: Vec2,
    pub radius: f32,
    pub layer: usize,
    /// First or last layer; drawn amber instead of blue.
    pub outer: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SplashNetwork {
    pub nodes: Vec<SplashNode>,
    pub edges: Vec<Edge>,
}

/// Lay the layers out evenly across a `width` × `height` surface (CSS
/// pixels). A zero-sized surface gives an empty network.
pub fn build_network<R: Rng + ?Sized>(
    config: &NetworkSplashConfig,
    width: f32,
    height: f32,
    rng: &mut R,
) -> Result<SplashNetwork> {
    config.validate().map_err(|e| {
        log::warn!("[splash] rejected config: {e}");
        e
    })?;
    let mut network = SplashNetwork::default();
    if !(width > 0.0 && height > 0.0) {
        log::debug!("[splash] zero-sized surface, skipping network");
        return Ok(network);
    }
    let layer_count = config.layers.len();
    let layer_spacing = width / (layer_count + 1) as f32;
    let center = Vec2::new(width / 2.0, height / 2.0);

    for (l, &count) in config.layers.iter().enumerate() {
        let vertical_spacing = height / (count + 1) as f32;
        let outer = l == 0 || l + 1 == layer_count;
        for n in 0..count {
            let jitter = Vec2::new(rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5);
            network.nodes.push(SplashNode {
                start: center + jitter * config.scatter_px,
                target: Vec2::new(
                    layer_spacing * (l + 1) as f32,
                    vertical_spacing * (n + 1) as f32,
                ),
                radius: if outer {
                    SPLASH_OUTER_RADIUS
                } else {
                    SPLASH_INNER_RADIUS
                },
                layer: l,
                outer,
            });
        }
    }

    let mut layer_start = 0usize;
    for pair in config.layers.windows(2) {
        let (cur, next) = (pair[0], pair[1]);
        let next_start = layer_start + cur;
        for i in 0..cur {
            for j in 0..next {
                if rng.gen_bool(config.edge_probability) {
                    network.edges.push(Edge {
                        from: (layer_start + i) as u32,
                        to: (next_start + j) as u32,
                    });
                }
            }
        }
        layer_start = next_start;
    }
    Ok(network)
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SplashDot {
    pub pos: Vec2,
    pub radius: f32,
    pub color: [f32; 4],
    /// Alpha of the soft halo drawn at three times the radius.
    pub glow_alpha: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SplashLine {
    pub from: Vec2,
    pub to: Vec2,
    pub color: [f32; 4],
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SplashFrame {
    pub progress_percent: u32,
    pub title_opacity: f32,
    pub screen_opacity: f32,
    pub nodes: Vec<SplashDot>,
    pub edges: Vec<SplashLine>,
    pub signals: Vec<SplashDot>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplashPhase {
    Building,
    Dissolving,
    Finished,
    Cancelled,
}

#[derive(Debug)]
pub struct NetworkSplash {
    config: NetworkSplashConfig,
    network: SplashNetwork,
    on_complete: CompletionHook,
    phase: SplashPhase,
}

impl NetworkSplash {
    pub fn new(
        config: NetworkSplashConfig,
        network: SplashNetwork,
        on_complete: CompletionHook,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            network,
            on_complete,
            phase: SplashPhase::Building,
        })
    }

    pub fn network(&self) -> &SplashNetwork {
        &self.network
    }

    pub fn phase(&self) -> SplashPhase {
        self.phase
    }

    pub fn total(&self) -> Duration {
        self.config.build + self.config.dissolve
    }

    /// Update the phase for `elapsed`; fires the completion hook once the
    /// dissolve has run out.
    pub fn tick(&mut self, elapsed: Duration) -> SplashPhase {
        if matches!(self.phase, SplashPhase::Finished | SplashPhase::Cancelled) {
            return self.phase;
        }
        self.phase = if elapsed >= self.total() {
            self.on_complete.fire();
            log::info!("[splash] finished");
            SplashPhase::Finished
        } else if elapsed >= self.config.build {
            SplashPhase::Dissolving
        } else {
            SplashPhase::Building
        };
        self.phase
    }

    pub fn cancel(&mut self) {
        if self.phase != SplashPhase::Finished {
            self.on_complete.disarm();
            self.phase = SplashPhase::Cancelled;
        }
    }

    /// Drawing state at `elapsed`, written into `out`.
    pub fn frame(&self, elapsed: Duration, out: &mut SplashFrame) {
        let cfg = &self.config;
        let t = progress(elapsed, cfg.build);

        out.progress_percent = (t * 100.0).floor() as u32;
        out.title_opacity = ((t - 0.3) / 0.3).clamp(0.0, 1.0);
        out.screen_opacity = if elapsed > cfg.build {
            1.0 - progress(elapsed - cfg.build, cfg.dissolve)
        } else {
            1.0
        };

        let settle = ease_out_cubic((t * 1.25).min(1.0));
        let node_opacity = (t * 3.0).min(1.0);
        out.nodes.clear();
        out.nodes.extend(self.network.nodes.iter().map(|n| {
            let (rgb, alpha, glow) = if n.outer {
                (SPLASH_AMBER, 0.9, 0.15)
            } else {
                (SPLASH_BLUE, 0.7, 0.1)
            };
            SplashDot {
                pos: n.start.lerp(n.target, settle),
                radius: n.radius,
                color: [rgb[0], rgb[1], rgb[2], node_opacity * alpha],
                glow_alpha: node_opacity * glow,
            }
        }));

        let reach = (t * 2.0).min(1.0);
        let edge_alpha = (t * 2.5).min(0.3);
        out.edges.clear();
        out.signals.clear();
        let pulse = if cfg.signal_period.is_zero() {
            0.0
        } else {
            (elapsed.as_secs_f64() / cfg.signal_period.as_secs_f64()).fract() as f32
        };
        for (i, edge) in self.network.edges.iter().enumerate() {
            let (a, b) = edge.indices();
            let (Some(from), Some(to)) = (out.nodes.get(a), out.nodes.get(b)) else {
                continue;
            };
            let (from, to) = (from.pos, to.pos);
            if reach > 0.0 {
                out.edges.push(SplashLine {
                    from,
                    to: from.lerp(to, reach),
                    color: [SPLASH_AMBER[0], SPLASH_AMBER[1], SPLASH_AMBER[2], edge_alpha],
                });
            }
            if t > 0.4 && cfg.signal_every > 0 && i % cfg.signal_every == 0 {
                out.signals.push(SplashDot {
                    pos: Vec2::new(lerp(from.x, to.x, pulse), lerp(from.y, to.y, pulse)),
                    radius: 1.5,
                    color: [SPLASH_AMBER[0], SPLASH_AMBER[1], SPLASH_AMBER[2], 0.6 * (1.0 - pulse)],
                    glow_alpha: 0.0,
                });
            }
        }
    }
}

impl Drop for NetworkSplash {
    fn drop(&mut self) {
        self.cancel();
    }
}
