use crate::color::{css_rgba, fog_factor, with_alpha};
use crate::constants::*;
use crate::projection::{Camera, Projector};
use backdrop_core::config::Variant;
use backdrop_core::{RenderFrame, SplashFrame};
use glam::Vec3;
use std::f64::consts::TAU;
use web_sys as web;

/// How particles of one variant are drawn.
#[derive(Clone, Copy, Debug)]
pub struct SpriteStyle {
    pub radius: f32,
    pub fog: bool,
}

impl SpriteStyle {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Neural => Self {
                radius: NODE_RADIUS,
                fog: false,
            },
            Variant::Galaxy => Self {
                radius: GALAXY_POINT_RADIUS,
                fog: true,
            },
        }
    }
}

/// CSS-pixel surface of a canvas whose backing store is scaled by `dpr`.
#[derive(Clone, Copy, Debug)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

impl Surface {
    pub fn of(canvas: &web::HtmlCanvasElement) -> Self {
        let dpr = web::window()
            .map(|w| w.device_pixel_ratio())
            .filter(|d| *d > 0.0)
            .unwrap_or(1.0);
        Self {
            width: canvas.width() as f64 / dpr,
            height: canvas.height() as f64 / dpr,
            dpr,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    fn begin(&self, ctx: &web::CanvasRenderingContext2d) {
        _ = ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0);
        ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }
}

pub fn draw_scene(
    ctx: &web::CanvasRenderingContext2d,
    surface: Surface,
    camera: &Camera,
    sprite: SpriteStyle,
    frame: &RenderFrame,
) {
    let Some(projector) =
        Projector::new(camera, frame.model, surface.width as f32, surface.height as f32)
    else {
        return;
    };
    surface.begin(ctx);

    ctx.set_line_width(EDGE_LINE_WIDTH);
    for pair in frame.edges.chunks_exact(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let (Some(pa), Some(pb)) = (
            projector.project(Vec3::from(a.pos)),
            projector.project(Vec3::from(b.pos)),
        ) else {
            continue;
        };
        let color = std::array::from_fn(|i| (a.color[i] + b.color[i]) * 0.5);
        ctx.set_stroke_style_str(&css_rgba(color));
        ctx.begin_path();
        ctx.move_to(pa.x as f64, pa.y as f64);
        ctx.line_to(pb.x as f64, pb.y as f64);
        ctx.stroke();
    }

    for node in &frame.nodes {
        let Some(p) = projector.project(Vec3::from(node.pos)) else {
            continue;
        };
        let fade = if sprite.fog {
            fog_factor(p.depth, FOG_NEAR, FOG_FAR)
        } else {
            1.0
        };
        if fade <= 0.0 {
            continue;
        }
        let radius = (sprite.radius * node.scale * p.px_per_unit) as f64;
        ctx.set_fill_style_str(&css_rgba(with_alpha(node.color, fade)));
        ctx.begin_path();
        _ = ctx.arc(p.x as f64, p.y as f64, radius.max(MIN_SPRITE_PX), 0.0, TAU);
        ctx.fill();
    }
}

pub fn draw_splash(ctx: &web::CanvasRenderingContext2d, surface: Surface, frame: &SplashFrame) {
    if surface.is_empty() {
        return;
    }
    surface.begin(ctx);
    ctx.set_global_alpha(frame.screen_opacity.clamp(0.0, 1.0) as f64);
    ctx.set_fill_style_str(&css_rgba(SPLASH_BACKGROUND));
    ctx.fill_rect(0.0, 0.0, surface.width, surface.height);

    ctx.set_line_width(SPLASH_LINE_WIDTH);
    for line in &frame.edges {
        ctx.set_stroke_style_str(&css_rgba(line.color));
        ctx.begin_path();
        ctx.move_to(line.from.x as f64, line.from.y as f64);
        ctx.line_to(line.to.x as f64, line.to.y as f64);
        ctx.stroke();
    }

    for dot in frame.nodes.iter().chain(&frame.signals) {
        let (x, y, r) = (dot.pos.x as f64, dot.pos.y as f64, dot.radius as f64);
        if dot.glow_alpha > 0.0 {
            let [cr, cg, cb, _] = dot.color;
            ctx.set_fill_style_str(&css_rgba([cr, cg, cb, dot.glow_alpha]));
            ctx.begin_path();
            _ = ctx.arc(x, y, r * SPLASH_GLOW_SCALE, 0.0, TAU);
            ctx.fill();
        }
        ctx.set_fill_style_str(&css_rgba(dot.color));
        ctx.begin_path();
        _ = ctx.arc(x, y, r.max(MIN_SPRITE_PX), 0.0, TAU);
        ctx.fill();
    }
    ctx.set_global_alpha(1.0);
}
