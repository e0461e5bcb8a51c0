//! Host inputs sampled by the interpolator: pointer position and scroll
//! progress. Both are plain values owned by the host and handed in each frame.

use glam::Vec2;

/// Pointer position in normalized device coordinates: origin at the centre,
/// both axes in `[-1, 1]`, +Y up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub const CENTER: Self = Self { x: 0.0, y: 0.0 };

    /// Clamped constructor; non-finite components fall back to the centre.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: clamp_ndc(x),
            y: clamp_ndc(y),
        }
    }

    /// Map a pointer position in device pixels (origin top-left, +Y down) on a
    /// `width` × `height` viewport. A zero-sized viewport yields the centre.
    pub fn from_client(client_x: f32, client_y: f32, width: f32, height: f32) -> Self {
        if !(width > 0.0 && height > 0.0) {
            return Self::CENTER;
        }
        Self::new(
            (client_x / width) * 2.0 - 1.0,
            -((client_y / height) * 2.0 - 1.0),
        )
    }

    /// Overwrite with a new client position, as a pointer-move handler does.
    pub fn update_from_client(&mut self, client_x: f32, client_y: f32, width: f32, height: f32) {
        *self = Self::from_client(client_x, client_y, width, height);
    }

    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[inline]
fn clamp_ndc(v: f32) -> f32 {
    if v.is_finite() {
        v.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

/// Page scroll position normalized to `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct ScrollProgress(f32);

impl ScrollProgress {
    pub const TOP: Self = Self(0.0);
    pub const BOTTOM: Self = Self(1.0);

    pub fn new(v: f32) -> Self {
        if v.is_finite() {
            Self(v.clamp(0.0, 1.0))
        } else {
            Self::TOP
        }
    }

    /// Progress from a scroll offset. Pages that cannot scroll report 0.
    pub fn from_offset(scroll_y: f32, scroll_height: f32, viewport_height: f32) -> Self {
        let range = scroll_height - viewport_height;
        if !(range > 0.0) {
            return Self::TOP;
        }
        Self::new(scroll_y / range)
    }

    #[inline]
    pub fn get(self) -> f32 {
        self.0
    }
}
