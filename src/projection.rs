use crate::constants::*;
use backdrop_core::config::Variant;
use glam::{Mat4, Vec3, Vec4};

/// Right-handed perspective camera on the +Z axis looking at the origin.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn for_variant(variant: Variant) -> Self {
        let (z, fov_deg) = match variant {
            Variant::Neural => (NEURAL_CAMERA_Z, NEURAL_FOV_DEG),
            Variant::Galaxy => (GALAXY_CAMERA_Z, GALAXY_FOV_DEG),
        };
        Self {
            eye: Vec3::new(0.0, 0.0, z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fovy_radians: fov_deg.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, aspect, self.znear, self.zfar)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    /// CSS pixels from the top-left corner.
    pub x: f32,
    pub y: f32,
    /// Distance in front of the camera along its view axis.
    pub depth: f32,
    /// CSS pixels per world unit at this depth.
    pub px_per_unit: f32,
}

/// World to screen mapping for one frame at a fixed surface size.
#[derive(Clone, Debug)]
pub struct Projector {
    clip_from_local: Mat4,
    width: f32,
    height: f32,
    focal_px: f32,
}

impl Projector {
    /// `None` for a zero-sized surface.
    pub fn new(camera: &Camera, model: Mat4, width: f32, height: f32) -> Option<Self> {
        if !(width > 0.0 && height > 0.0) {
            return None;
        }
        let clip_from_local =
            camera.projection_matrix(width / height) * camera.view_matrix() * model;
        let focal_px = (height * 0.5) / (camera.fovy_radians * 0.5).tan();
        Some(Self {
            clip_from_local,
            width,
            height,
            focal_px,
        })
    }

    /// `None` behind the camera or outside the near/far range.
    pub fn project(&self, local: Vec3) -> Option<ScreenPoint> {
        let clip = self.clip_from_local * Vec4::new(local.x, local.y, local.z, 1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        if !(0.0..=1.0).contains(&ndc.z) {
            return None;
        }
        Some(ScreenPoint {
            x: (ndc.x * 0.5 + 0.5) * self.width,
            y: (0.5 - ndc.y * 0.5) * self.height,
            depth: clip.w,
            px_per_unit: self.focal_px / clip.w,
        })
    }
}
