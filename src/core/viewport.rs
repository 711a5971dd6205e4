use super::constants::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, MAX_PIXEL_RATIO};
use super::pointer::{PointerState, TintModulator};
use super::starfield::StarField;
use glam::{Mat4, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio,
        }
    }

    #[inline]
    pub fn pixel_ratio(&self) -> f32 {
        if self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio.min(MAX_PIXEL_RATIO)
        } else {
            1.0
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }

    pub fn backing_size(&self) -> (u32, u32) {
        let pr = self.pixel_ratio();
        let w = (self.width * pr).round().max(1.0) as u32;
        let h = (self.height * pr).round().max(1.0) as u32;
        (w, h)
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn starfield(aspect: f32) -> Self {
        Self {
            eye: Vec3::ZERO,
            target: Vec3::NEG_Z,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[derive(Clone, Debug)]
pub struct Projector {
    viewport: Viewport,
    camera: Camera,
    tint: TintModulator,
}

impl Projector {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            camera: Camera::starfield(viewport.aspect()),
            tint: TintModulator::default(),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn tint(&self) -> [f32; 3] {
        self.tint.color()
    }

    pub fn update_tint(&mut self, pointer: &PointerState, now_ms: f64) -> [f32; 3] {
        self.tint.update(pointer, now_ms)
    }

    /// Adopt `next` and rescale the field from the previous viewport, which
    /// is returned. A zero-size viewport is not adopted, so the next real
    /// size still rescales from the last usable one.
    pub fn apply_resize(&mut self, next: Viewport, field: &mut StarField) -> Viewport {
        let prev = self.viewport;
        if next.is_degenerate() {
            return prev;
        }
        self.viewport = next;
        self.camera.aspect = next.aspect();
        field.rescale(&prev, &next);
        prev
    }
}
