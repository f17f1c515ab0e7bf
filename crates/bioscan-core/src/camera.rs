//! Perspective orbit camera with damped rotation and the saved initial view.

use crate::config::CameraParams;
use crate::ray::Ray;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Eye and orbit target captured once after the model loads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub eye: Vec3,
    pub target: Vec3,
}

/// Keeps the polar angle away from the poles so `look_at` stays defined.
const POLAR_EPSILON: f32 = 1e-3;
const SETTLE_EPSILON: f32 = 1e-5;

#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
    pub auto_rotate: bool,
    min_distance: f32,
    max_distance: f32,
    damping: f32,
    auto_rotate_speed: f32,
    pending_theta: f32,
    pending_phi: f32,
    pending_zoom: f32,
}

impl OrbitCamera {
    pub fn new(params: &CameraParams, aspect: f32) -> Self {
        Self {
            eye: params.start_eye,
            target: params.start_target,
            up: Vec3::Y,
            aspect,
            fovy_radians: params.fovy_radians,
            znear: params.znear,
            zfar: params.zfar,
            auto_rotate: false,
            min_distance: params.min_distance,
            max_distance: params.max_distance,
            damping: params.damping,
            auto_rotate_speed: params.auto_rotate_speed,
            pending_theta: 0.0,
            pending_phi: 0.0,
            pending_zoom: 1.0,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    /// World-space ray through normalised device coordinates (-1..1, y up).
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_proj().inverse();
        let far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let far = far.truncate() / far.w;
        Ray::new(self.eye, far - self.eye)
    }

    /// Project a world point to NDC; `None` when it is behind the camera.
    pub fn project(&self, point: Vec3) -> Option<Vec3> {
        let clip = self.view_proj() * point.extend(1.0);
        (clip.w > 0.0).then(|| clip.truncate() / clip.w)
    }

    /// Project a world point to pixel coordinates in a `width` x `height` view.
    pub fn project_to_screen(&self, point: Vec3, width: f32, height: f32) -> Option<Vec2> {
        self.project(point).map(|ndc| {
            Vec2::new(
                (ndc.x * 0.5 + 0.5) * width,
                (-ndc.y * 0.5 + 0.5) * height,
            )
        })
    }

    pub fn snapshot(&self) -> ViewState {
        ViewState {
            eye: self.eye,
            target: self.target,
        }
    }

    /// Jump to `view` and drop any rotation still being damped out.
    pub fn restore(&mut self, view: ViewState) {
        self.eye = view.eye;
        self.target = view.target;
        self.pending_theta = 0.0;
        self.pending_phi = 0.0;
        self.pending_zoom = 1.0;
    }

    /// Queue a rotation around the target, in radians.
    pub fn orbit(&mut self, d_theta: f32, d_phi: f32) {
        self.pending_theta += d_theta;
        self.pending_phi += d_phi;
    }

    /// Queue a dolly; factors below 1 move closer.
    pub fn zoom(&mut self, factor: f32) {
        if factor.is_finite() && factor > 0.0 {
            self.pending_zoom *= factor;
        }
    }

    /// Advance damping and auto-rotation by one frame.
    pub fn update(&mut self, dt_sec: f32) {
        if self.auto_rotate {
            self.pending_theta -= self.auto_rotate_speed * dt_sec.max(0.0);
        }
        let k = self.damping.clamp(0.0, 1.0);
        let d_theta = self.pending_theta * k;
        let d_phi = self.pending_phi * k;
        let zoom_step = self.pending_zoom.powf(k);
        self.pending_theta -= d_theta;
        self.pending_phi -= d_phi;
        self.pending_zoom /= zoom_step;
        if self.pending_theta.abs() < SETTLE_EPSILON {
            self.pending_theta = 0.0;
        }
        if self.pending_phi.abs() < SETTLE_EPSILON {
            self.pending_phi = 0.0;
        }
        if (self.pending_zoom - 1.0).abs() < SETTLE_EPSILON {
            self.pending_zoom = 1.0;
        }
        if d_theta == 0.0 && d_phi == 0.0 && zoom_step == 1.0 {
            return;
        }

        let offset = self.eye - self.target;
        let radius = (offset.length() * zoom_step).clamp(self.min_distance, self.max_distance);
        let mut theta = offset.x.atan2(offset.z);
        let mut phi = (offset.y / offset.length().max(f32::EPSILON))
            .clamp(-1.0, 1.0)
            .acos();
        theta += d_theta;
        phi = (phi + d_phi).clamp(POLAR_EPSILON, std::f32::consts::PI - POLAR_EPSILON);
        let sin_phi = phi.sin();
        self.eye = self.target
            + Vec3::new(
                radius * sin_phi * theta.sin(),
                radius * phi.cos(),
                radius * sin_phi * theta.cos(),
            );
    }
}
