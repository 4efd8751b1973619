use super::camera_utils::Camera;
use cgmath::*;

use crate::config::CameraConfig;

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: cgmath::Matrix4<f32> = cgmath::Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.5,
    0.0, 0.0, 0.0, 1.0,
);

/// Perspective camera that translates its eye while always looking at a fixed target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanCamera {
    pub eye: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub aspect: f32,
    pub fovy: Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera for PanCamera {
    fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        let view = Matrix4::look_at_rh(self.eye, self.target, self.up);
        let proj =
            OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar);
        proj * view
    }
}

impl PanCamera {
    pub fn new(config: &CameraConfig, aspect: f32) -> Self {
        Self {
            eye: config.position,
            target: config.target,
            up: Vector3::unit_y(),
            aspect,
            fovy: Deg(config.fovy_degrees).into(),
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    /// Moves the eye along the world axes; the target stays where it is
    pub fn translate(&mut self, offset: Vector3<f32>) {
        self.eye += offset;
    }

    pub fn resize_projection(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn eye_position(&self) -> [f32; 4] {
        [self.eye.x, self.eye.y, self.eye.z, 1.0]
    }
}
