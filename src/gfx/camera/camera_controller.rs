use cgmath::Vector3;

use super::pan_camera::PanCamera;
use crate::config::CameraConfig;
use crate::input::{Action, FrameInput};

/// Turns held arrow keys and wheel movement into camera translation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraController {
    pub pan_speed: f32,
    pub zoom_factor: f32,
}

impl CameraController {
    pub fn new(pan_speed: f32, zoom_factor: f32) -> Self {
        Self {
            pan_speed,
            zoom_factor,
        }
    }

    pub fn from_config(config: &CameraConfig) -> Self {
        Self::new(config.pan_speed, config.zoom_factor)
    }

    /// Offset to apply this frame. Each axis moves at most one step.
    pub fn offset(&self, input: &FrameInput) -> Vector3<f32> {
        let x = if input.is_held(Action::PanRight) {
            self.pan_speed
        } else if input.is_held(Action::PanLeft) {
            -self.pan_speed
        } else {
            0.0
        };

        let y = if input.is_held(Action::PanUp) {
            self.pan_speed
        } else if input.is_held(Action::PanDown) {
            -self.pan_speed
        } else {
            0.0
        };

        let zoom = self.pan_speed * self.zoom_factor;
        let z = if input.scroll > 0.0 {
            zoom
        } else if input.scroll < 0.0 {
            -zoom
        } else {
            0.0
        };

        Vector3::new(x, y, z)
    }

    pub fn update_camera(&self, input: &FrameInput, camera: &mut PanCamera) {
        camera.translate(self.offset(input));
    }

    pub fn set_pan_speed(&mut self, speed: f32) {
        self.pan_speed = speed;
    }
}
