pub mod camera_controller;
pub mod camera_utils;
pub mod pan_camera;

// Re-export main types
pub use camera_controller::CameraController;
pub use camera_utils::{convert_matrix4_to_array, Camera};
pub use pan_camera::PanCamera;
