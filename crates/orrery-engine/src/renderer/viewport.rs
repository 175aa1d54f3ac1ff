use crate::api::sim::CameraConfig;
use crate::renderer::camera::PerspectiveCamera;

/// Owns the camera and the output surface size.
///
/// Resizing touches nothing but the projection and the surface; scene
/// contents are never modified here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub camera: PerspectiveCamera,
    /// Output surface size in CSS pixels.
    width: u32,
    height: u32,
}

impl Viewport {
    /// Build the camera from config, with aspect derived from the surface size.
    /// A surface with a zero side starts square (aspect 1.0) until the first
    /// real resize.
    pub fn new(config: &CameraConfig, width: u32, height: u32) -> Self {
        let aspect = if width > 0 && height > 0 {
            width as f32 / height as f32
        } else {
            1.0
        };
        let mut camera = PerspectiveCamera::new(config.fov_deg, aspect, config.near, config.far)
            .with_position(config.position.into());
        if let Some(target) = config.look_at {
            camera.look_at(target.into());
        }
        Self {
            camera,
            width,
            height,
        }
    }

    /// React to a host resize: new aspect, new surface size. If either side
    /// is zero the size is still recorded but the aspect keeps its last value.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width as f32, height as f32);
        self.width = width;
        self.height = height;
        log::debug!("viewport resized to {}x{} (aspect {:.3})", width, height, self.camera.aspect);
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn aspect(&self) -> f32 {
        self.camera.aspect
    }
}
