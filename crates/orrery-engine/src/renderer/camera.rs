use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Perspective camera for 3D rendering.
///
/// Without a look-at target the camera keeps its default orientation and
/// looks down −Z from wherever it is placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
    /// Viewport width / height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    /// Optional point to face. `None` = look along −Z.
    pub target: Option<Vec3>,
    pub up: Vec3,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    /// Eye position (xyz) padded to a vec4.
    pub eye: [f32; 4],
}

impl PerspectiveCamera {
    pub fn new(fov_deg: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov_deg,
            aspect,
            near,
            far,
            position: Vec3::ZERO,
            target: None,
            up: Vec3::Y,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = Some(target);
    }

    /// Unit vector the camera is facing.
    pub fn forward(&self) -> Vec3 {
        match self.target {
            Some(t) if (t - self.position).length_squared() > 1e-12 => {
                (t - self.position).normalize()
            }
            _ => Vec3::NEG_Z,
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward(), self.up)
    }

    /// OpenGL-style projection (clip z in −1..1).
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_deg.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_projection().to_cols_array_2d(),
            eye: self.position.extend(1.0).to_array(),
        }
    }

    /// Update the aspect ratio for a new viewport size.
    /// A degenerate size (either side zero or negative) leaves the aspect untouched.
    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32) {
        if viewport_height > 0.0 && viewport_width > 0.0 {
            self.aspect = viewport_width / viewport_height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// World point to normalized device coordinates, `None` behind the eye.
    fn project(cam: &PerspectiveCamera, point: Vec3) -> Option<Vec3> {
        let clip = cam.view_projection() * point.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        Some(clip.truncate() / clip.w)
    }

    fn camera() -> PerspectiveCamera {
        PerspectiveCamera::new(65.0, 16.0 / 9.0, 0.1, 400.0)
            .with_position(Vec3::new(0.0, 37.0, 135.0))
    }

    #[test]
    fn default_orientation_looks_down_negative_z() {
        let cam = camera();
        assert_eq!(cam.forward(), Vec3::NEG_Z);
        // A point straight ahead projects to the screen center.
        let ndc = project(&cam, Vec3::new(0.0, 37.0, 0.0)).unwrap();
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5, "got {:?}", ndc);
    }

    #[test]
    fn origin_is_below_center_and_in_view() {
        let ndc = project(&camera(), Vec3::ZERO).unwrap();
        assert!(ndc.y < 0.0 && ndc.y > -1.0, "got {:?}", ndc);
        assert!(ndc.z > -1.0 && ndc.z < 1.0);
    }

    #[test]
    fn points_behind_are_rejected() {
        assert!(project(&camera(), Vec3::new(0.0, 37.0, 200.0)).is_none());
    }

    #[test]
    fn resize_sets_aspect() {
        let mut cam = camera();
        cam.resize(1920.0, 1080.0);
        assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
        cam.resize(800.0, 0.0);
        assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
        cam.resize(0.0, 600.0);
        assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    }

    #[test]
    fn look_at_faces_target() {
        let mut cam = camera();
        cam.look_at(Vec3::ZERO);
        let ndc = project(&cam, Vec3::ZERO).unwrap();
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5, "got {:?}", ndc);
    }

    #[test]
    fn uniform_carries_eye() {
        let u = camera().uniform();
        assert_eq!(u.eye, [0.0, 37.0, 135.0, 1.0]);
    }
}
