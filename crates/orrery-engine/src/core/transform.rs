// core/transform.rs
//
// Local transform of a scene-graph node, relative to its parent (or the world
// for root nodes). Rotation is stored as Euler angles so animation code can
// overwrite a single axis each frame.

use glam::{EulerRot, Mat4, Quat, Vec3};

/// Local transform data for nodes in the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Position relative to parent.
    pub translation: Vec3,
    /// Euler rotation in radians, applied X then Y then Z.
    pub rotation: Vec3,
    /// Scale multiplier relative to parent.
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    /// Local matrix: translate * rotate * scale.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.quat(), self.translation)
    }
}
