use bytemuck::{Pod, Zeroable};

use crate::api::types::NodeId;
use crate::components::color::Color;
use crate::components::mesh::MeshComponent;
use crate::renderer::camera::CameraUniform;
use crate::systems::lighting::{AmbientLight, PointLight};

/// Per-draw model matrix, column-major.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ModelUniform {
    pub model: [[f32; 4]; 4],
}

/// One mesh to draw this frame, already in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    pub node: NodeId,
    pub transform: ModelUniform,
    pub mesh: MeshComponent,
}

/// Everything a renderer needs for one frame.
///
/// Opaque items come first, alpha-blended items after `transparent_split`,
/// so renderers can switch blend/depth state once.
#[derive(Debug, Clone)]
pub struct RenderFrame {
    pub items: Vec<DrawItem>,
    pub transparent_split: usize,
    pub camera: CameraUniform,
    pub ambient: AmbientLight,
    pub lights: Vec<PointLight>,
    pub clear_color: Color,
}

impl RenderFrame {
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(64),
            transparent_split: 0,
            camera: CameraUniform::zeroed(),
            ambient: AmbientLight::default(),
            lights: Vec::new(),
            clear_color: Color::BLACK,
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.lights.clear();
        self.transparent_split = 0;
    }

    pub fn opaque(&self) -> &[DrawItem] {
        &self.items[..self.transparent_split]
    }

    pub fn transparent(&self) -> &[DrawItem] {
        &self.items[self.transparent_split..]
    }
}

impl Default for RenderFrame {
    fn default() -> Self {
        Self::new()
    }
}
