use crate::components::color::Color;

/// Procedural geometry a mesh is built from.
///
/// Geometry is described, not stored: renderers generate vertex data from
/// these parameters once and cache it per distinct value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    /// UV sphere centered on the node origin.
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    /// Flat annulus in the node's local XY plane.
    Ring {
        inner_radius: f32,
        outer_radius: f32,
        segments: u32,
    },
}

impl Geometry {
    pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        Self::Sphere {
            radius,
            width_segments,
            height_segments,
        }
    }

    pub fn ring(inner_radius: f32, outer_radius: f32, segments: u32) -> Self {
        Self::Ring {
            inner_radius,
            outer_radius,
            segments,
        }
    }
}

/// How a surface responds to light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shading {
    /// Flat color, ignores every light in the scene.
    Basic,
    /// Lit by ambient and point lights.
    Standard { roughness: f32, metalness: f32 },
}

/// Surface appearance of a mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Color,
    pub shading: Shading,
    /// Self-illumination added after lighting (standard shading only).
    pub emissive: Color,
    /// 0.0 = invisible, 1.0 = opaque. Only honored when `transparent` is set.
    pub opacity: f32,
    pub transparent: bool,
    /// Render back faces too (disables culling).
    pub double_sided: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            shading: Shading::Standard {
                roughness: 1.0,
                metalness: 0.0,
            },
            emissive: Color::BLACK,
            opacity: 1.0,
            transparent: false,
            double_sided: false,
        }
    }
}

impl Material {
    /// Unlit, flat-colored material.
    pub fn basic(color: Color) -> Self {
        Self {
            color,
            shading: Shading::Basic,
            ..Default::default()
        }
    }

    /// Lit material with a roughness/metalness pair.
    pub fn standard(color: Color, roughness: f32, metalness: f32) -> Self {
        Self {
            color,
            shading: Shading::Standard {
                roughness,
                metalness,
            },
            ..Default::default()
        }
    }

    pub fn with_emissive(mut self, emissive: Color) -> Self {
        self.emissive = emissive;
        self
    }

    /// Mark the material as alpha-blended with the given opacity.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self.transparent = true;
        self
    }

    pub fn double_sided(mut self) -> Self {
        self.double_sided = true;
        self
    }
}

/// Renderable component: geometry plus material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshComponent {
    pub geometry: Geometry,
    pub material: Material,
}

impl MeshComponent {
    pub fn new(geometry: Geometry, material: Material) -> Self {
        Self { geometry, material }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_material_is_unlit() {
        let m = Material::basic(Color::from_hex(0xffd45d));
        assert_eq!(m.shading, Shading::Basic);
        assert!(!m.transparent);
    }

    #[test]
    fn opacity_marks_transparent() {
        let m = Material::basic(Color::from_hex(0x333a43))
            .with_opacity(0.19)
            .double_sided();
        assert!(m.transparent);
        assert!(m.double_sided);
        assert_eq!(m.opacity, 0.19);
    }
}
