//! Procedural mesh generation for the geometry variants the engine knows.
//!
//! Output is plain CPU data; renderers upload it once per distinct
//! `Geometry` value and reuse it across nodes.

pub mod ring;
pub mod sphere;

use bytemuck::{Pod, Zeroable};

use crate::components::mesh::Geometry;

/// Interleaved vertex: position then normal, 6 floats / 24 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub const FLOATS: usize = 6;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Indexed triangle list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex bytes ready for a GPU upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Generate vertex data for a geometry description.
pub fn build(geometry: &Geometry) -> MeshData {
    match *geometry {
        Geometry::Sphere {
            radius,
            width_segments,
            height_segments,
        } => sphere::uv_sphere(radius, width_segments, height_segments),
        Geometry::Ring {
            inner_radius,
            outer_radius,
            segments,
        } => ring::flat_ring(inner_radius, outer_radius, segments),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_6_floats() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        assert_eq!(Vertex::STRIDE_BYTES, 24);
    }

    #[test]
    fn build_dispatches_on_variant() {
        let sphere = build(&Geometry::sphere(1.0, 8, 6));
        let ring = build(&Geometry::ring(1.0, 2.0, 8));
        assert_eq!(sphere.vertices.len(), 9 * 7);
        assert_eq!(ring.vertices.len(), 2 * 9);
    }

    #[test]
    fn byte_views_match_lengths() {
        let mesh = build(&Geometry::ring(1.0, 2.0, 4));
        assert_eq!(mesh.vertex_bytes().len(), mesh.vertices.len() * Vertex::STRIDE_BYTES);
        assert_eq!(mesh.index_bytes().len(), mesh.indices.len() * 4);
    }
}
