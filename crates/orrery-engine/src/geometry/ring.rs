use std::f32::consts::TAU;

use super::{MeshData, Vertex};

/// Flat annulus in the XY plane, facing +Z.
///
/// One band of quads between the inner and outer radius; the seam vertex
/// column is duplicated like the sphere's.
pub fn flat_ring(inner_radius: f32, outer_radius: f32, segments: u32) -> MeshData {
    let segs = segments.max(3);
    let normal = [0.0, 0.0, 1.0];

    let mut vertices = Vec::with_capacity(2 * (segs + 1) as usize);
    for radius in [inner_radius, outer_radius] {
        for i in 0..=segs {
            let (sin, cos) = (i as f32 / segs as f32 * TAU).sin_cos();
            vertices.push(Vertex {
                position: [radius * cos, radius * sin, 0.0],
                normal,
            });
        }
    }

    let row = segs + 1;
    let mut indices = Vec::with_capacity((segs * 6) as usize);
    for i in 0..segs {
        let a = i;
        let b = i + row;
        let c = i + row + 1;
        let d = i + 1;
        indices.extend_from_slice(&[a, b, d, b, c, d]);
    }

    MeshData { vertices, indices }
}
