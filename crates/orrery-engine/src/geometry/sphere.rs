use std::f32::consts::{PI, TAU};

use super::{MeshData, Vertex};

/// Latitude/longitude sphere centered on the origin.
///
/// Produces `(w + 1) * (h + 1)` vertices (the seam column is duplicated so
/// every ring closes) and drops the degenerate triangles at both poles.
/// Segment counts below 3 / 2 are raised to the minimum that still encloses
/// a volume.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);

    let mut vertices = Vec::with_capacity(((ws + 1) * (hs + 1)) as usize);
    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        let (sin_t, cos_t) = (v * PI).sin_cos();
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let (sin_p, cos_p) = (u * TAU).sin_cos();
            let normal = [-cos_p * sin_t, cos_t, sin_p * sin_t];
            vertices.push(Vertex {
                position: [normal[0] * radius, normal[1] * radius, normal[2] * radius],
                normal,
            });
        }
    }

    let row = ws + 1;
    let mut indices = Vec::with_capacity((ws * hs * 6) as usize);
    for iy in 0..hs {
        for ix in 0..ws {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != hs - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    MeshData { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn vertex_and_triangle_counts() {
        let mesh = uv_sphere(5.7, 40, 36);
        assert_eq!(mesh.vertices.len(), 41 * 37);
        // Two triangles per quad, minus one per quad on each polar band.
        assert_eq!(mesh.triangle_count(), 40 * 36 * 2 - 2 * 40);
    }

    #[test]
    fn every_vertex_sits_on_the_radius() {
        let mesh = uv_sphere(1.9, 32, 24);
        for v in &mesh.vertices {
            let p = Vec3::from(v.position);
            assert!((p.length() - 1.9).abs() < 1e-4);
            assert!((Vec3::from(v.normal).length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn triangles_face_outward() {
        let mesh = uv_sphere(1.0, 16, 12);
        for tri in mesh.indices.chunks(3) {
            let p = |i: u32| Vec3::from(mesh.vertices[i as usize].position);
            let (a, b, c) = (p(tri[0]), p(tri[1]), p(tri[2]));
            let n = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(n.dot(centroid) > 0.0, "inward triangle {:?}", tri);
        }
    }

    #[test]
    fn indices_stay_in_range() {
        let mesh = uv_sphere(1.0, 3, 2);
        let n = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < n));
    }

    #[test]
    fn tiny_segment_counts_are_raised() {
        let mesh = uv_sphere(1.0, 0, 0);
        assert_eq!(mesh.vertices.len(), 4 * 3);
        assert!(mesh.triangle_count() > 0);
    }
}
