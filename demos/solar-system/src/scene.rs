//! Scene construction: sun, lights, and one pivot/ring/mesh triple per planet.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;
use orrery_engine::{
    AmbientLight, Color, EngineContext, Geometry, Material, MeshComponent, Node, NodeId, PointLight,
};

use crate::bodies::{self, BodyDescriptor};

// ── Lighting ─────────────────────────────────────────────────────────

const AMBIENT_COLOR: u32 = 0xffffff;
const AMBIENT_INTENSITY: f32 = 0.08;
const SUN_LIGHT_COLOR: u32 = 0xffffff;
const SUN_LIGHT_INTENSITY: f32 = 2.2;
const SUN_LIGHT_DISTANCE: f32 = 350.0;

// ── Orbit guide rings ────────────────────────────────────────────────

/// Half-width of each ring around its orbit radius.
const RING_HALF_WIDTH: f32 = 0.18;
const RING_SEGMENTS: u32 = 70;
const RING_COLOR: u32 = 0x333a43;
const RING_OPACITY: f32 = 0.19;

/// Node ids produced by `build_scene`, index-aligned with the catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneHandles {
    pub sun: Option<NodeId>,
    pub pivots: Vec<NodeId>,
    pub meshes: Vec<NodeId>,
    pub rings: Vec<NodeId>,
}

impl SceneHandles {
    pub fn len(&self) -> usize {
        self.pivots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pivots.is_empty()
    }
}

/// Populate the scene graph and lights for `catalog`.
///
/// Rings are attached to the root, not to the pivots, so they stay put
/// while the planets revolve. No validation: a non-positive radius or size
/// just produces a degenerate mesh.
pub fn build_scene(catalog: &[BodyDescriptor], ctx: &mut EngineContext) -> SceneHandles {
    let mut handles = SceneHandles::default();

    // ── Sun ──────────────────────────────────────────────────────────
    let sun_id = ctx.next_id();
    ctx.scene.spawn(
        Node::new(sun_id).with_tag("sun").with_mesh(MeshComponent::new(
            Geometry::sphere(
                bodies::SUN_RADIUS,
                bodies::SUN_WIDTH_SEGMENTS,
                bodies::SUN_HEIGHT_SEGMENTS,
            ),
            Material::basic(Color::from_hex(bodies::SUN_COLOR)),
        )),
    );
    handles.sun = Some(sun_id);

    // ── Lights ───────────────────────────────────────────────────────
    ctx.lights
        .set_ambient(AmbientLight::new(Color::from_hex(AMBIENT_COLOR), AMBIENT_INTENSITY));
    ctx.lights.add(
        PointLight::new(
            Color::from_hex(SUN_LIGHT_COLOR),
            SUN_LIGHT_INTENSITY,
            SUN_LIGHT_DISTANCE,
        )
        .with_position(Vec3::ZERO),
    );

    // ── Planets ──────────────────────────────────────────────────────
    for body in catalog {
        let pivot_id = ctx.next_id();
        ctx.scene
            .spawn(Node::new(pivot_id).with_tag(format!("{}-orbit", body.name)));

        let ring_id = ctx.next_id();
        ctx.scene.spawn(
            Node::new(ring_id)
                .with_tag(format!("{}-ring", body.name))
                .with_rotation(Vec3::new(FRAC_PI_2, 0.0, 0.0))
                .with_mesh(MeshComponent::new(
                    Geometry::ring(
                        body.orbit_radius - RING_HALF_WIDTH,
                        body.orbit_radius + RING_HALF_WIDTH,
                        RING_SEGMENTS,
                    ),
                    Material::basic(Color::from_hex(RING_COLOR))
                        .with_opacity(RING_OPACITY)
                        .double_sided(),
                )),
        );

        let mesh_id = ctx.next_id();
        ctx.scene.spawn(
            Node::new(mesh_id)
                .with_tag(body.name)
                .with_parent(pivot_id)
                .with_position(Vec3::new(body.orbit_radius, 0.0, 0.0))
                .with_mesh(MeshComponent::new(
                    Geometry::sphere(
                        body.size,
                        bodies::PLANET_WIDTH_SEGMENTS,
                        bodies::PLANET_HEIGHT_SEGMENTS,
                    ),
                    Material::standard(
                        Color::from_hex(body.color),
                        bodies::PLANET_ROUGHNESS,
                        bodies::PLANET_METALNESS,
                    )
                    .with_emissive(Color::BLACK),
                )),
        );

        handles.pivots.push(pivot_id);
        handles.rings.push(ring_id);
        handles.meshes.push(mesh_id);
    }

    log::info!("scene built: {} bodies, {} nodes", handles.len(), ctx.scene.len());
    handles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{EARTH, PLANETS, PLANET_COUNT};
    use orrery_engine::Shading;

    fn built() -> (EngineContext, SceneHandles) {
        let mut ctx = EngineContext::new();
        let handles = build_scene(&PLANETS, &mut ctx);
        (ctx, handles)
    }

    #[test]
    fn one_triple_per_catalog_entry() {
        let (ctx, h) = built();
        assert_eq!(h.pivots.len(), PLANET_COUNT);
        assert_eq!(h.meshes.len(), PLANET_COUNT);
        assert_eq!(h.rings.len(), PLANET_COUNT);
        // sun + 3 nodes per planet
        assert_eq!(ctx.scene.len(), 1 + 3 * PLANET_COUNT);
    }

    #[test]
    fn meshes_hang_off_their_pivot_in_catalog_order() {
        let (ctx, h) = built();
        for (i, body) in PLANETS.iter().enumerate() {
            let mesh = ctx.scene.get(h.meshes[i]).unwrap();
            assert_eq!(mesh.tag, body.name);
            assert_eq!(mesh.parent, Some(h.pivots[i]));
            assert_eq!(mesh.transform.translation, Vec3::new(body.orbit_radius, 0.0, 0.0));
            assert_eq!(
                mesh.mesh.unwrap().geometry,
                Geometry::sphere(body.size, 32, 24)
            );
        }
    }

    #[test]
    fn pivots_and_rings_sit_at_root() {
        let (ctx, h) = built();
        for i in 0..PLANET_COUNT {
            let pivot = ctx.scene.get(h.pivots[i]).unwrap();
            assert_eq!(pivot.parent, None);
            assert!(pivot.mesh.is_none());

            let ring = ctx.scene.get(h.rings[i]).unwrap();
            assert_eq!(ring.parent, None);
            assert_eq!(ring.transform.rotation.x, FRAC_PI_2);
        }
    }

    #[test]
    fn ring_straddles_the_orbit() {
        let (ctx, h) = built();
        let ring = ctx.scene.get(h.rings[EARTH]).unwrap().mesh.unwrap();
        match ring.geometry {
            Geometry::Ring { inner_radius, outer_radius, segments } => {
                assert!((inner_radius - 24.82).abs() < 1e-4);
                assert!((outer_radius - 25.18).abs() < 1e-4);
                assert_eq!(segments, 70);
            }
            other => panic!("expected ring geometry, got {:?}", other),
        }
        assert!(ring.material.transparent);
        assert!(ring.material.double_sided);
        assert_eq!(ring.material.opacity, 0.19);
    }

    #[test]
    fn sun_is_unlit_and_planets_are_lit() {
        let (ctx, h) = built();
        let sun = ctx.scene.get(h.sun.unwrap()).unwrap();
        assert_eq!(sun.parent, None);
        assert_eq!(sun.mesh.unwrap().material.shading, Shading::Basic);

        let earth = ctx.scene.get(h.meshes[EARTH]).unwrap().mesh.unwrap();
        assert_eq!(
            earth.material.shading,
            Shading::Standard { roughness: 0.49, metalness: 0.25 }
        );
        assert_eq!(earth.material.color, Color::from_hex(0x3996ec));
    }

    #[test]
    fn lights_are_dim_ambient_plus_sun_point_light() {
        let (ctx, _) = built();
        assert!((ctx.lights.ambient().intensity - 0.08).abs() < 1e-6);
        assert_eq!(ctx.lights.iter().count(), 1);
        let sun_light = ctx.lights.iter().next().unwrap();
        assert_eq!(sun_light.position, Vec3::ZERO);
        assert_eq!(sun_light.intensity, 2.2);
        assert_eq!(sun_light.distance, 350.0);
    }

    #[test]
    fn empty_catalog_builds_only_the_sun() {
        let mut ctx = EngineContext::new();
        let h = build_scene(&[], &mut ctx);
        assert!(h.is_empty());
        assert_eq!(ctx.scene.len(), 1);
    }
}
