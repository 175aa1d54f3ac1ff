use crate::components::color::Color;
use crate::core::scene::SceneGraph;
use crate::renderer::camera::PerspectiveCamera;
use crate::renderer::frame::{DrawItem, ModelUniform, RenderFrame};
use crate::systems::lighting::LightState;

/// Build a render frame from the scene graph.
///
/// World matrices must already be propagated. Opaque meshes go first in
/// scene order, then transparent ones, with `transparent_split` at the
/// boundary. Mesh-less and hidden nodes are skipped.
pub fn build_render_frame(
    scene: &SceneGraph,
    camera: &PerspectiveCamera,
    lights: &LightState,
    clear_color: Color,
    frame: &mut RenderFrame,
) {
    frame.clear();

    let mut transparent: Vec<DrawItem> = Vec::new();

    for node in scene.iter() {
        let mesh = match &node.mesh {
            Some(m) => *m,
            None => continue,
        };
        if !scene.is_visible(node.id) {
            continue;
        }

        let item = DrawItem {
            node: node.id,
            transform: ModelUniform {
                model: node.world_matrix().to_cols_array_2d(),
            },
            mesh,
        };

        if mesh.material.transparent {
            transparent.push(item);
        } else {
            frame.items.push(item);
        }
    }

    frame.transparent_split = frame.items.len();
    frame.items.extend(transparent);

    frame.camera = camera.uniform();
    frame.ambient = lights.ambient();
    frame.lights.extend(lights.iter().copied());
    frame.clear_color = clear_color;
}
