pub mod api;
pub mod core;
pub mod components;
pub mod geometry;
pub mod systems;
pub mod renderer;
pub mod ui;

// Re-export key types at crate root for convenience
pub use api::sim::{Simulation, SimConfig, CameraConfig, EngineContext};
pub use api::types::NodeId;
pub use components::color::Color;
pub use components::mesh::{Geometry, Material, MeshComponent, Shading};
pub use crate::core::scene::{Node, SceneGraph};
pub use crate::core::time::Clock;
pub use crate::core::transform::Transform;
pub use geometry::{MeshData, Vertex};
pub use renderer::camera::{CameraUniform, PerspectiveCamera};
pub use renderer::frame::{DrawItem, ModelUniform, RenderFrame};
pub use renderer::traits::Renderer;
pub use renderer::viewport::Viewport;
pub use systems::lighting::{AmbientLight, LightState, PointLight};
pub use systems::render::build_render_frame;
pub use ui::panel::{ControlPanel, Slider, parse_control_value};
