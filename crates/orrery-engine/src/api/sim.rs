use serde::{Deserialize, Serialize};

use crate::api::types::NodeId;
use crate::core::scene::SceneGraph;
use crate::systems::lighting::LightState;
use crate::ui::panel::{ControlPanel, Slider};

/// Camera placement and projection parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees (default: 65).
    pub fov_deg: f32,
    /// Near clip plane (default: 0.1).
    pub near: f32,
    /// Far clip plane (default: 400).
    pub far: f32,
    /// World-space camera position (default: above and in front of the origin).
    pub position: [f32; 3],
    /// Optional point to face. `None` keeps the default −Z orientation.
    pub look_at: Option<[f32; 3]>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_deg: 65.0,
            near: 0.1,
            far: 400.0,
            position: [0.0, 37.0, 135.0],
            look_at: None,
        }
    }
}

/// Configuration for the engine, provided by the simulation.
///
/// Every field has a default, so a JSON override only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Surface clear color as `0xRRGGBB` (default: deep navy 0x101020).
    pub clear_color: u32,
    /// Request an antialiased drawing surface (default: true).
    pub antialias: bool,
    pub camera: CameraConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            clear_color: 0x101020,
            antialias: true,
            camera: CameraConfig::default(),
        }
    }
}

impl SimConfig {
    /// Parse a config (or a partial override) from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// The core contract every simulation must fulfill.
pub trait Simulation {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> SimConfig {
        SimConfig::default()
    }

    /// Build the scene graph, lights and control panel. Called once.
    fn init(&mut self, ctx: &mut EngineContext);

    /// Advance one frame. `elapsed` is seconds since the clock started.
    /// Write node transforms only; the runner propagates and renders.
    fn tick(&mut self, ctx: &mut EngineContext, elapsed: f32);

    /// Controls to mount in the host UI, if any.
    fn control_panel(&self) -> Option<&ControlPanel> {
        None
    }

    /// A control emitted a new numeric value. Returns the updated slider so
    /// the host can refresh its label, or `None` if the index is unknown.
    fn control_input(&mut self, _index: usize, _value: f32) -> Option<&Slider> {
        None
    }
}

/// Mutable access to engine state, passed to `Simulation::init` and `Simulation::tick`.
pub struct EngineContext {
    pub scene: SceneGraph,
    pub lights: LightState,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self {
            scene: SceneGraph::new(),
            lights: LightState::new(),
            next_id: 1,
        }
    }

    /// Generate the next unique node ID.
    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}
