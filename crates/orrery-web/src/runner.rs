use orrery_engine::{
    build_render_frame, Clock, Color, ControlPanel, EngineContext, RenderFrame, SimConfig,
    Simulation, Viewport, parse_control_value,
};

/// Generic simulation runner that wires up the engine loop.
///
/// Holds no browser state, so the whole init/tick/resize/control path is
/// testable natively. The host (see `host::launch`) feeds it timestamps,
/// surface sizes and raw slider strings.
pub struct SimRunner<S: Simulation> {
    sim: S,
    ctx: EngineContext,
    config: SimConfig,
    viewport: Viewport,
    clock: Clock,
    frame: RenderFrame,
    initialized: bool,
}

impl<S: Simulation> SimRunner<S> {
    pub fn new(sim: S) -> Self {
        let config = sim.config();
        Self::with_config(sim, config)
    }

    /// Use `config` instead of the simulation's own.
    pub fn with_config(sim: S, config: SimConfig) -> Self {
        Self {
            viewport: Viewport::new(&config.camera, 1, 1),
            sim,
            ctx: EngineContext::new(),
            config,
            clock: Clock::new(),
            frame: RenderFrame::new(),
            initialized: false,
        }
    }

    /// Build the scene and start the clock. Call once after construction;
    /// later calls are ignored.
    pub fn init(&mut self, width: u32, height: u32, now_ms: f64) {
        if self.initialized {
            log::warn!("runner already initialized, ignoring init");
            return;
        }
        self.viewport = Viewport::new(&self.config.camera, width, height);
        self.sim.init(&mut self.ctx);
        self.ctx.scene.propagate();
        self.clock.start(now_ms);
        self.initialized = true;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Advance to `now_ms` and rebuild the render frame.
    pub fn tick(&mut self, now_ms: f64) -> &RenderFrame {
        if self.initialized {
            let elapsed = self.clock.elapsed(now_ms);
            self.sim.tick(&mut self.ctx, elapsed);
            self.ctx.scene.propagate();
            build_render_frame(
                &self.ctx.scene,
                &self.viewport.camera,
                &self.ctx.lights,
                Color::from_hex(self.config.clear_color),
                &mut self.frame,
            );
        }
        &self.frame
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport.resize(width, height);
    }

    /// Apply a raw control string. Returns the refreshed label, or `None`
    /// when the value does not parse or the index is unknown.
    pub fn control_input(&mut self, index: usize, raw: &str) -> Option<String> {
        let Some(value) = parse_control_value(raw) else {
            log::warn!("control {}: ignoring unparsable value {:?}", index, raw);
            return None;
        };
        let label = self.sim.control_input(index, value).map(|s| s.label.clone());
        if label.is_none() {
            log::warn!("control {}: no such control", index);
        }
        label
    }

    pub fn control_panel(&self) -> Option<&ControlPanel> {
        self.sim.control_panel()
    }

    /// Current numeric value of control `index`.
    pub fn control_value(&self, index: usize) -> Option<f32> {
        self.control_panel()?.slider(index).map(|s| s.value)
    }

    pub fn control_count(&self) -> usize {
        self.control_panel().map_or(0, ControlPanel::len)
    }

    pub fn sim(&self) -> &S {
        &self.sim
    }

    pub fn ctx(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::{Geometry, Material, MeshComponent, Node, NodeId, Slider};

    /// One spinning cube-ish node and a single slider driving its rate.
    struct Spinner {
        node: Option<NodeId>,
        rate: f32,
        panel: ControlPanel,
        ticks: u32,
    }

    impl Spinner {
        fn new() -> Self {
            let mut panel = ControlPanel::new("Spin");
            panel.push(Slider::new("rate", 0.0, 2.0, 0.1, 1.0).with_label("rate: 1.0"));
            Self { node: None, rate: 1.0, panel, ticks: 0 }
        }
    }

    impl Simulation for Spinner {
        fn init(&mut self, ctx: &mut EngineContext) {
            let id = ctx.next_id();
            ctx.scene.spawn(Node::new(id).with_mesh(MeshComponent::new(
                Geometry::sphere(1.0, 8, 6),
                Material::basic(Color::WHITE),
            )));
            self.node = Some(id);
        }

        fn tick(&mut self, ctx: &mut EngineContext, elapsed: f32) {
            self.ticks += 1;
            if let Some(t) = self.node.and_then(|id| ctx.scene.transform_mut(id)) {
                t.rotation.y = elapsed * self.rate;
            }
        }

        fn control_panel(&self) -> Option<&ControlPanel> {
            Some(&self.panel)
        }

        fn control_input(&mut self, index: usize, value: f32) -> Option<&Slider> {
            let slider = self.panel.slider_mut(index)?;
            self.rate = value;
            slider.value = value;
            slider.label = format!("rate: {:.1}", value);
            Some(slider)
        }
    }

    fn running() -> SimRunner<Spinner> {
        let mut r = SimRunner::new(Spinner::new());
        r.init(800, 600, 1000.0);
        r
    }

    fn spin(r: &SimRunner<Spinner>) -> f32 {
        let id = r.sim().node.unwrap();
        r.ctx().scene.get(id).unwrap().transform.rotation.y
    }

    #[test]
    fn tick_before_init_does_nothing() {
        let mut r = SimRunner::new(Spinner::new());
        assert_eq!(r.tick(500.0).items.len(), 0);
        assert_eq!(r.sim().ticks, 0);
    }

    #[test]
    fn init_sets_viewport_from_surface() {
        let r = running();
        assert!(r.is_initialized());
        assert_eq!(r.viewport().size(), (800, 600));
        assert!((r.viewport().aspect() - 800.0 / 600.0).abs() < 1e-6);
    }

    #[test]
    fn tick_uses_elapsed_seconds_since_init() {
        let mut r = running();
        r.tick(3000.0);
        assert!((spin(&r) - 2.0).abs() < 1e-6);
        assert_eq!(r.frame().items.len(), 1);
        assert_eq!(r.frame().clear_color, Color::from_hex(0x101020));
    }

    #[test]
    fn control_input_updates_sim_and_returns_label() {
        let mut r = running();
        assert_eq!(r.control_input(0, " 0.5 ").as_deref(), Some("rate: 0.5"));
        assert_eq!(r.control_value(0), Some(0.5));
        r.tick(5000.0);
        assert!((spin(&r) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn unparsable_control_value_is_ignored() {
        let mut r = running();
        assert!(r.control_input(0, "fast").is_none());
        assert!(r.control_input(0, "NaN").is_none());
        assert_eq!(r.control_value(0), Some(1.0));
        assert_eq!(r.sim().rate, 1.0);
    }

    #[test]
    fn unknown_control_index_is_ignored() {
        let mut r = running();
        assert!(r.control_input(7, "0.3").is_none());
        assert_eq!(r.control_count(), 1);
        assert_eq!(r.control_value(7), None);
    }

    #[test]
    fn resize_leaves_scene_and_controls_alone() {
        let mut r = running();
        r.control_input(0, "0.2");
        r.tick(2000.0);
        let before = spin(&r);
        let nodes = r.ctx().scene.len();

        r.resize(1920, 1080);

        assert_eq!(r.viewport().size(), (1920, 1080));
        assert!((r.viewport().aspect() - 1920.0 / 1080.0).abs() < 1e-6);
        assert_eq!(spin(&r), before);
        assert_eq!(r.ctx().scene.len(), nodes);
        assert_eq!(r.control_value(0), Some(0.2));
    }

    #[test]
    fn config_override_wins_over_sim_config() {
        let config = SimConfig { clear_color: 0x000000, ..SimConfig::default() };
        let mut r = SimRunner::with_config(Spinner::new(), config);
        r.init(100, 100, 0.0);
        r.tick(16.0);
        assert_eq!(r.frame().clear_color, Color::BLACK);
    }
}
