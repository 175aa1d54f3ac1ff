//! Solar System: eight planets on circular orbits with live speed sliders.
//!
//! Orbit and spin angles are absolute functions of elapsed time, so moving a
//! slider never accumulates drift from earlier speeds. The sun is the one
//! exception: it advances by a fixed step per tick.

use orrery_engine::{ControlPanel, EngineContext, SimConfig, Simulation, Slider};

use crate::bodies::{BodyDescriptor, PLANETS};
use crate::controls;
use crate::scene::{self, SceneHandles};

/// Multiplier from slider speed to radians per second of orbit.
pub const ORBIT_RATE_SCALE: f32 = 2.5;
/// Planet self-rotation, radians per second (same for every planet).
pub const BODY_SPIN_RATE: f32 = 0.7;
/// Sun self-rotation per tick, radians.
pub const SUN_SPIN_PER_TICK: f32 = 0.003;

/// Orbit pivot angle for a body at `elapsed` seconds.
pub fn orbit_angle(elapsed: f32, speed: f32) -> f32 {
    elapsed * speed * ORBIT_RATE_SCALE
}

/// Body self-rotation angle at `elapsed` seconds.
pub fn spin_angle(elapsed: f32) -> f32 {
    elapsed * BODY_SPIN_RATE
}

pub struct SolarSystem {
    catalog: &'static [BodyDescriptor],
    /// Live orbital speed per body, index-aligned with `catalog`.
    speeds: Vec<f32>,
    handles: SceneHandles,
    panel: ControlPanel,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self::with_catalog(&PLANETS)
    }

    pub fn with_catalog(catalog: &'static [BodyDescriptor]) -> Self {
        Self {
            catalog,
            speeds: catalog.iter().map(|b| b.base_speed).collect(),
            handles: SceneHandles::default(),
            panel: ControlPanel::default(),
        }
    }

    pub fn catalog(&self) -> &[BodyDescriptor] {
        self.catalog
    }

    pub fn speeds(&self) -> &[f32] {
        &self.speeds
    }

    pub fn handles(&self) -> &SceneHandles {
        &self.handles
    }

    pub fn panel(&self) -> &ControlPanel {
        &self.panel
    }

    /// Overwrite one body's speed and refresh its label.
    /// No clamping: the slider widget bounds the value.
    pub fn set_speed(&mut self, index: usize, speed: f32) -> Option<&Slider> {
        let catalog = self.catalog;
        let body = catalog.get(index)?;
        let slider = self.panel.slider_mut(index)?;
        let current = self.speeds.get_mut(index)?;
        *current = speed;
        slider.value = speed;
        slider.label = controls::speed_label(body.name, speed);
        log::debug!("{} speed set to {:.3}", body.name, speed);
        Some(slider)
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation for SolarSystem {
    fn config(&self) -> SimConfig {
        SimConfig::default()
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.handles = scene::build_scene(self.catalog, ctx);
        self.panel = controls::build_controls(self.catalog, &self.speeds);
    }

    fn tick(&mut self, ctx: &mut EngineContext, elapsed: f32) {
        let spin = spin_angle(elapsed);
        let bodies = self.handles.pivots.iter().zip(&self.handles.meshes).zip(&self.speeds);
        for ((&pivot, &mesh), &speed) in bodies {
            if let Some(t) = ctx.scene.transform_mut(pivot) {
                t.rotation.y = orbit_angle(elapsed, speed);
            }
            if let Some(t) = ctx.scene.transform_mut(mesh) {
                t.rotation.y = spin;
            }
        }

        if let Some(t) = self.handles.sun.and_then(|id| ctx.scene.transform_mut(id)) {
            t.rotation.y += SUN_SPIN_PER_TICK;
        }
    }

    fn control_panel(&self) -> Option<&ControlPanel> {
        Some(&self.panel)
    }

    fn control_input(&mut self, index: usize, value: f32) -> Option<&Slider> {
        self.set_speed(index, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{EARTH, PLANET_COUNT};
    use glam::Vec3;

    fn started() -> (SolarSystem, EngineContext) {
        let mut sim = SolarSystem::new();
        let mut ctx = EngineContext::new();
        sim.init(&mut ctx);
        (sim, ctx)
    }

    fn rotation_y(ctx: &EngineContext, id: orrery_engine::NodeId) -> f32 {
        ctx.scene.get(id).unwrap().transform.rotation.y
    }

    #[test]
    fn speeds_start_at_base_speed() {
        let (sim, _) = started();
        for (i, body) in PLANETS.iter().enumerate() {
            assert_eq!(sim.speeds()[i], body.base_speed);
        }
    }

    #[test]
    fn everything_is_index_aligned() {
        let (sim, _) = started();
        assert_eq!(sim.speeds().len(), PLANET_COUNT);
        assert_eq!(sim.handles().len(), PLANET_COUNT);
        assert_eq!(sim.handles().meshes.len(), PLANET_COUNT);
        assert_eq!(sim.handles().rings.len(), PLANET_COUNT);
        assert_eq!(sim.panel().len(), PLANET_COUNT);
    }

    #[test]
    fn tick_sets_absolute_orbit_and_spin() {
        let (mut sim, mut ctx) = started();
        sim.tick(&mut ctx, 10.0);
        for i in 0..PLANET_COUNT {
            let expected = 10.0 * PLANETS[i].base_speed * 2.5;
            assert!((rotation_y(&ctx, sim.handles().pivots[i]) - expected).abs() < 1e-6);
            assert!((rotation_y(&ctx, sim.handles().meshes[i]) - 7.0).abs() < 1e-5);
        }
    }

    #[test]
    fn repeated_ticks_at_same_time_are_idempotent() {
        let (mut sim, mut ctx) = started();
        sim.tick(&mut ctx, 3.25);
        let first = rotation_y(&ctx, sim.handles().pivots[EARTH]);
        sim.tick(&mut ctx, 3.25);
        assert_eq!(rotation_y(&ctx, sim.handles().pivots[EARTH]), first);
    }

    #[test]
    fn sun_accumulates_a_fixed_step_per_tick() {
        let (mut sim, mut ctx) = started();
        let sun = sim.handles().sun.unwrap();
        sim.tick(&mut ctx, 100.0);
        sim.tick(&mut ctx, 0.0);
        sim.tick(&mut ctx, 0.0);
        assert!((rotation_y(&ctx, sun) - 3.0 * SUN_SPIN_PER_TICK).abs() < 1e-6);
    }

    #[test]
    fn speed_change_takes_effect_without_drift() {
        let (mut sim, mut ctx) = started();
        sim.tick(&mut ctx, 50.0);
        sim.set_speed(EARTH, 0.04);
        sim.tick(&mut ctx, 50.0);
        let angle = rotation_y(&ctx, sim.handles().pivots[EARTH]);
        assert!((angle - orbit_angle(50.0, 0.04)).abs() < 1e-6);
    }

    #[test]
    fn set_speed_touches_only_its_index() {
        let (mut sim, _) = started();
        let before_labels: Vec<String> =
            sim.panel().sliders().iter().map(|s| s.label.clone()).collect();

        let label = sim.control_input(EARTH, 0.031).map(|s| s.label.clone());
        assert_eq!(label.as_deref(), Some("Earth: 0.031"));

        for i in 0..PLANET_COUNT {
            if i == EARTH {
                assert_eq!(sim.speeds()[i], 0.031);
                continue;
            }
            assert_eq!(sim.speeds()[i], PLANETS[i].base_speed);
            assert_eq!(sim.panel().slider(i).unwrap().label, before_labels[i]);
        }
    }

    #[test]
    fn earth_accepts_slider_extremes() {
        let (mut sim, _) = started();
        let low = sim.control_input(EARTH, 0.001).map(|s| s.label.clone());
        assert_eq!(low.as_deref(), Some("Earth: 0.001"));
        assert_eq!(sim.speeds()[EARTH], 0.001);

        let high = sim.control_input(EARTH, 0.04).map(|s| s.label.clone());
        assert_eq!(high.as_deref(), Some("Earth: 0.040"));
        assert_eq!(sim.speeds()[EARTH], 0.04);
    }

    #[test]
    fn tick_before_init_is_harmless() {
        let mut sim = SolarSystem::new();
        let mut ctx = EngineContext::new();
        sim.tick(&mut ctx, 1.0);
        assert!(ctx.scene.is_empty());
    }

    #[test]
    fn set_speed_before_init_changes_nothing() {
        let mut sim = SolarSystem::new();
        assert!(sim.set_speed(EARTH, 0.03).is_none());
        assert_eq!(sim.speeds()[EARTH], PLANETS[EARTH].base_speed);
    }

    #[test]
    fn unknown_index_is_ignored() {
        let (mut sim, _) = started();
        assert!(sim.control_input(PLANET_COUNT, 0.01).is_none());
        assert_eq!(sim.speeds().len(), PLANET_COUNT);
    }

    #[test]
    fn earth_position_follows_pivot() {
        let (mut sim, mut ctx) = started();
        // Quarter orbit: angle = pi/2.
        let elapsed = std::f32::consts::FRAC_PI_2 / (PLANETS[EARTH].base_speed * ORBIT_RATE_SCALE);
        sim.tick(&mut ctx, elapsed);
        ctx.scene.propagate();
        let p = ctx.scene.get(sim.handles().meshes[EARTH]).unwrap().world_position();
        assert!((p - Vec3::new(0.0, 0.0, -25.0)).length() < 1e-2, "got {:?}", p);
    }
}
