//! Scene illumination: one ambient term plus any number of point lights.
//!
//! Lights are persistent: they stay until explicitly removed.
//! Each frame the runner copies the state into the `RenderFrame`
//! for the renderer's lighting pass.

use glam::Vec3;

use crate::components::color::Color;

/// Uniform light applied equally to every lit surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: Color,
    pub intensity: f32,
}

impl AmbientLight {
    pub fn new(color: Color, intensity: f32) -> Self {
        Self { color, intensity }
    }

    /// Color pre-multiplied by intensity.
    pub fn radiance(&self) -> Color {
        self.color.scaled(self.intensity)
    }
}

impl Default for AmbientLight {
    /// Full white: lit materials look unlit when no other light exists.
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            intensity: 1.0,
        }
    }
}

/// Omnidirectional light with optional range cutoff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Color,
    pub intensity: f32,
    /// Distance at which the light reaches zero. 0.0 = unlimited range.
    pub distance: f32,
}

impl PointLight {
    pub fn new(color: Color, intensity: f32, distance: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            color,
            intensity,
            distance,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Range attenuation factor at `d` world units from the light.
    ///
    /// Smooth window `(1 - (d/range)^4)^2`, clamped to [0, 1].
    pub fn range_falloff(&self, d: f32) -> f32 {
        if self.distance <= 0.0 {
            return 1.0;
        }
        let ratio = d / self.distance;
        let window = (1.0 - ratio.powi(4)).clamp(0.0, 1.0);
        window * window
    }
}

/// Manages active lights and the ambient term for the scene.
#[derive(Debug, Clone)]
pub struct LightState {
    lights: Vec<PointLight>,
    ambient: AmbientLight,
}

impl LightState {
    pub fn new() -> Self {
        Self {
            lights: Vec::new(),
            ambient: AmbientLight::default(),
        }
    }

    pub fn add(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointLight> {
        self.lights.iter()
    }

    /// Replace the ambient term (default: white at full intensity).
    /// For a dark scene lit by point lights use a low intensity like 0.08.
    pub fn set_ambient(&mut self, ambient: AmbientLight) {
        self.ambient = ambient;
    }

    pub fn ambient(&self) -> AmbientLight {
        self.ambient
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}
