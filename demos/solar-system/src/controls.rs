use orrery_engine::{ControlPanel, Slider};

use crate::bodies::BodyDescriptor;

pub const PANEL_TITLE: &str = "Planet Orbital Speeds";

pub const SPEED_MIN: f32 = 0.001;
pub const SPEED_MAX: f32 = 0.04;
pub const SPEED_STEP: f32 = 0.001;

/// Label text for a body's speed, e.g. "Earth: 0.012".
pub fn speed_label(name: &str, speed: f32) -> String {
    format!("{}: {:.3}", name, speed)
}

/// Element id of the slider for catalog index `i`.
pub fn slider_id(i: usize) -> String {
    format!("speed{}", i)
}

/// One slider per catalog entry, in catalog order, labelled with the
/// current speed and starting at the body's base speed.
pub fn build_controls(catalog: &[BodyDescriptor], speeds: &[f32]) -> ControlPanel {
    let mut panel = ControlPanel::new(PANEL_TITLE);
    for (i, (body, &speed)) in catalog.iter().zip(speeds).enumerate() {
        panel.push(
            Slider::new(slider_id(i), SPEED_MIN, SPEED_MAX, SPEED_STEP, body.base_speed)
                .with_label(speed_label(body.name, speed)),
        );
    }
    panel
}
