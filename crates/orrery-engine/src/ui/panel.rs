//! Host-independent model of a panel of numeric range controls.
//!
//! Simulations build one of these; the host materializes it (DOM sliders in
//! the browser) and routes input back by slider index.

/// One range input with its label.
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    /// Stable element id (e.g. "speed2").
    pub id: String,
    /// Current label text.
    pub label: String,
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub value: f32,
}

impl Slider {
    pub fn new(id: impl Into<String>, min: f32, max: f32, step: f32, value: f32) -> Self {
        Self {
            id: id.into(),
            label: String::new(),
            min,
            max,
            step,
            value,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// Ordered collection of sliders, index-aligned with whatever they control.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlPanel {
    /// Heading shown above the sliders.
    pub title: String,
    sliders: Vec<Slider>,
}

impl ControlPanel {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sliders: Vec::new(),
        }
    }

    /// Append a slider; returns its index.
    pub fn push(&mut self, slider: Slider) -> usize {
        self.sliders.push(slider);
        self.sliders.len() - 1
    }

    pub fn sliders(&self) -> &[Slider] {
        &self.sliders
    }

    pub fn slider(&self, index: usize) -> Option<&Slider> {
        self.sliders.get(index)
    }

    pub fn slider_mut(&mut self, index: usize) -> Option<&mut Slider> {
        self.sliders.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.sliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sliders.is_empty()
    }
}

/// Parse the raw value a range input reports.
///
/// The widget already enforces its bounds, so no clamping happens here;
/// anything that is not a finite number is rejected.
pub fn parse_control_value(raw: &str) -> Option<f32> {
    raw.trim().parse::<f32>().ok().filter(|v| v.is_finite())
}
