//! Thin helpers over `web_sys` for locating host elements and mounting the
//! control panel. Every failure becomes a `js_sys::Error` so callers can
//! propagate with `?` up to the exported entry point.

use orrery_engine::ControlPanel;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlCanvasElement, HtmlInputElement, Window};

pub fn js_error(msg: impl AsRef<str>) -> JsValue {
    js_sys::Error::new(msg.as_ref()).into()
}

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| js_error("no global window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?.document().ok_or_else(|| js_error("window has no document"))
}

pub fn element_by_id(id: &str) -> Result<Element, JsValue> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| js_error(format!("no element with id '{}'", id)))
}

/// Window inner size in CSS pixels.
pub fn window_size() -> Result<(u32, u32), JsValue> {
    let w = window()?;
    let width = w.inner_width()?.as_f64().unwrap_or(0.0);
    let height = w.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width.max(0.0) as u32, height.max(0.0) as u32))
}

/// Create a canvas and append it to `container`.
pub fn create_canvas(container: &Element) -> Result<HtmlCanvasElement, JsValue> {
    let canvas = document()?
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| js_error("created element is not a canvas"))?;
    container.append_child(&canvas)?;
    Ok(canvas)
}

/// DOM nodes for a mounted panel, index-aligned with its sliders.
pub struct MountedPanel {
    pub labels: Vec<Element>,
    pub inputs: Vec<HtmlInputElement>,
}

impl MountedPanel {
    pub fn set_label(&self, index: usize, text: &str) {
        if let Some(label) = self.labels.get(index) {
            label.set_text_content(Some(text));
        }
    }

    /// Move slider `index` and rewrite its label, for changes that did not
    /// originate from the widget itself.
    pub fn set_value(&self, index: usize, value: f32, label: &str) {
        if let Some(input) = self.inputs.get(index) {
            input.set_value(&value.to_string());
        }
        self.set_label(index, label);
    }
}

/// Replace the contents of `container` with the panel heading and one
/// labelled range input per slider.
pub fn mount_panel(container: &Element, panel: &ControlPanel) -> Result<MountedPanel, JsValue> {
    let doc = document()?;
    container.set_inner_html("");

    let heading = doc.create_element("strong")?;
    heading.set_text_content(Some(&panel.title));
    container.append_child(&heading)?;
    let br = doc.create_element("br")?;
    container.append_child(&br)?;

    let mut mounted = MountedPanel {
        labels: Vec::with_capacity(panel.len()),
        inputs: Vec::with_capacity(panel.len()),
    };

    for slider in panel.sliders() {
        let group = doc.create_element("div")?;
        group.set_class_name("slider-group");

        let label = doc.create_element("label")?;
        label.set_class_name("slider-label");
        label.set_attribute("for", &slider.id)?;
        label.set_text_content(Some(&slider.label));

        let input = doc
            .create_element("input")?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| js_error("created element is not an input"))?;
        input.set_type("range");
        input.set_id(&slider.id);
        input.set_min(&slider.min.to_string());
        input.set_max(&slider.max.to_string());
        input.set_step(&slider.step.to_string());
        input.set_value(&slider.value.to_string());

        group.append_child(&label)?;
        group.append_child(&input)?;
        container.append_child(&group)?;

        mounted.labels.push(label);
        mounted.inputs.push(input);
    }

    log::debug!("mounted {} controls", mounted.inputs.len());
    Ok(mounted)
}
