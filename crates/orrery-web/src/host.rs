//! Browser host: mounts the canvas and control panel, wires DOM events to
//! the runner and drives it from `requestAnimationFrame`.
//!
//! Everything runs on the page's single event loop. The runner sits in an
//! `Rc<RefCell<_>>` shared by the frame callback and the event closures, and
//! each callback holds the borrow only for its own run-to-completion task.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use orrery_engine::{Renderer, SimConfig, Simulation};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, HtmlCanvasElement, Window};

use crate::dom::{self, js_error, MountedPanel};
use crate::runner::SimRunner;
use crate::webgl::WebGlRenderer;

type FrameCallback = Closure<dyn FnMut(f64)>;
type EventCallback = Closure<dyn FnMut(Event)>;

/// Where to mount and how to configure a simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct HostOptions {
    /// Element that receives the canvas.
    pub container_id: String,
    /// Element that receives the control panel.
    pub controls_id: String,
    /// Overrides `Simulation::config()` when set.
    pub config: Option<SimConfig>,
}

impl Default for HostOptions {
    fn default() -> Self {
        Self {
            container_id: "container".to_string(),
            controls_id: "speedControls".to_string(),
            config: None,
        }
    }
}

/// A running simulation. Dropping it invalidates the DOM callbacks; keep it
/// alive for as long as the page shows the scene.
pub struct SimHandle<S: Simulation> {
    runner: Rc<RefCell<SimRunner<S>>>,
    panel: Rc<MountedPanel>,
    _frame: Rc<RefCell<Option<FrameCallback>>>,
    _inputs: Vec<EventCallback>,
    _resize: EventCallback,
}

impl<S: Simulation> SimHandle<S> {
    pub fn runner(&self) -> Ref<'_, SimRunner<S>> {
        self.runner.borrow()
    }

    /// Drive control `index` programmatically. The DOM slider and label
    /// follow, exactly as if the user had moved it.
    pub fn set_control(&self, index: usize, value: f32) -> Option<String> {
        let label = self
            .runner
            .borrow_mut()
            .control_input(index, &value.to_string())?;
        self.panel.set_value(index, value, &label);
        Some(label)
    }

    pub fn control_value(&self, index: usize) -> Option<f32> {
        self.runner.borrow().control_value(index)
    }

    pub fn control_count(&self) -> usize {
        self.runner.borrow().control_count()
    }
}

/// Parse a host-supplied config override.
pub fn config_from_json(json: &str) -> Result<SimConfig, JsValue> {
    SimConfig::from_json(json).map_err(|e| js_error(format!("invalid config: {}", e)))
}

/// Mount `sim` into the page and start its frame loop.
///
/// On failure the page is left as it was found: the canvas is removed, the
/// controls container is emptied and no listener stays registered.
pub fn launch<S: Simulation + 'static>(
    sim: S,
    options: HostOptions,
) -> Result<SimHandle<S>, JsValue> {
    let window = dom::window()?;
    let container = dom::element_by_id(&options.container_id)?;

    let runner = match options.config {
        Some(config) => SimRunner::with_config(sim, config),
        None => SimRunner::new(sim),
    };

    let canvas = dom::create_canvas(&container)?;
    let mut controls = None;
    let started = start(runner, &window, canvas.clone(), &options.controls_id, &mut controls);
    if let Err(e) = &started {
        log::error!("host failed to start: {:?}", e);
        canvas.remove();
        if let Some(controls) = controls {
            controls.set_inner_html("");
        }
    }
    started
}

/// Everything after the canvas exists. `controls` is set once the panel
/// container has been written to, so the caller can clear it on error.
fn start<S: Simulation + 'static>(
    mut runner: SimRunner<S>,
    window: &Window,
    canvas: HtmlCanvasElement,
    controls_id: &str,
    controls: &mut Option<Element>,
) -> Result<SimHandle<S>, JsValue> {
    let (width, height) = dom::window_size()?;
    let mut renderer = WebGlRenderer::new(canvas, runner.config().antialias)?;
    renderer.resize(width, height);

    let now = window.performance().map_or(0.0, |p| p.now());
    runner.init(width, height, now);

    let panel = match runner.control_panel() {
        Some(model) => {
            let target = dom::element_by_id(controls_id)?;
            dom::mount_panel(controls.insert(target), model)?
        }
        None => MountedPanel {
            labels: Vec::new(),
            inputs: Vec::new(),
        },
    };
    let panel = Rc::new(panel);
    let runner = Rc::new(RefCell::new(runner));
    let renderer = Rc::new(RefCell::new(renderer));

    // ── Control inputs ───────────────────────────────────────────────
    let mut inputs = Vec::with_capacity(panel.inputs.len());
    let mut listeners = Vec::with_capacity(panel.inputs.len() + 1);
    for (index, input) in panel.inputs.iter().enumerate() {
        let runner = runner.clone();
        let panel_ref = panel.clone();
        let source = input.clone();
        let on_input = EventCallback::new(move |_: Event| {
            let label = runner.borrow_mut().control_input(index, &source.value());
            if let Some(label) = label {
                panel_ref.set_label(index, &label);
            }
        });
        listeners.push(Listener::new(input.clone().into(), "input", &on_input));
        inputs.push(on_input);
    }

    // ── Resize ───────────────────────────────────────────────────────
    let on_resize = {
        let runner = runner.clone();
        let renderer = renderer.clone();
        EventCallback::new(move |_: Event| match dom::window_size() {
            Ok((w, h)) => {
                runner.borrow_mut().resize(w, h);
                renderer.borrow_mut().resize(w, h);
            }
            Err(e) => log::warn!("resize: cannot read window size: {:?}", e),
        })
    };
    listeners.push(Listener::new(window.clone().into(), "resize", &on_resize));

    // ── Frame loop ───────────────────────────────────────────────────
    // The callback owns an Rc to its own slot so it can reschedule itself.
    let frame_slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    {
        let slot = frame_slot.clone();
        let runner = runner.clone();
        let renderer = renderer.clone();
        *frame_slot.borrow_mut() = Some(FrameCallback::new(move |now: f64| {
            let drawn = {
                let mut runner = runner.borrow_mut();
                let frame = runner.tick(now);
                let result = renderer.borrow_mut().draw(frame);
                result
            };
            if let Err(e) = drawn {
                log::error!("frame failed, stopping the loop");
                wasm_bindgen::throw_val(e);
            }
            if let Some(cb) = slot.borrow().as_ref() {
                if let Err(e) = request_frame(cb) {
                    log::error!("requestAnimationFrame failed: {:?}", e);
                }
            }
        }));
    }

    // Listeners go in last; the closures they point at must outlive them.
    attach_all(&listeners, Listener::attach, Listener::detach)?;
    let scheduled = match frame_slot.borrow().as_ref() {
        Some(cb) => request_frame(cb).map(|_| ()),
        None => Ok(()),
    };
    if let Err(e) = scheduled {
        listeners.iter().rev().for_each(Listener::detach);
        return Err(e);
    }

    log::info!(
        "host started: {}x{}, {} controls, {} backend",
        width,
        height,
        panel.inputs.len(),
        renderer.borrow().backend()
    );

    Ok(SimHandle {
        runner,
        panel,
        _frame: frame_slot,
        _inputs: inputs,
        _resize: on_resize,
    })
}

fn request_frame(cb: &FrameCallback) -> Result<i32, JsValue> {
    dom::window()?.request_animation_frame(cb.as_ref().unchecked_ref())
}

/// A DOM listener registration, kept so it can be undone.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: js_sys::Function,
}

impl Listener {
    fn new(target: EventTarget, kind: &'static str, callback: &EventCallback) -> Self {
        Self {
            target,
            kind,
            callback: callback.as_ref().unchecked_ref::<js_sys::Function>().clone(),
        }
    }

    fn attach(&self) -> Result<(), JsValue> {
        self.target.add_event_listener_with_callback(self.kind, &self.callback)
    }

    fn detach(&self) {
        if let Err(e) = self.target.remove_event_listener_with_callback(self.kind, &self.callback) {
            log::warn!("cannot remove {} listener: {:?}", self.kind, e);
        }
    }
}

/// Attach every item in order. If one fails, the ones already attached are
/// detached again, newest first, and the error is returned.
fn attach_all<T, E>(
    items: &[T],
    mut attach: impl FnMut(&T) -> Result<(), E>,
    mut detach: impl FnMut(&T),
) -> Result<(), E> {
    for (n, item) in items.iter().enumerate() {
        if let Err(e) = attach(item) {
            items[..n].iter().rev().for_each(&mut detach);
            return Err(e);
        }
    }
    Ok(())
}
