pub mod dom;
pub mod host;
pub mod runner;
pub mod webgl;

pub use orrery_engine;

// Reached through `$crate` by `export_sim!`, so callers need not depend on them.
#[doc(hidden)]
pub use console_error_panic_hook;
#[doc(hidden)]
pub use console_log;
#[doc(hidden)]
pub use log;
pub use host::{HostOptions, SimHandle};
pub use runner::SimRunner;
pub use webgl::WebGlRenderer;

/// Generate all `#[wasm_bindgen]` exports for a simulation.
///
/// Generates:
/// - `thread_local!` storage for the running `SimHandle`
/// - `with_handle()` helper function
/// - `sim_start`, `sim_set_control`, `sim_control_value`, `sim_control_count`
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod game;
/// use game::MySim;
///
/// orrery_web::export_sim!(MySim, "my-sim");
/// ```
///
/// # Arguments
///
/// - `$sim_type`: A type implementing `orrery_engine::Simulation` with a `new()` constructor
/// - `$sim_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_sim {
    ($sim_type:ty, $sim_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static HANDLE: RefCell<Option<$crate::SimHandle<$sim_type>>> = RefCell::new(None);
        }

        fn with_handle<R>(f: impl FnOnce(&$crate::SimHandle<$sim_type>) -> R) -> R {
            HANDLE.with(|cell| {
                let borrow = cell.borrow();
                let handle = borrow.as_ref().expect("Simulation not started. Call sim_start() first.");
                f(handle)
            })
        }

        /// Mount the scene into `container_id` and the controls into
        /// `controls_id`, then start the frame loop. `config_json` optionally
        /// overrides the simulation's default configuration.
        #[wasm_bindgen]
        pub fn sim_start(
            container_id: &str,
            controls_id: &str,
            config_json: Option<String>,
        ) -> Result<(), JsValue> {
            $crate::console_error_panic_hook::set_once();
            let _ = $crate::console_log::init_with_level($crate::log::Level::Info);

            if HANDLE.with(|cell| cell.borrow().is_some()) {
                return Err($crate::dom::js_error(concat!($sim_name, " is already running")));
            }

            let config = match config_json {
                Some(json) => Some($crate::host::config_from_json(&json)?),
                None => None,
            };
            let options = $crate::HostOptions {
                container_id: container_id.to_string(),
                controls_id: controls_id.to_string(),
                config,
            };
            let handle = $crate::host::launch(<$sim_type>::new(), options)?;

            HANDLE.with(|cell| {
                *cell.borrow_mut() = Some(handle);
            });
            $crate::log::info!("{}: initialized", $sim_name);
            Ok(())
        }

        /// Set control `index` as if its slider moved. Returns the new label.
        #[wasm_bindgen]
        pub fn sim_set_control(index: usize, value: f32) -> Option<String> {
            with_handle(|h| h.set_control(index, value))
        }

        #[wasm_bindgen]
        pub fn sim_control_value(index: usize) -> Option<f32> {
            with_handle(|h| h.control_value(index))
        }

        #[wasm_bindgen]
        pub fn sim_control_count() -> usize {
            with_handle(|h| h.control_count())
        }
    };
}
