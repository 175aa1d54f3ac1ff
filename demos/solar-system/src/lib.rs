use wasm_bindgen::prelude::*;

pub mod bodies;
pub mod controls;
pub mod game;
pub mod scene;
use game::SolarSystem;

orrery_web::export_sim!(SolarSystem, "solar-system");
