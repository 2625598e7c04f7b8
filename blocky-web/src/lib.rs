/// Blocky Web - WebGL frontends for the BlockyAnimal rig and the ColoredPoints painter
///
/// Both demos are exported as JavaScript classes that take a canvas id:
/// `new BlockyAnimal("webgl").start()` or `new ColoredPoints("webgl").start()`.
use wasm_bindgen::prelude::*;

pub mod blocky;
pub mod dom;
pub mod gl;
pub mod logger;
pub mod points;

pub use blocky::BlockyAnimal;
pub use gl::{Program, WebGlRenderer};
pub use points::ColoredPoints;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Setup panic hook for better error messages in browser console
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
    Ok(())
}

/// Change the console log level ("error", "warn", "info", "debug", "trace").
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let level: log::LevelFilter = level
        .parse()
        .map_err(|_| JsValue::from_str(&format!("unknown log level '{level}'")))?;
    logger::init(level);
    Ok(())
}
