pub mod runner;
pub mod canvas;
pub mod background;
pub mod headless;

pub use runner::SurfaceRunner;
pub use canvas::CanvasSurface;
pub use background::ParticleBackground;
pub use headless::HeadlessField;

use invigilatex_particles::ParticleConfig;
use wasm_bindgen::JsValue;
use web_sys::Window;

/// Route `log` to the browser console and panics to `console.error`. Safe to call repeatedly.
pub(crate) fn install_hooks() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Parse an optional config JSON. Without a fixed seed, one is drawn from `Math.random`.
pub(crate) fn parse_config(json: Option<&str>) -> Result<ParticleConfig, JsValue> {
    let mut config = match json {
        Some(json) if !json.trim().is_empty() => {
            ParticleConfig::from_json(json).map_err(|err| JsValue::from_str(&err.to_string()))?
        }
        _ => ParticleConfig::default(),
    };
    if config.seed.is_none() {
        config.seed = Some((js_sys::Math::random() * u32::MAX as f64) as u64 + 1);
    }
    Ok(config)
}

/// Viewport size in CSS px; zero when the window reports nothing usable.
pub(crate) fn viewport_size(window: &Window) -> (u32, u32) {
    let dim = |v: Result<JsValue, JsValue>| {
        v.ok()
            .and_then(|v| v.as_f64())
            .filter(|v| v.is_finite() && *v > 0.0)
            .map(|v| v as u32)
            .unwrap_or(0)
    };
    (dim(window.inner_width()), dim(window.inner_height()))
}
