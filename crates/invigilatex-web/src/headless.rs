use invigilatex_particles::{InstanceBuffer, ParticleConfig, ParticleSystem};
use wasm_bindgen::prelude::*;

use crate::{install_hooks, parse_config};

const MAX_PRESIZED_LINES: usize = 1 << 16;

/// Simulation without a canvas: JS calls `tick()` from its own frame loop and
/// reads packed particle/line instances through the pointer accessors.
#[wasm_bindgen]
pub struct HeadlessField {
    system: ParticleSystem,
    buffer: InstanceBuffer,
}

#[wasm_bindgen]
impl HeadlessField {
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, config_json: Option<String>) -> Result<HeadlessField, JsValue> {
        install_hooks();
        let config = parse_config(config_json.as_deref())?;
        let mut buffer =
            InstanceBuffer::with_capacity(width, height, config.particle_count, line_capacity(&config));
        let system = ParticleSystem::attach(config, &mut buffer, width, height);
        Ok(HeadlessField { system, buffer })
    }

    /// Advance one frame and repack the instance buffers.
    pub fn tick(&mut self) {
        self.system.frame(&mut self.buffer);
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.system.pointer_move(x, y);
    }

    #[wasm_bindgen(js_name = pointerLeave)]
    pub fn pointer_leave(&mut self) {
        self.system.pointer_leave();
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.system.resize_surface(&mut self.buffer, width, height);
    }

    // ---- Data accessors ----

    #[wasm_bindgen(js_name = particlesPtr)]
    pub fn particles_ptr(&self) -> *const f32 {
        self.buffer.particles_ptr()
    }

    #[wasm_bindgen(js_name = particleCount)]
    pub fn particle_count(&self) -> u32 {
        self.buffer.particle_count()
    }

    #[wasm_bindgen(js_name = linesPtr)]
    pub fn lines_ptr(&self) -> *const f32 {
        self.buffer.lines_ptr()
    }

    #[wasm_bindgen(js_name = lineCount)]
    pub fn line_count(&self) -> u32 {
        self.buffer.line_count()
    }

    /// Copy of the particle data (8 floats per particle).
    #[wasm_bindgen(js_name = particleFloats)]
    pub fn particle_floats(&self) -> Vec<f32> {
        self.buffer.particle_floats().to_vec()
    }

    /// Copy of the line data (10 floats per line).
    #[wasm_bindgen(js_name = lineFloats)]
    pub fn line_floats(&self) -> Vec<f32> {
        self.buffer.line_floats().to_vec()
    }
}

/// Lines to reserve up front. Every pair may connect; past the cap the line
/// buffer grows on demand.
fn line_capacity(config: &ParticleConfig) -> usize {
    if !config.connections {
        return 0;
    }
    let n = config.particle_count;
    (n.saturating_mul(n.saturating_sub(1)) / 2).min(MAX_PRESIZED_LINES)
}
