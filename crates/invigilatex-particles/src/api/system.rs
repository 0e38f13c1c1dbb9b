use glam::Vec2;

use super::config::ParticleConfig;
use crate::core::field::ParticleField;
use crate::core::particle::Particle;
use crate::core::rng::Rng;
use crate::input::pointer::PointerState;
use crate::input::queue::InputEvent;
use crate::renderer::traits::Surface;
use crate::systems::motion::step_field;
use crate::systems::render::render_field;

/// Drifting particle background: owns the field, the pointer state and the RNG.
///
/// Host-agnostic. The caller feeds [`InputEvent`]s, calls [`ParticleSystem::update`]
/// once per display frame and [`ParticleSystem::render`] onto any [`Surface`].
pub struct ParticleSystem {
    config: ParticleConfig,
    field: ParticleField,
    pointer: PointerState,
    rng: Rng,
}

impl ParticleSystem {
    /// Generate a field for a `width` x `height` surface.
    pub fn new(config: ParticleConfig, width: u32, height: u32) -> Self {
        let mut rng = Rng::new(config.seed_or_default());
        let field = ParticleField::generate(&mut rng, &config, width as f32, height as f32);
        Self {
            config,
            field,
            pointer: PointerState::new(),
            rng,
        }
    }

    /// Size `surface` to `width` x `height` and generate a field for it.
    pub fn attach<S: Surface + ?Sized>(config: ParticleConfig, surface: &mut S, width: u32, height: u32) -> Self {
        surface.resize(width, height);
        Self::new(config, width, height)
    }

    /// React to a host signal.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMove { x, y } => self.pointer.moved(x, y),
            InputEvent::PointerLeave => self.pointer.left(),
            InputEvent::Resize { width, height } => self.resize(width, height),
        }
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pointer.moved(x, y);
    }

    pub fn pointer_leave(&mut self) {
        self.pointer.left();
    }

    /// Throw the field away and generate a new one for the new size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.field
            .regenerate(&mut self.rng, &self.config, width as f32, height as f32);
    }

    /// Resize `surface` (wiping it) and regenerate the field.
    pub fn resize_surface<S: Surface + ?Sized>(&mut self, surface: &mut S, width: u32, height: u32) {
        surface.resize(width, height);
        self.resize(width, height);
    }

    /// Advance every particle by one frame.
    pub fn update(&mut self) {
        step_field(&mut self.field, self.pointer.position(), &self.config);
    }

    /// Draw the current state.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        render_field(&self.field, &self.config, surface);
    }

    /// One display frame: update, then render.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.update();
        self.render(surface);
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn particles(&self) -> &[Particle] {
        self.field.particles()
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer.position()
    }
}
