use glam::Vec2;

use super::particle::Particle;
use super::rng::Rng;
use crate::api::config::ParticleConfig;

/// The full set of particles plus the surface size they live on.
/// Regenerated wholesale on resize; no particle survives.
pub struct ParticleField {
    particles: Vec<Particle>,
    size: Vec2,
}

impl ParticleField {
    /// Generate `config.particle_count` random particles on a `width` x `height` surface.
    pub fn generate(rng: &mut Rng, config: &ParticleConfig, width: f32, height: f32) -> Self {
        let mut field = Self {
            particles: Vec::with_capacity(config.particle_count),
            size: Vec2::ZERO,
        };
        field.regenerate(rng, config, width, height);
        field
    }

    /// Build a field from explicit particles (tests, replays).
    pub fn from_particles(particles: Vec<Particle>, width: f32, height: f32) -> Self {
        Self {
            particles,
            size: Vec2::new(width, height),
        }
    }

    /// Replace every particle with a fresh random one on the new surface size.
    pub fn regenerate(&mut self, rng: &mut Rng, config: &ParticleConfig, width: f32, height: f32) {
        let width = width.max(0.0);
        let height = height.max(0.0);
        self.size = Vec2::new(width, height);
        self.particles.clear();
        self.particles
            .extend((0..config.particle_count).map(|_| Particle::random(rng, config, width, height)));
        log::debug!(
            "particle field regenerated: {} particles on {}x{}",
            self.particles.len(),
            width,
            height
        );
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }
}
