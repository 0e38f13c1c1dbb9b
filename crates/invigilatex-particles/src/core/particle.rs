use glam::Vec2;

use super::rng::Rng;
use crate::api::config::ParticleConfig;

/// A single drifting point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    /// Displacement applied every frame, in px.
    pub velocity: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32, opacity: f32) -> Self {
        Self {
            position,
            velocity,
            radius,
            opacity,
        }
    }

    /// Random particle placed uniformly over a `width` x `height` surface.
    pub fn random(rng: &mut Rng, config: &ParticleConfig, width: f32, height: f32) -> Self {
        let position = Vec2::new(rng.range(0.0, width), rng.range(0.0, height));
        let velocity = Vec2::new(
            rng.range(-config.max_speed, config.max_speed),
            rng.range(-config.max_speed, config.max_speed),
        );
        let (r_min, r_max) = config.radius_range;
        let (o_min, o_max) = config.opacity_range;
        Self {
            position,
            velocity,
            radius: rng.range(r_min, r_max),
            opacity: rng.range(o_min, o_max),
        }
    }

    /// Whether the position lies inside `[0, width] x [0, height]`.
    pub fn in_bounds(&self, width: f32, height: f32) -> bool {
        (0.0..=width).contains(&self.position.x) && (0.0..=height).contains(&self.position.y)
    }
}
