//! Per-frame particle motion: drift, pointer repulsion, boundary handling.

use glam::Vec2;

use crate::api::config::{BoundaryMode, ParticleConfig};
use crate::core::field::ParticleField;
use crate::core::particle::Particle;

/// Displacement that pushes a particle at `position` away from `pointer`.
///
/// Magnitude is `strength * (1 - d / radius)` for `d < radius` and zero
/// otherwise. A particle exactly under the pointer is pushed towards -x.
pub fn repulsion(position: Vec2, pointer: Vec2, radius: f32, strength: f32) -> Vec2 {
    let to_pointer = pointer - position;
    let distance = to_pointer.length();
    if radius <= 0.0 || distance >= radius {
        return Vec2::ZERO;
    }
    let force = (radius - distance) / radius;
    let direction = if distance > 0.0 {
        to_pointer / distance
    } else {
        Vec2::X
    };
    -direction * force * strength
}

/// Flip the velocity on every axis whose position is outside `[0, size]`.
/// In clamp mode the position is pulled back in the same frame.
pub fn apply_boundary(particle: &mut Particle, size: Vec2, mode: BoundaryMode) {
    if particle.position.x < 0.0 || particle.position.x > size.x {
        particle.velocity.x = -particle.velocity.x;
    }
    if particle.position.y < 0.0 || particle.position.y > size.y {
        particle.velocity.y = -particle.velocity.y;
    }
    if mode == BoundaryMode::Clamp {
        particle.position = particle.position.clamp(Vec2::ZERO, size);
    }
}

/// Advance one particle by one frame.
pub fn step_particle(particle: &mut Particle, size: Vec2, pointer: Option<Vec2>, config: &ParticleConfig) {
    particle.position += particle.velocity;

    if config.pointer_repulsion {
        if let Some(pointer) = pointer {
            particle.position += repulsion(
                particle.position,
                pointer,
                config.interaction_radius,
                config.repulsion_strength,
            );
        }
    }

    apply_boundary(particle, size, config.boundary);
}

/// Advance every particle in the field by one frame.
pub fn step_field(field: &mut ParticleField, pointer: Option<Vec2>, config: &ParticleConfig) {
    let size = field.size();
    for particle in field.particles_mut() {
        step_particle(particle, size, pointer, config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(x: f32, y: f32, vx: f32, vy: f32) -> Particle {
        Particle::new(Vec2::new(x, y), Vec2::new(vx, vy), 2.0, 0.5)
    }

    #[test]
    fn drift_adds_velocity() {
        let mut p = particle(100.0, 100.0, 0.25, -0.125);
        step_particle(&mut p, Vec2::new(800.0, 600.0), None, &ParticleConfig::rich());
        assert_eq!(p.position, Vec2::new(100.25, 99.875));
        assert_eq!(p.velocity, Vec2::new(0.25, -0.125));
    }

    #[test]
    fn crossing_right_edge_flips_only_vx() {
        let mut p = particle(799.9, 300.0, 0.25, 0.1);
        step_particle(&mut p, Vec2::new(800.0, 600.0), None, &ParticleConfig::rich());
        assert_eq!(p.velocity, Vec2::new(-0.25, 0.1));
        assert_eq!(p.position.x, 800.0);
    }

    #[test]
    fn crossing_left_edge_flips_only_vx() {
        let mut p = particle(0.1, 300.0, -0.25, -0.1);
        step_particle(&mut p, Vec2::new(800.0, 600.0), None, &ParticleConfig::rich());
        assert_eq!(p.velocity, Vec2::new(0.25, -0.1));
        assert_eq!(p.position.x, 0.0);
    }

    #[test]
    fn crossing_bottom_edge_flips_only_vy() {
        let mut p = particle(400.0, 599.9, 0.1, 0.25);
        step_particle(&mut p, Vec2::new(800.0, 600.0), None, &ParticleConfig::rich());
        assert_eq!(p.velocity, Vec2::new(0.1, -0.25));
        assert_eq!(p.position.y, 600.0);
    }

    #[test]
    fn reflect_mode_allows_transient_excursion() {
        let config = ParticleConfig::simple();
        let mut p = particle(0.1, 300.0, -0.25, 0.0);
        step_particle(&mut p, Vec2::new(800.0, 600.0), None, &config);
        assert!(p.position.x < 0.0);
        assert_eq!(p.velocity.x, 0.25);
        // The reflected velocity brings it back next frame.
        step_particle(&mut p, Vec2::new(800.0, 600.0), None, &config);
        assert!(p.position.x >= 0.0);
    }

    #[test]
    fn repulsion_is_zero_outside_radius() {
        let pointer = Vec2::new(0.0, 0.0);
        assert_eq!(repulsion(Vec2::new(150.0, 0.0), pointer, 150.0, 2.0), Vec2::ZERO);
        assert_eq!(repulsion(Vec2::new(300.0, 0.0), pointer, 150.0, 2.0), Vec2::ZERO);
    }

    #[test]
    fn repulsion_points_away_from_pointer() {
        let d = repulsion(Vec2::new(110.0, 100.0), Vec2::new(100.0, 100.0), 150.0, 2.0);
        assert!(d.x > 0.0);
        assert_eq!(d.y, 0.0);
    }

    #[test]
    fn repulsion_falloff_strictly_decreasing() {
        let pointer = Vec2::ZERO;
        let mut last = f32::INFINITY;
        for step in 0..150 {
            let d = step as f32;
            let magnitude = repulsion(Vec2::new(d, 0.0), pointer, 150.0, 2.0).length();
            assert!(magnitude < last, "not decreasing at d={}", d);
            last = magnitude;
        }
        let near_edge = repulsion(Vec2::new(149.99, 0.0), pointer, 150.0, 2.0).length();
        assert!(near_edge < 1e-3);
    }

    #[test]
    fn repulsion_at_pointer_goes_negative_x() {
        let d = repulsion(Vec2::new(50.0, 50.0), Vec2::new(50.0, 50.0), 150.0, 2.0);
        assert_eq!(d, Vec2::new(-2.0, 0.0));
    }

    #[test]
    fn repulsion_disabled_ignores_pointer() {
        let config = ParticleConfig::rich().with_pointer_repulsion(false);
        let mut p = particle(100.0, 100.0, 0.0, 0.0);
        step_particle(&mut p, Vec2::new(800.0, 600.0), Some(Vec2::new(101.0, 100.0)), &config);
        assert_eq!(p.position, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn clamp_keeps_field_in_bounds_under_pointer_pressure() {
        let config = ParticleConfig::rich();
        let mut p = particle(1.0, 1.0, -0.25, -0.25);
        for _ in 0..100 {
            step_particle(&mut p, Vec2::new(800.0, 600.0), Some(Vec2::new(5.0, 5.0)), &config);
            assert!(p.in_bounds(800.0, 600.0), "escaped to {:?}", p.position);
        }
    }
}
