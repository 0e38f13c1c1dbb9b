use crate::api::config::{ColorMode, ParticleConfig};
use crate::core::field::ParticleField;
use crate::core::particle::Particle;
use crate::renderer::traits::Surface;
use crate::systems::color::{positional_hue, Rgba};
use crate::systems::connections::for_each_connection;

/// Fill color for a particle on a surface of `width`.
pub fn particle_color(particle: &Particle, width: f32, mode: &ColorMode) -> Rgba {
    match mode {
        ColorMode::Fixed { color } => *color,
        ColorMode::PositionalHue {
            hue_start,
            hue_span,
            saturation,
            lightness,
        } => {
            let hue = positional_hue(particle.position.x, width, *hue_start, *hue_span);
            Rgba::from_hsla(hue, *saturation, *lightness, particle.opacity)
        }
    }
}

/// Draw one frame: clear, every particle, then the connection lines.
pub fn render_field<S: Surface + ?Sized>(field: &ParticleField, config: &ParticleConfig, surface: &mut S) {
    surface.clear();

    let width = field.width();
    for particle in field.iter() {
        let color = particle_color(particle, width, &config.color_mode);
        surface.fill_circle(particle.position, particle.radius, color);
    }

    if config.connections {
        let line_width = config.connection_width;
        let base = config.connection_color;
        for_each_connection(
            field.particles(),
            config.connection_threshold,
            config.connection_max_alpha,
            |c| surface.stroke_line(c.from, c.to, line_width, base.with_alpha(c.alpha)),
        );
    }
}
