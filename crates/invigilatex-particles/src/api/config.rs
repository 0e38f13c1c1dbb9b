use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::systems::color::Rgba;

/// How particle fill colors are chosen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColorMode {
    /// Every particle uses the same translucent color; per-particle opacity is ignored.
    Fixed { color: Rgba },
    /// Hue follows the particle's horizontal position, alpha is the particle's opacity.
    PositionalHue {
        hue_start: f32,
        hue_span: f32,
        saturation: f32,
        lightness: f32,
    },
}

impl Default for ColorMode {
    fn default() -> Self {
        ColorMode::PositionalHue {
            hue_start: 240.0,
            hue_span: 60.0,
            saturation: 70.0,
            lightness: 60.0,
        }
    }
}

/// What happens when a particle leaves the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryMode {
    /// Reflect the velocity and clamp the position back inside in the same frame.
    #[default]
    Clamp,
    /// Reflect the velocity only; the particle may sit outside for a frame.
    Reflect,
}

/// Configuration for a particle background. Missing JSON fields fall back to
/// the [`ParticleConfig::rich`] values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Number of particles in the field (default: 80).
    pub particle_count: usize,
    /// Maximum absolute velocity per axis, in px per frame (default: 0.25).
    pub max_speed: f32,
    /// Min/max particle radius in px (default: 1..3).
    pub radius_range: (f32, f32),
    /// Min/max particle opacity (default: 0.2..0.7).
    pub opacity_range: (f32, f32),
    /// Push particles away from the pointer.
    pub pointer_repulsion: bool,
    /// Distance within which the pointer repels (default: 150).
    pub interaction_radius: f32,
    /// Displacement at zero distance, in px per frame (default: 2).
    pub repulsion_strength: f32,
    /// Draw lines between nearby particles.
    pub connections: bool,
    /// Maximum distance for a connection line (default: 120).
    pub connection_threshold: f32,
    /// Line alpha at zero distance (default: 0.15).
    pub connection_max_alpha: f32,
    pub connection_color: Rgba,
    pub connection_width: f32,
    pub color_mode: ColorMode,
    pub boundary: BoundaryMode,
    /// Fixed RNG seed. `None` lets the host pick one.
    pub seed: Option<u64>,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self::rich()
    }
}

impl ParticleConfig {
    pub const DEFAULT_SEED: u64 = 42;
    /// Largest accepted `particle_count`. The connection pass is O(N²).
    pub const MAX_PARTICLES: usize = 10_000;

    /// Full effect: 80 particles, pointer repulsion, connection lines, positional hue.
    pub fn rich() -> Self {
        Self {
            particle_count: 80,
            max_speed: 0.25,
            radius_range: (1.0, 3.0),
            opacity_range: (0.2, 0.7),
            pointer_repulsion: true,
            interaction_radius: 150.0,
            repulsion_strength: 2.0,
            connections: true,
            connection_threshold: 120.0,
            connection_max_alpha: 0.15,
            connection_color: Rgba::VIOLET,
            connection_width: 1.0,
            color_mode: ColorMode::default(),
            boundary: BoundaryMode::Clamp,
            seed: None,
        }
    }

    /// Lightweight effect: 50 drifting particles in one color, no pointer, no lines.
    pub fn simple() -> Self {
        Self {
            particle_count: 50,
            pointer_repulsion: false,
            connections: false,
            color_mode: ColorMode::Fixed {
                color: Rgba::VIOLET.with_alpha(0.5),
            },
            boundary: BoundaryMode::Reflect,
            ..Self::rich()
        }
    }

    // -- Builder pattern --

    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_pointer_repulsion(mut self, enabled: bool) -> Self {
        self.pointer_repulsion = enabled;
        self
    }

    pub fn with_connections(mut self, enabled: bool) -> Self {
        self.connections = enabled;
        self
    }

    pub fn with_boundary(mut self, boundary: BoundaryMode) -> Self {
        self.boundary = boundary;
        self
    }

    /// Parse a config from a JSON string and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count > Self::MAX_PARTICLES {
            return Err(ConfigError::invalid(
                "particle_count",
                format!("{} exceeds the limit of {}", self.particle_count, Self::MAX_PARTICLES),
            ));
        }
        non_negative("max_speed", self.max_speed)?;
        non_negative("interaction_radius", self.interaction_radius)?;
        non_negative("repulsion_strength", self.repulsion_strength)?;
        non_negative("connection_threshold", self.connection_threshold)?;
        non_negative("connection_width", self.connection_width)?;
        unit_interval("connection_max_alpha", self.connection_max_alpha)?;

        let (r_min, r_max) = self.radius_range;
        non_negative("radius_range", r_min)?;
        non_negative("radius_range", r_max)?;
        if r_min > r_max {
            return Err(ConfigError::invalid(
                "radius_range",
                format!("min {} is greater than max {}", r_min, r_max),
            ));
        }

        let (o_min, o_max) = self.opacity_range;
        unit_interval("opacity_range", o_min)?;
        unit_interval("opacity_range", o_max)?;
        if o_min > o_max {
            return Err(ConfigError::invalid(
                "opacity_range",
                format!("min {} is greater than max {}", o_min, o_max),
            ));
        }

        match &self.color_mode {
            ColorMode::Fixed { color } => unit_interval("color_mode.color.a", color.a)?,
            ColorMode::PositionalHue {
                hue_start,
                hue_span,
                saturation,
                lightness,
            } => {
                finite("color_mode.hue_start", *hue_start)?;
                finite("color_mode.hue_span", *hue_span)?;
                percent("color_mode.saturation", *saturation)?;
                percent("color_mode.lightness", *lightness)?;
            }
        }
        Ok(())
    }

    /// Seed to use when the host does not supply one.
    pub fn seed_or_default(&self) -> u64 {
        self.seed.unwrap_or(Self::DEFAULT_SEED)
    }
}

fn finite(field: &'static str, v: f32) -> Result<(), ConfigError> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("{} is not finite", v)))
    }
}

fn non_negative(field: &'static str, v: f32) -> Result<(), ConfigError> {
    finite(field, v)?;
    if v < 0.0 {
        return Err(ConfigError::invalid(field, format!("{} is negative", v)));
    }
    Ok(())
}

fn unit_interval(field: &'static str, v: f32) -> Result<(), ConfigError> {
    finite(field, v)?;
    if !(0.0..=1.0).contains(&v) {
        return Err(ConfigError::invalid(field, format!("{} is outside [0, 1]", v)));
    }
    Ok(())
}

fn percent(field: &'static str, v: f32) -> Result<(), ConfigError> {
    finite(field, v)?;
    if !(0.0..=100.0).contains(&v) {
        return Err(ConfigError::invalid(field, format!("{} is outside [0, 100]", v)));
    }
    Ok(())
}
