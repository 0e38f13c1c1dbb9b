use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::traits::Surface;
use crate::systems::color::Rgba;

/// Per-particle data for JS-side renderers.
/// 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
    pub _pad: f32,
}

impl ParticleInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Per-line data for JS-side renderers.
/// 10 floats = 40 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct LineInstance {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub width: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
    pub _pad: f32,
}

impl LineInstance {
    pub const FLOATS: usize = 10;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// A [`Surface`] that packs draw calls into flat instance arrays, read from JS
/// through raw pointers after each tick.
pub struct InstanceBuffer {
    width: u32,
    height: u32,
    pub particles: Vec<ParticleInstance>,
    pub lines: Vec<LineInstance>,
}

impl InstanceBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_capacity(width, height, 128, 1024)
    }

    pub fn with_capacity(width: u32, height: u32, max_particles: usize, max_lines: usize) -> Self {
        Self {
            width,
            height,
            particles: Vec::with_capacity(max_particles),
            lines: Vec::with_capacity(max_lines),
        }
    }

    pub fn particle_count(&self) -> u32 {
        self.particles.len() as u32
    }

    pub fn line_count(&self) -> u32 {
        self.lines.len() as u32
    }

    /// Raw pointer to particle data for JS reads.
    pub fn particles_ptr(&self) -> *const f32 {
        self.particles.as_ptr() as *const f32
    }

    /// Raw pointer to line data for JS reads.
    pub fn lines_ptr(&self) -> *const f32 {
        self.lines.as_ptr() as *const f32
    }

    /// Particle data as flat floats.
    pub fn particle_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.particles)
    }

    /// Line data as flat floats.
    pub fn line_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.lines)
    }
}

impl Surface for InstanceBuffer {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.clear();
    }

    fn clear(&mut self) {
        self.particles.clear();
        self.lines.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        let [r, g, b, a] = color.to_floats();
        self.particles.push(ParticleInstance {
            x: center.x,
            y: center.y,
            radius,
            r,
            g,
            b,
            a,
            _pad: 0.0,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        let [r, g, b, a] = color.to_floats();
        self.lines.push(LineInstance {
            x1: from.x,
            y1: from.y,
            x2: to.x,
            y2: to.y,
            width,
            r,
            g,
            b,
            a,
            _pad: 0.0,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particle_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<ParticleInstance>(), 32);
        assert_eq!(ParticleInstance::STRIDE_BYTES, 32);
    }

    #[test]
    fn line_instance_is_10_floats() {
        assert_eq!(std::mem::size_of::<LineInstance>(), 40);
        assert_eq!(LineInstance::STRIDE_BYTES, 40);
    }

    #[test]
    fn packs_draw_calls() {
        let mut buf = InstanceBuffer::new(800, 600);
        buf.fill_circle(Vec2::new(10.0, 20.0), 2.0, Rgba::new(255, 0, 0, 0.5));
        buf.stroke_line(Vec2::ZERO, Vec2::new(5.0, 5.0), 1.0, Rgba::new(0, 0, 255, 0.1));
        assert_eq!(buf.particle_count(), 1);
        assert_eq!(buf.line_count(), 1);
        assert_eq!(&buf.particle_floats()[..4], &[10.0, 20.0, 2.0, 1.0]);
        assert_eq!(buf.line_floats().len(), LineInstance::FLOATS);

        buf.clear();
        assert_eq!(buf.particle_count(), 0);
        assert_eq!(buf.line_count(), 0);
    }
}
