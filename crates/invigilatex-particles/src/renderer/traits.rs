//! Render target contract.
//!
//! The simulation never touches a platform API directly. The web bridge
//! implements [`Surface`] over a Canvas 2D context; tests use
//! [`DrawList`](super::draw_list::DrawList).

use glam::Vec2;

use crate::systems::color::Rgba;

/// A 2D raster target with mutable pixel dimensions.
pub trait Surface {
    /// Current size in px.
    fn size(&self) -> (u32, u32);

    /// Change the backing size. Implementations may discard existing pixels.
    fn resize(&mut self, width: u32, height: u32);

    /// Clear the whole surface to transparent.
    fn clear(&mut self);

    /// Fill a circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Stroke a straight line segment.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn size(&self) -> (u32, u32) {
        (**self).size()
    }

    fn resize(&mut self, width: u32, height: u32) {
        (**self).resize(width, height)
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        (**self).fill_circle(center, radius, color)
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        (**self).stroke_line(from, to, width, color)
    }
}
