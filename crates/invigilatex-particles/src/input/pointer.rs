use glam::Vec2;

/// Last known pointer position. `None` until the first move and after the
/// pointer leaves the surface.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    position: Option<Vec2>,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn moved(&mut self, x: f32, y: f32) {
        self.position = Some(Vec2::new(x, y));
    }

    pub fn left(&mut self) {
        self.position = None;
    }

    pub fn position(&self) -> Option<Vec2> {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_then_leave() {
        let mut p = PointerState::new();
        assert_eq!(p.position(), None);
        p.moved(10.0, 20.0);
        assert_eq!(p.position(), Some(Vec2::new(10.0, 20.0)));
        p.left();
        assert_eq!(p.position(), None);
    }
}
