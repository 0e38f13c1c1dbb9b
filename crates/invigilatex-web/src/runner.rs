use invigilatex_particles::{
    FrameLoop, InputEvent, InputQueue, ParticleConfig, ParticleSystem, Surface,
};

/// Generic runner that wires a [`ParticleSystem`] to a surface and a frame loop.
///
/// The browser-facing handle owns one `SurfaceRunner<CanvasSurface>` behind an
/// `Rc<RefCell<_>>` shared with the DOM listeners and the animation-frame
/// callback. Being generic over [`Surface`] keeps it testable off the browser.
pub struct SurfaceRunner<S: Surface> {
    system: ParticleSystem,
    surface: S,
    input: InputQueue,
    frame_loop: FrameLoop,
}

impl<S: Surface> SurfaceRunner<S> {
    /// Size `surface` to the viewport and generate the field.
    pub fn new(config: ParticleConfig, mut surface: S, width: u32, height: u32) -> Self {
        let system = ParticleSystem::attach(config, &mut surface, width, height);
        Self {
            system,
            surface,
            input: InputQueue::new(),
            frame_loop: FrameLoop::new(),
        }
    }

    /// Queue a host signal; it is applied at the start of the next tick.
    /// A newer pointer event or resize replaces a pending one, so events
    /// arriving while the loop is stopped do not pile up.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    pub fn start(&mut self) -> bool {
        self.frame_loop.start()
    }

    pub fn stop(&mut self) -> bool {
        self.frame_loop.stop()
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }

    pub fn frames(&self) -> u64 {
        self.frame_loop.frames()
    }

    /// Run one frame: apply queued input, update, render.
    /// Returns false once the loop is stopped; the caller must not reschedule then.
    pub fn tick(&mut self) -> bool {
        if !self.frame_loop.begin_frame() {
            return false;
        }

        for event in self.input.drain() {
            match event {
                InputEvent::Resize { width, height } => {
                    self.system.resize_surface(&mut self.surface, width, height);
                }
                other => self.system.handle_event(other),
            }
        }

        self.system.frame(&mut self.surface);
        true
    }

    pub fn system(&self) -> &ParticleSystem {
        &self.system
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invigilatex_particles::DrawList;

    fn runner() -> SurfaceRunner<DrawList> {
        SurfaceRunner::new(
            ParticleConfig::rich().with_seed(77),
            DrawList::new(0, 0),
            800,
            600,
        )
    }

    #[test]
    fn new_sizes_surface() {
        let r = runner();
        assert_eq!(r.surface().size(), (800, 600));
        assert_eq!(r.system().particles().len(), 80);
    }

    #[test]
    fn tick_does_nothing_until_started() {
        let mut r = runner();
        assert!(!r.tick());
        assert!(r.surface().commands().is_empty());
        assert!(r.start());
        assert!(r.tick());
        assert_eq!(r.surface().circle_count(), 80);
        assert_eq!(r.frames(), 1);
    }

    #[test]
    fn stop_ends_loop_on_next_tick() {
        let mut r = runner();
        r.start();
        assert!(r.tick());
        assert!(r.stop());
        assert!(!r.is_running());
        assert!(!r.tick());
        assert_eq!(r.frames(), 1);
    }

    #[test]
    fn queued_resize_resizes_surface_and_field() {
        let mut r = runner();
        r.start();
        r.push_input(InputEvent::Resize { width: 300, height: 200 });
        r.tick();
        assert_eq!(r.surface().size(), (300, 200));
        assert_eq!(r.system().particles().len(), 80);
        assert!(r
            .system()
            .particles()
            .iter()
            .all(|p| p.in_bounds(300.0, 200.0)));
    }

    #[test]
    fn queued_pointer_events_reach_system() {
        let mut r = runner();
        r.start();
        r.push_input(InputEvent::PointerMove { x: 5.0, y: 6.0 });
        r.tick();
        assert!(r.system().pointer().is_some());
        r.push_input(InputEvent::PointerLeave);
        r.tick();
        assert!(r.system().pointer().is_none());
    }

    #[test]
    fn input_while_stopped_keeps_only_latest() {
        let mut r = runner();
        r.start();
        r.tick();
        r.stop();
        for i in 0..100_000u32 {
            r.push_input(InputEvent::PointerMove { x: (i % 800) as f32, y: 10.0 });
        }
        r.push_input(InputEvent::Resize { width: 640, height: 480 });
        r.push_input(InputEvent::Resize { width: 320, height: 240 });
        assert_eq!(r.input.len(), 2);

        r.start();
        assert!(r.tick());
        assert_eq!(r.input.len(), 0);
        assert_eq!(r.system().pointer(), Some(glam::Vec2::new(799.0, 10.0)));
        assert_eq!(r.surface().size(), (320, 240));
    }
}
