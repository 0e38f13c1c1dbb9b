use std::cell::{Cell, RefCell};
use std::rc::Rc;

use invigilatex_particles::InputEvent;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlCanvasElement, MouseEvent, Window};

use crate::canvas::CanvasSurface;
use crate::runner::SurfaceRunner;
use crate::{install_hooks, parse_config, viewport_size};

type Shared = Rc<RefCell<SurfaceRunner<CanvasSurface>>>;
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Particle background attached to one canvas.
///
/// Listeners go on the injected event target, not on globals, and are all
/// removed by [`ParticleBackground::detach`] (also run on drop).
#[wasm_bindgen]
pub struct ParticleBackground {
    runner: Shared,
    window: Window,
    target: EventTarget,
    listeners: Vec<(&'static str, Closure<dyn FnMut(Event)>)>,
    frame: FrameCallback,
    pending: Rc<Cell<Option<i32>>>,
    detached: bool,
}

#[wasm_bindgen]
impl ParticleBackground {
    /// Attach to `canvas`, listening for resize/pointer events on `events`
    /// (normally `window`). `config_json` is an optional `ParticleConfig` JSON.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        events: EventTarget,
        config_json: Option<String>,
    ) -> Result<ParticleBackground, JsValue> {
        install_hooks();
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window object"))?;
        let config = parse_config(config_json.as_deref())?;
        let (width, height) = viewport_size(&window);

        let surface = CanvasSurface::new(canvas)?;
        let runner = Rc::new(RefCell::new(SurfaceRunner::new(config, surface, width, height)));

        let mut background = ParticleBackground {
            runner,
            window,
            target: events,
            listeners: Vec::new(),
            frame: Rc::new(RefCell::new(None)),
            pending: Rc::new(Cell::new(None)),
            detached: false,
        };
        background.register_listeners()?;
        log::info!("particle background attached ({}x{})", width, height);
        Ok(background)
    }

    /// Look up a canvas by element id, listen on `window`, and start animating.
    pub fn attach(canvas_id: &str, config_json: Option<String>) -> Result<ParticleBackground, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window object"))?;
        let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("canvas '{}' not found", canvas_id)))?
            .dyn_into()
            .map_err(|_| JsValue::from_str(&format!("element '{}' is not a canvas", canvas_id)))?;

        let mut background = Self::new(canvas, window.into(), config_json)?;
        background.start()?;
        Ok(background)
    }

    /// Begin (or resume) the animation-frame loop.
    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.detached {
            return Err(JsValue::from_str("particle background is detached"));
        }
        if !self.runner.borrow_mut().start() {
            return Ok(());
        }

        let runner = self.runner.clone();
        let frame = self.frame.clone();
        let pending = self.pending.clone();
        let window = self.window.clone();
        *self.frame.borrow_mut() = Some(Closure::wrap(Box::new(move |_timestamp: f64| {
            pending.set(None);
            if !runner.borrow_mut().tick() {
                return;
            }
            if let Some(callback) = frame.borrow().as_ref() {
                match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                    Ok(id) => pending.set(Some(id)),
                    Err(err) => log::warn!("requestAnimationFrame failed: {:?}", err),
                }
            }
        }) as Box<dyn FnMut(f64)>));

        self.schedule_first_frame()
    }

    /// Stop the loop. No frame runs after this returns; `start()` resumes.
    pub fn stop(&mut self) {
        self.runner.borrow_mut().stop();
        if let Some(id) = self.pending.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                log::warn!("cancelAnimationFrame failed: {:?}", err);
            }
        }
        // Breaks the callback's self-reference.
        self.frame.borrow_mut().take();
    }

    /// Stop the loop and remove every listener. Terminal.
    pub fn detach(&mut self) {
        if self.detached {
            return;
        }
        self.stop();
        for (kind, listener) in self.listeners.drain(..) {
            if let Err(err) = self
                .target
                .remove_event_listener_with_callback(kind, listener.as_ref().unchecked_ref())
            {
                log::warn!("failed to remove '{}' listener: {:?}", kind, err);
            }
        }
        self.detached = true;
        log::info!("particle background detached");
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.runner.borrow().is_running()
    }

    /// Frames rendered so far.
    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> f64 {
        self.runner.borrow().frames() as f64
    }

    #[wasm_bindgen(getter, js_name = particleCount)]
    pub fn particle_count(&self) -> u32 {
        self.runner.borrow().system().particles().len() as u32
    }
}

impl ParticleBackground {
    fn schedule_first_frame(&self) -> Result<(), JsValue> {
        let frame = self.frame.borrow();
        let callback = frame
            .as_ref()
            .ok_or_else(|| JsValue::from_str("frame callback missing"))?;
        let id = self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())?;
        self.pending.set(Some(id));
        Ok(())
    }

    fn register_listeners(&mut self) -> Result<(), JsValue> {
        let runner = self.runner.clone();
        let window = self.window.clone();
        self.listen("resize", move |_event: Event| {
            let (width, height) = viewport_size(&window);
            runner
                .borrow_mut()
                .push_input(InputEvent::Resize { width, height });
        })?;

        let runner = self.runner.clone();
        self.listen("mousemove", move |event: Event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                runner.borrow_mut().push_input(InputEvent::PointerMove {
                    x: mouse.client_x() as f32,
                    y: mouse.client_y() as f32,
                });
            }
        })?;

        let runner = self.runner.clone();
        self.listen("mouseout", move |event: Event| {
            // mouseout bubbles from every child element; only a null
            // relatedTarget means the pointer left the page.
            let left_page = event
                .dyn_ref::<MouseEvent>()
                .map_or(true, |mouse| mouse.related_target().is_none());
            if left_page {
                runner.borrow_mut().push_input(InputEvent::PointerLeave);
            }
        })?;

        Ok(())
    }

    fn listen(&mut self, kind: &'static str, handler: impl FnMut(Event) + 'static) -> Result<(), JsValue> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        self.target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        self.listeners.push((kind, closure));
        Ok(())
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        self.detach();
    }
}
