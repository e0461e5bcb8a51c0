use crate::projection::Camera;
use crate::render::{self, SpriteStyle, Surface};
use anyhow::anyhow;
use backdrop_core::{PointerState, RenderFrame, Scene, ScrollProgress, SimulationContext};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::ops::ControlFlow;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Default)]
struct LoopState {
    closure: RefCell<Option<Closure<dyn FnMut()>>>,
    pending: Cell<Option<i32>>,
    stopped: Cell<bool>,
}

impl LoopState {
    fn request(&self) {
        let Some(w) = web::window() else { return };
        if let Some(closure) = self.closure.borrow().as_ref() {
            match w.request_animation_frame(closure.as_ref().unchecked_ref()) {
                Ok(id) => self.pending.set(Some(id)),
                Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
            }
        }
    }

    fn cancel(&self) {
        self.stopped.set(true);
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

/// `requestAnimationFrame` loop that stops when the callback breaks, when
/// [`cancel`](Self::cancel) is called, or when dropped.
///
/// The scheduled closure only holds a weak reference back to the loop, so
/// dropping the handle frees everything.
pub struct AnimationLoop {
    state: Rc<LoopState>,
}

impl AnimationLoop {
    pub fn start(mut on_frame: impl FnMut() -> ControlFlow<()> + 'static) -> anyhow::Result<Self> {
        web::window().ok_or_else(|| anyhow!("no window"))?;
        let state = Rc::new(LoopState::default());
        let weak: Weak<LoopState> = Rc::downgrade(&state);
        let closure = Closure::wrap(Box::new(move || {
            let Some(state) = weak.upgrade() else { return };
            state.pending.set(None);
            if state.stopped.get() {
                return;
            }
            match on_frame() {
                ControlFlow::Continue(()) if !state.stopped.get() => state.request(),
                _ => state.stopped.set(true),
            }
        }) as Box<dyn FnMut()>);
        *state.closure.borrow_mut() = Some(closure);
        state.request();
        Ok(Self { state })
    }

    pub fn cancel(&self) {
        self.state.cancel();
    }

    pub fn is_running(&self) -> bool {
        !self.state.stopped.get()
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.state.cancel();
    }
}

/// Per-frame state of a mounted backdrop.
pub struct FrameContext {
    pub scene: Scene,
    pub buffers: RenderFrame,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub camera: Camera,
    pub sprite: SpriteStyle,
    pub pointer: Rc<Cell<PointerState>>,
    pub scroll: Rc<Cell<ScrollProgress>>,
    pub start: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let surface = Surface::of(&self.canvas);
        if surface.is_empty() {
            return;
        }
        let sim = SimulationContext {
            time: self.start.elapsed().as_secs_f32(),
            scroll: self.scroll.get(),
            pointer: self.pointer.get(),
        };
        self.scene.frame(&sim, &mut self.buffers);
        render::draw_scene(&self.ctx, surface, &self.camera, self.sprite, &self.buffers);
    }
}
