#![cfg(target_arch = "wasm32")]
use backdrop_core::{PointerState, Scene, ScrollProgress, Variant};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::Cell;
use std::ops::ControlFlow;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod color;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod projection;
mod render;
mod splash;

use frame::{AnimationLoop, FrameContext};
use splash::Mounted;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-web loaded");
    Ok(())
}

/// Handle to a mounted backdrop, splash, typewriter or counter. Dropping it (or
/// calling `unmount`) stops the animation loop, removes every listener and
/// cancels pending timers so no completion callback can fire afterwards.
#[wasm_bindgen]
pub struct MountHandle {
    anim: Option<AnimationLoop>,
    listeners: Vec<dom::Listener>,
    teardown: Option<Box<dyn FnOnce()>>,
}

#[wasm_bindgen]
impl MountHandle {
    pub fn unmount(&mut self) {
        if let Some(anim) = self.anim.take() {
            anim.cancel();
        }
        self.listeners.clear();
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.anim.as_ref().is_some_and(AnimationLoop::is_running)
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl From<Mounted> for MountHandle {
    fn from(m: Mounted) -> Self {
        Self {
            anim: Some(m.anim),
            listeners: m.listeners,
            teardown: m.teardown,
        }
    }
}

fn to_js(e: anyhow::Error) -> JsValue {
    log::error!("mount error: {:?}", e);
    JsValue::from_str(&format!("{e:#}"))
}

/// Animate the backdrop on `<canvas id=canvas_id>`. The variant comes from
/// the canvas' `data-variant` attribute (`neural` when absent).
#[wasm_bindgen(js_name = mountBackground)]
pub fn mount_background(canvas_id: &str) -> Result<MountHandle, JsValue> {
    init_background(canvas_id).map(Into::into).map_err(to_js)
}

#[wasm_bindgen(js_name = mountBootSplash)]
pub fn mount_boot_splash(
    container_id: &str,
    on_complete: js_sys::Function,
) -> Result<MountHandle, JsValue> {
    splash::mount_boot(container_id, on_complete)
        .map(Into::into)
        .map_err(to_js)
}

#[wasm_bindgen(js_name = mountNetworkSplash)]
pub fn mount_network_splash(
    canvas_id: &str,
    on_complete: js_sys::Function,
) -> Result<MountHandle, JsValue> {
    splash::mount_network(canvas_id, on_complete)
        .map(Into::into)
        .map_err(to_js)
}

/// Cycle role titles into the element's text. An empty `roles` array keeps
/// the built-in list.
#[wasm_bindgen(js_name = mountTypewriter)]
pub fn mount_typewriter(element_id: &str, roles: js_sys::Array) -> Result<MountHandle, JsValue> {
    let roles = roles.iter().filter_map(|v| v.as_string()).collect();
    splash::mount_typewriter(element_id, roles)
        .map(Into::into)
        .map_err(to_js)
}

/// Count the element's text up to `target` over `duration_ms` (1800 ms when
/// omitted).
#[wasm_bindgen(js_name = mountCountUp)]
pub fn mount_count_up(
    element_id: &str,
    target: u32,
    duration_ms: Option<u32>,
) -> Result<MountHandle, JsValue> {
    let duration = duration_ms.map(|ms| Duration::from_millis(ms as u64));
    splash::mount_count_up(element_id, target, duration)
        .map(Into::into)
        .map_err(to_js)
}

fn variant_of(canvas: &web::HtmlCanvasElement) -> Variant {
    match canvas.get_attribute(constants::VARIANT_ATTR) {
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            log::warn!("[web] {e}; falling back to neural");
            Variant::default()
        }),
        None => Variant::default(),
    }
}

fn init_background(canvas_id: &str) -> anyhow::Result<Mounted> {
    let canvas = dom::canvas_by_id(canvas_id)?;
    let ctx = dom::context_2d(&canvas)?;
    let variant = variant_of(&canvas);

    let mut rng = StdRng::from_entropy();
    let scene = Scene::from_variant(variant, &mut rng)?;
    let buffers = scene.new_frame_buffers();

    let pointer = Rc::new(Cell::new(PointerState::CENTER));
    let scroll = Rc::new(Cell::new(ScrollProgress::TOP));
    let listeners = vec![
        dom::wire_canvas_resize(&canvas)?,
        events::wire_pointer(pointer.clone())?,
        events::wire_scroll(scroll.clone())?,
    ];

    let mut frame_ctx = FrameContext {
        scene,
        buffers,
        camera: projection::Camera::for_variant(variant),
        sprite: render::SpriteStyle::for_variant(variant),
        canvas,
        ctx,
        pointer,
        scroll,
        start: Instant::now(),
    };
    let anim = AnimationLoop::start(move || {
        frame_ctx.frame();
        ControlFlow::Continue(())
    })?;
    log::info!("[web] {} backdrop mounted on #{canvas_id}", variant.name());

    Ok(Mounted {
        anim,
        listeners,
        teardown: None,
    })
}
