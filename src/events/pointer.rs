use crate::dom::{self, Listener};
use backdrop_core::PointerState;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer across the whole window in normalized device
/// coordinates. The backdrop sits behind the page, so the canvas itself never
/// sees pointer events.
pub fn wire_pointer(pointer: Rc<Cell<PointerState>>) -> anyhow::Result<Listener> {
    let window = dom::window()?;
    let viewport_source = window.clone();
    Listener::new(&window, "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let (w, h) = dom::viewport_size(&viewport_source);
        let mut state = pointer.get();
        state.update_from_client(ev.client_x() as f32, ev.client_y() as f32, w, h);
        pointer.set(state);
    })
}
