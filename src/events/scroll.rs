use crate::dom::{self, Listener};
use backdrop_core::ScrollProgress;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

pub fn read_scroll(window: &web::Window) -> ScrollProgress {
    let scroll_y = window.scroll_y().unwrap_or(0.0) as f32;
    let scroll_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f32)
        .unwrap_or(0.0);
    let (_, viewport_h) = dom::viewport_size(window);
    ScrollProgress::from_offset(scroll_y, scroll_height, viewport_h)
}

pub fn wire_scroll(scroll: Rc<Cell<ScrollProgress>>) -> anyhow::Result<Listener> {
    let window = dom::window()?;
    scroll.set(read_scroll(&window));
    let source = window.clone();
    Listener::new(&window, "scroll", move |_| scroll.set(read_scroll(&source)))
}
