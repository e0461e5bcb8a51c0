use crate::constants::*;
use crate::dom::{self, Listener};
use crate::frame::AnimationLoop;
use crate::overlay::BootOverlay;
use crate::render::{self, Surface};
use backdrop_core::constants::COUNT_UP_MS;
use backdrop_core::easing::count_up;
use backdrop_core::splash::build_network;
use backdrop_core::{
    BootConfig, BootPhase, BootSequencer, CompletionHook, NetworkSplash, NetworkSplashConfig,
    SplashFrame, SplashPhase, Typewriter, TypewriterConfig,
};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::ops::ControlFlow;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsValue;

/// Loop, listeners and teardown for one mounted component.
pub struct Mounted {
    pub anim: AnimationLoop,
    pub listeners: Vec<Listener>,
    pub teardown: Option<Box<dyn FnOnce()>>,
}

/// Completion flag raised by the core hook and drained after each tick, so
/// the JS callback never runs while the sequencer is borrowed.
#[derive(Clone, Default)]
struct Completion(Rc<Cell<bool>>);

impl Completion {
    fn hook(&self) -> CompletionHook {
        let flag = self.0.clone();
        CompletionHook::new(move || flag.set(true))
    }

    fn notify(&self, callback: &js_sys::Function) {
        if self.0.replace(false) {
            if let Err(e) = callback.call0(&JsValue::NULL) {
                log::error!("[splash] completion callback threw: {:?}", e);
            }
        }
    }
}

pub fn mount_boot(container_id: &str, on_complete: js_sys::Function) -> anyhow::Result<Mounted> {
    let completion = Completion::default();
    let sequencer = BootSequencer::new(
        BootConfig::default(),
        StdRng::from_entropy(),
        completion.hook(),
    )?;
    let mut overlay = BootOverlay::new(container_id)?;
    overlay.render(sequencer.state());

    let sequencer = Rc::new(RefCell::new(sequencer));
    let seq = sequencer.clone();
    let start = Instant::now();
    let mut marked_complete = false;
    let anim = AnimationLoop::start(move || {
        let (changed, phase) = {
            let mut s = seq.borrow_mut();
            (s.tick(start.elapsed()), s.phase())
        };
        if changed {
            overlay.render(seq.borrow().state());
        }
        if !marked_complete && matches!(phase, BootPhase::Complete | BootPhase::Finished) {
            overlay.mark_complete();
            marked_complete = true;
        }
        completion.notify(&on_complete);
        match phase {
            BootPhase::Booting | BootPhase::Complete => ControlFlow::Continue(()),
            BootPhase::Finished | BootPhase::Cancelled => ControlFlow::Break(()),
        }
    })?;
    log::info!("[splash] boot sequence mounted on #{container_id}");

    Ok(Mounted {
        anim,
        listeners: Vec::new(),
        teardown: Some(Box::new(move || {
            if let Ok(mut s) = sequencer.try_borrow_mut() {
                s.cancel();
            }
        })),
    })
}

pub fn mount_network(canvas_id: &str, on_complete: js_sys::Function) -> anyhow::Result<Mounted> {
    let canvas = dom::canvas_by_id(canvas_id)?;
    let ctx = dom::context_2d(&canvas)?;
    let resize = dom::wire_canvas_resize(&canvas)?;
    let document = dom::window_document();

    let surface = Surface::of(&canvas);
    let config = NetworkSplashConfig::default();
    let mut rng = StdRng::from_entropy();
    let network = build_network(&config, surface.width as f32, surface.height as f32, &mut rng)?;
    let completion = Completion::default();
    let splash = Rc::new(RefCell::new(NetworkSplash::new(
        config,
        network,
        completion.hook(),
    )?));

    let sp = splash.clone();
    let start = Instant::now();
    let mut frame = SplashFrame::default();
    let anim = AnimationLoop::start(move || {
        let elapsed = start.elapsed();
        let phase = {
            let mut s = sp.borrow_mut();
            let phase = s.tick(elapsed);
            s.frame(elapsed, &mut frame);
            phase
        };
        render::draw_splash(&ctx, Surface::of(&canvas), &frame);
        if let Some(doc) = &document {
            dom::set_text(doc, SPLASH_PROGRESS_ID, &format!("{}%", frame.progress_percent));
            if let Some(title) = doc.get_element_by_id(SPLASH_TITLE_ID) {
                dom::set_style(&title, "opacity", &format!("{:.3}", frame.title_opacity));
            }
        }
        completion.notify(&on_complete);
        match phase {
            SplashPhase::Building | SplashPhase::Dissolving => ControlFlow::Continue(()),
            SplashPhase::Finished | SplashPhase::Cancelled => ControlFlow::Break(()),
        }
    })?;
    log::info!("[splash] network splash mounted on #{canvas_id}");

    Ok(Mounted {
        anim,
        listeners: vec![resize],
        teardown: Some(Box::new(move || {
            if let Ok(mut s) = splash.try_borrow_mut() {
                s.cancel();
            }
        })),
    })
}

pub fn mount_typewriter(element_id: &str, roles: Vec<String>) -> anyhow::Result<Mounted> {
    let element = dom::element_by_id(element_id)?;
    let mut config = TypewriterConfig::default();
    if !roles.is_empty() {
        config.roles = roles;
    }
    let typewriter = Rc::new(RefCell::new(Typewriter::new(config)?));
    element.set_text_content(Some(""));

    let tw = typewriter.clone();
    let start = Instant::now();
    let anim = AnimationLoop::start(move || {
        let mut t = tw.borrow_mut();
        if t.tick(start.elapsed()) {
            element.set_text_content(Some(t.text()));
        }
        ControlFlow::Continue(())
    })?;

    Ok(Mounted {
        anim,
        listeners: Vec::new(),
        teardown: Some(Box::new(move || {
            if let Ok(mut t) = typewriter.try_borrow_mut() {
                t.cancel();
            }
        })),
    })
}

/// Count the element's text up from 0 to `target`, then stop.
pub fn mount_count_up(
    element_id: &str,
    target: u32,
    duration: Option<Duration>,
) -> anyhow::Result<Mounted> {
    let element = dom::element_by_id(element_id)?;
    let duration = duration.unwrap_or(Duration::from_millis(COUNT_UP_MS));
    element.set_text_content(Some("0"));

    let start = Instant::now();
    let mut shown = 0;
    let anim = AnimationLoop::start(move || {
        let elapsed = start.elapsed();
        let value = count_up(target, elapsed, duration);
        if value != shown {
            element.set_text_content(Some(&value.to_string()));
            shown = value;
        }
        if elapsed >= duration {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })?;

    Ok(Mounted {
        anim,
        listeners: Vec::new(),
        teardown: None,
    })
}
