//! Browser bootstrap: canvas lookup, keydown listener, animation loop
//!
//! The world is shared by the frame callback and the key callback as
//! `Rc<RefCell<_>>`. Both run on the single JS thread and never overlap,
//! so a key press is simply visible to the next frame.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, Window};

use crate::domain::SceneConfig;
use crate::render::{CanvasSurface, Surface};
use crate::simulation::WorldCore;

/// Canvas id used by `start()`
pub const DEFAULT_CANVAS_ID: &str = "gameCanvas";

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Run the default ragdoll on `<canvas id="gameCanvas">`
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    start_on(DEFAULT_CANVAS_ID)
}

/// Run the default ragdoll on the canvas with the given id
#[wasm_bindgen(js_name = startOn)]
pub fn start_on(canvas_id: &str) -> Result<(), JsValue> {
    run(canvas_id, &SceneConfig::ragdoll())
}

/// Run a JSON-described scene on the canvas with the given id
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(canvas_id: &str, config_json: &str) -> Result<(), JsValue> {
    let config = SceneConfig::from_json(config_json).map_err(|e| {
        console_error!("scene config rejected: {}", e);
        JsValue::from_str(&e)
    })?;
    run(canvas_id, &config)
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

fn request_animation_frame(callback: &FrameCallback) -> Result<i32, JsValue> {
    window()?.request_animation_frame(callback.as_ref().unchecked_ref())
}

fn run(canvas_id: &str, config: &SceneConfig) -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    crate::set_panic_hook();

    let document = window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let surface = CanvasSurface::from_element_id(&document, canvas_id)?;

    let world = WorldCore::from_config(config, surface.width() as u32, surface.height() as u32)
        .map_err(|e| JsValue::from_str(&e))?;
    console_log!(
        "ragdoll on #{}: {} particles, {} joints",
        canvas_id,
        world.particle_count(),
        world.joint_count()
    );

    let world = Rc::new(RefCell::new(world));
    install_key_listener(&document, Rc::clone(&world))?;
    start_loop(world, surface)
}

fn install_key_listener(
    document: &web_sys::Document,
    world: Rc<RefCell<WorldCore>>,
) -> Result<(), JsValue> {
    let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        if world.borrow_mut().handle_key(&event.key()) {
            // Keep arrows from scrolling the page.
            event.prevent_default();
        }
    });
    document.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
    // Lives for the page.
    on_key.forget();
    Ok(())
}

fn start_loop(world: Rc<RefCell<WorldCore>>, mut surface: CanvasSurface) -> Result<(), JsValue> {
    // The callback re-schedules itself, so it has to own a handle to itself.
    let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let next = Rc::clone(&slot);

    // Log when frames start failing and when they recover, not every frame.
    let mut failing = false;
    *slot.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
        match world.borrow_mut().tick_at(&mut surface, timestamp) {
            Err(e) if !failing => {
                console_error!("frame failed: {}", e);
                failing = true;
            }
            Ok(()) if failing => {
                console_log!("frames drawing again");
                failing = false;
            }
            _ => {}
        }
        if let Some(callback) = next.borrow().as_ref() {
            if let Err(e) = request_animation_frame(callback) {
                console_error!("requestAnimationFrame failed: {:?}", e);
            }
        }
    }));

    let scheduled = match slot.borrow().as_ref() {
        Some(callback) => request_animation_frame(callback).map(|_| ()),
        None => Err(JsValue::from_str("frame callback missing")),
    };
    scheduled
}
