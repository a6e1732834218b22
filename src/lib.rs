#![cfg(target_arch = "wasm32")]
use crate::audio::AudioRig;
use crate::core::{LevelMeter, OrbConfig, OrbState};
use crate::render::Backend;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

// Autoplay policy keeps the context suspended until a user gesture; the
// start overlay's OK button provides one.
fn wire_overlay_buttons(rig: &Rc<RefCell<AudioRig>>) {
    for id in ["overlay-ok", "overlay-close"] {
        let rig = rig.clone();
        if let Some(document) = dom::window_document() {
            dom::add_click_listener(&document.clone(), id, move || {
                _ = rig.borrow().chain.ctx.resume();
                if let Some(d) = dom::window_document() {
                    overlay::hide_start(&d);
                }
            });
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("celestial-orb starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("orb-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #orb-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let svg_root = document
        .get_element_by_id("orb-svg")
        .ok_or_else(|| anyhow::anyhow!("missing #orb-svg"))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let chain = audio::build_audio_chain()
        .map_err(|_| anyhow::anyhow!("audio graph init failed"))?;
    let rig = Rc::new(RefCell::new(
        AudioRig::new(chain).map_err(|_| anyhow::anyhow!("audio rig init failed"))?,
    ));

    let state = Rc::new(RefCell::new(OrbState::Idle));
    let backend = Rc::new(RefCell::new(Backend::Canvas));
    let paused = Rc::new(RefCell::new(false));
    render::set_active(&document, *backend.borrow());

    let raster = render::CanvasRenderer::new(&canvas)
        .map_err(|_| anyhow::anyhow!("canvas renderer init failed"))?;
    let vector = render::SvgScene::build(&document, &svg_root)
        .map_err(|e| anyhow::anyhow!("svg scene build failed: {:?}", e))?;
    vector.apply_state_colors(&OrbConfig::for_state(OrbState::Idle, 0.0, 0.0));

    wire_overlay_buttons(&rig);
    events::wire_controls(events::ControlWiring {
        document: document.clone(),
        rig: rig.clone(),
        state: state.clone(),
        backend: backend.clone(),
    });
    events::wire_global_keydown(
        document.clone(),
        rig.clone(),
        state.clone(),
        backend.clone(),
        paused.clone(),
    );
    events::refresh_hint(&document, &state, &backend, &rig);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        state,
        backend,
        paused,
        rig,
        document,
        raster,
        vector,
        meter: LevelMeter::default(),
        clock: 0.0,
        last_instant: Instant::now(),
        colored_state: OrbState::Idle,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
