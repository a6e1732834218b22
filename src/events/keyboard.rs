use crate::audio::AudioRig;
use crate::constants::VOLUME_STEP;
use crate::core::OrbState;
use crate::events::controls::refresh_hint;
use crate::overlay;
use crate::render::{self, Backend};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn backend_for_key(key: &str) -> Option<Backend> {
    match key {
        "c" | "C" => Some(Backend::Canvas),
        "v" | "V" => Some(Backend::Svg),
        _ => None,
    }
}

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    document: &web::Document,
    rig: &Rc<RefCell<AudioRig>>,
    state: &Rc<RefCell<OrbState>>,
    backend: &Rc<RefCell<Backend>>,
    paused: &Rc<RefCell<bool>>,
) {
    let key = ev.key();
    // Digits preview states without touching the audio harness
    if let Some(preview) = OrbState::for_digit(&key) {
        *state.borrow_mut() = preview;
        refresh_hint(document, state, backend, rig);
        return;
    }
    if let Some(which) = backend_for_key(&key) {
        *backend.borrow_mut() = which;
        render::set_active(document, which);
        refresh_hint(document, state, backend, rig);
        return;
    }
    match key.as_str() {
        " " => {
            let mut p = paused.borrow_mut();
            *p = !*p;
            log::info!("[keys] paused={}", *p);
            ev.prevent_default();
        }
        "m" | "M" => {
            rig.borrow_mut().toggle_mute();
            refresh_hint(document, state, backend, rig);
        }
        "ArrowUp" => {
            rig.borrow_mut().step_volume(VOLUME_STEP);
            refresh_hint(document, state, backend, rig);
            ev.prevent_default();
        }
        "ArrowDown" => {
            rig.borrow_mut().step_volume(-VOLUME_STEP);
            refresh_hint(document, state, backend, rig);
            ev.prevent_default();
        }
        "h" | "H" => {
            overlay::toggle(document);
        }
        "Enter" => {
            if document.fullscreen_element().is_some() {
                document.exit_fullscreen();
            } else if let Some(el) = document.document_element() {
                _ = el.request_fullscreen();
            }
        }
        "r" | "R" => {
            let n = OrbState::ALL.len();
            let i = ((js_sys::Math::random() * n as f64).floor() as usize).min(n - 1);
            *state.borrow_mut() = OrbState::ALL[i];
            refresh_hint(document, state, backend, rig);
        }
        _ => {}
    }
}

pub fn wire_global_keydown(
    document: web::Document,
    rig: Rc<RefCell<AudioRig>>,
    state: Rc<RefCell<OrbState>>,
    backend: Rc<RefCell<Backend>>,
    paused: Rc<RefCell<bool>>,
) {
    let target: web::EventTarget = document.clone().into();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &document, &rig, &state, &backend, &paused);
    }) as Box<dyn FnMut(web::KeyboardEvent)>);
    _ = target.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
