use crate::audio::{self, AudioRig};
use crate::core::OrbState;
use crate::dom;
use crate::overlay;
use crate::render::{self, Backend};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Shared handles threaded through the control-button closures.
pub struct ControlWiring {
    pub document: web::Document,
    pub rig: Rc<RefCell<AudioRig>>,
    pub state: Rc<RefCell<OrbState>>,
    pub backend: Rc<RefCell<Backend>>,
}

pub fn refresh_hint(
    document: &web::Document,
    state: &Rc<RefCell<OrbState>>,
    backend: &Rc<RefCell<Backend>>,
    rig: &Rc<RefCell<AudioRig>>,
) {
    let r = rig.borrow();
    overlay::update_hint(
        document,
        state.borrow().label(),
        backend.borrow().label(),
        r.deck.file_name.as_deref(),
        r.volume,
        r.muted(),
    );
}

pub fn wire_controls(w: ControlWiring) {
    let ControlWiring {
        document,
        rig,
        state,
        backend,
    } = w;

    // Microphone toggle. Capture is awaited off the event; a denied
    // permission logs and leaves the state unchanged.
    {
        let document = document.clone();
        let rig = rig.clone();
        let state = state.clone();
        let backend = backend.clone();
        dom::add_click_listener(&document.clone(), "btn-mic", move || {
            if *state.borrow() == OrbState::Listening {
                rig.borrow_mut().stop_capture();
                *state.borrow_mut() = OrbState::Idle;
                refresh_hint(&document, &state, &backend, &rig);
            } else {
                let document = document.clone();
                let rig = rig.clone();
                let state = state.clone();
                let backend = backend.clone();
                spawn_local(async move {
                    match audio::start_capture(&rig).await {
                        Ok(()) => *state.borrow_mut() = OrbState::Listening,
                        Err(e) => log::warn!("microphone capture failed: {:?}", e),
                    }
                    refresh_hint(&document, &state, &backend, &rig);
                });
            }
        });
    }

    // Playback toggle. With no file loaded, falls through to the picker.
    {
        let document = document.clone();
        let rig = rig.clone();
        let state = state.clone();
        let backend = backend.clone();
        dom::add_click_listener(&document.clone(), "btn-play", move || {
            if *state.borrow() == OrbState::Speaking {
                rig.borrow_mut().stop_playback();
                *state.borrow_mut() = OrbState::Idle;
            } else if rig.borrow_mut().start_playback() {
                *state.borrow_mut() = OrbState::Speaking;
            } else {
                click_file_input(&document);
            }
            refresh_hint(&document, &state, &backend, &rig);
        });
    }

    // Upload button is a click-through to the hidden file input
    {
        let document = document.clone();
        dom::add_click_listener(&document.clone(), "btn-upload", move || {
            click_file_input(&document);
        });
    }

    // File selection
    {
        let document = document.clone();
        let rig = rig.clone();
        let state = state.clone();
        let backend = backend.clone();
        dom::add_change_listener(&document.clone(), "audio-file", move || {
            let input = document
                .get_element_by_id("audio-file")
                .and_then(|e| e.dyn_into::<web::HtmlInputElement>().ok());
            if let Some(file) = input.and_then(|i| i.files()).and_then(|f| f.get(0)) {
                rig.borrow_mut().load_file(&file);
                refresh_hint(&document, &state, &backend, &rig);
            }
        });
    }

    // Track end returns the orb to idle
    {
        let element = rig.borrow().deck.element.clone();
        let document = document.clone();
        let rig = rig.clone();
        let state = state.clone();
        let backend = backend.clone();
        dom::add_event_listener(&element, "ended", move || {
            *state.borrow_mut() = OrbState::Idle;
            refresh_hint(&document, &state, &backend, &rig);
        });
    }

    // Backend tabs
    for (id, which) in [("tab-canvas", Backend::Canvas), ("tab-svg", Backend::Svg)] {
        let document = document.clone();
        let rig = rig.clone();
        let state = state.clone();
        let backend = backend.clone();
        dom::add_click_listener(&document.clone(), id, move || {
            *backend.borrow_mut() = which;
            render::set_active(&document, which);
            refresh_hint(&document, &state, &backend, &rig);
        });
    }
}

fn click_file_input(document: &web::Document) {
    if let Some(input) = document
        .get_element_by_id("audio-file")
        .and_then(|e| e.dyn_into::<web::HtmlInputElement>().ok())
    {
        input.click();
    }
}
