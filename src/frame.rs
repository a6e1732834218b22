use crate::audio::AudioRig;
use crate::constants::CLOCK_RATE;
use crate::core::{LevelMeter, OrbConfig, OrbState};
use crate::overlay;
use crate::render::{Backend, CanvasRenderer, SvgScene};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one animation tick needs. Owned by the RAF closure.
pub struct FrameContext {
    pub state: Rc<RefCell<OrbState>>,
    pub backend: Rc<RefCell<Backend>>,
    pub paused: Rc<RefCell<bool>>,
    pub rig: Rc<RefCell<AudioRig>>,

    pub document: web::Document,
    pub raster: CanvasRenderer,
    pub vector: SvgScene,

    pub meter: LevelMeter,
    pub clock: f32,
    pub last_instant: Instant,
    // State whose colors the SVG gradients currently carry
    pub colored_state: OrbState,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        // Pausing freezes the clock but keeps rendering a static orb.
        // Dropped frames only stretch dt; nothing accumulates.
        if !*self.paused.borrow() {
            self.clock += dt * CLOCK_RATE;
        }

        let target = self.rig.borrow().read_level();
        let level = self.meter.update(target, dt);
        overlay::set_level_bar(&self.document, level);

        let state = *self.state.borrow();
        let cfg = OrbConfig::for_state(state, level, self.clock);
        match *self.backend.borrow() {
            Backend::Canvas => {
                if let Err(e) = self.raster.render(self.clock, level, state, &cfg) {
                    log::error!("canvas render error: {:?}", e);
                }
            }
            Backend::Svg => {
                if state != self.colored_state {
                    self.vector.apply_state_colors(&cfg);
                    self.colored_state = state;
                }
                if let Err(e) = self.vector.update(self.clock, level, state, &cfg) {
                    log::error!("svg render error: {:?}", e);
                }
            }
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
