use crate::constants::{ANALYSER_FFT_SIZE, DEFAULT_MASTER_GAIN};
use crate::core::average_level;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Fixed analysis/output graph built once at startup.
///
/// The analyser is a pure tap: sources connect to it for level extraction,
/// and separately to the master gain when they should be audible. The
/// microphone only ever reaches the analyser, so capture can never feed back
/// into the speakers.
pub struct AudioChain {
    pub ctx: web::AudioContext,
    pub analyser: web::AnalyserNode,
    pub analyser_buf: Rc<RefCell<Vec<f32>>>,
    pub master_gain: web::GainNode,
}

pub struct Capture {
    stream: web::MediaStream,
    source: web::MediaStreamAudioSourceNode,
}

/// Hidden audio element plus its one-shot element source.
///
/// The browser allows exactly one `MediaElementAudioSourceNode` per element,
/// so the source is created on first play and reused for every file after.
pub struct PlaybackDeck {
    pub element: web::HtmlAudioElement,
    source: Option<web::MediaElementAudioSourceNode>,
    object_url: Option<String>,
    pub file_name: Option<String>,
}

pub struct AudioRig {
    pub chain: AudioChain,
    pub deck: PlaybackDeck,
    capture: Option<Capture>,
    pub volume: f32,
    pre_mute_volume: Option<f32>,
}

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> Result<web::GainNode, ()> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(())
        }
    }
}

pub fn build_audio_chain() -> Result<AudioChain, ()> {
    let ctx = web::AudioContext::new().map_err(|e| {
        log::error!("AudioContext error: {:?}", e);
    })?;
    let analyser = web::AnalyserNode::new(&ctx).map_err(|e| {
        log::error!("AnalyserNode error: {:?}", e);
    })?;
    analyser.set_fft_size(ANALYSER_FFT_SIZE);
    analyser.set_smoothing_time_constant(0.0);

    let master_gain = create_gain(&ctx, DEFAULT_MASTER_GAIN, "Master")?;
    _ = master_gain.connect_with_audio_node(&ctx.destination());

    let bins = analyser.frequency_bin_count() as usize;
    let analyser_buf = Rc::new(RefCell::new(vec![0.0_f32; bins]));
    Ok(AudioChain {
        ctx,
        analyser,
        analyser_buf,
        master_gain,
    })
}

impl AudioRig {
    pub fn new(chain: AudioChain) -> Result<Self, ()> {
        let element = web::HtmlAudioElement::new().map_err(|e| {
            log::error!("HtmlAudioElement error: {:?}", e);
        })?;
        Ok(Self {
            chain,
            deck: PlaybackDeck {
                element,
                source: None,
                object_url: None,
                file_name: None,
            },
            capture: None,
            volume: DEFAULT_MASTER_GAIN,
            pre_mute_volume: None,
        })
    }

    /// Point the deck at an uploaded file. Previous object URLs are revoked.
    pub fn load_file(&mut self, file: &web::File) {
        match web::Url::create_object_url_with_blob(file) {
            Ok(url) => {
                if let Some(old) = self.deck.object_url.take() {
                    _ = web::Url::revoke_object_url(&old);
                }
                self.deck.element.set_src(&url);
                self.deck.object_url = Some(url);
                self.deck.file_name = Some(file.name());
                log::info!("[audio] loaded file {}", file.name());
            }
            Err(e) => log::error!("createObjectURL error: {:?}", e),
        }
    }

    /// Start file playback. Returns false when no file has been loaded yet
    /// (the caller then opens the file picker instead).
    pub fn start_playback(&mut self) -> bool {
        if self.deck.object_url.is_none() {
            return false;
        }
        self.stop_capture();
        if self.deck.source.is_none() {
            match self
                .chain
                .ctx
                .create_media_element_source(&self.deck.element)
            {
                Ok(src) => {
                    _ = src.connect_with_audio_node(&self.chain.analyser);
                    _ = src.connect_with_audio_node(&self.chain.master_gain);
                    self.deck.source = Some(src);
                }
                Err(e) => {
                    log::error!("MediaElementAudioSourceNode error: {:?}", e);
                    return false;
                }
            }
        }
        _ = self.chain.ctx.resume();
        self.deck.element.set_current_time(0.0);
        _ = self.deck.element.play();
        true
    }

    pub fn stop_playback(&mut self) {
        _ = self.deck.element.pause();
        self.deck.element.set_current_time(0.0);
    }

    pub fn stop_capture(&mut self) {
        if let Some(cap) = self.capture.take() {
            for t in cap.stream.get_tracks().iter() {
                if let Ok(track) = t.dyn_into::<web::MediaStreamTrack>() {
                    track.stop();
                }
            }
            _ = cap.source.disconnect();
            log::info!("[audio] capture stopped");
        }
    }

    pub fn capturing(&self) -> bool {
        self.capture.is_some()
    }

    /// Pull one frame of analyser data and reduce it to a raw [0, 1] level.
    pub fn read_level(&self) -> f32 {
        let bins = self.chain.analyser.frequency_bin_count() as usize;
        let mut buf = self.chain.analyser_buf.borrow_mut();
        if buf.len() != bins {
            buf.resize(bins, 0.0);
        }
        self.chain.analyser.get_float_frequency_data(&mut buf);
        average_level(&buf)
    }

    pub fn set_volume(&mut self, value: f32) {
        self.volume = value.clamp(0.0, 1.0);
        self.pre_mute_volume = None;
        self.chain.master_gain.gain().set_value(self.volume);
    }

    pub fn step_volume(&mut self, delta: f32) {
        let next = self.volume + delta;
        self.set_volume(next);
    }

    pub fn toggle_mute(&mut self) {
        if let Some(prev) = self.pre_mute_volume.take() {
            self.volume = prev;
            self.chain.master_gain.gain().set_value(prev);
        } else {
            self.pre_mute_volume = Some(self.volume);
            self.chain.master_gain.gain().set_value(0.0);
        }
    }

    pub fn muted(&self) -> bool {
        self.pre_mute_volume.is_some()
    }
}

/// Ask for the microphone and route it into the analyser (never the
/// destination). Playback stops once the stream is live.
pub async fn start_capture(rig: &Rc<RefCell<AudioRig>>) -> anyhow::Result<()> {
    let (ctx, analyser) = {
        let r = rig.borrow();
        (r.chain.ctx.clone(), r.chain.analyser.clone())
    };
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let constraints = web::MediaStreamConstraints::new();
    constraints.set_audio(&JsValue::TRUE);
    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let stream: web::MediaStream = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let source = ctx
        .create_media_stream_source(&stream)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    _ = source.connect_with_audio_node(&analyser);
    _ = ctx.resume();

    let mut r = rig.borrow_mut();
    r.stop_playback();
    r.stop_capture();
    r.capture = Some(Capture { stream, source });
    log::info!("[audio] capture started");
    Ok(())
}
