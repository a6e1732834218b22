// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // The animation clock must actually advance
    assert!(CLOCK_RATE > 0.0);

    // Outline sampling needs at least a triangle
    assert!(CANVAS_SEGMENTS >= 3);
    assert!(SVG_SEGMENTS >= 3);
    assert!(SVG_LAYERS >= 1);

    // The orb fits inside the square view with room for the outer glow
    assert!(ORB_RADIUS_FRACTION > 0.0 && ORB_RADIUS_FRACTION < 0.5);
    assert!(OUTER_GLOW_FRACTION > ORB_RADIUS_FRACTION && OUTER_GLOW_FRACTION < 0.5);
    assert!(CORE_GLOW_FRACTION > 0.0 && CORE_GLOW_FRACTION < ORB_RADIUS_FRACTION);

    // Volume controls stay in [0, 1]
    assert!(VOLUME_STEP > 0.0 && VOLUME_STEP < 1.0);
    assert!(DEFAULT_MASTER_GAIN > 0.0 && DEFAULT_MASTER_GAIN <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn core_constants_are_positive() {
    assert!(BASE_AMPLITUDE > 0.0);
    assert!(BASE_SPEED > 0.0);
    assert!(BASE_INTENSITY > 0.0);
    assert!(FORM_COUNT > 0);
    assert!(AUDIO_DISTORTION_GAIN > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // Level fall should be slower than rise (larger time constant)
    assert!(LEVEL_FALL_TAU_SEC > LEVEL_RISE_TAU_SEC);
    assert!(LEVEL_RISE_TAU_SEC > 0.0);

    // Even the innermost SVG layer keeps a positive radius budget
    assert!(LAYER_SHRINK * (SVG_LAYERS as f32 - 1.0) < 1.0);
    assert!(RADIUS_CLAMP_FRACTION > 0.0 && RADIUS_CLAMP_FRACTION < 1.0);

    // Analyser FFT size must be a power of two per the WebAudio spec
    assert!(ANALYSER_FFT_SIZE.is_power_of_two());
    assert!(ANALYSER_FFT_SIZE >= 32);

    // dB floor maps silence to zero
    assert!(LEVEL_DB_FLOOR < 0.0);
}
