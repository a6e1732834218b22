// Host-side tests for the smoothed volume level.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod orb {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod level {
        include!("../src/core/level.rs");
    }
}

use orb::level::*;

#[test]
fn normalize_db_maps_the_analyser_range() {
    assert_eq!(normalize_db(-100.0), 0.0);
    assert_eq!(normalize_db(0.0), 1.0);
    assert!((normalize_db(-50.0) - 0.5).abs() < 1e-6);
    // Out-of-range values clamp, including the silence sentinel
    assert_eq!(normalize_db(f32::NEG_INFINITY), 0.0);
    assert_eq!(normalize_db(20.0), 1.0);
}

#[test]
fn average_level_of_empty_input_is_silence() {
    assert_eq!(average_level(&[]), 0.0);
}

#[test]
fn average_level_is_the_mean_of_normalized_bins() {
    let avg = average_level(&[-100.0, 0.0]);
    assert!((avg - 0.5).abs() < 1e-6);
}

#[test]
fn meter_rises_faster_than_it_falls() {
    let dt = 1.0 / 60.0;
    let mut rising = LevelMeter::default();
    let gained = rising.update(1.0, dt);

    let mut falling = LevelMeter::default();
    for _ in 0..200 {
        falling.update(1.0, dt);
    }
    let before = falling.value();
    let after = falling.update(0.0, dt);
    let lost = before - after;

    assert!(gained > lost, "rise {gained} should beat fall {lost}");
}

#[test]
fn meter_converges_to_a_sustained_target() {
    let mut meter = LevelMeter::default();
    for _ in 0..600 {
        meter.update(0.8, 1.0 / 60.0);
    }
    assert!((meter.value() - 0.8).abs() < 1e-3);
}

#[test]
fn meter_decays_toward_silence() {
    let mut meter = LevelMeter::default();
    meter.update(1.0, 1.0);
    for _ in 0..600 {
        meter.update(0.0, 1.0 / 60.0);
    }
    assert!(meter.value() < 1e-3);
}

#[test]
fn meter_clamps_wild_targets() {
    let mut meter = LevelMeter::default();
    for _ in 0..600 {
        meter.update(5.0, 1.0 / 60.0);
    }
    assert!(meter.value() <= 1.0);

    let mut meter = LevelMeter::default();
    meter.update(-3.0, 10.0);
    assert!(meter.value() >= 0.0);
}

#[test]
fn meter_is_frame_rate_independent() {
    let mut coarse = LevelMeter::default();
    coarse.update(1.0, 0.1);

    let mut fine = LevelMeter::default();
    for _ in 0..10 {
        fine.update(1.0, 0.01);
    }

    assert!((coarse.value() - fine.value()).abs() < 1e-4);
}
