// Host-side tests for the keyboard mappings.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod orb {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
}

use orb::config::OrbState;

// Re-implement the pure backend mapping for testing; the real one lives next
// to the event wiring and pulls in web-sys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Backend {
    Canvas,
    Svg,
}

#[inline]
fn backend_for_key(key: &str) -> Option<Backend> {
    match key {
        "c" | "C" => Some(Backend::Canvas),
        "v" | "V" => Some(Backend::Svg),
        _ => None,
    }
}

#[test]
fn digits_map_to_every_state_in_order() {
    assert_eq!(OrbState::for_digit("1"), Some(OrbState::Idle));
    assert_eq!(OrbState::for_digit("2"), Some(OrbState::Listening));
    assert_eq!(OrbState::for_digit("3"), Some(OrbState::Speaking));
    assert_eq!(OrbState::for_digit("4"), Some(OrbState::Thinking));
    assert_eq!(OrbState::for_digit("5"), Some(OrbState::Initializing));
    assert_eq!(OrbState::for_digit("6"), Some(OrbState::Connecting));
    assert_eq!(OrbState::for_digit("7"), Some(OrbState::Disconnected));
}

#[test]
fn digit_mapping_matches_the_state_roster() {
    for (i, state) in OrbState::ALL.iter().enumerate() {
        let digit = (i + 1).to_string();
        assert_eq!(OrbState::for_digit(&digit), Some(*state));
    }
}

#[test]
fn out_of_range_digits_return_none() {
    assert_eq!(OrbState::for_digit("0"), None);
    assert_eq!(OrbState::for_digit("8"), None);
    assert_eq!(OrbState::for_digit("9"), None);
}

#[test]
fn non_digit_keys_return_none() {
    assert_eq!(OrbState::for_digit(""), None);
    assert_eq!(OrbState::for_digit("a"), None);
    assert_eq!(OrbState::for_digit("Enter"), None);
    assert_eq!(OrbState::for_digit("12"), None);
}

#[test]
fn backend_keys_are_case_insensitive() {
    assert_eq!(backend_for_key("c"), Some(Backend::Canvas));
    assert_eq!(backend_for_key("C"), Some(Backend::Canvas));
    assert_eq!(backend_for_key("v"), Some(Backend::Svg));
    assert_eq!(backend_for_key("V"), Some(Backend::Svg));
}

#[test]
fn non_backend_keys_return_none() {
    assert_eq!(backend_for_key("b"), None);
    assert_eq!(backend_for_key("s"), None);
    assert_eq!(backend_for_key(""), None);
    assert_eq!(backend_for_key("ArrowUp"), None);
}
