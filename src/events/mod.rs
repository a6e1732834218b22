pub mod controls;
pub mod keyboard;

pub use controls::{refresh_hint, wire_controls, ControlWiring};
pub use keyboard::wire_global_keydown;
