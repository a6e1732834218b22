/// Frame loop and view tuning constants.
///
/// These constants express intended behavior (e.g., clock tempo, segment
/// counts) and keep magic numbers out of the code, improving readability.
// Animation-clock seconds advanced per wall-clock second
pub const CLOCK_RATE: f32 = 0.6;

// Outline sampling density per backend
pub const CANVAS_SEGMENTS: usize = 48;
pub const SVG_SEGMENTS: usize = 14;
pub const SVG_LAYERS: usize = 3;

// Vector backend viewBox edge length (user units)
pub const SVG_VIEW_SIZE: f32 = 320.0;

// Orb proportions relative to min(width, height)
pub const ORB_RADIUS_FRACTION: f32 = 0.42;
pub const OUTER_GLOW_FRACTION: f32 = 0.45;
pub const CORE_GLOW_FRACTION: f32 = 0.1;

// Neon shadow blur per unit of glow intensity (CSS px)
pub const NEON_SHADOW_BLUR: f32 = 25.0;
pub const CORE_SHADOW_BLUR: f32 = 20.0;

// Audio harness
pub const ANALYSER_FFT_SIZE: u32 = 256;
pub const DEFAULT_MASTER_GAIN: f32 = 0.8;
pub const VOLUME_STEP: f32 = 0.05;
