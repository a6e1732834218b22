// Shared tuning constants for the pure orb modules.

// Per-state config bases
pub const BASE_AMPLITUDE: f32 = 0.35;
pub const BASE_SPEED: f32 = 0.003;
pub const BASE_INTENSITY: f32 = 0.75;
pub const FORM_COUNT: usize = 5;

// Blob geometry
// Forms never reach the rim of the glass sphere.
pub const RADIUS_CLAMP_FRACTION: f32 = 0.95;
pub const LAYER_SHRINK: f32 = 0.12; // radius shrink per blob layer
pub const LAYER_PHASE_OFFSET: f32 = 0.2; // extra sweep phase per blob layer
pub const AUDIO_DISTORTION_GAIN: f32 = 0.35;

// Level meter time constants (seconds)
pub const LEVEL_RISE_TAU_SEC: f32 = 0.10;
pub const LEVEL_FALL_TAU_SEC: f32 = 0.45;

// Analyser float-frequency data floor (dB mapped to 0.0)
pub const LEVEL_DB_FLOOR: f32 = -100.0;
