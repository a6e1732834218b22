use super::constants::*;

/// Palette color with CSS formatting helpers.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn rgba(&self, alpha: f32) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            self.r,
            self.g,
            self.b,
            alpha.clamp(0.0, 1.0)
        )
    }
}

// Celestial palette
pub const BLUE: Rgb = Rgb::new(0x59, 0xc0, 0xe8);
pub const PINK: Rgb = Rgb::new(0xe0, 0x6e, 0xbb);
pub const TEAL: Rgb = Rgb::new(0x42, 0xe8, 0xd5);

// Supplemental state rotations
pub const AMBER: Rgb = Rgb::new(0xff, 0xcc, 0x00);
pub const ORANGE: Rgb = Rgb::new(0xff, 0x99, 0x00);
pub const EMBER: Rgb = Rgb::new(0xff, 0x66, 0x00);
pub const CYAN: Rgb = Rgb::new(0x00, 0xff, 0xff);
pub const SKY: Rgb = Rgb::new(0x00, 0xcc, 0xff);
pub const AZURE: Rgb = Rgb::new(0x00, 0x99, 0xff);
pub const MINT: Rgb = Rgb::new(0x00, 0xff, 0x99);
pub const JADE: Rgb = Rgb::new(0x00, 0xcc, 0x99);
pub const LAGOON: Rgb = Rgb::new(0x00, 0x99, 0x99);
pub const RED: Rgb = Rgb::new(0xff, 0x33, 0x33);
pub const BRICK: Rgb = Rgb::new(0xcc, 0x33, 0x33);
pub const MAROON: Rgb = Rgb::new(0x99, 0x33, 0x33);

// One five-entry color rotation per state.
pub const IDLE_COLORS: [Rgb; 5] = [TEAL, BLUE, PINK, BLUE, TEAL];
pub const LISTENING_COLORS: [Rgb; 5] = [BLUE, PINK, TEAL, PINK, BLUE];
pub const SPEAKING_COLORS: [Rgb; 5] = [PINK, TEAL, BLUE, TEAL, PINK];
pub const THINKING_COLORS: [Rgb; 5] = [AMBER, ORANGE, EMBER, ORANGE, AMBER];
pub const INITIALIZING_COLORS: [Rgb; 5] = [CYAN, SKY, AZURE, SKY, CYAN];
pub const CONNECTING_COLORS: [Rgb; 5] = [MINT, JADE, LAGOON, JADE, MINT];
pub const DISCONNECTED_COLORS: [Rgb; 5] = [RED, BRICK, MAROON, BRICK, RED];

/// Orb animation state. `Idle`, `Listening` and `Speaking` are driven by the
/// audio harness; the rest are reachable via the keyboard preview.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum OrbState {
    Idle,
    Listening,
    Speaking,
    Thinking,
    Initializing,
    Connecting,
    Disconnected,
}

impl OrbState {
    pub const ALL: [OrbState; 7] = [
        OrbState::Idle,
        OrbState::Listening,
        OrbState::Speaking,
        OrbState::Thinking,
        OrbState::Initializing,
        OrbState::Connecting,
        OrbState::Disconnected,
    ];

    /// Keyboard preview mapping, digits "1".."7".
    #[inline]
    pub fn for_digit(key: &str) -> Option<OrbState> {
        match key {
            "1" => Some(OrbState::Idle),
            "2" => Some(OrbState::Listening),
            "3" => Some(OrbState::Speaking),
            "4" => Some(OrbState::Thinking),
            "5" => Some(OrbState::Initializing),
            "6" => Some(OrbState::Connecting),
            "7" => Some(OrbState::Disconnected),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrbState::Idle => "idle",
            OrbState::Listening => "listening",
            OrbState::Speaking => "speaking",
            OrbState::Thinking => "thinking",
            OrbState::Initializing => "initializing",
            OrbState::Connecting => "connecting",
            OrbState::Disconnected => "disconnected",
        }
    }

    /// Color of the central energy core.
    pub fn core_color(&self) -> Rgb {
        match self {
            OrbState::Idle => BLUE,
            OrbState::Listening => PINK,
            _ => TEAL,
        }
    }
}

/// Per-frame animation parameters derived from state, audio level and the
/// animation clock.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct OrbConfig {
    pub amplitude: f32,
    pub speed: f32,
    pub intensity: f32,
    pub colors: &'static [Rgb],
    pub form_count: usize,
    pub glow_intensity: f32,
    pub glass_opacity: f32,
}

impl OrbConfig {
    /// Config lookup is total: every state yields a usable config for any
    /// clamped level and any finite time. The slow pulsing of the transient
    /// states runs off the animation clock, so identical inputs give
    /// identical configs.
    pub fn for_state(state: OrbState, audio_level: f32, time: f32) -> OrbConfig {
        let level = audio_level.clamp(0.0, 1.0);
        match state {
            OrbState::Listening => OrbConfig {
                amplitude: BASE_AMPLITUDE + level * 0.4,
                speed: BASE_SPEED * 1.8,
                intensity: BASE_INTENSITY + level * 0.8,
                colors: &LISTENING_COLORS,
                form_count: FORM_COUNT,
                glow_intensity: 1.5 + level * 0.8,
                glass_opacity: 0.3 + level * 0.2,
            },
            OrbState::Speaking => OrbConfig {
                amplitude: BASE_AMPLITUDE + level * 0.5,
                speed: BASE_SPEED * 2.8,
                intensity: BASE_INTENSITY + level * 0.9,
                colors: &SPEAKING_COLORS,
                form_count: FORM_COUNT,
                glow_intensity: 1.8 + level * 0.9,
                glass_opacity: 0.4 + level * 0.3,
            },
            OrbState::Thinking => OrbConfig {
                amplitude: BASE_AMPLITUDE + level * 0.3,
                speed: BASE_SPEED * 2.2,
                intensity: BASE_INTENSITY + level * 0.6,
                colors: &THINKING_COLORS,
                form_count: FORM_COUNT,
                glow_intensity: 1.6 + level * 0.7,
                glass_opacity: 0.35 + level * 0.25,
            },
            OrbState::Initializing => OrbConfig {
                amplitude: BASE_AMPLITUDE * 0.8,
                speed: BASE_SPEED * 1.5,
                intensity: BASE_INTENSITY * 0.7,
                colors: &INITIALIZING_COLORS,
                form_count: FORM_COUNT,
                glow_intensity: 1.4 + (time * 5.0).sin() * 0.4,
                glass_opacity: 0.3 + (time * 3.0).sin() * 0.15,
            },
            OrbState::Connecting => OrbConfig {
                amplitude: BASE_AMPLITUDE * 0.6,
                speed: BASE_SPEED * 1.2,
                intensity: BASE_INTENSITY * 0.6,
                colors: &CONNECTING_COLORS,
                form_count: FORM_COUNT,
                glow_intensity: 1.2 + (time * 3.0).sin() * 0.3,
                glass_opacity: 0.25 + (time * 2.0).sin() * 0.1,
            },
            OrbState::Disconnected => OrbConfig {
                amplitude: BASE_AMPLITUDE * 0.4,
                speed: BASE_SPEED * 0.6,
                intensity: BASE_INTENSITY * 0.4,
                colors: &DISCONNECTED_COLORS,
                form_count: FORM_COUNT,
                glow_intensity: 1.0 + (time * 2.0).sin() * 0.2,
                glass_opacity: 0.2 + time.sin() * 0.05,
            },
            OrbState::Idle => OrbConfig {
                amplitude: BASE_AMPLITUDE,
                speed: BASE_SPEED,
                intensity: BASE_INTENSITY,
                colors: &IDLE_COLORS,
                form_count: FORM_COUNT,
                glow_intensity: 1.2,
                glass_opacity: 0.25,
            },
        }
    }
}
