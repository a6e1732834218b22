use super::constants::{LEVEL_DB_FLOOR, LEVEL_FALL_TAU_SEC, LEVEL_RISE_TAU_SEC};

/// Map an analyser float-frequency dB value to [0, 1].
#[inline]
pub fn normalize_db(db: f32) -> f32 {
    ((db - LEVEL_DB_FLOOR) / -LEVEL_DB_FLOOR).clamp(0.0, 1.0)
}

/// Mean of the normalized bins. Empty input reads as silence.
pub fn average_level(bins: &[f32]) -> f32 {
    if bins.is_empty() {
        return 0.0;
    }
    bins.iter().map(|&db| normalize_db(db)).sum::<f32>() / bins.len() as f32
}

/// Asymmetric exponential smoother for the volume level. Rising input is
/// tracked faster than falling input, and the step size depends only on
/// elapsed time, not on frame rate.
#[derive(Default)]
pub struct LevelMeter {
    value: f32,
}

impl LevelMeter {
    pub fn update(&mut self, target: f32, dt_sec: f32) -> f32 {
        let target = target.clamp(0.0, 1.0);
        let tau = if target > self.value {
            LEVEL_RISE_TAU_SEC
        } else {
            LEVEL_FALL_TAU_SEC
        };
        let alpha = 1.0 - (-dt_sec / tau).exp();
        self.value += (target - self.value) * alpha;
        self.value
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }
}
