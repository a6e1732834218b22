use super::config::OrbConfig;
use super::constants::{
    AUDIO_DISTORTION_GAIN, LAYER_PHASE_OFFSET, LAYER_SHRINK, RADIUS_CLAMP_FRACTION,
};
use glam::Vec2;
use smallvec::SmallVec;
use std::f32::consts::TAU;
use std::fmt::Write as _;

/// Polar sample of a blob outline in unit-orb space (radius 1.0 = orb radius).
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct BlobPoint {
    pub angle: f32,
    pub radius: f32,
}

/// Sample the closed outline of one organic form.
///
/// Both backends render this field; only the path emission differs. The last
/// sample repeats the first one full turn later, so emitted paths close
/// exactly even though the distortion frequencies are non-integer for most
/// forms.
pub fn sample_form(
    cfg: &OrbConfig,
    form_index: usize,
    layer: usize,
    time: f32,
    level: f32,
    segments: usize,
) -> SmallVec<[BlobPoint; 64]> {
    let form = form_index as f32;
    let layer_f = layer as f32;
    let phase = form * TAU / cfg.form_count.max(1) as f32 + layer_f * LAYER_PHASE_OFFSET;
    let layer_scale = 1.0 - LAYER_SHRINK * layer_f;

    // Multi-frequency distortion, slightly detuned per form
    let freq_a = 2.0 + 0.3 * form;
    let freq_b = 3.0 + 0.4 * form;
    let freq_c = 5.0 + 0.2 * form;

    let expansion = 0.4 + 0.6 * level;
    let pulse = 0.7 + (time * 0.8 + form * 0.7).sin() * 0.2 + level * 0.4;
    let breathing = 0.8 + (time * 0.6 + form * 0.5).sin() * 0.2;

    let mut points: SmallVec<[BlobPoint; 64]> = SmallVec::with_capacity(segments + 1);
    for j in 0..segments {
        let seg_frac = j as f32 / segments as f32;
        let angle = seg_frac * TAU + time * cfg.speed * (1.0 + form * 0.2) + phase;

        let distortion = (angle * freq_a + time * 1.5).sin() * cfg.amplitude * 0.7
            + (angle * freq_b + time * 1.2).cos() * cfg.amplitude * 0.5
            + (angle * freq_c + time * 0.9).sin() * cfg.amplitude * 0.3;

        let base_radius = expansion * pulse * breathing;
        let audio_distortion = distortion * AUDIO_DISTORTION_GAIN * cfg.intensity;
        let clamped = (base_radius + audio_distortion).min(RADIUS_CLAMP_FRACTION * layer_scale);

        let depth = 0.8 + (angle * 3.0 + time * 0.7 + form).sin() * 0.2;
        points.push(BlobPoint {
            angle,
            radius: clamped * depth,
        });
    }
    let first = points[0];
    points.push(BlobPoint {
        angle: first.angle + TAU,
        radius: first.radius,
    });
    points
}

#[inline]
pub fn point_xy(p: &BlobPoint, center: Vec2, orb_radius: f32) -> Vec2 {
    center + Vec2::new(p.angle.cos(), p.angle.sin()) * (p.radius * orb_radius)
}

/// Quadratic control point at the angular midpoint, for the raster backend.
pub fn midpoint_control(
    prev: &BlobPoint,
    cur: &BlobPoint,
    center: Vec2,
    orb_radius: f32,
    time: f32,
    wobble_phase: f32,
) -> Vec2 {
    let mid_angle = 0.5 * (prev.angle + cur.angle);
    let control_factor = 1.2 + (time + wobble_phase).sin() * 0.1;
    let control_radius = 0.5 * (prev.radius + cur.radius) * control_factor;
    center + Vec2::new(mid_angle.cos(), mid_angle.sin()) * (control_radius * orb_radius)
}

/// Emit SVG path data (`M .. C .. Z`) for one sampled outline, with control
/// points at 30%/70% angular interpolation.
pub fn cubic_path_d(
    points: &[BlobPoint],
    center: Vec2,
    orb_radius: f32,
    time: f32,
    layer: usize,
) -> String {
    let layer_f = layer as f32;
    let cp1_mod = 1.2 + (time * 2.5 + layer_f * 0.3).sin() * 0.2;
    let cp2_mod = 1.2 + (time * 3.2 + 1.5 + layer_f * 0.3).sin() * 0.2;

    let mut d = String::with_capacity(points.len() * 48);
    let start = point_xy(&points[0], center, orb_radius);
    _ = write!(d, "M{:.2},{:.2}", start.x, start.y);
    for pair in points.windows(2) {
        let (prev, cur) = (&pair[0], &pair[1]);
        let span = cur.angle - prev.angle;
        let cp1_angle = prev.angle + span * 0.3;
        let cp2_angle = prev.angle + span * 0.7;
        let cp1 = center
            + Vec2::new(cp1_angle.cos(), cp1_angle.sin()) * (prev.radius * cp1_mod * orb_radius);
        let cp2 = center
            + Vec2::new(cp2_angle.cos(), cp2_angle.sin()) * (cur.radius * cp2_mod * orb_radius);
        let p = point_xy(cur, center, orb_radius);
        _ = write!(
            d,
            " C{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}",
            cp1.x, cp1.y, cp2.x, cp2.y, p.x, p.y
        );
    }
    d.push_str(" Z");
    d
}

/// Opacity of one vector-backend blob layer.
#[inline]
pub fn layer_opacity(time: f32, layer: usize) -> f32 {
    let layer_f = layer as f32;
    (0.75 - 0.15 * layer_f - (time * 1.5 + layer_f).sin() * 0.1).clamp(0.0, 1.0)
}
