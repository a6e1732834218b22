use crate::constants::*;
use crate::core::{midpoint_control, point_xy, sample_form, OrbConfig, OrbState};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Immediate-mode raster backend. The whole scene is repainted every frame
/// in CSS units; the backing store tracks CSS size times devicePixelRatio.
pub struct CanvasRenderer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &web::HtmlCanvasElement) -> Result<Self, ()> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|o| o.dyn_into::<web::CanvasRenderingContext2d>().ok());
        match ctx {
            Some(ctx) => Ok(Self {
                canvas: canvas.clone(),
                ctx,
            }),
            None => {
                log::error!("2d context unavailable");
                Err(())
            }
        }
    }

    pub fn render(
        &self,
        time: f32,
        level: f32,
        state: OrbState,
        cfg: &OrbConfig,
    ) -> Result<(), JsValue> {
        let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        let width = self.canvas.width() as f64 / dpr;
        let height = self.canvas.height() as f64 / dpr;
        self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
        self.ctx.clear_rect(0.0, 0.0, width, height);

        let cx = width * 0.5;
        let cy = height * 0.5;
        let radius = ORB_RADIUS_FRACTION as f64 * width.min(height);
        let t = time as f64;

        self.outer_glow(cx, cy, radius, t, level as f64)?;
        self.glass_sphere(cx, cy, radius, cfg.glass_opacity as f64)?;
        self.light_reflections(cx, cy, radius, t)?;

        // Forms and core stay inside the sphere
        self.ctx.save();
        self.ctx.begin_path();
        self.ctx.arc(cx, cy, radius, 0.0, TAU)?;
        self.ctx.clip();
        self.organic_forms(cx, cy, radius, time, level, cfg)?;
        self.energy_core(cx, cy, radius, t, state, level as f64, cfg.glow_intensity)?;
        self.ctx.set_shadow_blur(0.0);
        self.ctx.restore();

        self.rim_and_shine(cx, cy, radius, t)?;
        self.ctx.set_global_composite_operation("source-over")?;
        Ok(())
    }

    fn outer_glow(&self, cx: f64, cy: f64, r: f64, t: f64, level: f64) -> Result<(), JsValue> {
        let glow = self
            .ctx
            .create_radial_gradient(cx, cy, 0.0, cx, cy, r * 1.5)?;
        let opacity = 0.2 + (t * 1.5).sin() * 0.05 + level * 0.15;
        glow.add_color_stop(0.0, "rgba(255, 255, 255, 0)")?;
        glow.add_color_stop(0.4, &white(opacity * 0.3))?;
        glow.add_color_stop(0.7, &white(opacity * 0.5))?;
        glow.add_color_stop(0.9, &white(opacity * 0.1))?;
        glow.add_color_stop(1.0, "rgba(255, 255, 255, 0)")?;
        self.ctx.begin_path();
        self.ctx.arc(cx, cy, r * 1.3, 0.0, TAU)?;
        self.ctx.set_fill_style_canvas_gradient(&glow);
        self.ctx.fill();
        Ok(())
    }

    fn glass_sphere(&self, cx: f64, cy: f64, r: f64, glass: f64) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx.arc(cx, cy, r, 0.0, TAU)?;
        // Highlight offset toward the upper-left
        let gradient =
            self.ctx
                .create_radial_gradient(cx - r * 0.3, cy - r * 0.3, 0.0, cx, cy, r)?;
        gradient.add_color_stop(0.0, &white(glass + 0.3))?;
        gradient.add_color_stop(0.2, &white(glass + 0.15))?;
        gradient.add_color_stop(0.5, &white(glass))?;
        gradient.add_color_stop(0.8, &white(glass - 0.05))?;
        gradient.add_color_stop(1.0, &white(glass - 0.15))?;
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.set_global_composite_operation("screen")?;
        self.ctx.fill();
        Ok(())
    }

    fn light_reflections(&self, cx: f64, cy: f64, r: f64, t: f64) -> Result<(), JsValue> {
        // Main highlight
        self.ctx.begin_path();
        self.ctx.ellipse(
            cx - r * 0.4,
            cy - r * 0.4,
            r * 0.2 * (1.0 + t.sin() * 0.05),
            r * 0.1 * (1.0 + (t * 1.2).sin() * 0.05),
            std::f64::consts::PI * 0.25,
            0.0,
            TAU,
        )?;
        let main = self.ctx.create_radial_gradient(
            cx - r * 0.4,
            cy - r * 0.4,
            0.0,
            cx - r * 0.4,
            cy - r * 0.4,
            r * 0.2,
        )?;
        main.add_color_stop(0.0, "rgba(255, 255, 255, 0.7)")?;
        main.add_color_stop(1.0, "rgba(255, 255, 255, 0)")?;
        self.ctx.set_fill_style_canvas_gradient(&main);
        self.ctx.fill();

        // Secondary highlight
        self.ctx.begin_path();
        self.ctx.ellipse(
            cx + r * 0.3,
            cy + r * 0.35,
            r * 0.1 * (1.0 + (t * 0.9).sin() * 0.05),
            r * 0.05 * (1.0 + (t * 1.1).sin() * 0.05),
            std::f64::consts::PI * -0.2,
            0.0,
            TAU,
        )?;
        let secondary = self.ctx.create_radial_gradient(
            cx + r * 0.3,
            cy + r * 0.35,
            0.0,
            cx + r * 0.3,
            cy + r * 0.35,
            r * 0.1,
        )?;
        secondary.add_color_stop(0.0, "rgba(255, 255, 255, 0.5)")?;
        secondary.add_color_stop(1.0, "rgba(255, 255, 255, 0)")?;
        self.ctx.set_fill_style_canvas_gradient(&secondary);
        self.ctx.fill();
        Ok(())
    }

    fn organic_forms(
        &self,
        cx: f64,
        cy: f64,
        r: f64,
        time: f32,
        level: f32,
        cfg: &OrbConfig,
    ) -> Result<(), JsValue> {
        let center = Vec2::new(cx as f32, cy as f32);
        let orb_radius = r as f32;
        for form_index in 0..cfg.form_count {
            let color = cfg.colors[form_index % cfg.colors.len()];
            self.ctx.set_shadow_color(&color.hex());
            self.ctx
                .set_shadow_blur((NEON_SHADOW_BLUR * cfg.glow_intensity) as f64);

            let points = sample_form(cfg, form_index, 0, time, level, CANVAS_SEGMENTS);
            self.ctx.begin_path();
            let start = point_xy(&points[0], center, orb_radius);
            self.ctx.move_to(start.x as f64, start.y as f64);
            for (j, pair) in points.windows(2).enumerate() {
                let (prev, cur) = (&pair[0], &pair[1]);
                let wobble = form_index as f32 + (j + 1) as f32 * 0.1;
                let cp = midpoint_control(prev, cur, center, orb_radius, time, wobble);
                let p = point_xy(cur, center, orb_radius);
                self.ctx
                    .quadratic_curve_to(cp.x as f64, cp.y as f64, p.x as f64, p.y as f64);
            }
            self.ctx.close_path();

            // Center-out neon gradient, more vibrant with higher level
            let gradient = self.ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, r)?;
            gradient.add_color_stop(0.0, "rgba(255, 255, 255, 0.9)")?;
            gradient.add_color_stop(0.3, &color.rgba(0.93))?;
            gradient.add_color_stop(0.6, &color.rgba(0.67))?;
            gradient.add_color_stop(1.0, &color.rgba(0.33))?;
            self.ctx.set_fill_style_canvas_gradient(&gradient);
            self.ctx.set_global_composite_operation("screen")?;
            self.ctx.fill();
        }
        Ok(())
    }

    fn energy_core(
        &self,
        cx: f64,
        cy: f64,
        r: f64,
        t: f64,
        state: OrbState,
        level: f64,
        glow_intensity: f32,
    ) -> Result<(), JsValue> {
        let core_size = r * 0.2 * (1.0 + level * 0.5 + (t * 2.0).sin() * 0.1);
        let core_color = state.core_color();
        let gradient = self
            .ctx
            .create_radial_gradient(cx, cy, 0.0, cx, cy, core_size)?;
        gradient.add_color_stop(0.0, "rgba(255, 255, 255, 0.95)")?;
        gradient.add_color_stop(0.5, &core_color.rgba(0.93))?;
        gradient.add_color_stop(0.8, &core_color.rgba(0.53))?;
        gradient.add_color_stop(1.0, &core_color.rgba(0.0))?;
        self.ctx.begin_path();
        self.ctx.arc(cx, cy, core_size, 0.0, TAU)?;
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.set_shadow_color(&core_color.hex());
        self.ctx
            .set_shadow_blur((CORE_SHADOW_BLUR * glow_intensity) as f64);
        self.ctx.set_global_composite_operation("screen")?;
        self.ctx.fill();
        Ok(())
    }

    fn rim_and_shine(&self, cx: f64, cy: f64, r: f64, t: f64) -> Result<(), JsValue> {
        // Rim stroke
        self.ctx.begin_path();
        self.ctx.arc(cx, cy, r * 0.97, 0.0, TAU)?;
        self.ctx
            .set_stroke_style_str(&white(0.3 + t.sin() * 0.1));
        self.ctx.set_line_width(2.0);
        self.ctx.stroke();

        // Moving surface shine
        let shine_angle = t * 0.5;
        let sx = cx + shine_angle.cos() * r * 0.5;
        let sy = cy + shine_angle.sin() * r * 0.5;
        self.ctx.begin_path();
        self.ctx
            .ellipse(sx, sy, r * 0.1, r * 0.05, shine_angle, 0.0, TAU)?;
        let shine = self
            .ctx
            .create_radial_gradient(sx, sy, 0.0, sx, sy, r * 0.1)?;
        shine.add_color_stop(0.0, "rgba(255, 255, 255, 0.4)")?;
        shine.add_color_stop(1.0, "rgba(255, 255, 255, 0)")?;
        self.ctx.set_fill_style_canvas_gradient(&shine);
        self.ctx.set_global_composite_operation("lighten")?;
        self.ctx.fill();
        Ok(())
    }
}

#[inline]
fn white(alpha: f64) -> String {
    format!("rgba(255, 255, 255, {:.3})", alpha.clamp(0.0, 1.0))
}
