use crate::constants::*;
use crate::core::{cubic_path_d, layer_opacity, sample_form, OrbConfig, OrbState};
use fnv::FnvHashMap;
use glam::Vec2;
use wasm_bindgen::JsValue;
use web_sys as web;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Retained-mode vector backend. The scene graph is built once under the
/// host page's `<svg>` element; per frame only path data, transforms and
/// opacities are rewritten, and gradient stop colors change on state change.
pub struct SvgScene {
    layer_paths: Vec<web::Element>,
    layer_stops: Vec<Vec<web::Element>>,
    nodes: FnvHashMap<&'static str, web::Element>,
}

impl SvgScene {
    pub fn build(document: &web::Document, root: &web::Element) -> Result<Self, JsValue> {
        let size = SVG_VIEW_SIZE;
        let c = size * 0.5;
        root.set_attribute("viewBox", &format!("0 0 {} {}", size as u32, size as u32))?;

        let defs = el(document, "defs")?;

        // Sphere gradient (highlight toward the upper-left)
        let sphere = radial_gradient(document, "sphere-gradient", "50%", "40%")?;
        sphere.append_child(&stop(document, "0%", "rgba(255, 255, 255, 0.5)", "1")?)?;
        sphere.append_child(&stop(document, "70%", "rgba(255, 255, 255, 0.1)", "1")?)?;
        sphere.append_child(&stop(document, "100%", "rgba(255, 255, 255, 0)", "1")?)?;
        defs.append_child(&sphere)?;

        // Core glow gradient
        let core = radial_gradient(document, "core-gradient", "50%", "50%")?;
        core.append_child(&stop(document, "0%", "rgba(255, 255, 255, 0.9)", "1")?)?;
        core.append_child(&stop(document, "70%", "rgba(255, 255, 255, 0.1)", "1")?)?;
        core.append_child(&stop(document, "100%", "rgba(255, 255, 255, 0)", "1")?)?;
        defs.append_child(&core)?;

        // Soft glow: blur composited under the source
        let soft = filter(document, "soft-glow")?;
        let soft_blur = el(document, "feGaussianBlur")?;
        soft_blur.set_attribute("stdDeviation", "10")?;
        soft_blur.set_attribute("result", "blur")?;
        soft.append_child(&soft_blur)?;
        let soft_comp = el(document, "feComposite")?;
        soft_comp.set_attribute("in", "SourceGraphic")?;
        soft_comp.set_attribute("in2", "blur")?;
        soft_comp.set_attribute("operator", "over")?;
        soft.append_child(&soft_comp)?;
        defs.append_child(&soft)?;

        // Neon glow: blur masked by a white flood, screen-blended back
        let neon = filter(document, "neon-glow")?;
        let neon_blur = el(document, "feGaussianBlur")?;
        neon_blur.set_attribute("stdDeviation", "15")?;
        neon_blur.set_attribute("result", "blur")?;
        neon.append_child(&neon_blur)?;
        let flood = el(document, "feFlood")?;
        flood.set_attribute("flood-color", "#fff")?;
        flood.set_attribute("flood-opacity", "0.5")?;
        flood.set_attribute("result", "glow")?;
        neon.append_child(&flood)?;
        let neon_comp = el(document, "feComposite")?;
        neon_comp.set_attribute("in", "glow")?;
        neon_comp.set_attribute("in2", "blur")?;
        neon_comp.set_attribute("operator", "in")?;
        neon_comp.set_attribute("result", "softGlow")?;
        neon.append_child(&neon_comp)?;
        let blend = el(document, "feBlend")?;
        blend.set_attribute("in", "SourceGraphic")?;
        blend.set_attribute("in2", "softGlow")?;
        blend.set_attribute("mode", "screen")?;
        neon.append_child(&blend)?;
        defs.append_child(&neon)?;

        // One gradient per blob layer; stop colors follow the state rotation
        let mut layer_stops = Vec::with_capacity(SVG_LAYERS);
        for layer in 0..SVG_LAYERS {
            let grad = radial_gradient(document, &format!("blob-grad-{layer}"), "70%", "30%")?;
            let stops = vec![
                stop(document, "0%", "#ffffff", "0.95")?,
                stop(document, "40%", "#ffffff", "0.85")?,
                stop(document, "80%", "#ffffff", "0.4")?,
                stop(document, "100%", "#ffffff", "0.1")?,
            ];
            for s in &stops {
                grad.append_child(s)?;
            }
            defs.append_child(&grad)?;
            layer_stops.push(stops);
        }
        root.append_child(&defs)?;

        let mut nodes: FnvHashMap<&'static str, web::Element> = FnvHashMap::default();

        // Container circle
        let container = el(document, "circle")?;
        set_circle(&container, c, c, size * ORB_RADIUS_FRACTION)?;
        container.set_attribute("fill", "url(#sphere-gradient)")?;
        container.set_attribute("opacity", "0.7")?;
        root.append_child(&container)?;
        nodes.insert("container", container);

        // Outer glow ring
        let outer = el(document, "circle")?;
        set_circle(&outer, c, c, size * OUTER_GLOW_FRACTION)?;
        outer.set_attribute("fill", "none")?;
        outer.set_attribute("stroke", "rgba(255, 255, 255, 0.15)")?;
        outer.set_attribute("stroke-width", "1")?;
        outer.set_attribute("filter", "url(#soft-glow)")?;
        root.append_child(&outer)?;
        nodes.insert("outer-glow", outer);

        // Blob layers under the neon filter
        let group = el(document, "g")?;
        group.set_attribute("filter", "url(#neon-glow)")?;
        let mut layer_paths = Vec::with_capacity(SVG_LAYERS);
        for layer in 0..SVG_LAYERS {
            let path = el(document, "path")?;
            path.set_attribute("fill", &format!("url(#blob-grad-{layer})"))?;
            group.append_child(&path)?;
            layer_paths.push(path);
        }
        root.append_child(&group)?;

        // Central glow
        let core_circle = el(document, "circle")?;
        set_circle(&core_circle, c, c, size * CORE_GLOW_FRACTION)?;
        core_circle.set_attribute("fill", "url(#core-gradient)")?;
        core_circle.set_attribute("filter", "url(#soft-glow)")?;
        root.append_child(&core_circle)?;
        nodes.insert("core", core_circle);

        // Static 3D-reflection highlights
        let main = el(document, "ellipse")?;
        set_ellipse(&main, size * 0.4, size * 0.4, size * 0.05, size * 0.03)?;
        main.set_attribute("fill", "rgba(255, 255, 255, 0.4)")?;
        main.set_attribute("transform", &format!("rotate(-20, {c}, {c})"))?;
        root.append_child(&main)?;
        nodes.insert("highlight-a", main);

        let secondary = el(document, "ellipse")?;
        set_ellipse(&secondary, size * 0.55, size * 0.35, size * 0.02, size * 0.01)?;
        secondary.set_attribute("fill", "rgba(255, 255, 255, 0.5)")?;
        root.append_child(&secondary)?;
        nodes.insert("highlight-b", secondary);

        Ok(Self {
            layer_paths,
            layer_stops,
            nodes,
        })
    }

    /// Rewrite the per-layer gradient stops from the state's color rotation.
    pub fn apply_state_colors(&self, cfg: &OrbConfig) {
        for (layer, stops) in self.layer_stops.iter().enumerate() {
            let color = cfg.colors[layer % cfg.colors.len()];
            let hex = color.hex();
            // stop 0 stays white
            for s in &stops[1..] {
                _ = s.set_attribute("stop-color", &hex);
            }
        }
    }

    pub fn update(
        &self,
        time: f32,
        level: f32,
        state: OrbState,
        cfg: &OrbConfig,
    ) -> Result<(), JsValue> {
        let size = SVG_VIEW_SIZE;
        let c = size * 0.5;
        let center = Vec2::splat(c);
        let orb_radius = size * ORB_RADIUS_FRACTION;

        for (layer, path) in self.layer_paths.iter().enumerate() {
            let points = sample_form(cfg, layer, layer, time, level, SVG_SEGMENTS);
            let d = cubic_path_d(&points, center, orb_radius, time, layer);
            path.set_attribute("d", &d)?;

            let scale = layer_scale(state, time, level, layer);
            path.set_attribute(
                "transform",
                &format!("translate({c} {c}) scale({scale:.4}) translate({nc} {nc})", nc = -c),
            )?;
            path.set_attribute("opacity", &format!("{:.3}", layer_opacity(time, layer)))?;
        }

        // Breathe the central glow and the outer ring with the level
        if let Some(core) = self.nodes.get("core") {
            let r = size * CORE_GLOW_FRACTION * (1.0 + level * 0.5 + (time * 2.0).sin() * 0.1);
            core.set_attribute("r", &format!("{r:.2}"))?;
        }
        if let Some(outer) = self.nodes.get("outer-glow") {
            let opacity = (0.15 + (time * 1.5).sin() * 0.05 + level * 0.15).clamp(0.0, 1.0);
            outer.set_attribute("stroke", &format!("rgba(255, 255, 255, {opacity:.3})"))?;
        }
        Ok(())
    }
}

/// Per-layer pulse scale, keyed by state.
fn layer_scale(state: OrbState, time: f32, level: f32, layer: usize) -> f32 {
    let layer_f = layer as f32;
    match state {
        OrbState::Idle => 1.0 + (time + layer_f).sin() * 0.03,
        OrbState::Listening => 1.0 + (time * 2.0 + layer_f).sin() * 0.05 + level * 0.15,
        _ => 1.0 + (time * 3.0 + layer_f).sin() * 0.08 + level * 0.2,
    }
}

fn el(document: &web::Document, tag: &str) -> Result<web::Element, JsValue> {
    document.create_element_ns(Some(SVG_NS), tag)
}

fn radial_gradient(
    document: &web::Document,
    id: &str,
    r: &str,
    focus: &str,
) -> Result<web::Element, JsValue> {
    let grad = el(document, "radialGradient")?;
    grad.set_attribute("id", id)?;
    grad.set_attribute("cx", "50%")?;
    grad.set_attribute("cy", "50%")?;
    grad.set_attribute("r", r)?;
    grad.set_attribute("fx", focus)?;
    grad.set_attribute("fy", focus)?;
    Ok(grad)
}

fn stop(
    document: &web::Document,
    offset: &str,
    color: &str,
    opacity: &str,
) -> Result<web::Element, JsValue> {
    let s = el(document, "stop")?;
    s.set_attribute("offset", offset)?;
    s.set_attribute("stop-color", color)?;
    s.set_attribute("stop-opacity", opacity)?;
    Ok(s)
}

fn filter(document: &web::Document, id: &str) -> Result<web::Element, JsValue> {
    let f = el(document, "filter")?;
    f.set_attribute("id", id)?;
    f.set_attribute("x", "-50%")?;
    f.set_attribute("y", "-50%")?;
    f.set_attribute("width", "200%")?;
    f.set_attribute("height", "200%")?;
    Ok(f)
}

fn set_circle(circle: &web::Element, cx: f32, cy: f32, r: f32) -> Result<(), JsValue> {
    circle.set_attribute("cx", &format!("{cx:.2}"))?;
    circle.set_attribute("cy", &format!("{cy:.2}"))?;
    circle.set_attribute("r", &format!("{r:.2}"))?;
    Ok(())
}

fn set_ellipse(
    ellipse: &web::Element,
    cx: f32,
    cy: f32,
    rx: f32,
    ry: f32,
) -> Result<(), JsValue> {
    ellipse.set_attribute("cx", &format!("{cx:.2}"))?;
    ellipse.set_attribute("cy", &format!("{cy:.2}"))?;
    ellipse.set_attribute("rx", &format!("{rx:.2}"))?;
    ellipse.set_attribute("ry", &format!("{ry:.2}"))?;
    Ok(())
}
