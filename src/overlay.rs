use web_sys as web;

#[inline]
pub fn hide_start(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("start-overlay") {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("hint-overlay") {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("hint-overlay") {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    if let Some(el) = document.get_element_by_id("hint-overlay") {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    false
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}

/// Update the hint overlay with the current orb status
pub fn update_hint(
    document: &web::Document,
    state_label: &str,
    backend_label: &str,
    file_name: Option<&str>,
    volume: f32,
    muted: bool,
) {
    if let Some(el) = document.get_element_by_id("hint-overlay") {
        let file_text = file_name.unwrap_or("no file");
        let volume_text = if muted {
            "muted".to_string()
        } else {
            format!("vol {:.0}%", volume * 100.0)
        };

        let hint_html = format!(
            "<div style='color: #cfe7ff; font: 13px system-ui; background: rgba(10, 14, 24, 0.8); padding: 8px 12px; border-radius: 6px; border: 1px solid rgba(80, 110, 150, 0.35);'>{} • {} • {} • {}</div>",
            state_label, backend_label, file_text, volume_text
        );

        el.set_inner_html(&hint_html);
    }
}

/// Width the level meter bar to the smoothed volume level
pub fn set_level_bar(document: &web::Document, level: f32) {
    if let Some(el) = document.get_element_by_id("level-fill") {
        let pct = (level * 100.0).clamp(0.0, 100.0);
        _ = el.set_attribute("style", &format!("width:{:.1}%", pct));
    }
}
