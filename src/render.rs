use web_sys as web;

pub mod canvas;
pub mod svg;

pub use canvas::CanvasRenderer;
pub use svg::SvgScene;

/// Which backend paints the orb. Exactly one is visible at a time; switching
/// only toggles container visibility, so retained SVG nodes persist.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Backend {
    Canvas,
    Svg,
}

impl Backend {
    pub fn label(&self) -> &'static str {
        match self {
            Backend::Canvas => "canvas",
            Backend::Svg => "svg",
        }
    }
}

pub fn set_active(document: &web::Document, backend: Backend) {
    set_hidden(document, "canvas-wrap", backend != Backend::Canvas);
    set_hidden(document, "svg-wrap", backend != Backend::Svg);
}

fn set_hidden(document: &web::Document, id: &str, hidden: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        let cl = el.class_list();
        if hidden {
            _ = cl.add_1("hidden");
        } else {
            _ = cl.remove_1("hidden");
        }
    }
}
