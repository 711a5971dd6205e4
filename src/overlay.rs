use crate::constants::{CANVAS_FADE_TRANSITION, START_OVERLAY_ID};
use crate::dom;
use web_sys as web;

/// Start fading the start prompt; `hide` removes it once the fade is done.
#[inline]
pub fn fade(document: &web::Document) {
    if let Some(el) = dom::html_element_by_id(document, START_OVERLAY_ID) {
        dom::set_style(&el, "opacity", "0");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = dom::html_element_by_id(document, START_OVERLAY_ID) {
        dom::set_style(&el, "display", "none");
    }
}

#[inline]
pub fn fade_canvas(canvas: &web::HtmlCanvasElement) {
    dom::set_style(canvas, "transition", CANVAS_FADE_TRANSITION);
    dom::set_style(canvas, "opacity", "0");
}

#[inline]
pub fn hide_canvas(canvas: &web::HtmlCanvasElement) {
    dom::set_style(canvas, "display", "none");
}
