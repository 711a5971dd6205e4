use crate::core::{Viewport, SESSION_KEY, SESSION_VALUE};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn html_element_by_selector(
    document: &web::Document,
    selector: &str,
) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// All elements matching `selector`, skipping anything that is not an
/// `Element`.
pub fn elements_by_selector(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

/// Attach a listener for `event` that lives for the rest of the page.
pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut(web::Event) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        add_listener(&el, "click", handler);
    }
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn clear_style(el: &web::HtmlElement, property: &str) {
    _ = el.style().remove_property(property);
}

/// Current window size and device pixel ratio.
pub fn window_viewport() -> Option<Viewport> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()? as f32;
    let height = w.inner_height().ok()?.as_f64()? as f32;
    Some(Viewport::new(width, height, w.device_pixel_ratio() as f32))
}

/// Size the canvas backing store to the viewport at the capped pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: &Viewport) {
    let (w_px, h_px) = viewport.backing_size();
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    set_style(canvas, "width", &format!("{}px", viewport.width));
    set_style(canvas, "height", &format!("{}px", viewport.height));
}

fn session_storage() -> Option<web::Storage> {
    web::window().and_then(|w| w.session_storage().ok().flatten())
}

/// Whether the intro already played in this browsing session.
pub fn session_visited() -> bool {
    session_storage()
        .and_then(|s| s.get_item(SESSION_KEY).ok().flatten())
        .map(|v| v == SESSION_VALUE)
        .unwrap_or(false)
}

pub fn persist_session_visited() {
    if let Some(s) = session_storage() {
        if let Err(e) = s.set_item(SESSION_KEY, SESSION_VALUE) {
            log::warn!("[intro] could not persist session flag: {:?}", e);
        }
    }
}
