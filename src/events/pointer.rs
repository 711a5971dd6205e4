use crate::app::{self, App};
use crate::core::{normalize_client, InputEvent};
use crate::dom;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_canvas_pointer(app: &Rc<App>) {
    let canvas = app.canvas().clone();

    let app_move = app.clone();
    let canvas_move = canvas.clone();
    dom::add_listener(&canvas, "mousemove", move |ev| {
        let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let (x, y) = pointer_ndc(mouse, &canvas_move);
        app::dispatch(&app_move, InputEvent::PointerMoved { x, y });
    });

    let app_leave = app.clone();
    dom::add_listener(&canvas, "mouseleave", move |_| {
        app::dispatch(&app_leave, InputEvent::PointerLeft);
    });
}

// Client coordinates to [-1, 1] on both axes relative to the canvas box.
fn pointer_ndc(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    normalize_client(
        ev.client_x() as f32,
        ev.client_y() as f32,
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}
