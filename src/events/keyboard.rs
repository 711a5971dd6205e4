use crate::app::{self, App};
use crate::core::InputEvent;
use crate::dom;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Escape and the arrow keys; the portfolio decides what each one means in
/// the current state.
pub fn wire_global_keydown(app: &Rc<App>) {
    let app_cb = app.clone();
    dom::add_listener(app.document(), "keydown", move |ev| {
        if let Some(key_ev) = ev.dyn_ref::<web::KeyboardEvent>() {
            app::dispatch(&app_cb, InputEvent::KeyDown(key_ev.key()));
        }
    });
}
