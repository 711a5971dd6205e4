use crate::app::{self, App};
use crate::core::InputEvent;
use crate::dom;
use std::rc::Rc;
use web_sys as web;

pub fn wire_resize(app: &Rc<App>) {
    let Some(window) = web::window() else {
        return;
    };
    let app = app.clone();
    dom::add_listener(&window, "resize", move |_| {
        if let Some(viewport) = dom::window_viewport() {
            app::dispatch(&app, InputEvent::Resized(viewport));
        }
    });
}

pub fn wire_visibility(app: &Rc<App>) {
    let app_cb = app.clone();
    dom::add_listener(app.document(), "visibilitychange", move |_| {
        let hidden = app_cb.document().visibility_state() == web::VisibilityState::Hidden;
        app::dispatch(&app_cb, InputEvent::VisibilityChanged { hidden });
    });
}
