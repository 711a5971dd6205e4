use crate::app::{self, App};
use crate::constants::*;
use crate::core::{Control, InputEvent};
use crate::dom;
use std::rc::Rc;
use wasm_bindgen::JsCast;

pub fn wire_intro_controls(app: &Rc<App>) {
    let doc = app.document();

    // Anywhere on the overlay starts the intro; the buttons inside it stop
    // propagation so they are not counted twice.
    if let Some(overlay) = doc.get_element_by_id(START_OVERLAY_ID) {
        let app = app.clone();
        dom::add_listener(&overlay, "click", move |_| {
            app::dispatch(&app, InputEvent::StartRequested);
        });
    }
    on_click_isolated(app, START_BUTTON_ID, InputEvent::StartRequested);
    on_click_isolated(app, SKIP_BUTTON_ID, InputEvent::SkipRequested);
    on_click_isolated(app, AUDIO_TOGGLE_ID, InputEvent::MuteToggled);
}

pub fn wire_carousel_controls(app: &Rc<App>) {
    let doc = app.document();
    for (id, control) in [(PREV_BUTTON_ID, Control::Prev), (NEXT_BUTTON_ID, Control::Next)] {
        let app = app.clone();
        dom::add_click_listener(doc, id, move |_| {
            app::dispatch(&app, InputEvent::NavClicked(control));
        });
    }
    for card in dom::elements_by_selector(doc, PROJECT_CARD_SELECTOR) {
        let app = app.clone();
        dom::add_listener(&card, "mouseenter", move |_| {
            app::dispatch(&app, InputEvent::CardHovered);
        });
    }
}

pub fn wire_modal_controls(app: &Rc<App>) {
    let doc = app.document();

    for link in dom::elements_by_selector(doc, MODAL_LINK_SELECTOR) {
        let Some(id) = link.get_attribute(MODAL_LINK_ATTR) else {
            continue;
        };
        let app = app.clone();
        dom::add_listener(&link, "click", move |ev| {
            ev.prevent_default();
            app::dispatch(&app, InputEvent::ModalRequested(id.clone()));
        });
    }

    let app_close = app.clone();
    dom::add_click_listener(doc, MODAL_CLOSE_ID, move |_| {
        app::dispatch(&app_close, InputEvent::ModalCloseRequested);
    });

    // Backdrop: only clicks that land on the modal element itself.
    if let Some(modal) = doc.get_element_by_id(MODAL_ID) {
        let app = app.clone();
        let modal_target = modal.clone();
        dom::add_listener(&modal, "click", move |ev| {
            let on_backdrop = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .is_some_and(|el| el == modal_target);
            if on_backdrop {
                app::dispatch(&app, InputEvent::ModalCloseRequested);
            }
        });
    }
}

fn on_click_isolated(app: &Rc<App>, id: &str, event: InputEvent) {
    let app_cb = app.clone();
    dom::add_click_listener(app.document(), id, move |ev| {
        ev.stop_propagation();
        app::dispatch(&app_cb, event.clone());
    });
}
