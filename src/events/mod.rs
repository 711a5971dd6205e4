mod controls;
mod keyboard;
mod pointer;
mod window;

use crate::app::App;
use std::rc::Rc;

/// Attach every page listener. Each one turns a DOM event into an
/// `InputEvent` and hands it to the app.
pub fn wire_all(app: &Rc<App>) {
    pointer::wire_canvas_pointer(app);
    keyboard::wire_global_keydown(app);
    controls::wire_intro_controls(app);
    controls::wire_carousel_controls(app);
    controls::wire_modal_controls(app);
    window::wire_resize(app);
    window::wire_visibility(app);
}
