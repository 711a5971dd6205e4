use crate::render;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Cancellable `requestAnimationFrame` loop.
///
/// The pending frame id doubles as the running flag: `stop` cancels it and
/// clears it, and a tick that finds it cleared does not reschedule.
#[derive(Default)]
pub struct FrameLoop {
    tick: TickSlot,
    raf_id: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    /// Set the per-frame callback. Must be called before `start`.
    pub fn install(&self, mut on_frame: impl FnMut() + 'static) {
        let tick = self.tick.clone();
        let raf_id = self.raf_id.clone();
        *self.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if raf_id.get().is_none() {
                return;
            }
            on_frame();
            if raf_id.get().is_some() {
                raf_id.set(request_frame(&tick));
            }
        }) as Box<dyn FnMut()>));
    }

    pub fn start(&self) {
        if self.raf_id.get().is_none() {
            self.raf_id.set(request_frame(&self.tick));
            log::info!("[frame] loop started");
        }
    }

    pub fn stop(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
            log::info!("[frame] loop stopped");
        }
    }
}

fn request_frame(tick: &TickSlot) -> Option<i32> {
    let window = web::window()?;
    let slot = tick.borrow();
    let closure = slot.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    star_capacity: usize,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, star_capacity).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}
