use crate::audio::{self, IntroAudio};
use crate::constants::*;
use crate::core::{
    transform_css, Control, Effect, Effects, InputEvent, Portfolio, TimeoutTable, TimerId,
};
use crate::dom;
use crate::frame::FrameLoop;
use crate::overlay;
use crate::render::GpuState;
use instant::Instant;
use rand::rngs::SmallRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Browser-side host for [`Portfolio`]: owns the DOM handles, media and
/// timers, and carries out the effects the portfolio asks for.
pub struct App {
    pub portfolio: RefCell<Portfolio>,
    pub frame_loop: FrameLoop,
    document: web::Document,
    canvas: web::HtmlCanvasElement,
    intro_audio: IntroAudio,
    rng: RefCell<SmallRng>,
    timeouts: RefCell<TimeoutTable<Closure<dyn FnMut()>>>,
    gpu: RefCell<Option<GpuState<'static>>>,
    positions: RefCell<Vec<[f32; 3]>>,
    started_at: Instant,
}

impl App {
    pub fn new(
        portfolio: Portfolio,
        rng: SmallRng,
        document: web::Document,
        canvas: web::HtmlCanvasElement,
    ) -> Self {
        let star_count = portfolio.field().len();
        Self {
            portfolio: RefCell::new(portfolio),
            frame_loop: FrameLoop::default(),
            document,
            canvas,
            intro_audio: IntroAudio::new(),
            rng: RefCell::new(rng),
            timeouts: RefCell::new(TimeoutTable::default()),
            gpu: RefCell::new(None),
            positions: RefCell::new(Vec::with_capacity(star_count)),
            started_at: Instant::now(),
        }
    }

    pub fn document(&self) -> &web::Document {
        &self.document
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64() * 1000.0
    }

    pub fn set_gpu(&self, gpu: Option<GpuState<'static>>) {
        *self.gpu.borrow_mut() = gpu;
    }

    /// One animation tick: advance the field, then draw it.
    pub fn frame(&self) {
        let now_ms = self.now_ms();
        let elapsed = self.intro_audio.elapsed();
        let (out, view_proj) = {
            let mut portfolio = self.portfolio.borrow_mut();
            let out = portfolio.frame(
                now_ms,
                (now_ms * 0.001) as f32,
                elapsed,
                &mut *self.rng.borrow_mut(),
            );
            portfolio
                .field()
                .write_positions(&mut self.positions.borrow_mut());
            (out, portfolio.projector().camera().view_projection())
        };

        if let Some(g) = self.gpu.borrow_mut().as_mut() {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            match g.render(view_proj, out.tint, &self.positions.borrow()) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }
}

/// Route one page event through the portfolio and perform the result.
pub fn dispatch(app: &Rc<App>, event: InputEvent) {
    let now_ms = app.now_ms();
    let effects = app.portfolio.borrow_mut().handle(event, now_ms);
    apply_effects(app, effects);
}

pub fn apply_effects(app: &Rc<App>, effects: Effects) {
    for effect in effects {
        apply(app, effect);
    }
}

fn apply(app: &Rc<App>, effect: Effect) {
    let doc = &app.document;
    match effect {
        Effect::ScheduleTimer { id, delay_ms } => schedule_timeout(app, id, delay_ms),
        Effect::CancelTimer(id) => {
            let handle = app.timeouts.borrow_mut().cancel(id);
            if let Some(handle) = handle {
                if let Some(w) = web::window() {
                    w.clear_timeout_with_handle(handle);
                }
            }
        }

        Effect::PlayIntroAudio => app.intro_audio.play(),
        Effect::StopIntroAudio => app.intro_audio.stop(),
        Effect::SetIntroMuted(muted) => app.intro_audio.set_muted(muted),
        Effect::PlaySound(cue) => audio::play_cue(cue),
        Effect::SetMuteIndicator { muted } => {
            if let Some(el) = doc.get_element_by_id(AUDIO_TOGGLE_ID) {
                _ = el.class_list().toggle_with_force(CLASS_ACTIVE, !muted);
            }
        }
        Effect::PersistSession => dom::persist_session_visited(),

        Effect::StartFrameLoop => app.frame_loop.start(),
        Effect::StopFrameLoop => app.frame_loop.stop(),
        Effect::ResizeSurface(viewport) => {
            dom::sync_canvas_backing_size(&app.canvas, &viewport);
            if let Some(g) = app.gpu.borrow_mut().as_mut() {
                let (w, h) = viewport.backing_size();
                g.resize_if_needed(w, h);
            }
        }

        Effect::FadeOverlay => overlay::fade(doc),
        Effect::HideOverlay => overlay::hide(doc),
        Effect::FadeCanvas => overlay::fade_canvas(&app.canvas),
        Effect::HideCanvas => overlay::hide_canvas(&app.canvas),

        Effect::RevealCarousel => {
            if let Some(el) = doc.get_element_by_id(CAROUSEL_SECTION_ID) {
                _ = el.class_list().add_1(CLASS_REVEALED);
            }
        }
        Effect::MarkCarouselInit => {
            if let Some(el) = dom::html_element_by_selector(doc, CAROUSEL_ROTATION_SELECTOR) {
                _ = el.set_attribute(INIT_MARKER_ATTR, "true");
            }
        }
        Effect::SetCarouselAngle(angle) => {
            if let Some(el) = dom::html_element_by_selector(doc, CAROUSEL_ROTATION_SELECTOR) {
                dom::set_style(&el, "transform", &transform_css(angle));
            }
        }
        Effect::Highlight(control) => {
            if let Some(btn) = control_button(doc, control) {
                for (prop, value) in HIGHLIGHT_STYLE {
                    dom::set_style(&btn, prop, value);
                }
            }
        }
        Effect::ClearHighlight(control) => {
            if let Some(btn) = control_button(doc, control) {
                for (prop, _) in HIGHLIGHT_STYLE {
                    dom::clear_style(&btn, prop);
                }
            }
        }

        Effect::ShowModal { markup } => {
            if let Some(body) = doc.get_element_by_id(MODAL_BODY_ID) {
                body.set_inner_html(&markup);
            }
            if let Some(modal) = doc.get_element_by_id(MODAL_ID) {
                _ = modal.class_list().add_1(CLASS_ACTIVE);
            }
        }
        Effect::HideModal => {
            if let Some(modal) = doc.get_element_by_id(MODAL_ID) {
                _ = modal.class_list().remove_1(CLASS_ACTIVE);
            }
        }
        Effect::BeginTitle => begin_title(doc),
        Effect::AppendTitleChar(c) => {
            if let Some(cursor) = title_cursor(doc) {
                let mut buf = [0u8; 4];
                _ = cursor.insert_adjacent_text("beforebegin", c.encode_utf8(&mut buf));
            }
        }
        Effect::RemoveTitleCursor => {
            if let Some(cursor) = title_cursor(doc) {
                cursor.remove();
            }
        }
    }
}

fn schedule_timeout(app: &Rc<App>, id: TimerId, delay_ms: u32) {
    let Some(window) = web::window() else {
        return;
    };
    // Callbacks parked by earlier firings have all returned by now.
    app.timeouts.borrow_mut().sweep();
    let app_cb = app.clone();
    let callback: Closure<dyn FnMut()> = Closure::once(move || {
        dispatch(&app_cb, InputEvent::TimerFired(id));
        app_cb.timeouts.borrow_mut().retire(id);
    });
    match window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.as_ref().unchecked_ref(),
        delay_ms as i32,
    ) {
        Ok(handle) => {
            app.timeouts.borrow_mut().insert(id, handle, callback);
        }
        Err(e) => log::error!("[timer] setTimeout failed for {:?}: {:?}", id, e),
    }
}

fn control_button(doc: &web::Document, control: Control) -> Option<web::HtmlElement> {
    let id = match control {
        Control::Prev => PREV_BUTTON_ID,
        Control::Next => NEXT_BUTTON_ID,
    };
    dom::html_element_by_id(doc, id)
}

fn modal_title(doc: &web::Document) -> Option<web::Element> {
    doc.query_selector(&format!("#{} h2", MODAL_BODY_ID))
        .ok()
        .flatten()
}

fn title_cursor(doc: &web::Document) -> Option<web::Element> {
    doc.query_selector(&format!("#{} .{}", MODAL_BODY_ID, TITLE_CURSOR_CLASS))
        .ok()
        .flatten()
}

// Empty the title and leave only the blinking cursor for characters to
// be inserted in front of.
fn begin_title(doc: &web::Document) {
    let Some(title) = modal_title(doc) else {
        return;
    };
    title.set_inner_html("");
    match doc.create_element("span") {
        Ok(cursor) => {
            cursor.set_class_name(TITLE_CURSOR_CLASS);
            _ = title.append_child(&cursor);
        }
        Err(e) => log::warn!("[modal] cursor element: {:?}", e),
    }
}
