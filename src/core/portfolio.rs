use super::carousel::{control_for_key, Carousel};
use super::constants::RESIZE_DEBOUNCE_MS;
use super::effects::{Control, Effect, Effects, InputEvent};
use super::intro::{IntroMachine, IntroState};
use super::modal::{ContentRegistry, ModalPresenter};
use super::phase::{select_phase, Phase};
use super::pointer::PointerState;
use super::sound::{AudioPreferences, SoundCue};
use super::starfield::StarField;
use super::timers::{TimerId, TimerKind, Timers};
use super::viewport::{Projector, Viewport};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOutput {
    pub phase: Phase,
    pub tint: [f32; 3],
}

/// Single owner of all page state.
///
/// The browser layer feeds [`InputEvent`]s and animation frames in and
/// performs the returned [`Effect`]s. Nothing in here touches the DOM.
pub struct Portfolio {
    field: StarField,
    pointer: PointerState,
    projector: Projector,
    intro: IntroMachine,
    carousel: Carousel,
    modal: ModalPresenter,
    content: ContentRegistry,
    prefs: AudioPreferences,
    timers: Timers,
    pending_viewport: Option<Viewport>,
    resize_timer: Option<TimerId>,
    last_phase: Option<Phase>,
}

impl Portfolio {
    pub fn new(field: StarField, viewport: Viewport, content: ContentRegistry) -> Self {
        Self {
            field,
            pointer: PointerState::default(),
            projector: Projector::new(viewport),
            intro: IntroMachine::default(),
            carousel: Carousel::default(),
            modal: ModalPresenter::default(),
            content,
            prefs: AudioPreferences::default(),
            timers: Timers::default(),
            pending_viewport: None,
            resize_timer: None,
            last_phase: None,
        }
    }

    pub fn field(&self) -> &StarField {
        &self.field
    }

    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    pub fn intro_state(&self) -> IntroState {
        self.intro.state()
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn modal(&self) -> &ModalPresenter {
        &self.modal
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn is_muted(&self) -> bool {
        self.prefs.is_muted()
    }

    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    pub fn boot(&mut self, session_visited: bool) -> Effects {
        let mut out = Effects::new();
        out.push(Effect::SetMuteIndicator {
            muted: self.prefs.is_muted(),
        });
        if session_visited {
            log::info!("[intro] session already visited; skipping intro");
            self.intro.restore_revealed(&mut out);
            self.reveal_portfolio(&mut out);
        }
        out
    }

    pub fn handle(&mut self, event: InputEvent, now_ms: f64) -> Effects {
        let mut out = Effects::new();
        match event {
            InputEvent::StartRequested => {
                self.intro
                    .start(self.prefs.is_muted(), &mut self.timers, &mut out);
            }
            InputEvent::SkipRequested => {
                self.intro.skip(&mut self.timers, &mut out);
            }
            InputEvent::MuteToggled => {
                let muted = self.prefs.toggle();
                log::info!("[audio] muted={}", muted);
                out.push(Effect::SetMuteIndicator { muted });
                out.push(Effect::SetIntroMuted(muted));
            }
            InputEvent::PointerMoved { x, y } => self.pointer.moved(x, y, now_ms),
            InputEvent::PointerLeft => self.pointer.left(),
            InputEvent::Resized(viewport) => {
                self.pending_viewport = Some(viewport);
                self.timers.cancel_slot(&mut self.resize_timer, &mut out);
                self.resize_timer = Some(self.timers.schedule(
                    TimerKind::ResizeApply,
                    RESIZE_DEBOUNCE_MS,
                    &mut out,
                ));
            }
            InputEvent::VisibilityChanged { hidden } => {
                if hidden {
                    out.push(Effect::StopFrameLoop);
                } else if self.intro.is_playing() {
                    out.push(Effect::StartFrameLoop);
                }
            }
            InputEvent::KeyDown(key) => self.on_key(&key, &mut out),
            InputEvent::NavClicked(control) => self.navigate(control, &mut out),
            InputEvent::CardHovered => {
                if self.carousel.is_initialized() {
                    self.prefs.emit(SoundCue::CardHover, &mut out);
                }
            }
            InputEvent::ModalRequested(id) => {
                if self.modal.is_ready() {
                    self.prefs.emit(SoundCue::ModalOpen, &mut out);
                    self.modal
                        .open(&id, &self.content, &mut self.timers, &mut out);
                }
            }
            InputEvent::ModalCloseRequested => self.close_modal(&mut out),
            InputEvent::TimerFired(id) => self.on_timer(id, &mut out),
        }
        out
    }

    // `intro_audio_elapsed` is None while the track is paused, blocked or done.
    pub fn frame<R: Rng + ?Sized>(
        &mut self,
        now_ms: f64,
        time_sec: f32,
        intro_audio_elapsed: Option<f64>,
        rng: &mut R,
    ) -> FrameOutput {
        let intro_active = self.intro.is_playing() && intro_audio_elapsed.is_some();
        let phase = select_phase(intro_audio_elapsed.unwrap_or(0.0), intro_active);
        if self.last_phase != Some(phase) {
            log::debug!(
                "[intro] phase velocity={} reset_depth={}",
                phase.velocity,
                phase.reset_depth
            );
            self.last_phase = Some(phase);
        }
        self.field.advance(time_sec, phase, &self.pointer, rng);
        let tint = self.projector.update_tint(&self.pointer, now_ms);
        FrameOutput { phase, tint }
    }

    fn on_key(&mut self, key: &str, out: &mut Effects) {
        if key == "Escape" {
            self.close_modal(out);
            return;
        }
        if let Some(control) = control_for_key(key) {
            if !self.carousel.is_initialized() {
                return;
            }
            self.navigate(control, out);
            self.carousel.highlight(control, &mut self.timers, out);
        }
    }

    fn navigate(&mut self, control: Control, out: &mut Effects) {
        if !self.carousel.is_initialized() {
            return;
        }
        self.carousel.step(control, out);
        self.prefs.emit(SoundCue::CarouselNav, out);
    }

    fn close_modal(&mut self, out: &mut Effects) {
        if self.modal.is_open() {
            self.prefs.emit(SoundCue::ModalClose, out);
            self.modal.close(&mut self.timers, out);
        }
    }

    fn reveal_portfolio(&mut self, out: &mut Effects) {
        out.push(Effect::RevealCarousel);
        self.carousel.init(out);
        if self.modal.init() {
            log::info!("[modal] ready with {} entries", self.content.len());
        }
    }

    fn apply_resize(&mut self, out: &mut Effects) {
        let Some(next) = self.pending_viewport.take() else {
            return;
        };
        let prev = self.projector.apply_resize(next, &mut self.field);
        log::info!(
            "[resize] {}x{} -> {}x{} (pixel ratio {})",
            prev.width,
            prev.height,
            next.width,
            next.height,
            next.pixel_ratio()
        );
        out.push(Effect::ResizeSurface(next));
    }

    fn on_timer(&mut self, id: TimerId, out: &mut Effects) {
        let Some(kind) = self.timers.fire(id) else {
            return;
        };
        match kind {
            TimerKind::IntroAutoReveal | TimerKind::OverlayHide | TimerKind::RevealPortfolio => {
                if self.intro.on_timer(id, kind, &mut self.timers, out) {
                    self.reveal_portfolio(out);
                }
            }
            TimerKind::ResizeApply => {
                if self.resize_timer == Some(id) {
                    self.resize_timer = None;
                    self.apply_resize(out);
                }
            }
            TimerKind::TitleChar | TimerKind::TitleCursor => {
                self.modal.on_timer(id, kind, &mut self.timers, out);
            }
            TimerKind::HighlightRevert(control) => {
                self.carousel.on_highlight_timer(id, control, out);
            }
        }
    }
}
