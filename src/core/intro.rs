use super::constants::{INTRO_DURATION_MS, OVERLAY_FADE_MS, REVEAL_DELAY_MS};
use super::effects::{Effect, Effects};
use super::timers::{TimerId, TimerKind, Timers};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroState {
    NotStarted,
    IntroPlaying,
    Revealed,
}

/// Start prompt → audio-timed intro → portfolio.
///
/// The auto-reveal timer is scheduled on start regardless of whether the
/// intro audio actually plays, so the portfolio is always reached.
#[derive(Debug)]
pub struct IntroMachine {
    state: IntroState,
    auto_reveal: Option<TimerId>,
    reveal_delay: Option<TimerId>,
}

impl Default for IntroMachine {
    fn default() -> Self {
        Self {
            state: IntroState::NotStarted,
            auto_reveal: None,
            reveal_delay: None,
        }
    }
}

impl IntroMachine {
    pub fn state(&self) -> IntroState {
        self.state
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.state == IntroState::IntroPlaying
    }

    // Session short-circuit: no audio, fade or timers.
    pub fn restore_revealed(&mut self, out: &mut Effects) {
        self.state = IntroState::Revealed;
        out.push(Effect::HideOverlay);
        out.push(Effect::HideCanvas);
    }

    pub fn start(&mut self, muted: bool, timers: &mut Timers, out: &mut Effects) -> bool {
        if self.state != IntroState::NotStarted {
            return false;
        }
        self.state = IntroState::IntroPlaying;
        log::info!("[intro] starting");
        out.push(Effect::SetIntroMuted(muted));
        out.push(Effect::StartFrameLoop);
        out.push(Effect::PlayIntroAudio);
        out.push(Effect::FadeOverlay);
        timers.schedule(TimerKind::OverlayHide, OVERLAY_FADE_MS, out);
        self.auto_reveal = Some(timers.schedule(
            TimerKind::IntroAutoReveal,
            INTRO_DURATION_MS,
            out,
        ));
        true
    }

    pub fn skip(&mut self, timers: &mut Timers, out: &mut Effects) -> bool {
        if self.state == IntroState::Revealed {
            return false;
        }
        log::info!("[intro] skipping");
        self.enter_revealed(timers, out);
        out.push(Effect::HideOverlay);
        true
    }

    // true when the portfolio should be revealed now
    pub fn on_timer(
        &mut self,
        id: TimerId,
        kind: TimerKind,
        timers: &mut Timers,
        out: &mut Effects,
    ) -> bool {
        match kind {
            TimerKind::OverlayHide => {
                out.push(Effect::HideOverlay);
                false
            }
            TimerKind::IntroAutoReveal => {
                if self.auto_reveal != Some(id) || self.state != IntroState::IntroPlaying {
                    return false;
                }
                self.auto_reveal = None;
                self.enter_revealed(timers, out);
                false
            }
            TimerKind::RevealPortfolio => {
                if self.reveal_delay != Some(id) {
                    return false;
                }
                self.reveal_delay = None;
                out.push(Effect::HideCanvas);
                out.push(Effect::StopFrameLoop);
                true
            }
            _ => false,
        }
    }

    fn enter_revealed(&mut self, timers: &mut Timers, out: &mut Effects) {
        timers.cancel_slot(&mut self.auto_reveal, out);
        self.state = IntroState::Revealed;
        out.push(Effect::StopIntroAudio);
        out.push(Effect::PersistSession);
        out.push(Effect::FadeCanvas);
        self.reveal_delay = Some(timers.schedule(
            TimerKind::RevealPortfolio,
            REVEAL_DELAY_MS,
            out,
        ));
    }
}
