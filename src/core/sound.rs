use super::constants::*;
use super::effects::{Effect, Effects};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    CarouselNav,
    CardHover,
    ModalOpen,
    ModalClose,
}

impl SoundCue {
    pub fn path(self) -> &'static str {
        match self {
            SoundCue::CarouselNav => NAV_SFX_PATH,
            SoundCue::CardHover => HOVER_SFX_PATH,
            SoundCue::ModalOpen => MODAL_OPEN_SFX_PATH,
            SoundCue::ModalClose => MODAL_CLOSE_SFX_PATH,
        }
    }

    pub fn volume(self) -> f64 {
        match self {
            SoundCue::CarouselNav => NAV_SFX_VOLUME,
            SoundCue::CardHover => HOVER_SFX_VOLUME,
            SoundCue::ModalOpen | SoundCue::ModalClose => MODAL_SFX_VOLUME,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct AudioPreferences {
    muted: bool,
}

impl AudioPreferences {
    #[inline]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn toggle(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    pub fn emit(&self, cue: SoundCue, out: &mut Effects) {
        if !self.muted {
            out.push(Effect::PlaySound(cue));
        }
    }
}
