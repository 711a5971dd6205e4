use crate::core::{SoundCue, INTRO_AUDIO_PATH, INTRO_AUDIO_VOLUME};
use crate::dom;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// The narration track that paces the intro.
pub struct IntroAudio {
    element: Option<web::HtmlAudioElement>,
}

impl IntroAudio {
    pub fn new() -> Self {
        let element = match web::HtmlAudioElement::new_with_src(INTRO_AUDIO_PATH) {
            Ok(el) => {
                el.set_volume(INTRO_AUDIO_VOLUME);
                el.set_preload("auto");
                dom::add_listener(&el, "error", |ev| {
                    log::error!("[audio] intro load failed: {:?}", ev.type_());
                });
                Some(el)
            }
            Err(e) => {
                log::error!("[audio] could not create intro audio: {:?}", e);
                None
            }
        };
        Self { element }
    }

    /// Best effort; a rejected play is logged and otherwise ignored.
    pub fn play(&self) {
        if let Some(el) = &self.element {
            play_logged(el, "intro", log::Level::Error);
        }
    }

    pub fn stop(&self) {
        if let Some(el) = &self.element {
            _ = el.pause();
            el.set_current_time(0.0);
        }
    }

    pub fn set_muted(&self, muted: bool) {
        if let Some(el) = &self.element {
            el.set_muted(muted);
        }
    }

    /// Play position in seconds while actually playing.
    pub fn elapsed(&self) -> Option<f64> {
        let el = self.element.as_ref()?;
        let t = el.current_time();
        (!el.paused() && t > 0.0).then_some(t)
    }
}

/// Fire-and-forget sound effect on a fresh element.
pub fn play_cue(cue: SoundCue) {
    match web::HtmlAudioElement::new_with_src(cue.path()) {
        Ok(el) => {
            el.set_volume(cue.volume());
            play_logged(&el, "cue", log::Level::Warn);
        }
        Err(e) => log::warn!("[audio] could not create {:?}: {:?}", cue, e),
    }
}

fn play_logged(el: &web::HtmlAudioElement, label: &'static str, level: log::Level) {
    match el.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log_rejection(label, level, &e);
            }
        }),
        Err(e) => log_rejection(label, level, &e),
    }
}

fn log_rejection(label: &str, level: log::Level, e: &JsValue) {
    log::log!(level, "[audio] {} play blocked: {:?}", label, e);
}
