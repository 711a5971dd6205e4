use super::constants::{FALLBACK_MARKUP, TITLE_CHAR_INTERVAL_MS, TITLE_CURSOR_LINGER_MS};
use super::effects::{Effect, Effects};
use super::timers::{TimerId, TimerKind, Timers};
use fnv::FnvHashMap;

#[derive(Clone, Debug, PartialEq)]
pub struct ContentEntry {
    pub markup: String,
    pub title: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct ContentRegistry {
    entries: FnvHashMap<String, ContentEntry>,
}

impl ContentRegistry {
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, ContentEntry)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&ContentEntry> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct TitleReveal {
    chars: Vec<char>,
    cursor: usize,
}

impl TitleReveal {
    pub fn new(title: &str) -> Self {
        Self {
            chars: title.chars().collect(),
            cursor: 0,
        }
    }

    pub fn next_char(&mut self) -> Option<char> {
        let c = self.chars.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(c)
    }

    pub fn is_done(&self) -> bool {
        self.cursor >= self.chars.len()
    }
}

#[derive(Debug, Default)]
pub struct ModalPresenter {
    ready: bool,
    open: bool,
    reveal: Option<TitleReveal>,
    char_timer: Option<TimerId>,
    cursor_timer: Option<TimerId>,
}

impl ModalPresenter {
    pub fn init(&mut self) -> bool {
        if self.ready {
            return false;
        }
        self.ready = true;
        true
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Show `id`, or a placeholder when it is unknown, and start typing its
    /// title. A reveal still running from a previous open is cancelled.
    pub fn open(
        &mut self,
        id: &str,
        registry: &ContentRegistry,
        timers: &mut Timers,
        out: &mut Effects,
    ) {
        self.stop_reveal(timers, out);
        let entry = registry.get(id);
        if entry.is_none() {
            log::warn!("[modal] no content for '{}'", id);
        }
        let markup = entry
            .map(|e| e.markup.clone())
            .unwrap_or_else(|| FALLBACK_MARKUP.to_string());
        out.push(Effect::ShowModal { markup });
        self.open = true;

        if let Some(title) = entry.and_then(|e| e.title.as_deref()) {
            out.push(Effect::BeginTitle);
            self.reveal = Some(TitleReveal::new(title));
            self.type_next(timers, out);
        }
    }

    pub fn close(&mut self, timers: &mut Timers, out: &mut Effects) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        self.stop_reveal(timers, out);
        out.push(Effect::HideModal);
        true
    }

    pub fn on_timer(
        &mut self,
        id: TimerId,
        kind: TimerKind,
        timers: &mut Timers,
        out: &mut Effects,
    ) {
        match kind {
            TimerKind::TitleChar if self.char_timer == Some(id) => {
                self.char_timer = None;
                self.type_next(timers, out);
            }
            TimerKind::TitleCursor if self.cursor_timer == Some(id) => {
                self.cursor_timer = None;
                out.push(Effect::RemoveTitleCursor);
            }
            _ => {}
        }
    }

    // Emit one character and chain the next step; once exhausted, leave the
    // cursor up for a moment before removing it.
    fn type_next(&mut self, timers: &mut Timers, out: &mut Effects) {
        let Some(reveal) = self.reveal.as_mut() else {
            return;
        };
        match reveal.next_char() {
            Some(c) => {
                out.push(Effect::AppendTitleChar(c));
                self.char_timer =
                    Some(timers.schedule(TimerKind::TitleChar, TITLE_CHAR_INTERVAL_MS, out));
            }
            None => {
                self.reveal = None;
                self.cursor_timer =
                    Some(timers.schedule(TimerKind::TitleCursor, TITLE_CURSOR_LINGER_MS, out));
            }
        }
    }

    fn stop_reveal(&mut self, timers: &mut Timers, out: &mut Effects) {
        self.reveal = None;
        timers.cancel_slot(&mut self.char_timer, out);
        timers.cancel_slot(&mut self.cursor_timer, out);
    }
}
