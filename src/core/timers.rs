use super::effects::{Control, Effect, Effects};
use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    IntroAutoReveal,
    OverlayHide,
    RevealPortfolio,
    ResizeApply,
    TitleChar,
    TitleCursor,
    HighlightRevert(Control),
}

/// Registry of pending timers.
///
/// Scheduling and cancelling push the matching [`Effect`] so the browser
/// layer can mirror them with real `setTimeout` handles. A timer that was
/// cancelled here is never reported by [`Timers::fire`], even if the host
/// still delivers it.
#[derive(Debug, Default)]
pub struct Timers {
    next_id: u32,
    pending: FnvHashMap<TimerId, TimerKind>,
}

impl Timers {
    pub fn schedule(&mut self, kind: TimerKind, delay_ms: u32, out: &mut Effects) -> TimerId {
        self.next_id = self.next_id.wrapping_add(1);
        let id = TimerId(self.next_id);
        self.pending.insert(id, kind);
        out.push(Effect::ScheduleTimer { id, delay_ms });
        id
    }

    pub fn cancel(&mut self, id: TimerId, out: &mut Effects) -> bool {
        if self.pending.remove(&id).is_some() {
            out.push(Effect::CancelTimer(id));
            true
        } else {
            false
        }
    }

    pub fn cancel_slot(&mut self, slot: &mut Option<TimerId>, out: &mut Effects) {
        if let Some(id) = slot.take() {
            self.cancel(id, out);
        }
    }

    // None: cancelled or already fired.
    pub fn fire(&mut self, id: TimerId) -> Option<TimerKind> {
        self.pending.remove(&id)
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.contains_key(&id)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

/// Host-side mirror of pending timers: the platform handle plus the callback
/// that has to stay alive until the timer fires or is cancelled.
///
/// A fired callback is still on the stack when it reports back, so it is
/// parked by [`TimeoutTable::retire`] and only dropped by the next
/// [`TimeoutTable::sweep`].
#[derive(Debug)]
pub struct TimeoutTable<C> {
    live: FnvHashMap<TimerId, (i32, C)>,
    spent: Vec<C>,
}

impl<C> Default for TimeoutTable<C> {
    fn default() -> Self {
        Self {
            live: FnvHashMap::default(),
            spent: Vec::new(),
        }
    }
}

impl<C> TimeoutTable<C> {
    pub fn insert(&mut self, id: TimerId, handle: i32, callback: C) {
        self.live.insert(id, (handle, callback));
    }

    // Drops the callback; the handle is returned for clearing.
    pub fn cancel(&mut self, id: TimerId) -> Option<i32> {
        self.live.remove(&id).map(|(handle, _)| handle)
    }

    pub fn retire(&mut self, id: TimerId) {
        if let Some((_, callback)) = self.live.remove(&id) {
            self.spent.push(callback);
        }
    }

    pub fn sweep(&mut self) {
        self.spent.clear();
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn spent_count(&self) -> usize {
        self.spent.len()
    }
}
