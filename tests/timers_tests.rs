// Host-side tests for the timer registry.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod phase {
    include!("../src/core/phase.rs");
}
mod pointer {
    include!("../src/core/pointer.rs");
}
mod starfield {
    include!("../src/core/starfield.rs");
}
mod viewport {
    include!("../src/core/viewport.rs");
}
mod sound {
    include!("../src/core/sound.rs");
}
mod timers {
    include!("../src/core/timers.rs");
}
mod effects {
    include!("../src/core/effects.rs");
}

use effects::{Control, Effect, Effects};
use timers::{TimerId, TimerKind, Timers};

#[test]
fn schedule_hands_out_increasing_ids() {
    let mut timers = Timers::default();
    let mut out = Effects::new();
    let a = timers.schedule(TimerKind::OverlayHide, 300, &mut out);
    let b = timers.schedule(TimerKind::ResizeApply, 100, &mut out);
    assert!(b > a);
    assert_eq!(
        out.as_slice(),
        &[
            Effect::ScheduleTimer { id: a, delay_ms: 300 },
            Effect::ScheduleTimer { id: b, delay_ms: 100 },
        ]
    );
    assert_eq!(timers.pending_count(), 2);
}

#[test]
fn fire_reports_kind_once() {
    let mut timers = Timers::default();
    let mut out = Effects::new();
    let id = timers.schedule(TimerKind::HighlightRevert(Control::Next), 200, &mut out);
    assert!(timers.is_pending(id));
    assert_eq!(timers.fire(id), Some(TimerKind::HighlightRevert(Control::Next)));
    assert_eq!(timers.fire(id), None);
    assert!(!timers.is_pending(id));
}

#[test]
fn cancelled_timer_never_fires() {
    let mut timers = Timers::default();
    let mut out = Effects::new();
    let id = timers.schedule(TimerKind::IntroAutoReveal, 15_080, &mut out);
    out.clear();
    assert!(timers.cancel(id, &mut out));
    assert_eq!(out.as_slice(), &[Effect::CancelTimer(id)]);
    assert_eq!(timers.fire(id), None);

    out.clear();
    assert!(!timers.cancel(id, &mut out));
    assert!(out.is_empty());
    assert!(!timers.cancel(TimerId(999), &mut out));
}

#[test]
fn cancel_slot_empties_the_slot() {
    let mut timers = Timers::default();
    let mut out = Effects::new();
    let mut slot = Some(timers.schedule(TimerKind::TitleChar, 40, &mut out));
    timers.cancel_slot(&mut slot, &mut out);
    assert_eq!(slot, None);
    assert_eq!(timers.pending_count(), 0);

    out.clear();
    timers.cancel_slot(&mut slot, &mut out);
    assert!(out.is_empty());
}

#[test]
fn timeout_table_releases_callbacks() {
    use std::rc::Rc;
    use timers::TimeoutTable;

    let owner = Rc::new(());
    let mut table = TimeoutTable::default();
    for n in 1..=3 {
        table.insert(TimerId(n), n as i32 * 10, owner.clone());
    }
    assert_eq!(Rc::strong_count(&owner), 4);

    // Cancelled: dropped at once.
    assert_eq!(table.cancel(TimerId(1)), Some(10));
    assert_eq!(table.cancel(TimerId(1)), None);
    assert_eq!(Rc::strong_count(&owner), 3);

    // Fired: kept until the next sweep.
    table.retire(TimerId(2));
    assert_eq!(table.live_count(), 1);
    assert_eq!(table.spent_count(), 1);
    assert_eq!(Rc::strong_count(&owner), 3);
    table.sweep();
    assert_eq!(Rc::strong_count(&owner), 2);

    table.retire(TimerId(99));
    assert_eq!(table.spent_count(), 0);
    assert_eq!(table.cancel(TimerId(3)), Some(30));
    assert_eq!(Rc::strong_count(&owner), 1);
}
