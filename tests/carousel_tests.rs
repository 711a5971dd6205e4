// Host-side tests for carousel rotation, key mapping and highlights.
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
mod carousel {
    include!("../src/core/carousel.rs");
}

use carousel::*;
use effects::{Control, Effect, Effects};
use timers::{TimerKind, Timers};

#[test]
fn full_turn_restores_orientation() {
    let mut c = Carousel::default();
    let start = c.orientation();
    for _ in 0..8 {
        c.next();
    }
    assert!((c.orientation() - start).abs() < 1e-9);
    assert!((c.angle() - (-405.0)).abs() < 1e-9);
    for _ in 0..8 {
        c.previous();
    }
    assert_eq!(c.angle(), -45.0);
}

#[test]
fn next_subtracts_and_previous_adds() {
    let mut c = Carousel::default();
    assert_eq!(c.angle_per_item(), 45.0);
    assert_eq!(c.next(), -90.0);
    assert_eq!(c.previous(), -45.0);
    assert_eq!(c.previous(), 0.0);
}

#[test]
fn init_is_idempotent() {
    let mut c = Carousel::default();
    let mut out = Effects::new();
    assert!(c.init(&mut out));
    assert_eq!(
        out.as_slice(),
        &[Effect::MarkCarouselInit, Effect::SetCarouselAngle(-45.0)]
    );
    out.clear();
    assert!(!c.init(&mut out));
    assert!(out.is_empty());
    assert!(c.is_initialized());
}

#[test]
fn transform_string() {
    assert_eq!(transform_css(-45.0), "translateZ(-35rem) rotateY(-45deg)");
    assert_eq!(transform_css(22.5), "translateZ(-35rem) rotateY(22.5deg)");
}

#[test]
fn arrow_keys_map_to_controls() {
    assert_eq!(control_for_key("ArrowRight"), Some(Control::Next));
    assert_eq!(control_for_key("ArrowUp"), Some(Control::Next));
    assert_eq!(control_for_key("ArrowLeft"), Some(Control::Prev));
    assert_eq!(control_for_key("ArrowDown"), Some(Control::Prev));
    assert_eq!(control_for_key("Enter"), None);
}

#[test]
fn repeat_highlight_reschedules_revert() {
    let mut c = Carousel::default();
    let mut timers = Timers::default();
    let mut out = Effects::new();

    c.highlight(Control::Next, &mut timers, &mut out);
    let first = match out.as_slice() {
        [Effect::Highlight(Control::Next), Effect::ScheduleTimer { id, delay_ms: 200 }] => *id,
        other => panic!("unexpected effects: {:?}", other),
    };

    out.clear();
    c.highlight(Control::Next, &mut timers, &mut out);
    assert_eq!(out[0], Effect::CancelTimer(first));
    let second = match out[2] {
        Effect::ScheduleTimer { id, .. } => id,
        ref other => panic!("unexpected effect: {:?}", other),
    };

    // The stale revert is filtered by the registry and by the slot check.
    assert_eq!(timers.fire(first), None);
    out.clear();
    c.on_highlight_timer(first, Control::Next, &mut out);
    assert!(out.is_empty());

    assert_eq!(
        timers.fire(second),
        Some(TimerKind::HighlightRevert(Control::Next))
    );
    c.on_highlight_timer(second, Control::Next, &mut out);
    assert_eq!(out.as_slice(), &[Effect::ClearHighlight(Control::Next)]);
}

#[test]
fn controls_highlight_independently() {
    let mut c = Carousel::default();
    let mut timers = Timers::default();
    let mut out = Effects::new();
    c.highlight(Control::Prev, &mut timers, &mut out);
    c.highlight(Control::Next, &mut timers, &mut out);
    assert!(!out.iter().any(|e| matches!(e, Effect::CancelTimer(_))));
    assert_eq!(timers.pending_count(), 2);
}
