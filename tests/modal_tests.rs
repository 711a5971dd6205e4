// Host-side tests for the project modal and its typed title.
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
mod modal {
    include!("../src/core/modal.rs");
}

use constants::FALLBACK_MARKUP;
use effects::{Effect, Effects};
use modal::*;
use timers::{TimerId, Timers};

fn registry() -> ContentRegistry {
    ContentRegistry::from_entries([
        (
            "geno".to_string(),
            ContentEntry {
                markup: "<h2>Ab</h2><p>body</p>".to_string(),
                title: Some("Ab".to_string()),
            },
        ),
        (
            "plain".to_string(),
            ContentEntry {
                markup: "<p>no heading</p>".to_string(),
                title: None,
            },
        ),
    ])
}

fn last_timer(out: &Effects) -> (TimerId, u32) {
    out.iter()
        .rev()
        .find_map(|e| match e {
            Effect::ScheduleTimer { id, delay_ms } => Some((*id, *delay_ms)),
            _ => None,
        })
        .expect("a timer was scheduled")
}

fn fire(m: &mut ModalPresenter, timers: &mut Timers, id: TimerId) -> Effects {
    let mut out = Effects::new();
    if let Some(kind) = timers.fire(id) {
        m.on_timer(id, kind, timers, &mut out);
    }
    out
}

#[test]
fn unknown_id_shows_placeholder() {
    let mut m = ModalPresenter::default();
    let mut timers = Timers::default();
    let mut out = Effects::new();
    m.open("missing", &registry(), &mut timers, &mut out);
    assert_eq!(
        out.as_slice(),
        &[Effect::ShowModal {
            markup: FALLBACK_MARKUP.to_string()
        }]
    );
    assert!(m.is_open());
    assert_eq!(timers.pending_count(), 0);
}

#[test]
fn entry_without_title_skips_typing() {
    let mut m = ModalPresenter::default();
    let mut timers = Timers::default();
    let mut out = Effects::new();
    m.open("plain", &registry(), &mut timers, &mut out);
    assert_eq!(out.len(), 1);
    assert!(!out.contains(&Effect::BeginTitle));
}

#[test]
fn title_types_one_char_per_tick_then_drops_cursor() {
    let mut m = ModalPresenter::default();
    let mut timers = Timers::default();
    let mut out = Effects::new();
    m.open("geno", &registry(), &mut timers, &mut out);
    assert_eq!(out[0], Effect::ShowModal { markup: "<h2>Ab</h2><p>body</p>".to_string() });
    assert_eq!(out[1], Effect::BeginTitle);
    assert_eq!(out[2], Effect::AppendTitleChar('A'));
    let (t1, d1) = last_timer(&out);
    assert_eq!(d1, 40);

    let out = fire(&mut m, &mut timers, t1);
    assert_eq!(out[0], Effect::AppendTitleChar('b'));
    let (t2, d2) = last_timer(&out);
    assert_eq!(d2, 40);

    let out = fire(&mut m, &mut timers, t2);
    let (t3, d3) = last_timer(&out);
    assert_eq!(d3, 1000);
    assert!(!out.iter().any(|e| matches!(e, Effect::AppendTitleChar(_))));

    let out = fire(&mut m, &mut timers, t3);
    assert_eq!(out.as_slice(), &[Effect::RemoveTitleCursor]);
    assert_eq!(timers.pending_count(), 0);
}

#[test]
fn close_is_noop_when_not_open() {
    let mut m = ModalPresenter::default();
    let mut timers = Timers::default();
    let mut out = Effects::new();
    assert!(!m.close(&mut timers, &mut out));
    assert!(out.is_empty());
}

#[test]
fn close_mid_reveal_cancels_typing() {
    let mut m = ModalPresenter::default();
    let mut timers = Timers::default();
    let mut out = Effects::new();
    m.open("geno", &registry(), &mut timers, &mut out);
    let (pending, _) = last_timer(&out);

    out.clear();
    assert!(m.close(&mut timers, &mut out));
    assert_eq!(
        out.as_slice(),
        &[Effect::CancelTimer(pending), Effect::HideModal]
    );
    assert!(!m.is_open());
    assert!(fire(&mut m, &mut timers, pending).is_empty());
}

#[test]
fn reopen_replaces_running_reveal() {
    let mut m = ModalPresenter::default();
    let mut timers = Timers::default();
    let mut out = Effects::new();
    m.open("geno", &registry(), &mut timers, &mut out);
    let (old, _) = last_timer(&out);

    out.clear();
    m.open("geno", &registry(), &mut timers, &mut out);
    assert_eq!(out[0], Effect::CancelTimer(old));
    assert_eq!(out.iter().filter(|e| **e == Effect::BeginTitle).count(), 1);
    assert_eq!(timers.pending_count(), 1);
}

#[test]
fn init_only_once() {
    let mut m = ModalPresenter::default();
    assert!(!m.is_ready());
    assert!(m.init());
    assert!(!m.init());
    assert!(m.is_ready());
}

#[test]
fn title_reveal_walks_chars() {
    let mut r = TitleReveal::new("héllo");
    let typed: String = std::iter::from_fn(|| r.next_char()).collect();
    assert_eq!(typed, "héllo");
    assert!(r.is_done());
    assert_eq!(registry().len(), 2);
    assert!(ContentRegistry::default().is_empty());
}
