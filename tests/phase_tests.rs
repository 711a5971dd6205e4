// Host-side tests for intro phase selection.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod phase {
    include!("../src/core/phase.rs");
}

use phase::*;

#[test]
fn boundaries_are_half_open() {
    assert_eq!(select_phase(0.1, true), Phase::RUSH);
    assert_eq!(select_phase(4.4, true), Phase::RUSH);
    assert_eq!(select_phase(4.5, true), Phase::CRUISE);
    assert_eq!(select_phase(8.99, true), Phase::CRUISE);
    assert_eq!(select_phase(9.0, true), Phase::DRIFT);
    assert_eq!(select_phase(10.5, true), Phase::WARP);
    assert_eq!(select_phase(60.0, true), Phase::WARP);
}

#[test]
fn presets_match_timeline() {
    let rush = select_phase(4.4, true);
    assert_eq!((rush.velocity, rush.reset_depth), (10.0, 2500.0));
    let cruise = select_phase(4.5, true);
    assert_eq!((cruise.velocity, cruise.reset_depth), (5.0, 1800.0));
    let drift = select_phase(9.0, true);
    assert_eq!((drift.velocity, drift.reset_depth), (2.5, 1200.0));
    let warp = select_phase(10.5, true);
    assert_eq!((warp.velocity, warp.reset_depth), (6.0, 2000.0));
}

#[test]
fn idle_outside_active_intro() {
    assert_eq!(select_phase(5.0, false), Phase::IDLE);
    assert_eq!(select_phase(0.0, true), Phase::IDLE);
    assert_eq!(select_phase(-2.0, true), Phase::IDLE);
    assert_eq!(select_phase(f64::NAN, true), Phase::IDLE);
    assert_eq!(Phase::default(), Phase::IDLE);
    assert_eq!((Phase::IDLE.velocity, Phase::IDLE.reset_depth), (4.0, 1500.0));
}
