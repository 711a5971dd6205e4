// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn phase_boundaries_are_ordered() {
    assert!(PHASE_RUSH_END_SEC > 0.0);
    assert!(PHASE_RUSH_END_SEC < PHASE_CRUISE_END_SEC);
    assert!(PHASE_CRUISE_END_SEC < PHASE_DRIFT_END_SEC);
    // The last phase must start before the auto-reveal cuts the intro off.
    assert!(PHASE_DRIFT_END_SEC * 1000.0 < INTRO_DURATION_MS as f64);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn respawn_depths_fit_camera_range() {
    for depth in [
        IDLE_RESET_DEPTH,
        RUSH_RESET_DEPTH,
        CRUISE_RESET_DEPTH,
        DRIFT_RESET_DEPTH,
        WARP_RESET_DEPTH,
    ] {
        assert!(depth > 0.0);
        assert!(depth <= 2500.0);
    }
    assert!(INITIAL_DEPTH_SPAN + 1.0 <= CAMERA_FAR);
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn carousel_steps_cover_full_turn() {
    let step = 360.0 / CAROUSEL_ITEMS as f64;
    assert_eq!(step, 45.0);
    assert_eq!(CAROUSEL_START_ANGLE_DEG, -step);
    assert!(CAROUSEL_DEPTH_REM < 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_ordered() {
    assert!(OVERLAY_FADE_MS < REVEAL_DELAY_MS);
    assert!(REVEAL_DELAY_MS < INTRO_DURATION_MS);
    assert!(TITLE_CHAR_INTERVAL_MS < TITLE_CURSOR_LINGER_MS);
    assert!(TINT_THROTTLE_MS > 0.0);
    assert!(RESIZE_DEBOUNCE_MS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn audio_levels_are_normalised() {
    for v in [
        INTRO_AUDIO_VOLUME,
        NAV_SFX_VOLUME,
        HOVER_SFX_VOLUME,
        MODAL_SFX_VOLUME,
    ] {
        assert!(v > 0.0 && v <= 1.0);
    }
    for path in [
        INTRO_AUDIO_PATH,
        NAV_SFX_PATH,
        HOVER_SFX_PATH,
        MODAL_OPEN_SFX_PATH,
        MODAL_CLOSE_SFX_PATH,
    ] {
        assert!(path.starts_with("Audios/"));
    }
}

#[test]
fn page_contract_is_consistent() {
    assert!(MODAL_LINK_SELECTOR.contains(PROJECT_CARD_SELECTOR));
    assert!(MODAL_LINK_SELECTOR.contains(MODAL_LINK_ATTR));
    assert!(CONTENT_TEMPLATE_SELECTOR.contains(CONTENT_ID_ATTR));
    assert_eq!(SESSION_VALUE, "true");
    assert!(HIGHLIGHT_STYLE.iter().all(|(p, v)| !p.is_empty() && !v.is_empty()));
    let ids = [
        CANVAS_ID,
        START_OVERLAY_ID,
        START_BUTTON_ID,
        SKIP_BUTTON_ID,
        AUDIO_TOGGLE_ID,
        CAROUSEL_SECTION_ID,
        PREV_BUTTON_ID,
        NEXT_BUTTON_ID,
        MODAL_ID,
        MODAL_BODY_ID,
        MODAL_CLOSE_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.starts_with('#'));
        assert!(ids[i + 1..].iter().all(|b| a != b), "duplicate id {}", a);
    }
}
