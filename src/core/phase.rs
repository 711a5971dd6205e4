use super::constants::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Phase {
    pub velocity: f32,
    pub reset_depth: f32,
}

impl Phase {
    pub const IDLE: Phase = Phase {
        velocity: IDLE_VELOCITY,
        reset_depth: IDLE_RESET_DEPTH,
    };
    pub const RUSH: Phase = Phase {
        velocity: RUSH_VELOCITY,
        reset_depth: RUSH_RESET_DEPTH,
    };
    pub const CRUISE: Phase = Phase {
        velocity: CRUISE_VELOCITY,
        reset_depth: CRUISE_RESET_DEPTH,
    };
    pub const DRIFT: Phase = Phase {
        velocity: DRIFT_VELOCITY,
        reset_depth: DRIFT_RESET_DEPTH,
    };
    pub const WARP: Phase = Phase {
        velocity: WARP_VELOCITY,
        reset_depth: WARP_RESET_DEPTH,
    };
}

impl Default for Phase {
    fn default() -> Self {
        Phase::IDLE
    }
}

/// Map elapsed intro-audio time to the active phase.
///
/// Intervals are half-open: `[0, 4.5)`, `[4.5, 9)`, `[9, 10.5)`, `[10.5, ∞)`.
/// Anything outside an active intro, including a non-positive elapsed time
/// (audio not yet started or blocked), falls back to [`Phase::IDLE`].
#[inline]
pub fn select_phase(elapsed_sec: f64, intro_active: bool) -> Phase {
    if !intro_active || !(elapsed_sec > 0.0) {
        return Phase::IDLE;
    }
    if elapsed_sec < PHASE_RUSH_END_SEC {
        Phase::RUSH
    } else if elapsed_sec < PHASE_CRUISE_END_SEC {
        Phase::CRUISE
    } else if elapsed_sec < PHASE_DRIFT_END_SEC {
        Phase::DRIFT
    } else {
        Phase::WARP
    }
}
