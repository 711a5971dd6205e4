// Tuning constants for the starfield, intro timeline, carousel and modal.
//
// Timings are milliseconds unless the name says otherwise. The intro phase
// boundaries line up with beats in the intro narration track and must stay
// exact.

// Star field
pub const STAR_COUNT: usize = 2000;
pub const WORLD_WIDTH: f32 = 2000.0;
pub const WORLD_HEIGHT: f32 = 1500.0;
pub const INITIAL_DEPTH_SPAN: f32 = 1000.0; // initial z in [-1001, -1)
pub const WAVE_AMPLITUDE: f32 = 15.0;
pub const WAVE_BASE_FREQ: f32 = 0.01; // per world unit of base position
pub const WAVE_POINTER_GAIN: f32 = 10.0;
pub const STAR_SIZE: f32 = 5.0;

// Playback phases (seconds of intro audio)
pub const PHASE_RUSH_END_SEC: f64 = 4.5;
pub const PHASE_CRUISE_END_SEC: f64 = 9.0;
pub const PHASE_DRIFT_END_SEC: f64 = 10.5;

pub const IDLE_VELOCITY: f32 = 4.0;
pub const IDLE_RESET_DEPTH: f32 = 1500.0;
pub const RUSH_VELOCITY: f32 = 10.0;
pub const RUSH_RESET_DEPTH: f32 = 2500.0;
pub const CRUISE_VELOCITY: f32 = 5.0;
pub const CRUISE_RESET_DEPTH: f32 = 1800.0;
pub const DRIFT_VELOCITY: f32 = 2.5;
pub const DRIFT_RESET_DEPTH: f32 = 1200.0;
pub const WARP_VELOCITY: f32 = 6.0;
pub const WARP_RESET_DEPTH: f32 = 2000.0;

// Camera / surface
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 2000.0;
pub const MAX_PIXEL_RATIO: f32 = 2.0;
pub const TINT_THROTTLE_MS: f64 = 16.0;
pub const RESIZE_DEBOUNCE_MS: u32 = 100;

// Intro timeline
pub const INTRO_DURATION_MS: u32 = 15_080;
pub const OVERLAY_FADE_MS: u32 = 300;
pub const REVEAL_DELAY_MS: u32 = 500;
pub const SESSION_KEY: &str = "portfolio_visited";
pub const SESSION_VALUE: &str = "true";

// Carousel
pub const CAROUSEL_ITEMS: usize = 8;
pub const CAROUSEL_START_ANGLE_DEG: f64 = -45.0;
pub const CAROUSEL_DEPTH_REM: f64 = -35.0;
pub const HIGHLIGHT_REVERT_MS: u32 = 200;

// Modal title reveal
pub const TITLE_CHAR_INTERVAL_MS: u32 = 40;
pub const TITLE_CURSOR_LINGER_MS: u32 = 1000;
pub const FALLBACK_MARKUP: &str = "<p>Details not available.</p>";

// Audio assets and levels
pub const INTRO_AUDIO_PATH: &str = "Audios/PS2_startup_screen_sound.mp3";
pub const INTRO_AUDIO_VOLUME: f64 = 0.8;
pub const NAV_SFX_PATH: &str = "Audios/audio_backward_forward_button_event.wav";
pub const NAV_SFX_VOLUME: f64 = 0.6;
pub const HOVER_SFX_PATH: &str = "Audios/audio_card_hover_sound_effect.mp3";
pub const HOVER_SFX_VOLUME: f64 = 0.4;
pub const MODAL_OPEN_SFX_PATH: &str = "Audios/swish-sound-modal-open.mp3";
pub const MODAL_CLOSE_SFX_PATH: &str = "Audios/collapse-sound-modal-close.mp3";
pub const MODAL_SFX_VOLUME: f64 = 0.5;
