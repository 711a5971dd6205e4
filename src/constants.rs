// Page contract: element ids, selectors and inline styles used by the
// browser layer. Numeric tuning lives in `core/constants.rs`.

// Intro
pub const CANVAS_ID: &str = "starfield";
pub const START_OVERLAY_ID: &str = "start-overlay";
pub const START_BUTTON_ID: &str = "start-btn";
pub const SKIP_BUTTON_ID: &str = "skip-btn";
pub const AUDIO_TOGGLE_ID: &str = "audio-toggle";

// Carousel
pub const CAROUSEL_SECTION_ID: &str = "portfolio-carousel";
pub const CAROUSEL_ROTATION_SELECTOR: &str = ".carousel-rotation-direction";
pub const PREV_BUTTON_ID: &str = "prev-btn";
pub const NEXT_BUTTON_ID: &str = "next-btn";
pub const PROJECT_CARD_SELECTOR: &str = ".project-card";
pub const INIT_MARKER_ATTR: &str = "data-init";

// Modal
pub const MODAL_ID: &str = "details-modal";
pub const MODAL_BODY_ID: &str = "modal-body";
pub const MODAL_CLOSE_ID: &str = "close-modal";
pub const MODAL_LINK_SELECTOR: &str = ".project-card a[data-modal]";
pub const MODAL_LINK_ATTR: &str = "data-modal";
pub const CONTENT_TEMPLATE_SELECTOR: &str = "template[data-modal-id]";
pub const CONTENT_ID_ATTR: &str = "data-modal-id";
pub const TITLE_CURSOR_CLASS: &str = "modal-typing-cursor";

// Shared class names
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_REVEALED: &str = "revealed";

// Canvas fade on reveal
pub const CANVAS_FADE_TRANSITION: &str = "opacity 0.1s ease-out";

// Keyboard highlight on the carousel controls
pub const HIGHLIGHT_STYLE: [(&str, &str); 4] = [
    ("background", "rgba(100, 180, 255, 0.6)"),
    ("box-shadow", "0 0 20px rgba(100, 180, 255, 0.8)"),
    ("transform", "translateY(-50%) scale(0.95)"),
    ("color", "white"),
];
