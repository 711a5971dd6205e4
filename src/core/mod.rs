pub mod carousel;
pub mod constants;
pub mod effects;
pub mod intro;
pub mod modal;
pub mod phase;
pub mod pointer;
pub mod portfolio;
pub mod sound;
pub mod starfield;
pub mod timers;
pub mod viewport;

pub use carousel::*;
pub use constants::*;
pub use effects::*;
pub use intro::*;
pub use modal::*;
pub use phase::*;
pub use pointer::*;
pub use portfolio::*;
pub use sound::*;
pub use starfield::*;
pub use timers::*;
pub use viewport::*;

// Shaders bundled as string constants
pub static STARS_WGSL: &str = include_str!("../../shaders/stars.wgsl");
