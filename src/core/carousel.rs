use super::constants::{
    CAROUSEL_DEPTH_REM, CAROUSEL_ITEMS, CAROUSEL_START_ANGLE_DEG, HIGHLIGHT_REVERT_MS,
};
use super::effects::{Control, Effect, Effects};
use super::timers::{TimerId, TimerKind, Timers};

// Angle is never wrapped; CSS handles the visual wrap-around.
#[derive(Debug)]
pub struct Carousel {
    angle_deg: f64,
    item_count: usize,
    initialized: bool,
    prev_highlight: Option<TimerId>,
    next_highlight: Option<TimerId>,
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new(CAROUSEL_ITEMS, CAROUSEL_START_ANGLE_DEG)
    }
}

impl Carousel {
    pub fn new(item_count: usize, start_angle_deg: f64) -> Self {
        Self {
            angle_deg: start_angle_deg,
            item_count: item_count.max(1),
            initialized: false,
            prev_highlight: None,
            next_highlight: None,
        }
    }

    pub fn angle(&self) -> f64 {
        self.angle_deg
    }

    pub fn orientation(&self) -> f64 {
        self.angle_deg.rem_euclid(360.0)
    }

    #[inline]
    pub fn angle_per_item(&self) -> f64 {
        360.0 / self.item_count as f64
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn init(&mut self, out: &mut Effects) -> bool {
        if self.initialized {
            return false;
        }
        self.initialized = true;
        out.push(Effect::MarkCarouselInit);
        out.push(Effect::SetCarouselAngle(self.angle_deg));
        log::info!("[carousel] initialised at {}deg", self.angle_deg);
        true
    }

    pub fn next(&mut self) -> f64 {
        self.angle_deg -= self.angle_per_item();
        self.angle_deg
    }

    pub fn previous(&mut self) -> f64 {
        self.angle_deg += self.angle_per_item();
        self.angle_deg
    }

    pub fn step(&mut self, control: Control, out: &mut Effects) {
        let angle = match control {
            Control::Next => self.next(),
            Control::Prev => self.previous(),
        };
        out.push(Effect::SetCarouselAngle(angle));
    }

    // A repeat press replaces the pending revert.
    pub fn highlight(&mut self, control: Control, timers: &mut Timers, out: &mut Effects) {
        let slot = match control {
            Control::Prev => &mut self.prev_highlight,
            Control::Next => &mut self.next_highlight,
        };
        timers.cancel_slot(slot, out);
        out.push(Effect::Highlight(control));
        *slot = Some(timers.schedule(
            TimerKind::HighlightRevert(control),
            HIGHLIGHT_REVERT_MS,
            out,
        ));
    }

    pub fn on_highlight_timer(&mut self, id: TimerId, control: Control, out: &mut Effects) {
        let slot = match control {
            Control::Prev => &mut self.prev_highlight,
            Control::Next => &mut self.next_highlight,
        };
        if *slot == Some(id) {
            *slot = None;
            out.push(Effect::ClearHighlight(control));
        }
    }
}

pub fn transform_css(angle_deg: f64) -> String {
    format!("translateZ({}rem) rotateY({}deg)", CAROUSEL_DEPTH_REM, angle_deg)
}

#[inline]
pub fn control_for_key(key: &str) -> Option<Control> {
    match key {
        "ArrowRight" | "ArrowUp" => Some(Control::Next),
        "ArrowLeft" | "ArrowDown" => Some(Control::Prev),
        _ => None,
    }
}
