use super::sound::SoundCue;
use super::timers::TimerId;
use super::viewport::Viewport;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    Prev,
    Next,
}

#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    StartRequested,
    SkipRequested,
    MuteToggled,
    PointerMoved { x: f32, y: f32 },
    PointerLeft,
    Resized(Viewport),
    VisibilityChanged { hidden: bool },
    KeyDown(String),
    NavClicked(Control),
    CardHovered,
    ModalRequested(String),
    ModalCloseRequested,
    TimerFired(TimerId),
}

// Performed by the browser layer in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    ScheduleTimer { id: TimerId, delay_ms: u32 },
    CancelTimer(TimerId),

    PlayIntroAudio,
    StopIntroAudio,
    SetIntroMuted(bool),
    PlaySound(SoundCue),
    SetMuteIndicator { muted: bool },
    PersistSession,

    StartFrameLoop,
    StopFrameLoop,
    ResizeSurface(Viewport),

    FadeOverlay,
    HideOverlay,
    FadeCanvas,
    HideCanvas,

    RevealCarousel,
    MarkCarouselInit,
    SetCarouselAngle(f64),
    Highlight(Control),
    ClearHighlight(Control),

    ShowModal { markup: String },
    HideModal,
    BeginTitle,
    AppendTitleChar(char),
    RemoveTitleCursor,
}

pub type Effects = SmallVec<[Effect; 8]>;
