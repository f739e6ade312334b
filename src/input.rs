//! Input channels and their reconciliation into navigation commands.

use tracing::debug;

use crate::host::{EventSource, ListenerId};

/// Independent source of carousel input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Controls,
    Indicators,
    Hover,
    Keyboard,
    Touch,
    Visibility,
}

impl Channel {
    pub const ALL: [Channel; 6] = [
        Channel::Controls,
        Channel::Indicators,
        Channel::Hover,
        Channel::Keyboard,
        Channel::Touch,
        Channel::Visibility,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Space,
    Enter,
    Other,
}

/// Element holding keyboard focus inside the carousel region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    #[default]
    Region,
    PlayPause,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub target: FocusTarget,
}

impl KeyPress {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            target: FocusTarget::Region,
        }
    }

    pub fn on(key: Key, target: FocusTarget) -> Self {
        Self { key, target }
    }
}

/// Raw event delivered by a host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PreviousControl,
    NextControl,
    /// Activation of the play/pause affordance, when the host draws one.
    PlayPauseControl,
    /// Indicator selection. The index comes from the host and is not trusted.
    Indicator(usize),
    PointerEnter,
    PointerLeave,
    Key(KeyPress),
    TouchStart { x: f32 },
    TouchEnd { x: f32 },
    VisibilityChange { hidden: bool },
}

impl InputEvent {
    pub fn channel(&self) -> Channel {
        match self {
            InputEvent::PreviousControl
            | InputEvent::NextControl
            | InputEvent::PlayPauseControl => Channel::Controls,
            InputEvent::Indicator(_) => Channel::Indicators,
            InputEvent::PointerEnter | InputEvent::PointerLeave => Channel::Hover,
            InputEvent::Key(_) => Channel::Keyboard,
            InputEvent::TouchStart { .. } | InputEvent::TouchEnd { .. } => Channel::Touch,
            InputEvent::VisibilityChange { .. } => Channel::Visibility,
        }
    }
}

/// Navigation or playback operation requested by an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    GoTo(usize),
    Pause,
    Resume,
    ToggleAutoplay,
}

/// What the host should do with the event after the carousel saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Not meant for the carousel; host defaults apply.
    Ignored,
    Handled,
    /// Handled, and the host's default action (e.g. scrolling) must be suppressed.
    PreventDefault,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Routed {
    pub command: Option<Command>,
    pub disposition: Disposition,
}

impl Routed {
    fn ignored() -> Self {
        Self {
            command: None,
            disposition: Disposition::Ignored,
        }
    }

    fn handled(command: Command) -> Self {
        Self {
            command: Some(command),
            disposition: Disposition::Handled,
        }
    }

    fn prevent_default(command: Command) -> Self {
        Self {
            command: Some(command),
            disposition: Disposition::PreventDefault,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved left: show the next slide.
    Left,
    Right,
}

/// Horizontal swipe detection between a touch start and end.
#[derive(Debug, Clone, Copy)]
pub struct TouchTracker {
    threshold: f32,
    start_x: Option<f32>,
}

impl TouchTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Travel at or below the threshold is a tap, not a swipe.
    pub fn end(&mut self, x: f32) -> Option<Swipe> {
        let start = self.start_x.take()?;
        let displacement = x - start;
        if displacement.abs() <= self.threshold {
            return None;
        }
        if displacement < 0.0 {
            Some(Swipe::Left)
        } else {
            Some(Swipe::Right)
        }
    }
}

/// Owns the input listener registrations and maps events to commands, one at a time.
#[derive(Debug)]
pub struct InputArbiter {
    slide_count: usize,
    touch: TouchTracker,
    listeners: Vec<ListenerId>,
}

impl InputArbiter {
    pub fn new(slide_count: usize, swipe_threshold: f32) -> Self {
        Self {
            slide_count,
            touch: TouchTracker::new(swipe_threshold),
            listeners: Vec::new(),
        }
    }

    pub fn is_attached(&self) -> bool {
        !self.listeners.is_empty()
    }

    /// Registers one listener per channel. Attaching twice is a no-op.
    pub fn attach<E: EventSource + ?Sized>(&mut self, source: &mut E) {
        if self.is_attached() {
            return;
        }
        self.listeners = Channel::ALL.iter().map(|c| source.listen(*c)).collect();
        debug!(listeners = self.listeners.len(), "input listeners attached");
    }

    /// Releases every registration made by [`InputArbiter::attach`].
    pub fn detach<E: EventSource + ?Sized>(&mut self, source: &mut E) {
        for listener in self.listeners.drain(..) {
            source.unlisten(listener);
        }
    }

    pub fn arbitrate(&mut self, event: &InputEvent) -> Routed {
        if !self.is_attached() {
            return Routed::ignored();
        }

        match *event {
            InputEvent::PreviousControl => Routed::handled(Command::Previous),
            InputEvent::NextControl => Routed::handled(Command::Next),
            InputEvent::PlayPauseControl => Routed::handled(Command::ToggleAutoplay),
            InputEvent::Indicator(index) => Routed::handled(Command::GoTo(index)),
            InputEvent::PointerEnter => Routed::handled(Command::Pause),
            InputEvent::PointerLeave => Routed::handled(Command::Resume),
            InputEvent::Key(press) => self.route_key(press),
            InputEvent::TouchStart { x } => {
                self.touch.begin(x);
                Routed::ignored()
            }
            InputEvent::TouchEnd { x } => match self.touch.end(x) {
                Some(Swipe::Left) => Routed::handled(Command::Next),
                Some(Swipe::Right) => Routed::handled(Command::Previous),
                None => Routed::ignored(),
            },
            InputEvent::VisibilityChange { hidden: true } => Routed::handled(Command::Pause),
            InputEvent::VisibilityChange { hidden: false } => Routed::handled(Command::Resume),
        }
    }

    fn route_key(&self, press: KeyPress) -> Routed {
        match press.key {
            Key::ArrowLeft => Routed::prevent_default(Command::Previous),
            Key::ArrowRight => Routed::prevent_default(Command::Next),
            Key::Home => Routed::prevent_default(Command::GoTo(0)),
            Key::End => {
                Routed::prevent_default(Command::GoTo(self.slide_count.saturating_sub(1)))
            }
            Key::Space | Key::Enter if press.target == FocusTarget::PlayPause => {
                Routed::prevent_default(Command::ToggleAutoplay)
            }
            Key::Space | Key::Enter | Key::Other => Routed::ignored(),
        }
    }
}
