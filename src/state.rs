/// Lifecycle of the autoplay trigger.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AutoplayState {
    Stopped,   // No live trigger, nothing will tick
    Running,   // Trigger live and ticks advance the carousel
    Suspended, // Trigger live but ticks are skipped
}

/// Playback flags of a carousel.
///
/// `enabled` is the explicit on/off toggle, `suspended` the transient hold set by
/// hover, page visibility or a manual pause. Only the carousel itself mutates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackState {
    enabled: bool,
    suspended: bool,
}

impl PlaybackState {
    pub(crate) fn new(enabled: bool) -> Self {
        Self {
            enabled,
            suspended: !enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Whether a timer tick should advance the carousel right now.
    pub fn should_advance(&self) -> bool {
        self.enabled && !self.suspended
    }

    pub(crate) fn suspend(&mut self) {
        self.suspended = true;
    }

    /// Lifts the hold unless autoplay was explicitly disabled.
    pub(crate) fn release(&mut self) -> bool {
        if self.enabled {
            self.suspended = false;
        }
        self.enabled
    }

    pub(crate) fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.suspended = !self.enabled;
        self.enabled
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new(true)
    }
}
