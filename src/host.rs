//! Seams between the carousel and the environment hosting it.
//!
//! A host supplies a display surface, a repeating timer, an assistive-technology
//! live region and input listeners. Everything here can be mocked, so the
//! carousel runs in tests without a window or a document.

use std::time::Duration;

use crate::error::HostError;
use crate::input::Channel;
use crate::slide::SlideSet;

/// Handle of a repeating timer created by a [`Scheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Registration of one input channel with an [`EventSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Live region created by a [`LiveRegionHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionId(u64);

impl RegionId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// How eagerly assistive technology reads region updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Politeness {
    Polite,
    Assertive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveRegionSpec<'a> {
    pub id: &'a str,
    pub politeness: Politeness,
    /// Read the whole region on every change, not just the diff.
    pub atomic: bool,
}

/// Surface the slides are drawn on.
pub trait Display {
    /// Builds the slide and indicator structure, with slide 0 and indicator 0 active.
    fn mount(&mut self, slides: &SlideSet) -> Result<(), HostError>;

    /// Moves the active mark of both the slide and its indicator from `previous` to `current`.
    fn render(&mut self, previous: usize, current: usize);
}

/// Repeating timer primitive.
pub trait Scheduler {
    fn schedule_repeating(&mut self, period: Duration) -> TimerHandle;
    fn cancel(&mut self, handle: TimerHandle);
}

/// Off-screen text channel read by assistive technology.
pub trait LiveRegionHost {
    fn create_live_region(&mut self, spec: &LiveRegionSpec<'_>) -> Result<RegionId, HostError>;
    fn set_live_text(&mut self, region: RegionId, text: &str) -> Result<(), HostError>;
    fn remove_live_region(&mut self, region: RegionId);
}

/// Registry of input listeners. The host delivers events only for channels with a
/// live registration.
pub trait EventSource {
    fn listen(&mut self, channel: Channel) -> ListenerId;
    fn unlisten(&mut self, listener: ListenerId);
}

/// Everything a carousel needs from its environment.
pub trait Host: Display + Scheduler + LiveRegionHost + EventSource {}

impl<T> Host for T where T: Display + Scheduler + LiveRegionHost + EventSource {}
