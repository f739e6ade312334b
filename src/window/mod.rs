//! Desktop host for the carousel: a raylib window.

pub mod draw;
pub mod input;
pub mod layout;

use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, info};

use carousel::clock::FrameClock;
use carousel::host::{
    Display, EventSource, ListenerId, LiveRegionHost, LiveRegionSpec, RegionId, Scheduler,
    TimerHandle,
};
use carousel::{Channel, HostError, SlideSet};

struct LiveRegion {
    id: RegionId,
    text: String,
}

/// Host state behind the window: which slide and dot are active, the frame
/// clock, live listener registrations and the live region text.
pub struct WindowHost {
    width: i32,
    height: i32,
    clock: FrameClock,
    slide_count: usize,
    active_slide: usize,
    active_dot: usize,
    next_listener: u64,
    listeners: HashMap<ListenerId, Channel>,
    next_region: u64,
    region: Option<LiveRegion>,
    title: Option<String>,
}

impl WindowHost {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            clock: FrameClock::new(),
            slide_count: 0,
            active_slide: 0,
            active_dot: 0,
            next_listener: 0,
            listeners: HashMap::new(),
            next_region: 0,
            region: None,
            title: None,
        }
    }

    /// Advances the frame clock and returns the timers due this frame.
    pub fn advance(&mut self, dt: f32) -> Vec<TimerHandle> {
        self.clock.advance(dt)
    }

    pub fn listens_to(&self, channel: Channel) -> bool {
        self.listeners.values().any(|c| *c == channel)
    }

    pub fn active_slide(&self) -> usize {
        self.active_slide
    }

    pub fn active_dot(&self) -> usize {
        self.active_dot
    }

    pub fn live_text(&self) -> Option<&str> {
        self.region.as_ref().map(|r| r.text.as_str())
    }

    /// Window title to apply, if the live region changed since the last call.
    pub fn take_title(&mut self) -> Option<String> {
        self.title.take()
    }
}

impl Display for WindowHost {
    fn mount(&mut self, slides: &SlideSet) -> Result<(), HostError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(HostError::SurfaceUnavailable(format!(
                "window is {}x{}",
                self.width, self.height
            )));
        }
        self.slide_count = slides.len();
        self.active_slide = 0;
        self.active_dot = 0;
        info!(slides = self.slide_count, "hero section mounted");
        Ok(())
    }

    fn render(&mut self, previous: usize, current: usize) {
        debug_assert_eq!(self.active_slide, previous);
        if current < self.slide_count {
            self.active_slide = current;
            self.active_dot = current;
        }
    }
}

impl Scheduler for WindowHost {
    fn schedule_repeating(&mut self, period: Duration) -> TimerHandle {
        self.clock.schedule_repeating(period)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.clock.cancel(handle);
    }
}

impl LiveRegionHost for WindowHost {
    fn create_live_region(&mut self, spec: &LiveRegionSpec<'_>) -> Result<RegionId, HostError> {
        self.next_region += 1;
        let id = RegionId::new(self.next_region);
        debug!(region = spec.id, "live region created");
        self.region = Some(LiveRegion {
            id,
            text: String::new(),
        });
        Ok(id)
    }

    fn set_live_text(&mut self, region: RegionId, text: &str) -> Result<(), HostError> {
        match self.region.as_mut() {
            Some(live) if live.id == region => {
                live.text = text.to_string();
                self.title = Some(format!("Hero Carousel - {text}"));
                Ok(())
            }
            _ => Err(HostError::LiveRegionUnavailable(format!("region {} is gone", region.id()))),
        }
    }

    fn remove_live_region(&mut self, region: RegionId) {
        if self.region.as_ref().is_some_and(|r| r.id == region) {
            self.region = None;
        }
    }
}

impl EventSource for WindowHost {
    fn listen(&mut self, channel: Channel) -> ListenerId {
        self.next_listener += 1;
        let id = ListenerId::new(self.next_listener);
        self.listeners.insert(id, channel);
        id
    }

    fn unlisten(&mut self, listener: ListenerId) {
        self.listeners.remove(&listener);
    }
}
