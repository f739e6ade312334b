//! Recording host shared by the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use carousel::host::{
    Display, EventSource, ListenerId, LiveRegionHost, LiveRegionSpec, RegionId, Scheduler,
    TimerHandle,
};
use carousel::{Carousel, CarouselConfig, Channel, HostError, SlideDescriptor, SlideSet};

/// Everything the carousel did to its host, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Mount(usize),
    Render { previous: usize, current: usize },
    Announce(String),
    Schedule(TimerHandle, Duration),
    Cancel(TimerHandle),
    CreateRegion(String),
    RemoveRegion(RegionId),
    Listen(Channel),
    Unlisten(ListenerId),
}

#[derive(Debug, Default)]
pub struct Journal {
    pub calls: Vec<Call>,
    pub live_timers: Vec<TimerHandle>,
    pub listeners: HashMap<ListenerId, Channel>,
    pub active_slide: usize,
    pub active_dot: usize,
}

impl Journal {
    pub fn renders(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, Call::Render { .. })).count()
    }

    pub fn announcements(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Announce(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

#[derive(Default)]
pub struct RecordingHost {
    pub journal: Rc<RefCell<Journal>>,
    pub refuse_mount: bool,
    pub no_live_region: bool,
    next_id: u64,
}

impl RecordingHost {
    pub fn new() -> (Self, Rc<RefCell<Journal>>) {
        let host = Self::default();
        let journal = Rc::clone(&host.journal);
        (host, journal)
    }

    /// A host without the element the hero is mounted on.
    pub fn refusing_mount() -> Self {
        Self {
            refuse_mount: true,
            ..Self::default()
        }
    }

    pub fn without_live_region() -> Self {
        Self {
            no_live_region: true,
            ..Self::default()
        }
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn record(&self, call: Call) {
        self.journal.borrow_mut().calls.push(call);
    }
}

impl Display for RecordingHost {
    fn mount(&mut self, slides: &SlideSet) -> Result<(), HostError> {
        if self.refuse_mount {
            return Err(HostError::SurfaceUnavailable("no #hero element".to_string()));
        }
        self.record(Call::Mount(slides.len()));
        Ok(())
    }

    fn render(&mut self, previous: usize, current: usize) {
        self.record(Call::Render { previous, current });
        let mut journal = self.journal.borrow_mut();
        journal.active_slide = current;
        journal.active_dot = current;
    }
}

impl Scheduler for RecordingHost {
    fn schedule_repeating(&mut self, period: Duration) -> TimerHandle {
        let handle = TimerHandle::new(self.next_id());
        self.record(Call::Schedule(handle, period));
        self.journal.borrow_mut().live_timers.push(handle);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.record(Call::Cancel(handle));
        self.journal.borrow_mut().live_timers.retain(|h| *h != handle);
    }
}

impl LiveRegionHost for RecordingHost {
    fn create_live_region(&mut self, spec: &LiveRegionSpec<'_>) -> Result<RegionId, HostError> {
        if self.no_live_region {
            return Err(HostError::LiveRegionUnavailable("no document body".to_string()));
        }
        self.record(Call::CreateRegion(spec.id.to_string()));
        Ok(RegionId::new(self.next_id()))
    }

    fn set_live_text(&mut self, _region: RegionId, text: &str) -> Result<(), HostError> {
        self.record(Call::Announce(text.to_string()));
        Ok(())
    }

    fn remove_live_region(&mut self, region: RegionId) {
        self.record(Call::RemoveRegion(region));
    }
}

impl EventSource for RecordingHost {
    fn listen(&mut self, channel: Channel) -> ListenerId {
        let id = ListenerId::new(self.next_id());
        self.record(Call::Listen(channel));
        self.journal.borrow_mut().listeners.insert(id, channel);
        id
    }

    fn unlisten(&mut self, listener: ListenerId) {
        self.record(Call::Unlisten(listener));
        self.journal.borrow_mut().listeners.remove(&listener);
    }
}

pub fn slides(count: usize) -> SlideSet {
    let slides = (0..count)
        .map(|i| {
            let name = char::from(b'A' + (i % 26) as u8).to_string();
            SlideDescriptor::new(format!("{name}.png"), name, "subtitle", "Shop", "#products")
        })
        .collect();
    SlideSet::new(slides).expect("at least one slide")
}

pub fn mounted(count: usize) -> (Carousel<RecordingHost>, Rc<RefCell<Journal>>) {
    mounted_with(count, &CarouselConfig::default())
}

pub fn mounted_with(
    count: usize,
    config: &CarouselConfig,
) -> (Carousel<RecordingHost>, Rc<RefCell<Journal>>) {
    let (host, journal) = RecordingHost::new();
    let carousel = Carousel::new(slides(count), host, config).expect("carousel mounts");
    (carousel, journal)
}

/// The single live timer of the host.
pub fn live_timer(journal: &Rc<RefCell<Journal>>) -> TimerHandle {
    let journal = journal.borrow();
    assert_eq!(journal.live_timers.len(), 1, "expected exactly one live timer");
    journal.live_timers[0]
}
