//! The carousel engine: slides, navigation, autoplay, input and announcements
//! wired to one host.

use tracing::{debug, info, warn};

use crate::announcer::Announcer;
use crate::autoplay::AutoplayTimer;
use crate::config::CarouselConfig;
use crate::error::{CarouselError, Result};
use crate::host::{Host, TimerHandle};
use crate::input::{Command, Disposition, InputArbiter, InputEvent};
use crate::navigation::{NavigationState, Transition};
use crate::slide::{SlideDescriptor, SlideSet};
use crate::state::{AutoplayState, PlaybackState};

/// A hero carousel mounted on a host.
///
/// Construction mounts the slides, attaches the input listeners and starts
/// autoplay. Every navigation, whatever its source, goes through the same
/// transition path: one render, then one announcement. Dropping the carousel
/// (or calling [`Carousel::destroy`]) cancels the timer, detaches the listeners
/// and removes the live region.
pub struct Carousel<H: Host> {
    slides: SlideSet,
    navigation: NavigationState,
    autoplay: AutoplayTimer,
    arbiter: InputArbiter,
    announcer: Announcer,
    host: H,
}

impl<H: Host> Carousel<H> {
    pub fn new(slides: SlideSet, mut host: H, config: &CarouselConfig) -> Result<Self> {
        config.validate()?;
        let navigation = NavigationState::new(slides.len())?;
        host.mount(&slides)
            .map_err(|e| CarouselError::NotInitialized(e.to_string()))?;

        let mut carousel = Self {
            arbiter: InputArbiter::new(slides.len(), config.swipe_threshold),
            autoplay: AutoplayTimer::new(config.autoplay_delay, config.autoplay),
            announcer: Announcer::new(),
            navigation,
            slides,
            host,
        };
        carousel.arbiter.attach(&mut carousel.host);
        carousel.autoplay.start(&mut carousel.host);

        info!(
            slides = carousel.slides.len(),
            autoplay = config.autoplay,
            "carousel initialized"
        );
        Ok(carousel)
    }

    pub fn slides(&self) -> &SlideSet {
        &self.slides
    }

    pub fn current_index(&self) -> usize {
        self.navigation.current()
    }

    pub fn slide_count(&self) -> usize {
        self.navigation.count()
    }

    pub fn current_slide(&self) -> Option<&SlideDescriptor> {
        self.slides.get(self.navigation.current())
    }

    pub fn playback(&self) -> PlaybackState {
        self.autoplay.playback()
    }

    pub fn autoplay_state(&self) -> AutoplayState {
        self.autoplay.state()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn next(&mut self) {
        let transition = self.navigation.next();
        self.apply(transition);
    }

    pub fn previous(&mut self) {
        let transition = self.navigation.previous();
        self.apply(transition);
    }

    /// Shows slide `index`. Out-of-range targets are rejected and change nothing.
    pub fn go_to(&mut self, index: usize) -> Result<()> {
        let transition = self.navigation.go_to(index)?;
        self.apply(transition);
        Ok(())
    }

    /// (Re)starts the autoplay trigger, replacing any live one.
    pub fn start_autoplay(&mut self) -> TimerHandle {
        self.autoplay.start(&mut self.host)
    }

    pub fn pause(&mut self) {
        self.autoplay.pause();
        debug!("autoplay suspended");
    }

    /// Lifts a pause. Has no effect while autoplay is disabled.
    pub fn resume(&mut self) {
        if self.autoplay.resume() {
            debug!("autoplay resumed");
        }
    }

    pub fn toggle_autoplay(&mut self) -> bool {
        let enabled = self.autoplay.toggle();
        debug!(enabled, "autoplay toggled");
        enabled
    }

    /// Delivers a tick of the repeating trigger. Ticks of cancelled triggers and
    /// ticks while playback is held are skipped.
    pub fn on_timer(&mut self, handle: TimerHandle) {
        if self.autoplay.should_advance(handle) {
            self.next();
        }
    }

    /// Handles one host event to completion.
    pub fn handle_input(&mut self, event: InputEvent) -> Disposition {
        let routed = self.arbiter.arbitrate(&event);
        if let Some(command) = routed.command {
            self.execute(command);
        }
        routed.disposition
    }

    /// Tears the carousel down. Equivalent to dropping it.
    pub fn destroy(self) {}

    fn execute(&mut self, command: Command) {
        match command {
            Command::Next => self.next(),
            Command::Previous => self.previous(),
            Command::GoTo(index) => {
                if let Err(e) = self.go_to(index) {
                    warn!(error = %e, "ignoring slide selection");
                }
            }
            Command::Pause => self.pause(),
            Command::Resume => self.resume(),
            Command::ToggleAutoplay => {
                self.toggle_autoplay();
            }
        }
    }

    fn apply(&mut self, transition: Transition) {
        if let Transition::Moved { from, to } = transition {
            debug!(from, to, "slide changed");
            self.host.render(from, to);
            self.announcer.notify(&mut self.host, to, self.navigation.count());
        }
    }
}

impl<H: Host> Drop for Carousel<H> {
    fn drop(&mut self) {
        self.autoplay.stop(&mut self.host);
        self.arbiter.detach(&mut self.host);
        self.announcer.release(&mut self.host);
        info!("carousel destroyed");
    }
}

impl<H: Host> std::fmt::Debug for Carousel<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("current", &self.navigation.current())
            .field("count", &self.navigation.count())
            .field("autoplay", &self.autoplay.state())
            .finish()
    }
}
