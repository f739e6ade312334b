use std::time::Duration;

use tracing::debug;

use crate::host::{Scheduler, TimerHandle};
use crate::state::{AutoplayState, PlaybackState};

/// Periodic trigger that advances the carousel unless playback is held.
///
/// The trigger keeps firing while suspended; ticks are filtered through
/// [`AutoplayTimer::should_advance`] instead of cancelling and rescheduling.
#[derive(Debug)]
pub struct AutoplayTimer {
    period: Duration,
    handle: Option<TimerHandle>,
    playback: PlaybackState,
}

impl AutoplayTimer {
    pub fn new(period: Duration, enabled: bool) -> Self {
        Self {
            period,
            handle: None,
            playback: PlaybackState::new(enabled),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    pub fn handle(&self) -> Option<TimerHandle> {
        self.handle
    }

    pub fn state(&self) -> AutoplayState {
        match self.handle {
            None => AutoplayState::Stopped,
            Some(_) if self.playback.is_suspended() => AutoplayState::Suspended,
            Some(_) => AutoplayState::Running,
        }
    }

    /// Schedules the trigger, cancelling the previous one first.
    pub fn start<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) -> TimerHandle {
        if let Some(old) = self.handle.take() {
            debug!(timer = old.id(), "restarting autoplay timer");
            scheduler.cancel(old);
        }
        let handle = scheduler.schedule_repeating(self.period);
        debug!(
            timer = handle.id(),
            period_ms = self.period.as_millis() as u64,
            "autoplay timer started"
        );
        self.handle = Some(handle);
        handle
    }

    pub fn pause(&mut self) {
        self.playback.suspend();
    }

    /// Returns whether the hold was lifted; it stays when autoplay is disabled.
    pub fn resume(&mut self) -> bool {
        self.playback.release()
    }

    /// Flips the explicit toggle and returns the new enabled flag.
    pub fn toggle(&mut self) -> bool {
        self.playback.toggle()
    }

    /// Cancels the live trigger. No tick is accepted afterwards.
    pub fn stop<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.handle.take() {
            debug!(timer = handle.id(), "autoplay timer cancelled");
            scheduler.cancel(handle);
        }
    }

    pub fn is_live(&self, handle: TimerHandle) -> bool {
        self.handle == Some(handle)
    }

    /// Whether a tick delivered for `handle` should advance the carousel.
    pub fn should_advance(&self, handle: TimerHandle) -> bool {
        self.is_live(handle) && self.playback.should_advance()
    }
}
