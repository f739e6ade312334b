use std::time::Duration;

use crate::host::{Scheduler, TimerHandle};

struct Repeating {
    handle: TimerHandle,
    period: f32,
    elapsed: f32,
}

/// Repeating timers driven by the frame time of a render loop.
///
/// The host calls [`FrameClock::advance`] once per frame and delivers the returned
/// handles to the carousel, in order.
#[derive(Default)]
pub struct FrameClock {
    next_id: u64,
    timers: Vec<Repeating>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live_timers(&self) -> usize {
        self.timers.len()
    }

    /// Adds `dt` seconds to every timer and returns the timers that came due.
    ///
    /// A timer fires at most once per frame; periods missed during a long frame
    /// are dropped and only the phase within the current period is kept.
    pub fn advance(&mut self, dt: f32) -> Vec<TimerHandle> {
        let mut fired = Vec::new();
        for timer in self.timers.iter_mut() {
            timer.elapsed += dt;
            if timer.elapsed >= timer.period {
                timer.elapsed %= timer.period;
                fired.push(timer.handle);
            }
        }
        fired
    }
}

impl Scheduler for FrameClock {
    fn schedule_repeating(&mut self, period: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle::new(self.next_id);
        self.timers.push(Repeating {
            handle,
            // Phase is kept modulo the period, which must not be zero.
            period: period.as_secs_f32().max(f32::EPSILON),
            elapsed: 0.0,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.timers.retain(|t| t.handle != handle);
    }
}
