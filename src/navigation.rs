//! Index ring over a fixed number of slides.

use crate::error::{CarouselError, Result};

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Target was already current; nothing to render or announce.
    Unchanged,
    Moved { from: usize, to: usize },
}

/// Current slide index; `current < count` always holds and `count` never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    current: usize,
    count: usize,
}

impl NavigationState {
    pub fn new(count: usize) -> Result<Self> {
        if count == 0 {
            return Err(CarouselError::NoSlides);
        }
        Ok(Self { current: 0, count })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn last(&self) -> usize {
        self.count - 1
    }

    pub fn next_index(&self) -> usize {
        (self.current + 1) % self.count
    }

    pub fn previous_index(&self) -> usize {
        (self.current + self.count - 1) % self.count
    }

    pub fn next(&mut self) -> Transition {
        self.move_to(self.next_index())
    }

    pub fn previous(&mut self) -> Transition {
        self.move_to(self.previous_index())
    }

    /// Jumps to `index`. Out-of-range targets are rejected and leave the state untouched.
    pub fn go_to(&mut self, index: usize) -> Result<Transition> {
        if index >= self.count {
            return Err(CarouselError::OutOfRange {
                index,
                count: self.count,
            });
        }
        Ok(self.move_to(index))
    }

    fn move_to(&mut self, index: usize) -> Transition {
        if index == self.current {
            return Transition::Unchanged;
        }
        let from = self.current;
        self.current = index;
        Transition::Moved { from, to: index }
    }
}
