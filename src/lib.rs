//! Hero image carousel engine.
//!
//! The engine keeps a fixed set of slides on an index ring, advances it on a
//! repeating timer, and reconciles buttons, indicators, keyboard, touch, hover and
//! page visibility into one stream of navigation calls. The environment (a
//! window, a document, a test double) is reached only through the traits in
//! [`host`].

pub mod announcer;
pub mod autoplay;
pub mod clock;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod host;
pub mod input;
pub mod navigation;
pub mod slide;
pub mod state;

pub use config::{CarouselConfig, SlideDeck};
pub use engine::Carousel;
pub use error::{CarouselError, DeckError, HostError};
pub use host::{Display, EventSource, Host, LiveRegionHost, Scheduler, TimerHandle};
pub use input::{Channel, Command, Disposition, FocusTarget, InputEvent, Key, KeyPress};
pub use slide::{SlideDescriptor, SlideSet};
pub use state::{AutoplayState, PlaybackState};
