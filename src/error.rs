use std::path::PathBuf;

/// Errors returned by carousel construction and navigation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CarouselError {
    #[error("slide {index} is out of range for a carousel of {count} slides")]
    OutOfRange { index: usize, count: usize },

    #[error("carousel is not initialized: {0}")]
    NotInitialized(String),

    #[error("a carousel needs at least one slide")]
    NoSlides,

    #[error("invalid carousel setting: {0}")]
    InvalidConfig(String),
}

/// Failures reported by a host environment.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HostError {
    #[error("display surface unavailable: {0}")]
    SurfaceUnavailable(String),

    #[error("live region unavailable: {0}")]
    LiveRegionUnavailable(String),
}

/// Failures while loading a slide deck file.
#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    #[error("failed to read slide deck {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse slide deck {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("slide deck {0} contains no slides")]
    Empty(PathBuf),
}

pub type Result<T, E = CarouselError> = std::result::Result<T, E>;
