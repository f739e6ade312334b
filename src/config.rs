//! Carousel settings and slide deck files.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{AUTOPLAY_DELAY_MS, SWIPE_THRESHOLD};
use crate::error::{CarouselError, DeckError};
use crate::slide::{SlideDescriptor, SlideSet};

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    pub autoplay_delay: Duration,
    pub swipe_threshold: f32,
    /// Whether autoplay starts enabled.
    pub autoplay: bool,
}

impl CarouselConfig {
    /// Rejects a zero autoplay period and a swipe threshold that is negative or not finite.
    pub fn validate(&self) -> Result<(), CarouselError> {
        if self.autoplay_delay.is_zero() {
            return Err(CarouselError::InvalidConfig(
                "autoplay delay must be greater than zero".to_string(),
            ));
        }
        if !self.swipe_threshold.is_finite() || self.swipe_threshold < 0.0 {
            return Err(CarouselError::InvalidConfig(format!(
                "swipe threshold must be a finite, non-negative distance, got {}",
                self.swipe_threshold
            )));
        }
        Ok(())
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_delay: Duration::from_millis(AUTOPLAY_DELAY_MS),
            swipe_threshold: SWIPE_THRESHOLD,
            autoplay: true,
        }
    }
}

/// Contents of a slide deck JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideDeck {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay_delay_ms: Option<u64>,
    pub slides: Vec<SlideDescriptor>,
}

impl SlideDeck {
    pub fn from_json(path: &Path, text: &str) -> Result<Self, DeckError> {
        let deck: SlideDeck = serde_json::from_str(text).map_err(|source| DeckError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if deck.slides.is_empty() {
            return Err(DeckError::Empty(path.to_path_buf()));
        }
        Ok(deck)
    }

    pub fn load(path: &Path) -> Result<Self, DeckError> {
        let text = fs::read_to_string(path).map_err(|source| DeckError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &text)
    }

    /// Builds a deck from every image in `dir`, sorted by file name and titled by file stem.
    /// Image references are file names, resolved against `dir` by [`resolve_image`].
    pub fn from_image_dir(dir: &Path) -> Result<Self, DeckError> {
        let read_error = |source| DeckError::Read {
            path: dir.to_path_buf(),
            source,
        };
        let mut paths = Vec::new();
        for entry in fs::read_dir(dir).map_err(read_error)? {
            let path = entry.map_err(read_error)?.path();
            if path.is_file() && is_image(&path) {
                paths.push(path);
            }
        }
        if paths.is_empty() {
            return Err(DeckError::Empty(dir.to_path_buf()));
        }
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        let slides = paths
            .iter()
            .filter_map(|path| {
                let name = path.file_name()?.to_string_lossy();
                let title = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().replace(['_', '-'], " "))
                    .unwrap_or_default();
                Some(SlideDescriptor::new(name, title, "", "Shop Now", "#products"))
            })
            .collect();
        Ok(Self {
            autoplay_delay_ms: None,
            slides,
        })
    }

    /// Applies the deck's own settings on top of `config`.
    pub fn configure(&self, config: &mut CarouselConfig) -> Result<(), CarouselError> {
        if let Some(ms) = self.autoplay_delay_ms {
            config.autoplay_delay = Duration::from_millis(ms);
        }
        config.validate()
    }

    pub fn slide_set(&self) -> Result<SlideSet, CarouselError> {
        SlideSet::new(self.slides.clone())
    }
}

impl Default for SlideDeck {
    fn default() -> Self {
        Self {
            autoplay_delay_ms: None,
            slides: default_slides(),
        }
    }
}

/// The storefront's three hero slides.
pub fn default_slides() -> Vec<SlideDescriptor> {
    vec![
        SlideDescriptor::new(
            "images/slider2.jpeg",
            "Premium Jerseys",
            "Professional quality jerseys for every sport",
            "Shop Jerseys",
            "#products",
        ),
        SlideDescriptor::new(
            "images/slider3.png",
            "Sports Jerseys Collection",
            "Authentic team jerseys and custom designs",
            "Explore Collection",
            "#products",
        ),
        SlideDescriptor::new(
            "images/slider1.jpeg",
            "Training Accessories",
            "Take your training to the next level",
            "Get Started",
            "#products",
        ),
    ]
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| matches!(ext.to_lowercase().as_str(), "png" | "jpg" | "jpeg" | "bmp" | "gif"))
        .unwrap_or(false)
}

/// Resolves a slide's image reference against `base`, leaving absolute paths alone.
pub fn resolve_image(base: &Path, image: &str) -> PathBuf {
    let path = Path::new(image);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
