use serde::{Deserialize, Serialize};

use crate::error::{CarouselError, Result};

/// Display content of one slide. Navigation never looks inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideDescriptor {
    pub image: String,
    pub title: String,
    pub subtitle: String,
    pub cta_label: String,
    pub cta_target: String,
}

impl SlideDescriptor {
    pub fn new(
        image: impl Into<String>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        cta_label: impl Into<String>,
        cta_target: impl Into<String>,
    ) -> Self {
        Self {
            image: image.into(),
            title: title.into(),
            subtitle: subtitle.into(),
            cta_label: cta_label.into(),
            cta_target: cta_target.into(),
        }
    }
}

/// Ordered, fixed-size list of slides. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideSet {
    slides: Vec<SlideDescriptor>,
}

impl SlideSet {
    pub fn new(slides: Vec<SlideDescriptor>) -> Result<Self> {
        if slides.is_empty() {
            return Err(CarouselError::NoSlides);
        }
        Ok(Self { slides })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false: a slide set cannot be built empty.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SlideDescriptor> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlideDescriptor> {
        self.slides.iter()
    }
}

impl<'a> IntoIterator for &'a SlideSet {
    type Item = &'a SlideDescriptor;
    type IntoIter = std::slice::Iter<'a, SlideDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}

impl TryFrom<Vec<SlideDescriptor>> for SlideSet {
    type Error = CarouselError;

    fn try_from(slides: Vec<SlideDescriptor>) -> Result<Self> {
        Self::new(slides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slide_set_is_rejected() {
        assert_eq!(SlideSet::new(Vec::new()), Err(CarouselError::NoSlides));
    }

    #[test]
    fn slide_set_keeps_construction_order() {
        let set = SlideSet::try_from(vec![
            SlideDescriptor::new("a.png", "A", "", "Go", "#a"),
            SlideDescriptor::new("b.png", "B", "", "Go", "#b"),
        ])
        .unwrap();

        let titles: Vec<_> = set.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["A", "B"]);
        assert_eq!(set.len(), 2);
        assert!(set.get(2).is_none());
    }
}
