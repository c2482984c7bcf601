//! Lazily generated bone images, one per digit.

use crate::model::bone::{self, BoneImage};
use crate::model::Digit;
use tracing::debug;

/// Per-digit image cache for one scale.
///
/// Bounded to ten entries by construction, so there is no eviction. A scale
/// change discards everything via [`BoneCache::rescale`].
#[derive(Debug, Clone)]
pub struct BoneCache {
    scale: f64,
    images: [Option<BoneImage>; 10],
    index: BoneImage,
    blank: BoneImage,
}

impl BoneCache {
    pub fn new(scale: f64) -> Self {
        Self {
            scale,
            images: Default::default(),
            index: bone::index_strip(scale),
            blank: bone::blank_strip(scale),
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Image for `digit`, generating it on first use.
    pub fn get_or_generate(&mut self, digit: Digit) -> &BoneImage {
        let scale = self.scale;
        self.images[digit.index()].get_or_insert_with(|| {
            debug!(digit = digit.value(), scale, "Generating bone image");
            bone::generate(digit, scale)
        })
    }

    /// Image for `digit` if it has been generated.
    pub fn get(&self, digit: Digit) -> Option<&BoneImage> {
        self.images[digit.index()].as_ref()
    }

    pub fn index_strip(&self) -> &BoneImage {
        &self.index
    }

    pub fn blank(&self) -> &BoneImage {
        &self.blank
    }

    /// Number of generated digit images.
    pub fn len(&self) -> usize {
        self.images.iter().filter(|img| img.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every image and start over at `scale`.
    pub fn rescale(&mut self, scale: f64) {
        if scale != self.scale {
            *self = Self::new(scale);
        }
    }
}
