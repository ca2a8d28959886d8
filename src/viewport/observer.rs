use std::collections::HashMap;

use crate::nav::tracker::DEFAULT_THRESHOLD;
use crate::nav::{IntersectionEntry, IntersectionObserver, NavError};
use crate::viewport::{ElementKey, PageGeometry, Viewport};

/// Reports threshold crossings of observed page blocks.
///
/// A newly observed element always gets one initial entry on the next
/// [`collect`](Self::collect); after that an element only shows up when its
/// ratio moves across the threshold in either direction.
#[derive(Debug)]
pub struct ViewportObserver {
    threshold: f32,
    supported: bool,
    observed: Vec<ElementKey>,
    last_ratio: HashMap<ElementKey, f32>,
}

impl Default for ViewportObserver {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl ViewportObserver {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            supported: true,
            observed: Vec::new(),
            last_ratio: HashMap::new(),
        }
    }

    /// An observer that refuses every subscription.
    pub fn unsupported() -> Self {
        Self {
            supported: false,
            ..Self::default()
        }
    }

    pub fn observed(&self) -> &[ElementKey] {
        &self.observed
    }

    pub fn collect(
        &mut self,
        geometry: &PageGeometry,
        viewport: Viewport,
    ) -> Vec<IntersectionEntry<ElementKey>> {
        let mut batch = Vec::new();
        for &key in &self.observed {
            let ratio = geometry.visible_ratio(key, viewport);
            let crossed = match self.last_ratio.get(&key) {
                None => true,
                Some(&prev) => (prev >= self.threshold) != (ratio >= self.threshold),
            };
            self.last_ratio.insert(key, ratio);
            if crossed {
                batch.push(IntersectionEntry::new(key, ratio));
            }
        }
        batch
    }
}

impl IntersectionObserver<ElementKey> for ViewportObserver {
    fn observe(&mut self, target: &ElementKey) -> Result<(), NavError> {
        if !self.supported {
            return Err(NavError::ObservationUnsupported);
        }
        if !self.observed.contains(target) {
            self.observed.push(*target);
            self.last_ratio.remove(target);
        }
        Ok(())
    }

    fn unobserve(&mut self, target: &ElementKey) {
        self.observed.retain(|k| k != target);
        self.last_ratio.remove(target);
    }
}
