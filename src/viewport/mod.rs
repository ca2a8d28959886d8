//! Terminal host for the navigation core: a scrolling page of blocks seen
//! through a fixed-height viewport.

pub mod geometry;
pub mod observer;
pub mod scroller;

use crate::nav::SectionId;

pub use geometry::{PageBlock, PageGeometry};
pub use observer::ViewportObserver;
pub use scroller::SmoothScroller;

/// Element handle in the terminal page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKey {
    Section(SectionId),
    Detail,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    /// First page row shown.
    pub offset: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(offset: u16, height: u16) -> Self {
        Self { offset, height }
    }

    pub fn bottom(&self) -> u16 {
        self.offset.saturating_add(self.height)
    }

    /// Scroll by `delta` rows, clamped to the page.
    pub fn scroll_by(&mut self, delta: i32, geometry: &PageGeometry) {
        let max = i32::from(geometry.max_offset(self.height));
        let next = (i32::from(self.offset) + delta).clamp(0, max);
        self.offset = next as u16;
    }

    pub fn clamp_to(&mut self, geometry: &PageGeometry) {
        self.offset = self.offset.min(geometry.max_offset(self.height));
    }
}
