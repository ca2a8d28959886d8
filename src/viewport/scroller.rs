use tracing::trace;

use crate::nav::Scroller;
use crate::viewport::{ElementKey, PageGeometry, Viewport};

pub const DEFAULT_DIVISOR: u16 = 4;

/// Eased scroll animation toward the most recently requested element.
///
/// The target is resolved against the geometry at every step rather than
/// when it is requested, so a request made just before a relayout (for
/// example entering the detail view) still lands on the new position.
#[derive(Debug)]
pub struct SmoothScroller {
    smooth: bool,
    divisor: u16,
    pending: Option<ElementKey>,
    settled: Option<ElementKey>,
}

impl Default for SmoothScroller {
    fn default() -> Self {
        Self::new(true, DEFAULT_DIVISOR)
    }
}

impl SmoothScroller {
    pub fn new(smooth: bool, divisor: u16) -> Self {
        Self {
            smooth,
            divisor: divisor.max(1),
            pending: None,
            settled: None,
        }
    }

    pub fn pending(&self) -> Option<ElementKey> {
        self.pending
    }

    pub fn is_animating(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
        self.settled = None;
    }

    /// The element the last animation came to rest on, reported once.
    pub fn take_settled(&mut self) -> Option<ElementKey> {
        self.settled.take()
    }

    /// Advance one frame. Returns whether the viewport moved.
    pub fn step(&mut self, geometry: &PageGeometry, viewport: &mut Viewport) -> bool {
        let Some(key) = self.pending else {
            return false;
        };
        let Some(target) = geometry.scroll_target(key, viewport.height) else {
            // Not laid out yet; keep waiting for the next frame.
            return false;
        };

        let current = viewport.offset;
        let distance = current.abs_diff(target);
        if distance == 0 {
            self.pending = None;
            self.settled = Some(key);
            return false;
        }

        let step = if self.smooth {
            distance.div_ceil(self.divisor)
        } else {
            distance
        };
        viewport.offset = if target > current {
            current + step
        } else {
            current - step
        };
        trace!(?key, offset = viewport.offset, target, "scroll step");
        if viewport.offset == target {
            self.pending = None;
            self.settled = Some(key);
        }
        true
    }
}

impl Scroller<ElementKey> for SmoothScroller {
    fn scroll_into_view(&mut self, target: &ElementKey) {
        self.pending = Some(*target);
        self.settled = None;
    }
}
