use tracing::{debug, info};

use crate::nav::registry::SectionRegistry;
use crate::nav::scroll::{ScrollSynchronizer, Scroller};
use crate::nav::section::SectionId;
use crate::nav::tracker::{IntersectionEntry, IntersectionObserver, TrackerOptions, VisibilityTracker};
use crate::nav::view::{ItemId, ViewController, ViewMode};

/// Section the nav highlights whenever the detail view is entered or left.
pub const DETAIL_SECTION: SectionId = SectionId::Projects;

/// Entry point for every navigation intent. Owns the registry, the tracker,
/// the view state and the host's observer and scroller.
pub struct Navigator<H, O, S>
where
    H: Clone + PartialEq,
    O: IntersectionObserver<H>,
    S: Scroller<H>,
{
    registry: SectionRegistry<H>,
    tracker: VisibilityTracker<H>,
    view: ViewController,
    scroll: ScrollSynchronizer<H>,
    observer: O,
    scroller: S,
}

impl<H, O, S> Navigator<H, O, S>
where
    H: Clone + PartialEq,
    O: IntersectionObserver<H>,
    S: Scroller<H>,
{
    pub fn new(observer: O, scroller: S, options: TrackerOptions) -> Self {
        Self {
            registry: SectionRegistry::new(),
            tracker: VisibilityTracker::new(options),
            view: ViewController::new(),
            scroll: ScrollSynchronizer::new(),
            observer,
            scroller,
        }
    }

    pub fn active_section(&self) -> SectionId {
        self.tracker.active()
    }

    pub fn view_mode(&self) -> &ViewMode {
        self.view.mode()
    }

    pub fn registry(&self) -> &SectionRegistry<H> {
        &self.registry
    }

    pub fn is_tracking(&self) -> bool {
        self.tracker.is_live()
    }

    pub fn tracking_disabled(&self) -> bool {
        self.tracker.is_disabled()
    }

    pub fn scrolls_issued(&self) -> u64 {
        self.scroll.issued()
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn scroller(&self) -> &S {
        &self.scroller
    }

    pub fn scroller_mut(&mut self) -> &mut S {
        &mut self.scroller
    }

    pub fn mount(&mut self, section: SectionId, handle: H) {
        if let Some(previous) = self.registry.register(section, handle.clone()) {
            self.tracker.untrack(&previous, &mut self.observer);
        }
        self.tracker.track(&handle, &mut self.observer);
    }

    pub fn unmount(&mut self, section: SectionId) {
        if let Some(handle) = self.registry.unregister(section) {
            self.tracker.untrack(&handle, &mut self.observer);
        }
    }

    pub fn set_detail_container(&mut self, detail: Option<H>) {
        self.scroll.set_detail_container(detail);
    }

    /// Scroll to a section, leaving the detail view first if needed. A
    /// section that is not mounted is skipped without error.
    pub fn navigate_to(&mut self, section: SectionId) {
        if self.view.leave() {
            info!(%section, "leaving detail view");
            self.tracker.resume(&self.registry, &mut self.observer);
        }
        match self.registry.get(section) {
            Some(handle) => self.scroll.to_element(handle, &mut self.scroller),
            None => debug!(%section, "section not mounted, skipping navigation"),
        }
    }

    pub fn select(&mut self, item: ItemId) {
        let label = item.to_string();
        if !self.view.select(item) {
            return;
        }
        info!(item = %label, "entering detail view");
        self.tracker.pause(&mut self.observer);
        self.tracker.force(DETAIL_SECTION);
        self.scroll.to_detail(&mut self.scroller);
    }

    pub fn back(&mut self) {
        if !self.view.back() {
            return;
        }
        info!("back to overview");
        self.tracker.force(DETAIL_SECTION);
        self.tracker.resume(&self.registry, &mut self.observer);
    }

    pub fn handle_intersections(&mut self, entries: &[IntersectionEntry<H>]) -> Option<SectionId> {
        self.tracker.handle_batch(entries, &self.registry)
    }

    /// Release every subscription and unmount everything.
    pub fn teardown(&mut self) {
        self.tracker.release(&mut self.observer);
        self.registry.clear();
        self.scroll.set_detail_container(None);
    }
}

impl<H, O, S> Drop for Navigator<H, O, S>
where
    H: Clone + PartialEq,
    O: IntersectionObserver<H>,
    S: Scroller<H>,
{
    fn drop(&mut self) {
        self.teardown();
    }
}
