use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::nav::NavError;
use crate::nav::registry::SectionRegistry;
use crate::nav::section::SectionId;

pub const DEFAULT_THRESHOLD: f32 = 0.5;

/// Host-side intersection observation capability.
pub trait IntersectionObserver<H> {
    fn observe(&mut self, target: &H) -> Result<(), NavError>;
    fn unobserve(&mut self, target: &H);
}

/// One element's visibility as reported by the host.
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionEntry<H> {
    pub target: H,
    /// Fraction of the element's area inside the viewport, `0.0..=1.0`.
    pub ratio: f32,
}

impl<H> IntersectionEntry<H> {
    pub fn new(target: H, ratio: f32) -> Self {
        Self { target, ratio }
    }
}

/// How to pick a winner when several sections cross into view in one batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// The last qualifying entry in batch order wins. Batch order is whatever
    /// the host delivers, so this is only as deterministic as the host.
    #[default]
    LastInBatch,
    /// The entry with the highest ratio wins; the earlier entry on a tie.
    HighestRatio,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackerOptions {
    pub threshold: f32,
    pub tie_break: TieBreak,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            tie_break: TieBreak::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TrackerState {
    Live,
    Paused,
    Disabled,
}

/// Keeps the active section in step with what the host reports as visible.
///
/// The tracker remembers exactly which handles it asked the host to observe
/// so that pausing releases the same set, even if the registry changed in
/// between.
#[derive(Debug)]
pub struct VisibilityTracker<H> {
    active: SectionId,
    options: TrackerOptions,
    state: TrackerState,
    observed: Vec<H>,
}

impl<H: Clone + PartialEq> VisibilityTracker<H> {
    pub fn new(options: TrackerOptions) -> Self {
        Self {
            active: SectionId::default(),
            options,
            state: TrackerState::Live,
            observed: Vec::new(),
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn options(&self) -> TrackerOptions {
        self.options
    }

    pub fn is_live(&self) -> bool {
        self.state == TrackerState::Live
    }

    pub fn is_disabled(&self) -> bool {
        self.state == TrackerState::Disabled
    }

    pub fn observed(&self) -> &[H] {
        &self.observed
    }

    pub fn force(&mut self, section: SectionId) {
        self.active = section;
    }

    /// Start observing a newly mounted element, if tracking is live.
    pub fn track<O: IntersectionObserver<H>>(&mut self, handle: &H, observer: &mut O) {
        if self.state != TrackerState::Live || self.observed.contains(handle) {
            return;
        }
        match observer.observe(handle) {
            Ok(()) => self.observed.push(handle.clone()),
            Err(err) => self.disable(err, observer),
        }
    }

    /// Stop observing an element that is going away.
    pub fn untrack<O: IntersectionObserver<H>>(&mut self, handle: &H, observer: &mut O) {
        if let Some(pos) = self.observed.iter().position(|h| h == handle) {
            let handle = self.observed.remove(pos);
            observer.unobserve(&handle);
        }
    }

    /// Release every subscription and ignore batches until [`resume`](Self::resume).
    pub fn pause<O: IntersectionObserver<H>>(&mut self, observer: &mut O) {
        self.release(observer);
        if self.state == TrackerState::Live {
            self.state = TrackerState::Paused;
        }
    }

    /// Observe every registered element again.
    pub fn resume<O: IntersectionObserver<H>>(
        &mut self,
        registry: &SectionRegistry<H>,
        observer: &mut O,
    ) {
        if self.state == TrackerState::Disabled {
            return;
        }
        self.state = TrackerState::Live;
        for (_, handle) in registry.iter() {
            self.track(handle, observer);
            if self.state == TrackerState::Disabled {
                return;
            }
        }
    }

    pub fn release<O: IntersectionObserver<H>>(&mut self, observer: &mut O) {
        for handle in self.observed.drain(..) {
            observer.unobserve(&handle);
        }
    }

    /// Apply a batch of entries. Returns the new active section if it changed.
    pub fn handle_batch(
        &mut self,
        entries: &[IntersectionEntry<H>],
        registry: &SectionRegistry<H>,
    ) -> Option<SectionId> {
        if self.state != TrackerState::Live {
            return None;
        }

        let threshold = self.options.threshold;
        let mut winner: Option<(SectionId, f32)> = None;
        for entry in entries.iter().filter(|e| e.ratio >= threshold) {
            let Some(section) = registry.lookup(&entry.target) else {
                continue;
            };
            winner = match (self.options.tie_break, winner) {
                (TieBreak::HighestRatio, Some((_, best))) if best >= entry.ratio => winner,
                _ => Some((section, entry.ratio)),
            };
        }

        let (section, ratio) = winner?;
        if section == self.active {
            return None;
        }
        debug!(%section, ratio, "active section changed");
        self.active = section;
        Some(section)
    }

    fn disable<O: IntersectionObserver<H>>(&mut self, err: NavError, observer: &mut O) {
        warn!(error = %err, "disabling section tracking");
        self.release(observer);
        self.state = TrackerState::Disabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeObserver {
        observed: Vec<&'static str>,
        observe_calls: usize,
        unobserve_calls: usize,
        fail_after: Option<usize>,
    }

    impl IntersectionObserver<&'static str> for FakeObserver {
        fn observe(&mut self, target: &&'static str) -> Result<(), NavError> {
            if self.fail_after.is_some_and(|n| self.observe_calls >= n) {
                return Err(NavError::ObservationUnsupported);
            }
            self.observe_calls += 1;
            self.observed.push(*target);
            Ok(())
        }

        fn unobserve(&mut self, target: &&'static str) {
            self.unobserve_calls += 1;
            self.observed.retain(|h| h != target);
        }
    }

    fn mounted() -> SectionRegistry<&'static str> {
        let mut registry = SectionRegistry::new();
        registry.register(SectionId::About, "about");
        registry.register(SectionId::Projects, "projects");
        registry.register(SectionId::Experience, "experience");
        registry.register(SectionId::Contact, "contact");
        registry
    }

    fn live_tracker(
        options: TrackerOptions,
        registry: &SectionRegistry<&'static str>,
        observer: &mut FakeObserver,
    ) -> VisibilityTracker<&'static str> {
        let mut tracker = VisibilityTracker::new(options);
        tracker.resume(registry, observer);
        tracker
    }

    #[test]
    fn test_starts_at_about_without_events() {
        let tracker: VisibilityTracker<&str> = VisibilityTracker::new(TrackerOptions::default());
        assert_eq!(tracker.active(), SectionId::About);
    }

    #[test]
    fn test_below_threshold_is_ignored() {
        let registry = mounted();
        let mut observer = FakeObserver::default();
        let mut tracker = live_tracker(TrackerOptions::default(), &registry, &mut observer);

        let changed = tracker.handle_batch(&[IntersectionEntry::new("projects", 0.49)], &registry);
        assert_eq!(changed, None);
        assert_eq!(tracker.active(), SectionId::About);

        let changed = tracker.handle_batch(&[IntersectionEntry::new("projects", 0.5)], &registry);
        assert_eq!(changed, Some(SectionId::Projects));
    }

    #[test]
    fn test_last_in_batch_wins() {
        let registry = mounted();
        let mut observer = FakeObserver::default();
        let mut tracker = live_tracker(TrackerOptions::default(), &registry, &mut observer);

        let batch = [
            IntersectionEntry::new("experience", 0.9),
            IntersectionEntry::new("contact", 0.55),
            IntersectionEntry::new("about", 0.1),
        ];
        tracker.handle_batch(&batch, &registry);
        assert_eq!(tracker.active(), SectionId::Contact);
    }

    #[test]
    fn test_highest_ratio_wins() {
        let registry = mounted();
        let mut observer = FakeObserver::default();
        let options = TrackerOptions {
            tie_break: TieBreak::HighestRatio,
            ..TrackerOptions::default()
        };
        let mut tracker = live_tracker(options, &registry, &mut observer);

        let batch = [
            IntersectionEntry::new("projects", 0.7),
            IntersectionEntry::new("experience", 0.9),
            IntersectionEntry::new("contact", 0.9),
        ];
        tracker.handle_batch(&batch, &registry);
        assert_eq!(tracker.active(), SectionId::Experience);
    }

    #[test]
    fn test_unregistered_target_is_ignored() {
        let mut registry = mounted();
        let mut observer = FakeObserver::default();
        let mut tracker = live_tracker(TrackerOptions::default(), &registry, &mut observer);
        registry.unregister(SectionId::Contact);

        assert_eq!(
            tracker.handle_batch(&[IntersectionEntry::new("contact", 1.0)], &registry),
            None
        );
        assert_eq!(tracker.active(), SectionId::About);
    }

    #[test]
    fn test_pause_releases_exactly_what_was_observed() {
        let registry = mounted();
        let mut observer = FakeObserver::default();
        let mut tracker = live_tracker(TrackerOptions::default(), &registry, &mut observer);
        assert_eq!(observer.observe_calls, 4);

        tracker.pause(&mut observer);
        assert_eq!(observer.unobserve_calls, 4);
        assert!(observer.observed.is_empty());
        assert!(!tracker.is_live());

        // Paused trackers ignore late batches
        tracker.handle_batch(&[IntersectionEntry::new("contact", 1.0)], &registry);
        assert_eq!(tracker.active(), SectionId::About);

        tracker.resume(&registry, &mut observer);
        assert_eq!(observer.observe_calls, 8);
        assert_eq!(tracker.observed().len(), 4);
    }

    #[test]
    fn test_track_twice_observes_once() {
        let registry = mounted();
        let mut observer = FakeObserver::default();
        let mut tracker = live_tracker(TrackerOptions::default(), &registry, &mut observer);
        tracker.track(&"about", &mut observer);
        assert_eq!(observer.observe_calls, 4);
        tracker.untrack(&"about", &mut observer);
        tracker.untrack(&"about", &mut observer);
        assert_eq!(observer.unobserve_calls, 1);
    }

    #[test]
    fn test_unsupported_observation_disables_and_releases() {
        let registry = mounted();
        let mut observer = FakeObserver {
            fail_after: Some(2),
            ..FakeObserver::default()
        };
        let mut tracker = live_tracker(TrackerOptions::default(), &registry, &mut observer);

        assert!(tracker.is_disabled());
        assert!(observer.observed.is_empty());
        assert_eq!(observer.unobserve_calls, 2);

        tracker.resume(&registry, &mut observer);
        assert!(tracker.is_disabled());
        assert_eq!(
            tracker.handle_batch(&[IntersectionEntry::new("projects", 1.0)], &registry),
            None
        );
        assert_eq!(tracker.active(), SectionId::About);
    }
}
