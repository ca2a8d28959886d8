//! Section tracking and view-mode navigation.
//!
//! The types here know nothing about terminals or browsers. A host supplies
//! element handles as content mounts and implements [`IntersectionObserver`]
//! and [`Scroller`]; [`Navigator`] does the rest.

pub mod navigator;
pub mod registry;
pub mod scroll;
pub mod section;
pub mod tracker;
pub mod view;

use thiserror::Error;

pub use navigator::Navigator;
pub use registry::SectionRegistry;
pub use scroll::{ScrollSynchronizer, Scroller};
pub use section::SectionId;
pub use tracker::{IntersectionEntry, IntersectionObserver, TieBreak, TrackerOptions, VisibilityTracker};
pub use view::{ItemId, ViewController, ViewMode};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("intersection observation is not supported by this host")]
    ObservationUnsupported,
}
