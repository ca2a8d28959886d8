//! Terminal portfolio with scroll-tracked section navigation.
//!
//! [`nav`] is the host-independent core; [`viewport`] adapts it to a
//! scrolling terminal page and [`app`] ties it to content and rendering.

pub mod app;
pub mod config;
pub mod content;
pub mod logging;
pub mod nav;
pub mod ui;
pub mod viewport;
