use tracing::debug;

/// Host smooth-scroll primitive. Requests are fire-and-forget; a later
/// request supersedes an earlier one still in flight.
pub trait Scroller<H> {
    fn scroll_into_view(&mut self, target: &H);
}

#[derive(Debug)]
pub struct ScrollSynchronizer<H> {
    detail: Option<H>,
    issued: u64,
}

impl<H> Default for ScrollSynchronizer<H> {
    fn default() -> Self {
        Self {
            detail: None,
            issued: 0,
        }
    }
}

impl<H> ScrollSynchronizer<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_detail_container(&mut self, detail: Option<H>) {
        self.detail = detail;
    }

    pub fn detail_container(&self) -> Option<&H> {
        self.detail.as_ref()
    }

    /// Number of scroll requests handed to the host so far.
    pub fn issued(&self) -> u64 {
        self.issued
    }

    pub fn to_element<S: Scroller<H>>(&mut self, target: &H, scroller: &mut S) {
        scroller.scroll_into_view(target);
        self.issued += 1;
    }

    pub fn to_detail<S: Scroller<H>>(&mut self, scroller: &mut S) -> bool {
        match self.detail.as_ref() {
            Some(detail) => {
                scroller.scroll_into_view(detail);
                self.issued += 1;
                true
            }
            None => {
                debug!("no detail container mounted, skipping scroll");
                false
            }
        }
    }
}
