use crate::viewport::{ElementKey, Viewport};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageBlock {
    pub key: Option<ElementKey>,
    pub top: u16,
    pub height: u16,
}

impl PageBlock {
    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }
}

/// Vertical layout of the page: blocks stacked in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageGeometry {
    blocks: Vec<PageBlock>,
    total_height: u16,
}

impl PageGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block below everything pushed so far. Unkeyed blocks are
    /// spacing or decoration that nothing can observe or scroll to.
    pub fn push(&mut self, key: Option<ElementKey>, height: u16) {
        self.blocks.push(PageBlock {
            key,
            top: self.total_height,
            height,
        });
        self.total_height = self.total_height.saturating_add(height);
    }

    pub fn total_height(&self) -> u16 {
        self.total_height
    }

    pub fn blocks(&self) -> &[PageBlock] {
        &self.blocks
    }

    pub fn block(&self, key: ElementKey) -> Option<&PageBlock> {
        self.blocks.iter().find(|b| b.key == Some(key))
    }

    pub fn max_offset(&self, viewport_height: u16) -> u16 {
        self.total_height.saturating_sub(viewport_height)
    }

    /// Fraction of the block's rows inside the viewport. Unknown or empty
    /// blocks report zero.
    pub fn visible_ratio(&self, key: ElementKey, viewport: Viewport) -> f32 {
        let Some(block) = self.block(key) else {
            return 0.0;
        };
        if block.height == 0 {
            return 0.0;
        }
        let top = block.top.max(viewport.offset);
        let bottom = block.bottom().min(viewport.bottom());
        f32::from(bottom.saturating_sub(top)) / f32::from(block.height)
    }

    /// Offset that brings the block's top to the top of the viewport,
    /// clamped so the page never scrolls past its end.
    pub fn scroll_target(&self, key: ElementKey, viewport_height: u16) -> Option<u16> {
        self.block(key)
            .map(|b| b.top.min(self.max_offset(viewport_height)))
    }
}
