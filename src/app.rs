use ratatui::layout::{Position, Rect};
use tracing::info;

use crate::config::Config;
use crate::content::Portfolio;
use crate::nav::section::ALL_SECTIONS;
use crate::nav::{IntersectionEntry, ItemId, Navigator, SectionId, ViewMode};
use crate::ui::components::nav_list::NavList;
use crate::ui::page::{Page, build_page};
use crate::ui::theme::Theme;
use crate::viewport::{ElementKey, SmoothScroller, Viewport, ViewportObserver};

pub type PageNavigator = Navigator<ElementKey, ViewportObserver, SmoothScroller>;

pub struct App {
    pub config: Config,
    pub theme: Theme,
    pub portfolio: Portfolio,
    pub nav: PageNavigator,
    pub page: Page,
    pub viewport: Viewport,
    pub focused_project: Option<usize>,
    pub nav_area: Option<Rect>,
    pub main_area: Option<Rect>,
    pub should_quit: bool,
    page_width: u16,
    layout_dirty: bool,
    saved_list_offset: Option<u16>,
    restore_offset: Option<u16>,
}

impl App {
    pub fn new(config: Config, theme: Theme, portfolio: Portfolio) -> Self {
        let observer = if config.track_visibility {
            ViewportObserver::new(config.visibility_threshold)
        } else {
            ViewportObserver::unsupported()
        };
        let scroller = SmoothScroller::new(config.smooth_scroll, config.scroll_divisor);
        let mut nav = Navigator::new(observer, scroller, config.tracker_options());
        nav.set_detail_container(Some(ElementKey::Detail));

        let page = build_page(&portfolio, nav.view_mode(), None, 0, &theme);
        let focused_project = if portfolio.projects.is_empty() { None } else { Some(0) };

        let mut app = Self {
            config,
            theme,
            portfolio,
            nav,
            page,
            viewport: Viewport::default(),
            focused_project,
            nav_area: None,
            main_area: None,
            should_quit: false,
            page_width: 0,
            layout_dirty: true,
            saved_list_offset: None,
            restore_offset: None,
        };
        app.mount_sections();
        app
    }

    pub fn active_section(&self) -> SectionId {
        self.nav.active_section()
    }

    pub fn view_mode(&self) -> &ViewMode {
        self.nav.view_mode()
    }

    fn mount_sections(&mut self) {
        for section in ALL_SECTIONS {
            if self.portfolio.has_content(section) {
                self.nav.mount(section, ElementKey::Section(section));
            } else {
                self.nav.unmount(section);
            }
        }
    }

    /// Swap in new content. Every section is unmounted first so that no
    /// subscription survives for a section that disappeared.
    pub fn reload_content(&mut self, portfolio: Portfolio) {
        for section in ALL_SECTIONS {
            self.nav.unmount(section);
        }
        self.portfolio = portfolio;
        self.focused_project = match self.portfolio.projects.len() {
            0 => None,
            n => Some(self.focused_project.unwrap_or(0).min(n - 1)),
        };
        self.mount_sections();
        self.layout_dirty = true;
        info!(mounted = self.nav.registry().len(), "content reloaded");
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        if width != self.page_width || height != self.viewport.height {
            self.page_width = width;
            self.viewport.height = height;
            self.layout_dirty = true;
        }
    }

    pub fn ensure_layout(&mut self) {
        if !self.layout_dirty {
            return;
        }
        self.page = build_page(
            &self.portfolio,
            self.nav.view_mode(),
            self.focused_project,
            self.page_width,
            &self.theme,
        );
        if let Some(offset) = self.restore_offset.take() {
            self.viewport.offset = offset;
        }
        self.viewport.clamp_to(&self.page.geometry);
        self.layout_dirty = false;
    }

    /// One frame: relayout if needed, advance the scroll animation, then
    /// report intersections of the settled frame to the navigator.
    ///
    /// When an animation comes to rest, its target is reported again on its
    /// own so that the element navigated to wins over neighbours that were
    /// already in view and therefore never crossed the threshold.
    pub fn tick(&mut self) {
        self.ensure_layout();
        self.nav
            .scroller_mut()
            .step(&self.page.geometry, &mut self.viewport);
        let batch = self
            .nav
            .observer_mut()
            .collect(&self.page.geometry, self.viewport);
        if !batch.is_empty() {
            self.nav.handle_intersections(&batch);
        }
        if let Some(key) = self.nav.scroller_mut().take_settled() {
            let ratio = self.page.geometry.visible_ratio(key, self.viewport);
            self.nav
                .handle_intersections(&[IntersectionEntry::new(key, ratio)]);
        }
    }

    pub fn navigate_to(&mut self, section: SectionId) {
        self.saved_list_offset = None;
        self.nav.navigate_to(section);
        self.layout_dirty = true;
    }

    pub fn select(&mut self, item: ItemId) {
        if self.nav.view_mode().is_list() {
            self.saved_list_offset = Some(self.viewport.offset);
        }
        self.nav.select(item);
        self.layout_dirty = true;
    }

    pub fn select_focused(&mut self) {
        if !self.nav.view_mode().is_list() {
            return;
        }
        let Some(project) = self
            .focused_project
            .and_then(|i| self.portfolio.projects.get(i))
        else {
            return;
        };
        let id = ItemId::new(project.id.clone());
        self.select(id);
    }

    pub fn back(&mut self) {
        if self.nav.view_mode().is_list() {
            return;
        }
        self.nav.back();
        // A detail scroll still in flight has no target on the list page.
        self.nav.scroller_mut().cancel();
        self.restore_offset = self.saved_list_offset.take();
        self.layout_dirty = true;
    }

    pub fn focus_next_project(&mut self) {
        self.cycle_focus(1);
    }

    pub fn focus_prev_project(&mut self) {
        self.cycle_focus(-1);
    }

    fn cycle_focus(&mut self, delta: isize) {
        let count = self.portfolio.projects.len();
        if count == 0 || !self.nav.view_mode().is_list() {
            return;
        }
        let current = self.focused_project.unwrap_or(0) as isize;
        self.focused_project = Some((current + delta).rem_euclid(count as isize) as usize);
        self.layout_dirty = true;
    }

    /// Manual scrolling interrupts any animation in flight.
    pub fn scroll_by(&mut self, delta: i32) {
        self.ensure_layout();
        self.nav.scroller_mut().cancel();
        self.viewport.scroll_by(delta, &self.page.geometry);
    }

    pub fn scroll_page(&mut self, pages: i32) {
        let rows = i32::from(self.viewport.height.saturating_sub(1).max(1));
        self.scroll_by(pages * rows);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_by(-i32::from(u16::MAX));
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_by(i32::from(u16::MAX));
    }

    pub fn click(&mut self, x: u16, y: u16) {
        if let Some(section) = self
            .nav_area
            .and_then(|area| NavList::hit_test(area, x, y))
        {
            self.navigate_to(section);
            return;
        }
        if self.clicked_back_row(x, y) {
            self.back();
        }
    }

    /// The first row of the detail block is the "back" control.
    fn clicked_back_row(&self, x: u16, y: u16) -> bool {
        let Some(main) = self.main_area else {
            return false;
        };
        if self.nav.view_mode().is_list() || !main.contains(Position::new(x, y)) {
            return false;
        }
        let row = self.viewport.offset + (y - main.y);
        self.page
            .geometry
            .block(ElementKey::Detail)
            .is_some_and(|block| block.top == row)
    }

    /// Visible slice of the page for the current viewport.
    pub fn visible_lines(&self) -> &[ratatui::text::Line<'static>] {
        let start = usize::from(self.viewport.offset).min(self.page.lines.len());
        let end = usize::from(self.viewport.bottom()).min(self.page.lines.len());
        &self.page.lines[start..end]
    }
}
