use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::nav::SectionId;
use crate::nav::section::ALL_SECTIONS;
use crate::ui::theme::Theme;

const ROWS_PER_ENTRY: u16 = 2;
const ACTIVE_LINE: &str = "────────────────";
const INACTIVE_LINE: &str = "────────";

/// Section links, with the active one drawn long and in the accent color.
pub struct NavList<'a> {
    pub active: SectionId,
    pub theme: &'a Theme,
}

impl<'a> NavList<'a> {
    pub fn new(active: SectionId, theme: &'a Theme) -> Self {
        Self { active, theme }
    }

    /// Which entry a click at (`x`, `y`) lands on, if any.
    pub fn hit_test(area: Rect, x: u16, y: u16) -> Option<SectionId> {
        if x < area.x || x >= area.right() || y < area.y || y >= area.bottom() {
            return None;
        }
        let row = y - area.y;
        if row % ROWS_PER_ENTRY != 0 {
            return None;
        }
        SectionId::from_index(usize::from(row / ROWS_PER_ENTRY))
    }
}

impl Widget for &NavList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let mut lines = Vec::new();

        for (i, section) in ALL_SECTIONS.into_iter().enumerate() {
            if i > 0 {
                lines.push(Line::from(""));
            }
            let (rule, rule_color, text_color) = if section == self.active {
                (ACTIVE_LINE, colors.nav_active_line(), colors.nav_active())
            } else {
                (INACTIVE_LINE, colors.nav_inactive_line(), colors.nav_inactive())
            };
            lines.push(Line::from(vec![
                Span::styled(rule, Style::default().fg(rule_color)),
                Span::raw("  "),
                Span::styled(
                    section.element_id(),
                    Style::default().fg(text_color).add_modifier(Modifier::BOLD),
                ),
            ]));
        }

        Paragraph::new(lines).render(area, buf);
    }
}
