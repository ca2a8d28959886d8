use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::content::Portfolio;
use crate::ui::layout::LayoutTier;
use crate::ui::theme::Theme;

pub struct Header<'a> {
    pub portfolio: &'a Portfolio,
    pub tier: LayoutTier,
    pub theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(portfolio: &'a Portfolio, tier: LayoutTier, theme: &'a Theme) -> Self {
        Self {
            portfolio,
            tier,
            theme,
        }
    }
}

impl Widget for &Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let p = self.portfolio;
        let name_style = Style::default()
            .fg(colors.heading())
            .add_modifier(Modifier::BOLD);
        let title_style = Style::default()
            .fg(colors.fg())
            .add_modifier(Modifier::ITALIC);

        let lines = match self.tier {
            LayoutTier::Wide => {
                let mut lines = vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        p.greeting.as_str(),
                        Style::default()
                            .fg(colors.greeting())
                            .add_modifier(Modifier::ITALIC),
                    )),
                    Line::from(Span::styled(p.name.as_str(), name_style)),
                    Line::from(Span::styled(p.title.as_str(), title_style)),
                    Line::from(""),
                ];
                if let Some(cv) = &p.cv_path {
                    lines.push(Line::from(vec![
                        Span::styled("[ Download CV ] ", Style::default().fg(colors.accent())),
                        Span::styled(cv.as_str(), Style::default().fg(colors.muted())),
                    ]));
                }
                lines
            }
            LayoutTier::Narrow => vec![
                Line::from(Span::styled(p.name.as_str(), name_style)),
                Line::from(Span::styled(p.title.as_str(), title_style)),
            ],
        };

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
