use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::content::{Portfolio, Project};
use crate::nav::section::ALL_SECTIONS;
use crate::nav::{SectionId, ViewMode};
use crate::ui::layout::wrap_text;
use crate::ui::theme::Theme;
use crate::viewport::{ElementKey, PageGeometry};

const SECTION_GAP: usize = 2;

/// The scrollable document: styled lines plus the block geometry derived
/// from exactly those lines.
pub struct Page {
    pub lines: Vec<Line<'static>>,
    pub geometry: PageGeometry,
}

struct PageBuilder<'a> {
    theme: &'a Theme,
    width: usize,
    lines: Vec<Line<'static>>,
    geometry: PageGeometry,
}

impl<'a> PageBuilder<'a> {
    fn new(theme: &'a Theme, width: usize) -> Self {
        Self {
            theme,
            width: width.max(1),
            lines: Vec::new(),
            geometry: PageGeometry::new(),
        }
    }

    fn block(&mut self, key: Option<ElementKey>, lines: Vec<Line<'static>>) {
        let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        self.geometry.push(key, height);
        self.lines.extend(lines);
    }

    fn gap(&mut self, rows: usize) {
        self.block(None, vec![Line::from(""); rows]);
    }

    fn wrapped(&self, text: &str, style: Style, indent: usize) -> Vec<Line<'static>> {
        let pad = " ".repeat(indent);
        wrap_text(text, self.width.saturating_sub(indent).max(1))
            .into_iter()
            .map(|l| Line::from(Span::styled(format!("{pad}{l}"), style)))
            .collect()
    }

    fn heading(&self, text: &str) -> Line<'static> {
        Line::from(Span::styled(
            text.to_string(),
            Style::default()
                .fg(self.theme.colors.heading())
                .add_modifier(Modifier::BOLD),
        ))
    }

    fn finish(self) -> Page {
        Page {
            lines: self.lines,
            geometry: self.geometry,
        }
    }
}

/// Lay out the page for the current view mode at `width` columns.
pub fn build_page(
    portfolio: &Portfolio,
    mode: &ViewMode,
    focused_project: Option<usize>,
    width: u16,
    theme: &Theme,
) -> Page {
    let mut b = PageBuilder::new(theme, usize::from(width));

    match mode {
        ViewMode::List => {
            for section in ALL_SECTIONS {
                if !portfolio.has_content(section) {
                    continue;
                }
                let lines = section_lines(&b, portfolio, section, focused_project);
                b.block(Some(ElementKey::Section(section)), lines);
                b.gap(SECTION_GAP);
            }
        }
        ViewMode::Detail(item) => {
            let lines = detail_lines(&b, portfolio.project(item.as_str()), item.as_str());
            b.block(Some(ElementKey::Detail), lines);
            b.gap(SECTION_GAP);
        }
    }

    if !portfolio.colophon.is_empty() {
        let muted = Style::default().fg(theme.colors.muted());
        let lines = b.wrapped(&portfolio.colophon, muted, 0);
        b.block(None, lines);
    }

    b.finish()
}

fn section_lines(
    b: &PageBuilder<'_>,
    portfolio: &Portfolio,
    section: SectionId,
    focused_project: Option<usize>,
) -> Vec<Line<'static>> {
    let colors = &b.theme.colors;
    let body = Style::default().fg(colors.body());
    let muted = Style::default().fg(colors.muted());

    let mut lines = vec![b.heading(section.title()), Line::from("")];
    match section {
        SectionId::About => {
            for (i, paragraph) in portfolio.about.iter().enumerate() {
                if i > 0 {
                    lines.push(Line::from(""));
                }
                lines.extend(b.wrapped(paragraph, body, 0));
            }
        }
        SectionId::Projects => {
            for (i, project) in portfolio.projects.iter().enumerate() {
                if i > 0 {
                    lines.push(Line::from(""));
                }
                let focused = focused_project == Some(i);
                let marker = if focused { "▸ " } else { "  " };
                let mut name_style = Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD);
                if focused {
                    name_style = name_style.bg(colors.focus_bg());
                }
                lines.push(Line::from(Span::styled(
                    format!("{marker}{}", project.name),
                    name_style,
                )));
                if !project.summary.is_empty() {
                    lines.extend(b.wrapped(&project.summary, body, 2));
                }
                if !project.tech.is_empty() {
                    lines.extend(b.wrapped(&project.tech.join(" · "), muted, 2));
                }
            }
        }
        SectionId::Experience => {
            lines.push(Line::from(Span::styled(
                "Work".to_string(),
                Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
            )));
            for role in &portfolio.roles {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    role.company.clone(),
                    Style::default().fg(colors.fg()),
                )));
                lines.extend(b.wrapped(&role.title, muted, 2));
                lines.push(Line::from(Span::styled(format!("  {}", role.period()), muted)));
            }
        }
        SectionId::Contact => {
            for link in &portfolio.contact {
                lines.push(Line::from(vec![
                    Span::styled(format!("{}: ", link.label), muted),
                    Span::styled(link.value.clone(), body),
                ]));
            }
        }
    }
    lines
}

fn detail_lines(b: &PageBuilder<'_>, project: Option<&Project>, item: &str) -> Vec<Line<'static>> {
    let colors = &b.theme.colors;
    let body = Style::default().fg(colors.body());
    let muted = Style::default().fg(colors.muted());

    let mut lines = vec![
        Line::from(Span::styled(
            "← Back to main".to_string(),
            Style::default().fg(colors.accent()),
        )),
        Line::from(""),
    ];

    let Some(project) = project else {
        lines.extend(b.wrapped(&format!("Project detail view for item {item}"), body, 0));
        return lines;
    };

    lines.push(b.heading(&project.name));
    if !project.summary.is_empty() {
        lines.extend(b.wrapped(&project.summary, muted, 0));
    }
    for paragraph in &project.description {
        lines.push(Line::from(""));
        lines.extend(b.wrapped(paragraph, body, 0));
    }
    if !project.tech.is_empty() {
        lines.push(Line::from(""));
        lines.extend(b.wrapped(&format!("Built with {}", project.tech.join(", ")), muted, 0));
    }
    if let Some(url) = &project.url {
        lines.push(Line::from(Span::styled(
            url.clone(),
            Style::default().fg(colors.accent()),
        )));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::ItemId;

    fn portfolio() -> Portfolio {
        Portfolio::bundled().unwrap()
    }

    #[test]
    fn test_geometry_matches_lines() {
        let theme = Theme::default();
        let page = build_page(&portfolio(), &ViewMode::List, None, 60, &theme);
        assert_eq!(usize::from(page.geometry.total_height()), page.lines.len());
    }

    #[test]
    fn test_list_page_has_every_section_in_order() {
        let theme = Theme::default();
        let page = build_page(&portfolio(), &ViewMode::List, Some(0), 60, &theme);
        let keys: Vec<ElementKey> = page.geometry.blocks().iter().filter_map(|b| b.key).collect();
        let expected: Vec<ElementKey> = ALL_SECTIONS.into_iter().map(ElementKey::Section).collect();
        assert_eq!(keys, expected);
        assert!(page.geometry.block(ElementKey::Detail).is_none());
    }

    #[test]
    fn test_empty_sections_are_left_out() {
        let theme = Theme::default();
        let mut portfolio = portfolio();
        portfolio.contact.clear();
        let page = build_page(&portfolio, &ViewMode::List, None, 60, &theme);
        assert!(
            page.geometry
                .block(ElementKey::Section(SectionId::Contact))
                .is_none()
        );
    }

    #[test]
    fn test_detail_page_has_only_detail_block() {
        let theme = Theme::default();
        let mode = ViewMode::Detail(ItemId::new("proj-1"));
        let page = build_page(&portfolio(), &mode, None, 60, &theme);
        let keys: Vec<ElementKey> = page.geometry.blocks().iter().filter_map(|b| b.key).collect();
        assert_eq!(keys, vec![ElementKey::Detail]);
        assert_eq!(usize::from(page.geometry.total_height()), page.lines.len());
    }

    #[test]
    fn test_unknown_item_still_renders_detail() {
        let theme = Theme::default();
        let mode = ViewMode::Detail(ItemId::new("missing"));
        let page = build_page(&portfolio(), &mode, None, 60, &theme);
        let text: String = page.lines[2].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("missing"));
    }
}
